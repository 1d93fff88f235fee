//! Rules of Rock-Paper-Scissors-Plus.
//!
//! Both entry points are pure:
//! - `validate`: raw token + bomb availability → `Move` or `InvalidMove`
//! - `resolve`: pair of moves → `RoundOutcome`
//!
//! Neither reads nor writes match state.

pub mod validator;
pub mod resolver;

pub use validator::validate;
pub use resolver::{resolve, RoundOutcome};
