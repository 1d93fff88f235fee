//! Core types: moves, sides, RNG, configuration, errors.
//!
//! Everything here is plain data. The rules, state machine, and opponent
//! policy build on these types without owning any shared state.

pub mod moves;
pub mod side;
pub mod rng;
pub mod config;
pub mod error;

pub use moves::{Move, ALL_MOVES, ORDINARY_MOVES};
pub use side::{Side, SideMap};
pub use rng::{MatchRng, MatchRngState};
pub use config::MatchConfig;
pub use error::{InvalidMove, MatchError};
