//! Game state machine.
//!
//! `MatchState` is the only mutable entity in the engine. It moves from
//! `InProgress` to `Complete` after `max_rounds` applied outcomes and rejects
//! every transition afterwards.

pub mod machine;

pub use machine::{MatchPhase, MatchResult, MatchState, MatchSummary};
