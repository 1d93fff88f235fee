//! # rps-plus
//!
//! Referee engine for Rock-Paper-Scissors-Plus: best-of-N rock, paper,
//! scissors with a bomb each side may play once per match.
//!
//! ## Design Principles
//!
//! 1. **Pure rules**: validation and adjudication are plain functions over
//!    values. Only the state machine mutates anything.
//!
//! 2. **Owned state**: each `MatchSession` owns its `MatchState`, RNG and
//!    opponent. There is no global game state.
//!
//! 3. **Deterministic replay**: the opponent draws from an injected, seeded
//!    ChaCha8 generator.
//!
//! ## Modules
//!
//! - `core`: moves, sides, RNG, configuration, errors
//! - `rules`: move validator and outcome resolver
//! - `state`: match state machine and final result
//! - `opponent`: opponent move policies
//! - `session`: per-round pipeline and round history
//! - `tools`: tool-call adapter for agent frameworks

pub mod core;
pub mod rules;
pub mod state;
pub mod opponent;
pub mod session;
pub mod tools;

// Re-export commonly used types
pub use crate::core::{
    InvalidMove, MatchConfig, MatchError, MatchRng, MatchRngState, Move, Side, SideMap,
    ALL_MOVES, ORDINARY_MOVES,
};

pub use crate::rules::{resolve, validate, RoundOutcome};

pub use crate::state::{MatchPhase, MatchResult, MatchState, MatchSummary};

pub use crate::opponent::{OpponentPolicy, RandomOpponent, ScriptedOpponent};

pub use crate::session::{rules_text, MatchSession, MatchSessionBuilder, RoundRecord};

pub use crate::tools::{Referee, ToolCall, ToolResponse};
