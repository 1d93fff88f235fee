//! Error types.
//!
//! `InvalidMove` is recoverable: the round is wasted and scored as a draw.
//! `MatchError` means the caller broke the engine's contract.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a raw move token was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum InvalidMove {
    /// Token is not one of rock, paper, scissors, bomb.
    #[error("Invalid move `{token}`. This round is wasted.")]
    UnknownMove { token: String },

    /// This side has already played its bomb.
    #[error("Bomb already used. This round is wasted.")]
    BombReused,
}

/// Contract violations and bad configuration.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum MatchError {
    /// A round was applied after the final round.
    #[error("match already over after {max_rounds} rounds (round counter at {round})")]
    MatchAlreadyOver { round: u32, max_rounds: u32 },

    #[error("invalid match configuration: {0}")]
    InvalidConfig(String),

    /// Decoded state that no sequence of rounds could have produced.
    #[error("inconsistent match state: {0}")]
    InvalidState(String),
}
