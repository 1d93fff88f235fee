//! The four legal moves.
//!
//! Rock, paper and scissors are ordinary moves governed by the usual cycle.
//! The bomb is the special move: each side may play it once per match and it
//! beats every ordinary move.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::InvalidMove;

/// A parsed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    Bomb,
}

/// Ordinary moves, in a fixed order for uniform sampling.
pub const ORDINARY_MOVES: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

/// Every legal move.
pub const ALL_MOVES: [Move; 4] = [Move::Rock, Move::Paper, Move::Scissors, Move::Bomb];

impl Move {
    /// Lowercase token for this move.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Bomb => "bomb",
        }
    }

    /// Whether this is the single-use special move.
    #[must_use]
    pub const fn is_special(self) -> bool {
        matches!(self, Move::Bomb)
    }

    /// The ordinary move this one dominates. `None` for the bomb.
    #[must_use]
    pub const fn dominates(self) -> Option<Move> {
        match self {
            Move::Rock => Some(Move::Scissors),
            Move::Scissors => Some(Move::Paper),
            Move::Paper => Some(Move::Rock),
            Move::Bomb => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Move {
    type Err = InvalidMove;

    /// Trims and case-folds before matching.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let token = raw.trim().to_lowercase();
        ALL_MOVES
            .iter()
            .copied()
            .find(|m| m.name() == token)
            .ok_or(InvalidMove::UnknownMove { token })
    }
}
