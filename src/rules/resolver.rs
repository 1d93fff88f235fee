//! Round adjudication.
//!
//! Precedence:
//! 1. Equal moves draw (bomb vs bomb included).
//! 2. A lone bomb wins outright.
//! 3. Rock beats scissors, scissors beats paper, paper beats rock.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{Move, Side};

/// Result of a single round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundOutcome {
    FirstPlayer,
    SecondPlayer,
    Draw,
}

impl RoundOutcome {
    /// Outcome in which `side` wins the round.
    #[must_use]
    pub const fn win_for(side: Side) -> Self {
        match side {
            Side::First => RoundOutcome::FirstPlayer,
            Side::Second => RoundOutcome::SecondPlayer,
        }
    }

    /// Winning side, or `None` for a draw.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            RoundOutcome::FirstPlayer => Some(Side::First),
            RoundOutcome::SecondPlayer => Some(Side::Second),
            RoundOutcome::Draw => None,
        }
    }

    /// Same round seen from the other seat.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            RoundOutcome::FirstPlayer => RoundOutcome::SecondPlayer,
            RoundOutcome::SecondPlayer => RoundOutcome::FirstPlayer,
            RoundOutcome::Draw => RoundOutcome::Draw,
        }
    }

    /// Line shown to the human (first) side.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            RoundOutcome::FirstPlayer => "You win this round",
            RoundOutcome::SecondPlayer => "Bot wins this round",
            RoundOutcome::Draw => "Draw",
        }
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundOutcome::FirstPlayer => f.write_str("first player wins the round"),
            RoundOutcome::SecondPlayer => f.write_str("second player wins the round"),
            RoundOutcome::Draw => f.write_str("draw"),
        }
    }
}

/// Resolve a round between the first side's move `a` and the second's `b`.
#[must_use]
pub fn resolve(a: Move, b: Move) -> RoundOutcome {
    if a == b {
        return RoundOutcome::Draw;
    }

    let first_wins = match (a, b) {
        (Move::Bomb, _) => true,
        (_, Move::Bomb) => false,
        _ => a.dominates() == Some(b),
    };
    RoundOutcome::win_for(if first_wins { Side::First } else { Side::Second })
}
