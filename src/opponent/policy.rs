//! Opponent move selection.
//!
//! Policies are trait-based so sessions can swap the randomized bot for a
//! scripted replay in tests. The caller owns the bomb flag: a policy only
//! reads it, and returning `Move::Bomb` tells the caller to set it.

use crate::core::config::check_probability;
use crate::core::{MatchError, MatchRng, Move, ORDINARY_MOVES};

/// Chooses the second side's move each round.
pub trait OpponentPolicy {
    /// Pick a move. Must not return `Move::Bomb` when `bomb_already_used`.
    fn choose_move(&mut self, bomb_already_used: bool, rng: &mut MatchRng) -> Move;
}

/// Randomized bot.
///
/// Plays the bomb with fixed probability while it is still available,
/// otherwise picks uniformly among rock, paper and scissors.
#[derive(Clone, Debug)]
pub struct RandomOpponent {
    bomb_probability: f64,
}

impl RandomOpponent {
    /// Default bomb probability.
    pub const DEFAULT_BOMB_PROBABILITY: f64 = 0.2;

    /// Fails unless `bomb_probability` lies in `[0, 1]`.
    pub fn new(bomb_probability: f64) -> Result<Self, MatchError> {
        check_probability(bomb_probability)?;
        Ok(Self { bomb_probability })
    }

    #[must_use]
    pub fn bomb_probability(&self) -> f64 {
        self.bomb_probability
    }
}

impl Default for RandomOpponent {
    fn default() -> Self {
        Self {
            bomb_probability: Self::DEFAULT_BOMB_PROBABILITY,
        }
    }
}

impl OpponentPolicy for RandomOpponent {
    fn choose_move(&mut self, bomb_already_used: bool, rng: &mut MatchRng) -> Move {
        if !bomb_already_used && rng.gen_bool(self.bomb_probability) {
            return Move::Bomb;
        }
        ORDINARY_MOVES[rng.gen_range_usize(0..ORDINARY_MOVES.len())]
    }
}

/// Replays a fixed list of moves, cycling when exhausted.
///
/// A scripted bomb is swapped for rock once the bomb has been spent, so the
/// policy contract holds for any script.
#[derive(Clone, Debug)]
pub struct ScriptedOpponent {
    moves: Vec<Move>,
    cursor: usize,
}

impl ScriptedOpponent {
    /// Falls back to rock for an empty script.
    #[must_use]
    pub fn new(moves: impl Into<Vec<Move>>) -> Self {
        Self {
            moves: moves.into(),
            cursor: 0,
        }
    }
}

impl OpponentPolicy for ScriptedOpponent {
    fn choose_move(&mut self, bomb_already_used: bool, _rng: &mut MatchRng) -> Move {
        if self.moves.is_empty() {
            return Move::Rock;
        }
        let mv = self.moves[self.cursor % self.moves.len()];
        self.cursor += 1;

        if mv.is_special() && bomb_already_used {
            Move::Rock
        } else {
            mv
        }
    }
}
