//! Match state and its transition function.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, warn};

use crate::core::{MatchError, Side, SideMap};
use crate::rules::RoundOutcome;

/// Lifecycle phase of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    /// Rounds `round..=max_rounds` still pending.
    InProgress,
    /// Terminal; no further transitions accepted.
    Complete,
}

/// Final result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchResult {
    FirstPlayerWins,
    SecondPlayerWins,
    Draw,
}

impl MatchResult {
    /// Winning side, or `None` for a drawn match.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            MatchResult::FirstPlayerWins => Some(Side::First),
            MatchResult::SecondPlayerWins => Some(Side::Second),
            MatchResult::Draw => None,
        }
    }

    /// Line shown to the human (first) side.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            MatchResult::FirstPlayerWins => "You win!",
            MatchResult::SecondPlayerWins => "Bot wins!",
            MatchResult::Draw => "Draw",
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchResult::FirstPlayerWins => f.write_str("first player wins"),
            MatchResult::SecondPlayerWins => f.write_str("second player wins"),
            MatchResult::Draw => f.write_str("draw"),
        }
    }
}

/// End-of-match summary handed to the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub first_player_score: u32,
    pub second_player_score: u32,
    pub result: MatchResult,
}

/// Persistent state of one match.
///
/// `round` starts at 1 and never exceeds `max_rounds + 1`. Scores only move
/// on decisive rounds; bomb flags are set once and never cleared.
/// Deserialization enforces the same bounds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MatchStateRepr")]
pub struct MatchState {
    round: u32,
    max_rounds: u32,
    scores: SideMap<u32>,
    bomb_used: SideMap<bool>,
    phase: MatchPhase,
}

/// Unchecked wire form of `MatchState`.
#[derive(Deserialize)]
struct MatchStateRepr {
    round: u32,
    max_rounds: u32,
    scores: SideMap<u32>,
    bomb_used: SideMap<bool>,
    phase: MatchPhase,
}

impl TryFrom<MatchStateRepr> for MatchState {
    type Error = MatchError;

    fn try_from(repr: MatchStateRepr) -> Result<Self, Self::Error> {
        let invalid = |msg: String| Err(MatchError::InvalidState(msg));

        if repr.max_rounds == 0 {
            return invalid("max_rounds must be at least 1".to_string());
        }
        if repr.round == 0 || u64::from(repr.round) > u64::from(repr.max_rounds) + 1 {
            return invalid(format!(
                "round {} outside 1..={}",
                repr.round,
                u64::from(repr.max_rounds) + 1
            ));
        }

        let complete = repr.round > repr.max_rounds;
        if complete != (repr.phase == MatchPhase::Complete) {
            return invalid(format!(
                "phase {:?} disagrees with round {} of {}",
                repr.phase, repr.round, repr.max_rounds
            ));
        }

        let played = u64::from(repr.round - 1);
        let decided = u64::from(repr.scores[Side::First]) + u64::from(repr.scores[Side::Second]);
        if decided > played {
            return invalid(format!("{decided} decisive rounds but only {played} played"));
        }

        Ok(Self {
            round: repr.round,
            max_rounds: repr.max_rounds,
            scores: repr.scores,
            bomb_used: repr.bomb_used,
            phase: repr.phase,
        })
    }
}

impl MatchState {
    /// Fresh match of `max_rounds` rounds.
    pub fn new(max_rounds: u32) -> Result<Self, MatchError> {
        if max_rounds == 0 {
            return Err(MatchError::InvalidConfig(
                "max_rounds must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            round: 1,
            max_rounds,
            scores: SideMap::default(),
            bomb_used: SideMap::default(),
            phase: MatchPhase::InProgress,
        })
    }

    /// Round about to be played (or `max_rounds + 1` once over).
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    #[must_use]
    pub fn score(&self, side: Side) -> u32 {
        self.scores[side]
    }

    #[must_use]
    pub fn first_player_score(&self) -> u32 {
        self.scores[Side::First]
    }

    #[must_use]
    pub fn second_player_score(&self) -> u32 {
        self.scores[Side::Second]
    }

    /// Whether `side` has already played its bomb.
    #[must_use]
    pub fn bomb_used(&self, side: Side) -> bool {
        self.bomb_used[side]
    }

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == MatchPhase::Complete
    }

    /// Record that `side` played its bomb.
    ///
    /// Idempotent. Fails only if the match is already over.
    pub fn mark_bomb_used(&mut self, side: Side) -> Result<(), MatchError> {
        self.ensure_in_progress()?;
        if !self.bomb_used[side] {
            debug!(%side, round = self.round, "bomb spent");
            self.bomb_used[side] = true;
        }
        Ok(())
    }

    /// Apply a round outcome and advance the round counter.
    ///
    /// Runs for wasted rounds too (as a draw). On a complete match this is a
    /// contract violation and the state is left untouched.
    pub fn apply_outcome(&mut self, outcome: RoundOutcome) -> Result<&MatchState, MatchError> {
        self.ensure_in_progress()?;

        if let Some(winner) = outcome.winner() {
            self.scores[winner] += 1;
        }
        debug!(
            round = self.round,
            %outcome,
            first = self.scores[Side::First],
            second = self.scores[Side::Second],
            "round applied"
        );

        self.round += 1;
        if self.round > self.max_rounds {
            self.phase = MatchPhase::Complete;
            info!(
                first = self.scores[Side::First],
                second = self.scores[Side::Second],
                "match complete"
            );
        }

        Ok(&*self)
    }

    /// Final result, available once the match is over.
    #[must_use]
    pub fn result(&self) -> Option<MatchResult> {
        if !self.is_over() {
            return None;
        }

        let (first, second) = (self.scores[Side::First], self.scores[Side::Second]);
        Some(match first.cmp(&second) {
            std::cmp::Ordering::Greater => MatchResult::FirstPlayerWins,
            std::cmp::Ordering::Less => MatchResult::SecondPlayerWins,
            std::cmp::Ordering::Equal => MatchResult::Draw,
        })
    }

    /// Scores plus result, available once the match is over.
    #[must_use]
    pub fn summary(&self) -> Option<MatchSummary> {
        self.result().map(|result| MatchSummary {
            first_player_score: self.scores[Side::First],
            second_player_score: self.scores[Side::Second],
            result,
        })
    }

    pub(crate) fn ensure_in_progress(&self) -> Result<(), MatchError> {
        if self.is_over() {
            warn!(round = self.round, "transition attempted on a finished match");
            return Err(MatchError::MatchAlreadyOver {
                round: self.round,
                max_rounds: self.max_rounds,
            });
        }
        Ok(())
    }
}
