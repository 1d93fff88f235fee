//! One match from first round to final summary.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{InvalidMove, MatchConfig, MatchError, MatchRng, MatchRngState, Move, Side};
use crate::opponent::{OpponentPolicy, RandomOpponent};
use crate::rules::{resolve, validate, RoundOutcome};
use crate::state::{MatchState, MatchSummary};

/// Everything that happened in one round.
///
/// A wasted round has no moves and carries the rejection instead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number this record resolved (1-based).
    pub round: u32,
    pub player_move: Option<Move>,
    pub opponent_move: Option<Move>,
    pub outcome: RoundOutcome,
    pub rejection: Option<InvalidMove>,
    /// State after the outcome was applied.
    pub state: MatchState,
}

impl RoundRecord {
    /// Whether the player's input was rejected.
    #[must_use]
    pub fn is_wasted(&self) -> bool {
        self.rejection.is_some()
    }
}

/// Instructions shown before a match of `max_rounds` rounds.
#[must_use]
pub fn rules_text(max_rounds: u32) -> String {
    format!(
        "Rock-Paper-Scissors-Plus (Best of {max_rounds})\n\
         Moves: rock, paper, scissors, bomb (once per player)\n\
         Bomb beats all moves\n\
         Bomb vs bomb = draw\n\
         Invalid input wastes the round\n"
    )
}

/// Owns the state, RNG and opponent for a single match.
///
/// The first side is driven by raw text from the caller; the second side by
/// the opponent policy.
#[derive(Clone, Debug)]
pub struct MatchSession<P = RandomOpponent> {
    config: MatchConfig,
    state: MatchState,
    rng: MatchRng,
    opponent: P,
    history: Vector<RoundRecord>,
}

impl MatchSession<RandomOpponent> {
    /// Session against the randomized bot described by `config`.
    pub fn from_config(config: MatchConfig) -> Result<Self, MatchError> {
        let opponent = RandomOpponent::new(config.bomb_probability)?;
        let rng = MatchRng::new(config.seed);
        Self::new(config, opponent, rng)
    }
}

impl<P: OpponentPolicy> MatchSession<P> {
    /// Session with an explicit opponent policy and RNG.
    pub fn new(config: MatchConfig, opponent: P, rng: MatchRng) -> Result<Self, MatchError> {
        config.validate()?;
        let state = MatchState::new(config.max_rounds)?;
        debug!(seed = rng.seed(), max_rounds = config.max_rounds, "match session created");

        Ok(Self {
            config,
            state,
            rng,
            opponent,
            history: Vector::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Rounds played so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<RoundRecord> {
        &self.history
    }

    /// Opponent RNG position, for replaying the rest of a match.
    #[must_use]
    pub fn rng_state(&self) -> MatchRngState {
        self.rng.state()
    }

    /// Instructions for this match.
    #[must_use]
    pub fn rules(&self) -> String {
        rules_text(self.config.max_rounds)
    }

    /// Final scores and result once the match is over.
    #[must_use]
    pub fn summary(&self) -> Option<MatchSummary> {
        self.state.summary()
    }

    /// Play one round with the first side's raw input.
    ///
    /// Invalid input wastes the round: it is scored as a draw, the round
    /// counter still advances, and the opponent does not move. Errors only
    /// when the match is already over.
    pub fn play_round(&mut self, raw: &str) -> Result<RoundRecord, MatchError> {
        self.state.ensure_in_progress()?;
        let round = self.state.round();

        let (player_move, opponent_move, outcome, rejection) =
            match validate(raw, self.state.bomb_used(Side::First)) {
                Ok(player_move) => {
                    if player_move.is_special() {
                        self.state.mark_bomb_used(Side::First)?;
                    }

                    let opponent_move = self
                        .opponent
                        .choose_move(self.state.bomb_used(Side::Second), &mut self.rng);
                    if opponent_move.is_special() {
                        self.state.mark_bomb_used(Side::Second)?;
                    }

                    let outcome = resolve(player_move, opponent_move);
                    debug!(round, %player_move, %opponent_move, %outcome, "round resolved");
                    (Some(player_move), Some(opponent_move), outcome, None)
                }
                Err(rejection) => {
                    warn!(round, %rejection, "wasted round");
                    (None, None, RoundOutcome::Draw, Some(rejection))
                }
            };

        let state = self.state.apply_outcome(outcome)?.clone();
        let record = RoundRecord {
            round,
            player_move,
            opponent_move,
            outcome,
            rejection,
            state,
        };
        self.history.push_back(record.clone());

        Ok(record)
    }
}

/// Builder for a [`MatchSession`].
///
/// ```
/// use rps_plus::session::MatchSessionBuilder;
///
/// let mut session = MatchSessionBuilder::new().max_rounds(1).build(7).unwrap();
/// session.play_round("paper").unwrap();
/// assert!(session.is_over());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MatchSessionBuilder {
    config: MatchConfig,
}

impl MatchSessionBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn max_rounds(mut self, rounds: u32) -> Self {
        self.config.max_rounds = rounds;
        self
    }

    #[must_use]
    pub fn bomb_probability(mut self, probability: f64) -> Self {
        self.config.bomb_probability = probability;
        self
    }

    /// Build against the randomized bot.
    pub fn build(self, seed: u64) -> Result<MatchSession<RandomOpponent>, MatchError> {
        MatchSession::from_config(self.config.with_seed(seed))
    }

    /// Build against a custom opponent policy.
    pub fn build_with_opponent<P: OpponentPolicy>(
        self,
        seed: u64,
        opponent: P,
    ) -> Result<MatchSession<P>, MatchError> {
        let config = self.config.with_seed(seed);
        let rng = MatchRng::new(config.seed);
        MatchSession::new(config, opponent, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opponent::ScriptedOpponent;
    use crate::state::MatchResult;

    fn scripted(moves: &[Move]) -> MatchSession<ScriptedOpponent> {
        MatchSessionBuilder::new()
            .build_with_opponent(0, ScriptedOpponent::new(moves.to_vec()))
            .unwrap()
    }

    #[test]
    fn test_rules_text() {
        let session = MatchSessionBuilder::new().build(1).unwrap();
        let rules = session.rules();
        assert!(rules.starts_with("Rock-Paper-Scissors-Plus (Best of 3)"));
        assert!(rules.contains("bomb (once per player)"));
        assert!(rules.contains("Invalid input wastes the round"));
    }

    #[test]
    fn test_round_record_contents() {
        let mut session = scripted(&[Move::Scissors]);
        let record = session.play_round("Rock").unwrap();

        assert_eq!(record.round, 1);
        assert_eq!(record.player_move, Some(Move::Rock));
        assert_eq!(record.opponent_move, Some(Move::Scissors));
        assert_eq!(record.outcome, RoundOutcome::FirstPlayer);
        assert!(!record.is_wasted());
        assert_eq!(record.state.round(), 2);
        assert_eq!(record.state.first_player_score(), 1);
    }

    #[test]
    fn test_wasted_round_skips_opponent() {
        let mut session = scripted(&[Move::Paper, Move::Rock]);
        let wasted = session.play_round("lizard").unwrap();
        assert!(wasted.is_wasted());
        assert_eq!(wasted.opponent_move, None);

        // The script was not advanced by the wasted round.
        let next = session.play_round("rock").unwrap();
        assert_eq!(next.opponent_move, Some(Move::Paper));
    }

    #[test]
    fn test_player_bomb_is_tracked() {
        let mut session = scripted(&[Move::Rock, Move::Rock, Move::Rock]);
        session.play_round("bomb").unwrap();
        assert!(session.state().bomb_used(Side::First));

        session.play_round("paper").unwrap();
        let reused = session.play_round("BOMB").unwrap();
        assert_eq!(reused.rejection, Some(InvalidMove::BombReused));
        assert_eq!(reused.outcome, RoundOutcome::Draw);
        assert!(session.is_over());
    }

    #[test]
    fn test_opponent_bomb_is_tracked() {
        let mut session = scripted(&[Move::Bomb, Move::Bomb]);
        let first = session.play_round("rock").unwrap();
        assert_eq!(first.opponent_move, Some(Move::Bomb));
        assert_eq!(first.outcome, RoundOutcome::SecondPlayer);
        assert!(session.state().bomb_used(Side::Second));

        let second = session.play_round("rock").unwrap();
        assert_eq!(second.opponent_move, Some(Move::Rock));
        assert_eq!(second.outcome, RoundOutcome::Draw);
    }

    #[test]
    fn test_play_after_over_fails() {
        let mut session = MatchSessionBuilder::new().max_rounds(1).build(3).unwrap();
        session.play_round("rock").unwrap();

        let before = session.state().clone();
        assert!(matches!(
            session.play_round("rock"),
            Err(MatchError::MatchAlreadyOver { .. })
        ));
        assert_eq!(session.state(), &before);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_history_and_summary() {
        let mut session = scripted(&[Move::Paper]);
        while !session.is_over() {
            session.play_round("scissors").unwrap();
        }

        assert_eq!(session.history().len(), 3);
        let rounds: Vec<u32> = session.history().iter().map(|r| r.round).collect();
        assert_eq!(rounds, vec![1, 2, 3]);

        let summary = session.summary().unwrap();
        assert_eq!(summary.first_player_score, 3);
        assert_eq!(summary.second_player_score, 0);
        assert_eq!(summary.result, MatchResult::FirstPlayerWins);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(matches!(
            MatchSessionBuilder::new().max_rounds(0).build(1),
            Err(MatchError::InvalidConfig(_))
        ));
        assert!(matches!(
            MatchSessionBuilder::new().bomb_probability(2.0).build(1),
            Err(MatchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_same_seed_same_match() {
        let play = |seed| {
            let mut session = MatchSessionBuilder::new().build(seed).unwrap();
            let mut moves = Vec::new();
            while !session.is_over() {
                moves.push(session.play_round("rock").unwrap().opponent_move);
            }
            moves
        };
        assert_eq!(play(77), play(77));
    }

    #[test]
    fn test_rng_state_replays_remaining_rounds() {
        let mut session = MatchSessionBuilder::new().max_rounds(5).build(8).unwrap();
        session.play_round("rock").unwrap();

        let config = session.config().clone();
        let rng = MatchRng::from_state(&session.rng_state());
        assert_eq!(rng.seed(), 8);
        let mut replay = MatchSession::new(config, RandomOpponent::default(), rng).unwrap();
        replay.play_round("rock").unwrap();

        let next = session.play_round("rock").unwrap();
        assert_eq!(replay.history()[0].opponent_move, next.opponent_move);
    }

    #[test]
    fn test_record_serialization() {
        let mut session = scripted(&[Move::Rock]);
        let record = session.play_round("paper").unwrap();
        let json = serde_json::to_string(&record).unwrap();
        let back: RoundRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
