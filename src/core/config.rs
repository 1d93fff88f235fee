//! Match configuration.

use serde::{Deserialize, Serialize};

use super::error::MatchError;

/// Parameters fixed at match creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Rounds in a match (default: 3). Must be positive.
    pub max_rounds: u32,

    /// Chance the random opponent plays its bomb on a given round while the
    /// bomb is still available (default: 0.2).
    pub bomb_probability: f64,

    /// Seed for the opponent RNG.
    /// Same seed produces the same opponent moves.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_rounds: 3,
            bomb_probability: 0.2,
            seed: 42,
        }
    }
}

impl MatchConfig {
    /// Set the number of rounds.
    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Set the opponent's bomb probability.
    #[must_use]
    pub fn with_bomb_probability(mut self, probability: f64) -> Self {
        self.bomb_probability = probability;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.max_rounds == 0 {
            return Err(MatchError::InvalidConfig(
                "max_rounds must be at least 1".to_string(),
            ));
        }
        check_probability(self.bomb_probability)
    }
}

/// Reject probabilities `gen_bool` cannot take, NaN included.
pub(crate) fn check_probability(probability: f64) -> Result<(), MatchError> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(MatchError::InvalidConfig(format!(
            "bomb_probability must be within [0, 1], got {probability}"
        )));
    }
    Ok(())
}
