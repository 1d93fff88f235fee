//! Tool-call adapter for agent frameworks.
//!
//! Exposes `validate_move`, `resolve_round` and `update_game_state` as
//! independently callable operations over serde-friendly values. Every call
//! forwards straight to the engine; the adapter holds the match state and
//! nothing else.

use serde::{Deserialize, Serialize};

use crate::core::{InvalidMove, MatchError, Move};
use crate::rules::{resolve, validate, RoundOutcome};
use crate::state::MatchState;

/// Names and descriptions of the registered tools.
pub const TOOLS: [(&str, &str); 3] = [
    ("validate_move", "Validates user input and bomb usage."),
    ("resolve_round", "Determines round winner."),
    ("update_game_state", "Mutates persistent game state."),
];

/// A tool invocation, tagged by tool name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tool", rename_all = "snake_case")]
pub enum ToolCall {
    ValidateMove { input: String, bomb_used: bool },
    ResolveRound { user_move: Move, bot_move: Move },
    UpdateGameState { result: RoundOutcome },
}

/// Value returned to the framework.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ToolResponse {
    Valid { value: Move },
    Invalid { error: InvalidMove, message: String },
    Outcome { result: RoundOutcome },
    State { state: MatchState },
}

/// Holds the match state the tools mutate.
#[derive(Clone, Debug)]
pub struct Referee {
    state: MatchState,
}

impl Referee {
    pub fn new(max_rounds: u32) -> Result<Self, MatchError> {
        Ok(Self {
            state: MatchState::new(max_rounds)?,
        })
    }

    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// `validate_move` tool.
    pub fn validate_move(&self, input: &str, bomb_used: bool) -> ToolResponse {
        match validate(input, bomb_used) {
            Ok(value) => ToolResponse::Valid { value },
            Err(error) => ToolResponse::Invalid {
                message: error.to_string(),
                error,
            },
        }
    }

    /// `resolve_round` tool.
    pub fn resolve_round(&self, user_move: Move, bot_move: Move) -> ToolResponse {
        ToolResponse::Outcome {
            result: resolve(user_move, bot_move),
        }
    }

    /// `update_game_state` tool.
    pub fn update_game_state(&mut self, result: RoundOutcome) -> Result<ToolResponse, MatchError> {
        let state = self.state.apply_outcome(result)?.clone();
        Ok(ToolResponse::State { state })
    }

    /// Dispatch a decoded tool call.
    pub fn invoke(&mut self, call: ToolCall) -> Result<ToolResponse, MatchError> {
        match call {
            ToolCall::ValidateMove { input, bomb_used } => Ok(self.validate_move(&input, bomb_used)),
            ToolCall::ResolveRound { user_move, bot_move } => {
                Ok(self.resolve_round(user_move, bot_move))
            }
            ToolCall::UpdateGameState { result } => self.update_game_state(result),
        }
    }
}
