//! Agent-framework adapter over the rules and state machine.

pub mod referee;

pub use referee::{Referee, ToolCall, ToolResponse, TOOLS};
