//! Opponent policies for the second side.

pub mod policy;

pub use policy::{OpponentPolicy, RandomOpponent, ScriptedOpponent};
