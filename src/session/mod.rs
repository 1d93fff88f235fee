//! Match sessions.
//!
//! A `MatchSession` wires the validator, opponent policy, resolver and state
//! machine into the per-round pipeline. The presentation layer only reads
//! input, calls `play_round` until `is_over`, and prints the records.

mod match_session;

pub use match_session::{rules_text, MatchSession, MatchSessionBuilder, RoundRecord};
