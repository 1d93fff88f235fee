//! Move validation.

use crate::core::{InvalidMove, Move};

/// Validate a raw move token for a side.
///
/// The token is trimmed and case-folded. A bomb is rejected when
/// `bomb_already_used` is set for the side submitting it. Marking the bomb as
/// used is left to the state machine once the move is accepted.
pub fn validate(raw: &str, bomb_already_used: bool) -> Result<Move, InvalidMove> {
    let mv: Move = raw.parse()?;
    if mv.is_special() && bomb_already_used {
        return Err(InvalidMove::BombReused);
    }
    Ok(mv)
}
