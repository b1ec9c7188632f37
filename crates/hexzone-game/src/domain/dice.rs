//! Advisory dice rolls.
//!
//! Neither the roll nor the neighbour list constrains the move resolver;
//! they are returned to the caller as hints.

use hexzone_core::rng::DeterministicRng;
use hexzone_core::{PieceId, TileIndex};
use serde::Serialize;

/// Faces on the die.
pub const DIE_FACES: u32 = 6;

/// Rolls one six-sided die.
pub fn roll_dice(rng: &mut dyn DeterministicRng) -> u32 {
    rng.next_u32_range(1, DIE_FACES)
}

/// Result of a roll for one piece.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiceRoll {
    /// The piece the roll was made for.
    pub player_id: PieceId,
    /// Face shown, in `[1, 6]`.
    pub roll: u32,
    /// Clamped neighbours of the current position.
    pub possible_moves: [TileIndex; 2],
    /// Where the piece stands.
    pub current_position: TileIndex,
}
