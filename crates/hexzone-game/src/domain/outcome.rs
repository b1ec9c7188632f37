//! Classification of a resolved move.

use hexzone_core::{PieceId, TileIndex};
use serde::Serialize;

use super::attribute::Attribute;

/// Terminal result of one `resolve_move` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveOutcome {
    /// Landed on a plain tile.
    Moved,
    /// Landed on a zone of the piece's own attribute.
    SafeZoneMoved,
    /// Landed on a dominated zone and removed it.
    ZoneNeutralized,
    /// A dominant zone sent the piece back to start.
    SentBackByZone,
    /// Reached the final tile without an item; back to start.
    SentBackNoItem,
    /// Reached the final tile holding an item.
    Win,
}

impl MoveOutcome {
    /// Human-readable status line.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            MoveOutcome::Moved | MoveOutcome::SafeZoneMoved | MoveOutcome::ZoneNeutralized => {
                "Moved"
            }
            MoveOutcome::SentBackByZone => "Sent back to start by zone",
            MoveOutcome::SentBackNoItem => "No items! Sent back to start",
            MoveOutcome::Win => "Player wins!",
        }
    }

    /// Returns `true` if the piece ended on the start tile with no items.
    #[must_use]
    pub fn is_reset(self) -> bool {
        matches!(self, MoveOutcome::SentBackByZone | MoveOutcome::SentBackNoItem)
    }
}

/// Full report of a resolved move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveResolution {
    /// The piece that moved.
    pub player_id: PieceId,
    /// Outcome class.
    pub status: MoveOutcome,
    /// Piece position after the move.
    pub position: TileIndex,
    /// Items held after the move.
    pub items: Vec<TileIndex>,
    /// Tile of the item picked up on this move.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picked_up: Option<TileIndex>,
    /// Where the picked-up item reappeared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub respawned_at: Option<TileIndex>,
    /// Attribute of the zone entered, if the target was a zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<Attribute>,
}
