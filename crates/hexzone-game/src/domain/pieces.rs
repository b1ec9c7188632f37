//! Piece registry: per-player position, attribute and held items.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use hexzone_core::error::DomainError;
use hexzone_core::rng::DeterministicRng;
use hexzone_core::{PieceId, TileIndex};
use serde::{Deserialize, Serialize};

use super::attribute::Attribute;

/// Tile every piece starts on and is sent back to.
pub const START_TILE: TileIndex = 0;

/// A player's piece.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    /// Player identifier.
    pub id: PieceId,
    /// Current tile.
    pub position: TileIndex,
    /// Attribute fixed at creation.
    pub attribute: Attribute,
    /// Origin tiles of the items collected, in pickup order.
    pub items: Vec<TileIndex>,
}

impl Piece {
    /// Returns `true` if the piece carries at least one item.
    #[must_use]
    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }
}

/// All pieces in the session, keyed by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PieceRegistry {
    pieces: BTreeMap<PieceId, Piece>,
}

impl PieceRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a piece on the start tile with a random attribute and no
    /// items. An existing piece with the same id is replaced.
    pub fn create_piece(&mut self, id: PieceId, rng: &mut dyn DeterministicRng) -> &Piece {
        let piece = Piece {
            id,
            position: START_TILE,
            attribute: Attribute::random(rng),
            items: Vec::new(),
        };
        self.insert(piece)
    }

    /// Registers a fully specified piece, replacing any with the same id.
    pub fn insert(&mut self, piece: Piece) -> &Piece {
        match self.pieces.entry(piece.id) {
            Entry::Occupied(mut slot) => {
                slot.insert(piece);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(piece),
        }
    }

    /// Looks up a piece.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownPiece` if `id` is not registered.
    pub fn get(&self, id: PieceId) -> Result<&Piece, DomainError> {
        self.pieces.get(&id).ok_or(DomainError::UnknownPiece(id))
    }

    fn get_mut(&mut self, id: PieceId) -> Result<&mut Piece, DomainError> {
        self.pieces.get_mut(&id).ok_or(DomainError::UnknownPiece(id))
    }

    /// Sends a piece back to the start tile and drops its items.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownPiece` if `id` is not registered.
    pub fn reset_to_start(&mut self, id: PieceId) -> Result<(), DomainError> {
        let piece = self.get_mut(id)?;
        piece.position = START_TILE;
        piece.items.clear();
        Ok(())
    }

    /// Moves a piece to `tile`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownPiece` if `id` is not registered.
    pub fn set_position(&mut self, id: PieceId, tile: TileIndex) -> Result<(), DomainError> {
        self.get_mut(id)?.position = tile;
        Ok(())
    }

    /// Records that a piece picked up the item lying on `tile`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownPiece` if `id` is not registered.
    pub fn add_item(&mut self, id: PieceId, tile: TileIndex) -> Result<(), DomainError> {
        self.get_mut(id)?.items.push(tile);
        Ok(())
    }

    /// Iterates pieces in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.values()
    }

    /// Number of registered pieces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Returns `true` if no piece is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexzone_test_support::SequenceRng;

    #[test]
    fn test_create_piece_starts_empty_on_tile_zero() {
        let mut registry = PieceRegistry::new();
        let mut rng = SequenceRng::new(vec![2]);

        let piece = registry.create_piece(4, &mut rng).clone();

        assert_eq!(piece.id, 4);
        assert_eq!(piece.position, START_TILE);
        assert_eq!(piece.attribute, Attribute::Green);
        assert!(piece.items.is_empty());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_get_unknown_piece_returns_error() {
        let registry = PieceRegistry::new();
        match registry.get(9) {
            Err(DomainError::UnknownPiece(id)) => assert_eq!(id, 9),
            other => panic!("expected UnknownPiece, got {other:?}"),
        }
    }

    #[test]
    fn test_reset_to_start_clears_items() {
        let mut registry = PieceRegistry::new();
        registry.insert(Piece {
            id: 0,
            position: 30,
            attribute: Attribute::Blue,
            items: vec![12, 20, 20],
        });

        registry.reset_to_start(0).unwrap();

        let piece = registry.get(0).unwrap();
        assert_eq!(piece.position, 0);
        assert!(piece.items.is_empty());
        assert_eq!(piece.attribute, Attribute::Blue);
    }

    #[test]
    fn test_mutators_reject_unknown_piece() {
        let mut registry = PieceRegistry::new();
        assert!(matches!(
            registry.set_position(1, 5),
            Err(DomainError::UnknownPiece(1))
        ));
        assert!(matches!(
            registry.add_item(1, 5),
            Err(DomainError::UnknownPiece(1))
        ));
        assert!(matches!(
            registry.reset_to_start(1),
            Err(DomainError::UnknownPiece(1))
        ));
    }

    #[test]
    fn test_add_item_keeps_duplicates_in_order() {
        let mut registry = PieceRegistry::new();
        registry.create_piece(0, &mut SequenceRng::new(vec![0]));

        registry.add_item(0, 20).unwrap();
        registry.add_item(0, 7).unwrap();
        registry.add_item(0, 20).unwrap();

        assert_eq!(registry.get(0).unwrap().items, vec![20, 7, 20]);
        assert!(registry.get(0).unwrap().has_items());
    }
}
