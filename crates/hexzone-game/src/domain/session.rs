//! The game session aggregate and its move resolver.

use std::collections::BTreeSet;

use hexzone_core::error::DomainError;
use hexzone_core::rng::DeterministicRng;
use hexzone_core::{PieceId, TileIndex};
use tracing::{debug, info};
use uuid::Uuid;

use super::attribute::{Attribute, ZoneContact};
use super::board::{Board, BoardConfig};
use super::dice::{DiceRoll, roll_dice};
use super::items::ItemPool;
use super::outcome::{MoveOutcome, MoveResolution};
use super::pieces::{Piece, PieceRegistry};

/// One game: the board, its pieces, the item pool and the winners so far.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    id: Uuid,
    board: Board,
    pieces: PieceRegistry,
    items: ItemPool,
    winners: BTreeSet<PieceId>,
}

impl GameSession {
    /// Sets up a fresh game: lays out zones, scatters the items, then puts
    /// `player_count` pieces (ids `0..player_count`) on the start tile.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `config` is not playable.
    pub fn start(
        id: Uuid,
        config: BoardConfig,
        player_count: u32,
        rng: &mut dyn DeterministicRng,
    ) -> Result<Self, DomainError> {
        let board = Board::generate(config, rng)?;
        let items = ItemPool::scatter(config.num_tiles, config.item_count, rng)?;
        let mut pieces = PieceRegistry::new();
        for piece_id in 0..player_count {
            pieces.create_piece(piece_id, rng);
        }

        info!(
            session_id = %id,
            player_count,
            zones = board.zones().len(),
            "game session started"
        );

        Ok(Self {
            id,
            board,
            pieces,
            items,
            winners: BTreeSet::new(),
        })
    }

    /// Assembles a session from existing parts, checking that they agree
    /// with each other.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTile` if a piece, an item it holds or
    /// an item in the pool lies off the board, `DomainError::Validation` if
    /// the pool was built for another board size or its size does not
    /// match the board's item count, and `DomainError::UnknownPiece`
    /// if a winner is not registered.
    pub fn from_parts(
        id: Uuid,
        board: Board,
        pieces: PieceRegistry,
        items: ItemPool,
        winners: BTreeSet<PieceId>,
    ) -> Result<Self, DomainError> {
        for piece in pieces.iter() {
            board.check_tile(piece.position)?;
            for &marker in &piece.items {
                board.check_tile(marker)?;
            }
        }
        if items.num_tiles() != board.num_tiles() {
            return Err(DomainError::Validation(format!(
                "item pool spans {} tiles but the board has {}",
                items.num_tiles(),
                board.num_tiles()
            )));
        }
        for tile in items.positions() {
            board.check_tile(tile)?;
        }
        let expected = board.config().item_count as usize;
        if items.len() != expected {
            return Err(DomainError::Validation(format!(
                "expected {expected} items on the board, found {}",
                items.len()
            )));
        }
        for &winner in &winners {
            pieces.get(winner)?;
        }
        Ok(Self {
            id,
            board,
            pieces,
            items,
            winners,
        })
    }

    /// Session identifier.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The board and its remaining zones.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// All pieces.
    #[must_use]
    pub fn pieces(&self) -> &PieceRegistry {
        &self.pieces
    }

    /// The uncollected items.
    #[must_use]
    pub fn items(&self) -> &ItemPool {
        &self.items
    }

    /// Pieces that have reached the final tile with an item.
    #[must_use]
    pub fn winners(&self) -> &BTreeSet<PieceId> {
        &self.winners
    }

    /// Looks up a piece.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownPiece` if `piece_id` is not registered.
    pub fn piece(&self, piece_id: PieceId) -> Result<&Piece, DomainError> {
        self.pieces.get(piece_id)
    }

    /// Rolls the die for a piece and lists its neighbouring tiles. Nothing
    /// is recorded; the result is advisory.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownPiece` if `piece_id` is not registered.
    pub fn roll_dice(
        &self,
        piece_id: PieceId,
        rng: &mut dyn DeterministicRng,
    ) -> Result<DiceRoll, DomainError> {
        let current_position = self.pieces.get(piece_id)?.position;
        let roll = roll_dice(rng);
        debug!(session_id = %self.id, piece_id, roll, "dice rolled");
        Ok(DiceRoll {
            player_id: piece_id,
            roll,
            possible_moves: self.board.adjacent_tiles(current_position),
            current_position,
        })
    }

    /// Moves `piece_id` to `target` and applies the win, zone and item
    /// rules, in that order.
    ///
    /// The target is trusted: neither the last roll nor adjacency is
    /// checked. On a win the piece keeps its current position and items.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownPiece`, `DomainError::InvalidTile` or
    /// `DomainError::PieceFinished` before any state changes.
    pub fn resolve_move(
        &mut self,
        piece_id: PieceId,
        target: TileIndex,
        rng: &mut dyn DeterministicRng,
    ) -> Result<MoveResolution, DomainError> {
        let piece = self.pieces.get(piece_id)?;
        self.board.check_tile(target)?;
        if self.winners.contains(&piece_id) {
            return Err(DomainError::PieceFinished(piece_id));
        }
        let attribute = piece.attribute;
        let has_items = piece.has_items();

        if target == self.board.final_tile() {
            let status = if has_items {
                self.winners.insert(piece_id);
                info!(session_id = %self.id, piece_id, "piece reached the final tile and wins");
                MoveOutcome::Win
            } else {
                self.pieces.reset_to_start(piece_id)?;
                MoveOutcome::SentBackNoItem
            };
            return self.resolution(piece_id, status, None);
        }

        let zone = self.board.zone_attribute(target);
        let status = match zone.map(|z| attribute.contact(z)) {
            None => MoveOutcome::Moved,
            Some(ZoneContact::Safe) => MoveOutcome::SafeZoneMoved,
            Some(ZoneContact::Neutralize) => {
                self.board.neutralize(target);
                info!(session_id = %self.id, piece_id, tile = target, "zone neutralized");
                MoveOutcome::ZoneNeutralized
            }
            Some(ZoneContact::Defeat) => {
                self.pieces.reset_to_start(piece_id)?;
                return self.resolution(piece_id, MoveOutcome::SentBackByZone, zone);
            }
        };
        self.pieces.set_position(piece_id, target)?;

        if !self.items.is_item_at(target) {
            return self.resolution(piece_id, status, zone);
        }
        let respawned_at = self.items.collect(target, rng)?;
        self.pieces.add_item(piece_id, target)?;
        debug!(session_id = %self.id, piece_id, tile = target, respawned_at, "item collected");
        Ok(MoveResolution {
            picked_up: Some(target),
            respawned_at: Some(respawned_at),
            ..self.resolution(piece_id, status, zone)?
        })
    }

    fn resolution(
        &self,
        piece_id: PieceId,
        status: MoveOutcome,
        zone: Option<Attribute>,
    ) -> Result<MoveResolution, DomainError> {
        let piece = self.pieces.get(piece_id)?;
        debug!(
            session_id = %self.id,
            piece_id,
            ?status,
            position = piece.position,
            items = piece.items.len(),
            "move resolved"
        );
        Ok(MoveResolution {
            player_id: piece_id,
            status,
            position: piece.position,
            items: piece.items.clone(),
            picked_up: None,
            respawned_at: None,
            zone,
        })
    }
}
