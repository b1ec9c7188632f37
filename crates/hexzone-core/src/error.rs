//! Domain error types.

use thiserror::Error;

use crate::{PieceId, TileIndex};

/// Top-level domain error type.
///
/// Game results such as "sent back to start" are outcomes, not errors;
/// every variant here rejects a request before any state is mutated.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The referenced piece is not registered in the session.
    #[error("unknown piece: {0}")]
    UnknownPiece(PieceId),

    /// A tile index outside the board.
    #[error("invalid tile {tile}: board has {num_tiles} tiles")]
    InvalidTile {
        /// The requested tile.
        tile: TileIndex,
        /// Number of tiles on the board.
        num_tiles: u32,
    },

    /// No snapshot has been saved yet.
    #[error("no saved game found")]
    SnapshotNotFound,

    /// An operation needs a running game but none has been started.
    #[error("no game in progress")]
    GameNotStarted,

    /// The piece has already won and can no longer move.
    #[error("piece {0} has already won")]
    PieceFinished(PieceId),

    /// A stored snapshot violates the session invariants.
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
