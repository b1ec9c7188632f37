//! Commands for the game session context.

use hexzone_core::command::Command;
use hexzone_core::{PieceId, TileIndex};
use uuid::Uuid;

/// Command to start a new game, replacing any game in progress.
#[derive(Debug, Clone)]
pub struct StartGame {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Number of pieces to create.
    pub player_count: u32,
}

impl Command for StartGame {
    fn command_type(&self) -> &'static str {
        "game.start"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to roll the die for a piece.
#[derive(Debug, Clone)]
pub struct RollDice {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The rolling piece.
    pub player_id: PieceId,
}

impl Command for RollDice {
    fn command_type(&self) -> &'static str {
        "game.roll_dice"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to move a piece onto a tile.
#[derive(Debug, Clone)]
pub struct MovePiece {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The moving piece.
    pub player_id: PieceId,
    /// Requested destination.
    pub target: TileIndex,
}

impl Command for MovePiece {
    fn command_type(&self) -> &'static str {
        "game.move_piece"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to save the running game.
#[derive(Debug, Clone)]
pub struct SaveGame {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for SaveGame {
    fn command_type(&self) -> &'static str {
        "game.save"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to replace the running game with the saved one.
#[derive(Debug, Clone)]
pub struct LoadGame {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for LoadGame {
    fn command_type(&self) -> &'static str {
        "game.load"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
