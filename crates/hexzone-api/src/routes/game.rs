//! Routes for the game session.

use axum::extract::State;
use axum::{
    Json, Router,
    routing::{get, post},
};
use hexzone_core::error::DomainError;
use hexzone_core::{PieceId, TileIndex};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use hexzone_game::application::command_handlers::{self, SaveReceipt};
use hexzone_game::application::query_handlers::{self, SessionView};
use hexzone_game::domain::commands;
use hexzone_game::domain::dice::DiceRoll;
use hexzone_game::domain::outcome::MoveResolution;

use crate::error::ApiError;
use crate::state::AppState;

const DEFAULT_PLAYER_COUNT: u32 = 2;

fn default_player_count() -> u32 {
    DEFAULT_PLAYER_COUNT
}

/// Request body for POST /start.
#[derive(Debug, Deserialize)]
pub struct StartGameRequest {
    /// Number of pieces to create; defaults to 2.
    #[serde(default = "default_player_count")]
    pub player_count: u32,
}

/// Request body for POST /roll-dice.
#[derive(Debug, Deserialize)]
pub struct RollDiceRequest {
    /// The rolling piece.
    pub player_id: PieceId,
}

/// Request body for POST /move-piece.
#[derive(Debug, Deserialize)]
pub struct MovePieceRequest {
    /// The moving piece.
    pub player_id: PieceId,
    /// Requested destination tile.
    pub new_position: TileIndex,
}

/// Response body carrying a status line and the session state.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    /// Human-readable status.
    pub status: &'static str,
    /// The session, absent when there is none to report.
    #[serde(flatten)]
    pub session: Option<SessionView>,
}

/// Response body for POST /move-piece.
#[derive(Debug, Serialize)]
pub struct MovePieceResponse {
    /// Human-readable status line.
    pub message: &'static str,
    /// The resolved move.
    #[serde(flatten)]
    pub resolution: MoveResolution,
}

/// Response body for POST /save.
#[derive(Debug, Serialize)]
pub struct SaveGameResponse {
    /// Human-readable status.
    pub status: &'static str,
    /// What was saved and when.
    #[serde(flatten)]
    pub receipt: SaveReceipt,
}

/// POST /start
#[instrument(skip(state, request), fields(player_count = request.player_count))]
async fn start_game(
    State(state): State<AppState>,
    Json(request): Json<StartGameRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let command = commands::StartGame {
        correlation_id: Uuid::new_v4(),
        player_count: request.player_count,
    };

    info!(correlation_id = %command.correlation_id, "handling start_game command");

    let view = command_handlers::handle_start_game(
        &command,
        state.board_config,
        &state.rng,
        &state.session,
    )?;

    Ok(Json(SessionResponse {
        status: "Game started",
        session: Some(view),
    }))
}

/// POST /roll-dice
#[instrument(skip(state, request), fields(player_id = request.player_id))]
async fn roll_dice(
    State(state): State<AppState>,
    Json(request): Json<RollDiceRequest>,
) -> Result<Json<DiceRoll>, ApiError> {
    let command = commands::RollDice {
        correlation_id: Uuid::new_v4(),
        player_id: request.player_id,
    };

    info!(correlation_id = %command.correlation_id, "handling roll_dice command");

    let roll = command_handlers::handle_roll_dice(&command, &state.rng, &state.session)?;

    Ok(Json(roll))
}

/// POST /move-piece
#[instrument(
    skip(state, request),
    fields(player_id = request.player_id, new_position = request.new_position)
)]
async fn move_piece(
    State(state): State<AppState>,
    Json(request): Json<MovePieceRequest>,
) -> Result<Json<MovePieceResponse>, ApiError> {
    let command = commands::MovePiece {
        correlation_id: Uuid::new_v4(),
        player_id: request.player_id,
        target: request.new_position,
    };

    info!(correlation_id = %command.correlation_id, "handling move_piece command");

    let resolution = command_handlers::handle_move_piece(&command, &state.rng, &state.session)?;

    Ok(Json(MovePieceResponse {
        message: resolution.status.message(),
        resolution,
    }))
}

/// POST /save
#[instrument(skip(state))]
async fn save_game(State(state): State<AppState>) -> Result<Json<SaveGameResponse>, ApiError> {
    let command = commands::SaveGame {
        correlation_id: Uuid::new_v4(),
    };

    info!(correlation_id = %command.correlation_id, "handling save_game command");

    let receipt = command_handlers::handle_save_game(
        &command,
        state.clock.as_ref(),
        &state.session,
        &*state.snapshot_store,
    )
    .await?;

    Ok(Json(SaveGameResponse {
        status: "Game saved",
        receipt,
    }))
}

/// POST /load
///
/// A missing save is reported as a status, not an error.
#[instrument(skip(state))]
async fn load_game(State(state): State<AppState>) -> Result<Json<SessionResponse>, ApiError> {
    let command = commands::LoadGame {
        correlation_id: Uuid::new_v4(),
    };

    info!(correlation_id = %command.correlation_id, "handling load_game command");

    match command_handlers::handle_load_game(&command, &state.session, &*state.snapshot_store)
        .await
    {
        Ok(view) => Ok(Json(SessionResponse {
            status: "Game loaded",
            session: Some(view),
        })),
        Err(DomainError::SnapshotNotFound) => Ok(Json(SessionResponse {
            status: "No saved game found",
            session: None,
        })),
        Err(other) => Err(other.into()),
    }
}

/// GET /
async fn get_session(State(state): State<AppState>) -> Result<Json<SessionView>, ApiError> {
    let view = query_handlers::get_session(&state.session)?;
    Ok(Json(view))
}

/// Returns the router for the game session.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_session))
        .route("/start", post(start_game))
        .route("/roll-dice", post(roll_dice))
        .route("/move-piece", post(move_piece))
        .route("/save", post(save_game))
        .route("/load", post(load_game))
}
