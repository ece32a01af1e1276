use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    models::{NewPlayer, PlayerUpdate},
    service::PlayerService,
    types::{PlayerResponse, PlayersResponse},
};
use crate::shared::{AppError, AppState, MessageResponse};

fn service(state: &AppState) -> PlayerService {
    PlayerService::new(
        Arc::clone(&state.player_repository),
        Arc::clone(&state.result_repository),
    )
}

/// GET /api/players
#[instrument(name = "list_players", skip(state))]
pub async fn list_players(State(state): State<AppState>) -> Result<Json<PlayersResponse>, AppError> {
    let players = service(&state).list_players().await?;
    info!(player_count = players.len(), "Players listed successfully");

    Ok(Json(PlayersResponse {
        success: true,
        players,
    }))
}

/// POST /api/players (admin)
#[instrument(name = "create_player", skip(state, request))]
pub async fn create_player(
    State(state): State<AppState>,
    Json(request): Json<NewPlayer>,
) -> Result<(StatusCode, Json<PlayerResponse>), AppError> {
    let player = service(&state).register_player(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(PlayerResponse {
            success: true,
            player,
        }),
    ))
}

/// PUT /api/players/:id (admin)
#[instrument(name = "update_player", skip(state, request))]
pub async fn update_player(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<PlayerUpdate>,
) -> Result<Json<PlayerResponse>, AppError> {
    let player = service(&state).update_player(id, request).await?;

    Ok(Json(PlayerResponse {
        success: true,
        player,
    }))
}

/// DELETE /api/players/:id (admin)
#[instrument(name = "delete_player", skip(state))]
pub async fn delete_player(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    service(&state).delete_player(id).await?;
    Ok(Json(MessageResponse::ok(format!("Player {} deleted", id))))
}
