use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    models::NewMatchResult,
    service::ResultService,
    types::{ResultResponse, ResultsResponse},
};
use crate::shared::{AppError, AppState, MessageResponse};

fn service(state: &AppState) -> ResultService {
    ResultService::new(
        Arc::clone(&state.result_repository),
        Arc::clone(&state.player_repository),
        Arc::clone(&state.fixture_repository),
    )
}

/// GET /api/results
#[instrument(name = "list_results", skip(state))]
pub async fn list_results(
    State(state): State<AppState>,
) -> Result<Json<ResultsResponse>, AppError> {
    let results = service(&state).list_results().await?;
    info!(result_count = results.len(), "Results listed successfully");

    Ok(Json(ResultsResponse {
        success: true,
        results,
    }))
}

/// POST /api/results (admin)
#[instrument(name = "create_result", skip(state, request))]
pub async fn create_result(
    State(state): State<AppState>,
    Json(request): Json<NewMatchResult>,
) -> Result<(StatusCode, Json<ResultResponse>), AppError> {
    let result = service(&state).record_result(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(ResultResponse {
            success: true,
            result,
        }),
    ))
}

/// PUT /api/results/:id (admin)
#[instrument(name = "update_result", skip(state, request))]
pub async fn update_result(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<NewMatchResult>,
) -> Result<Json<ResultResponse>, AppError> {
    let result = service(&state).update_result(id, request).await?;

    Ok(Json(ResultResponse {
        success: true,
        result,
    }))
}

/// DELETE /api/results/:id (admin)
#[instrument(name = "delete_result", skip(state))]
pub async fn delete_result(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    service(&state).delete_result(id).await?;
    Ok(Json(MessageResponse::ok(format!("Result {} deleted", id))))
}
