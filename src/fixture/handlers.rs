use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    models::{FixtureUpdate, NewFixture},
    service::FixtureService,
    types::{FixtureResponse, FixturesResponse, GenerateFixturesRequest},
};
use crate::shared::{AppError, AppState, MessageResponse};

fn service(state: &AppState) -> FixtureService {
    FixtureService::new(
        Arc::clone(&state.fixture_repository),
        Arc::clone(&state.player_repository),
    )
}

/// GET /api/fixtures
#[instrument(name = "list_fixtures", skip(state))]
pub async fn list_fixtures(
    State(state): State<AppState>,
) -> Result<Json<FixturesResponse>, AppError> {
    let fixtures = service(&state).list_fixtures().await?;
    info!(fixture_count = fixtures.len(), "Fixtures listed successfully");

    Ok(Json(FixturesResponse {
        success: true,
        fixtures,
    }))
}

/// POST /api/fixtures (admin)
#[instrument(name = "create_fixture", skip(state, request))]
pub async fn create_fixture(
    State(state): State<AppState>,
    Json(request): Json<NewFixture>,
) -> Result<(StatusCode, Json<FixtureResponse>), AppError> {
    let fixture = service(&state).create_fixture(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(FixtureResponse {
            success: true,
            fixture,
        }),
    ))
}

/// PUT /api/fixtures/:id (admin)
#[instrument(name = "update_fixture", skip(state, update))]
pub async fn update_fixture(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(update): Json<FixtureUpdate>,
) -> Result<Json<FixtureResponse>, AppError> {
    let fixture = service(&state).update_fixture(id, update).await?;

    Ok(Json(FixtureResponse {
        success: true,
        fixture,
    }))
}

/// DELETE /api/fixtures/:id (admin)
#[instrument(name = "delete_fixture", skip(state))]
pub async fn delete_fixture(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    service(&state).delete_fixture(id).await?;
    Ok(Json(MessageResponse::ok(format!("Fixture {} deleted", id))))
}

/// POST /api/fixtures/generate (admin)
///
/// The body is optional; without one the schedule starts today.
#[instrument(name = "generate_fixtures", skip(state, request))]
pub async fn generate_fixtures(
    State(state): State<AppState>,
    request: Option<Json<GenerateFixturesRequest>>,
) -> Result<Json<FixturesResponse>, AppError> {
    let request = request.map(|Json(body)| body).unwrap_or_default();
    let fixtures = service(&state).generate_fixtures(request).await?;

    Ok(Json(FixturesResponse {
        success: true,
        fixtures,
    }))
}
