use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;
use tracing::instrument;

use super::{
    service::StatsService,
    types::{
        CompareQuery, ComparisonResponse, LeadersResponse, MetricsResponse, PlayerStatsResponse,
        TeamStatsResponse,
    },
};
use crate::shared::{AppError, AppState};

fn service(state: &AppState) -> StatsService {
    StatsService::new(
        Arc::clone(&state.player_repository),
        Arc::clone(&state.result_repository),
    )
}

/// GET /api/stats/players/:id
#[instrument(name = "get_player_stats", skip(state))]
pub async fn get_player_stats(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PlayerStatsResponse>, AppError> {
    let stats = service(&state).player_report(id).await?;
    Ok(Json(PlayerStatsResponse {
        success: true,
        stats,
    }))
}

/// GET /api/stats/compare?player1=&player2=
#[instrument(name = "compare_players_stats", skip(state))]
pub async fn compare_players_stats(
    State(state): State<AppState>,
    Query(query): Query<CompareQuery>,
) -> Result<Json<ComparisonResponse>, AppError> {
    let comparison = service(&state)
        .compare(query.player1, query.player2)
        .await?;
    Ok(Json(ComparisonResponse {
        success: true,
        comparison,
    }))
}

/// GET /api/stats/teams
#[instrument(name = "get_team_stats", skip(state))]
pub async fn get_team_stats(
    State(state): State<AppState>,
) -> Result<Json<TeamStatsResponse>, AppError> {
    let teams = service(&state).team_overview().await?;
    Ok(Json(TeamStatsResponse {
        success: true,
        teams,
    }))
}

/// GET /api/stats/leaders
#[instrument(name = "get_leaders", skip(state))]
pub async fn get_leaders(State(state): State<AppState>) -> Result<Json<LeadersResponse>, AppError> {
    let leaders = service(&state).leaders().await?;
    Ok(Json(LeadersResponse {
        success: true,
        leaders,
    }))
}

/// GET /api/stats/metrics
#[instrument(name = "get_league_metrics", skip(state))]
pub async fn get_league_metrics(
    State(state): State<AppState>,
) -> Result<Json<MetricsResponse>, AppError> {
    let metrics = service(&state).league_metrics().await?;
    Ok(Json(MetricsResponse {
        success: true,
        metrics,
    }))
}
