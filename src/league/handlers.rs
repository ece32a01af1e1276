use axum::{extract::State, Json};
use tracing::{info, instrument, warn};

use super::{table::compute_table, types::LeagueTableResponse};
use crate::shared::{AppError, AppState};

/// HTTP handler for the league table
///
/// GET /api/league-table
/// Pulls full player and result snapshots and recomputes the standings.
/// Any store failure aborts the request with a 500.
#[instrument(name = "get_league_table", skip(state))]
pub async fn get_league_table(
    State(state): State<AppState>,
) -> Result<Json<LeagueTableResponse>, AppError> {
    let players = state.player_repository.list_players().await.map_err(|e| {
        warn!(error = %e, "League table computation failed fetching players");
        e
    })?;
    let results = state.result_repository.list_results().await.map_err(|e| {
        warn!(error = %e, "League table computation failed fetching results");
        e
    })?;

    let league_table = compute_table(&players, &results);

    info!(
        player_count = players.len(),
        result_count = results.len(),
        "League table computed"
    );

    Ok(Json(LeagueTableResponse {
        success: true,
        league_table,
    }))
}
