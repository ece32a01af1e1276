use serde::{Deserialize, Serialize};

use super::models::{Leaders, LeagueMetrics, PlayerComparison, PlayerReport, TeamOverview};

#[derive(Debug, Serialize, Deserialize)]
pub struct PlayerStatsResponse {
    pub success: bool,
    pub stats: PlayerReport,
}

/// Query string for GET /api/stats/compare
#[derive(Debug, Deserialize)]
pub struct CompareQuery {
    pub player1: i64,
    pub player2: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ComparisonResponse {
    pub success: bool,
    pub comparison: PlayerComparison,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TeamStatsResponse {
    pub success: bool,
    pub teams: Vec<TeamOverview>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LeadersResponse {
    pub success: bool,
    pub leaders: Leaders,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MetricsResponse {
    pub success: bool,
    pub metrics: LeagueMetrics,
}
