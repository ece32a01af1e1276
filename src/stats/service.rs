use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::{
    analysis, leaders, metrics,
    models::{Leaders, LeagueMetrics, PlayerComparison, PlayerReport, TeamOverview},
    team, StatsError,
};
use crate::{
    player::{repository::PlayerRepository, Player},
    results::{repository::ResultRepository, MatchResult},
};

/// Read-only reporting over the player directory and result store.
/// Every call takes a fresh snapshot; nothing is cached between requests.
pub struct StatsService {
    player_repository: Arc<dyn PlayerRepository>,
    result_repository: Arc<dyn ResultRepository>,
}

impl StatsService {
    pub fn new(
        player_repository: Arc<dyn PlayerRepository>,
        result_repository: Arc<dyn ResultRepository>,
    ) -> Self {
        Self {
            player_repository,
            result_repository,
        }
    }

    #[instrument(skip(self))]
    pub async fn player_report(&self, player_id: i64) -> Result<PlayerReport, StatsError> {
        let (players, results) = self.snapshot().await?;
        ensure_known(player_id, &players)?;

        let report = analysis::analyze_player(player_id, &players, &results);
        info!(
            player_id,
            matches = report.basic_stats.matches,
            form_rating = report.form_analysis.form_rating,
            "Player report computed"
        );
        Ok(report)
    }

    #[instrument(skip(self))]
    pub async fn compare(
        &self,
        player1: i64,
        player2: i64,
    ) -> Result<PlayerComparison, StatsError> {
        if player1 == player2 {
            return Err(StatsError::Validation(
                "Choose two different players to compare".to_string(),
            ));
        }

        let (players, results) = self.snapshot().await?;
        ensure_known(player1, &players)?;
        ensure_known(player2, &players)?;

        let comparison = analysis::compare_players(player1, player2, &players, &results);
        info!(
            head_to_head_matches = comparison.head_to_head.matches,
            "Player comparison computed"
        );
        Ok(comparison)
    }

    #[instrument(skip(self))]
    pub async fn team_overview(&self) -> Result<Vec<TeamOverview>, StatsError> {
        let (players, results) = self.snapshot().await?;
        Ok(team::team_overview(&players, &results))
    }

    #[instrument(skip(self))]
    pub async fn leaders(&self) -> Result<Leaders, StatsError> {
        let (players, results) = self.snapshot().await?;
        Ok(leaders::leaders(&players, &results))
    }

    #[instrument(skip(self))]
    pub async fn league_metrics(&self) -> Result<LeagueMetrics, StatsError> {
        let results = self.result_repository.list_results().await.map_err(|e| {
            warn!(error = %e, "Stats failed fetching results");
            e
        })?;
        Ok(metrics::league_metrics(&results))
    }

    async fn snapshot(&self) -> Result<(Vec<Player>, Vec<MatchResult>), StatsError> {
        let players = self.player_repository.list_players().await.map_err(|e| {
            warn!(error = %e, "Stats failed fetching players");
            e
        })?;
        let results = self.result_repository.list_results().await.map_err(|e| {
            warn!(error = %e, "Stats failed fetching results");
            e
        })?;
        Ok((players, results))
    }
}

fn ensure_known(player_id: i64, players: &[Player]) -> Result<(), StatsError> {
    if players.iter().any(|p| p.id == player_id) {
        Ok(())
    } else {
        Err(StatsError::PlayerNotFound(player_id))
    }
}
