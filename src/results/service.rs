use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::{
    models::{MatchResult, NewMatchResult},
    repository::ResultRepository,
};
use crate::{
    fixture::repository::FixtureRepository, player::repository::PlayerRepository,
    shared::AppError,
};

/// Service for recording match results and keeping fixtures in step
pub struct ResultService {
    repository: Arc<dyn ResultRepository>,
    player_repository: Arc<dyn PlayerRepository>,
    fixture_repository: Arc<dyn FixtureRepository>,
}

impl ResultService {
    pub fn new(
        repository: Arc<dyn ResultRepository>,
        player_repository: Arc<dyn PlayerRepository>,
        fixture_repository: Arc<dyn FixtureRepository>,
    ) -> Self {
        Self {
            repository,
            player_repository,
            fixture_repository,
        }
    }

    #[instrument(skip(self))]
    pub async fn list_results(&self) -> Result<Vec<MatchResult>, AppError> {
        self.repository.list_results().await
    }

    /// Records a result and marks the matching fixture as played
    #[instrument(skip(self, result), fields(home = result.home_player_id, away = result.away_player_id))]
    pub async fn record_result(&self, result: NewMatchResult) -> Result<MatchResult, AppError> {
        self.validate(&result).await?;

        let result = self.repository.create_result(result).await?;
        info!(
            match_id = result.match_id,
            home_score = result.home_score,
            away_score = result.away_score,
            "Result recorded"
        );

        match self
            .fixture_repository
            .set_played(result.home_player_id, result.away_player_id, true)
            .await?
        {
            Some(fixture) => debug!(fixture_id = fixture.id, "Fixture marked as played"),
            None => debug!("No open fixture for this pairing"),
        }

        Ok(result)
    }

    /// Corrects a result. A changed pairing reopens the old fixture and closes the new one.
    #[instrument(skip(self, result))]
    pub async fn update_result(
        &self,
        id: i64,
        result: NewMatchResult,
    ) -> Result<MatchResult, AppError> {
        self.validate(&result).await?;

        let not_found = || AppError::NotFound(format!("Result {} not found", id));
        let previous = self.repository.get_result(id).await?.ok_or_else(not_found)?;
        let updated = self
            .repository
            .update_result(id, result)
            .await?
            .ok_or_else(not_found)?;

        let same_pairing = previous.home_player_id == updated.home_player_id
            && previous.away_player_id == updated.away_player_id;
        if !same_pairing {
            self.fixture_repository
                .set_played(previous.home_player_id, previous.away_player_id, false)
                .await?;
            self.fixture_repository
                .set_played(updated.home_player_id, updated.away_player_id, true)
                .await?;
            debug!(match_id = id, "Fixtures moved to the corrected pairing");
        }

        Ok(updated)
    }

    /// Deletes a result and reopens the fixture it had closed
    #[instrument(skip(self))]
    pub async fn delete_result(&self, id: i64) -> Result<(), AppError> {
        let removed = self
            .repository
            .delete_result(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Result {} not found", id)))?;

        self.fixture_repository
            .set_played(removed.home_player_id, removed.away_player_id, false)
            .await?;

        info!(match_id = id, "Result deleted");
        Ok(())
    }

    async fn validate(&self, result: &NewMatchResult) -> Result<(), AppError> {
        if result.home_score < 0 || result.away_score < 0 {
            return Err(AppError::Validation(
                "Scores must be non-negative".to_string(),
            ));
        }
        if result.home_player_id == result.away_player_id {
            return Err(AppError::Validation(
                "Home and away players must differ".to_string(),
            ));
        }
        for id in [result.home_player_id, result.away_player_id] {
            if self.player_repository.get_player(id).await?.is_none() {
                warn!(player_id = id, "Result references unknown player");
                return Err(AppError::Validation(format!("Unknown player {}", id)));
            }
        }
        Ok(())
    }
}
