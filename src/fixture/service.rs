use chrono::Utc;
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    models::{Fixture, FixtureUpdate, NewFixture},
    repository::FixtureRepository,
    scheduler::{generate_schedule, ScheduleOptions},
    types::GenerateFixturesRequest,
};
use crate::{player::repository::PlayerRepository, shared::AppError};

const DEFAULT_DAYS_BETWEEN: u32 = 3;

/// Service for scheduling league fixtures
pub struct FixtureService {
    repository: Arc<dyn FixtureRepository>,
    player_repository: Arc<dyn PlayerRepository>,
}

impl FixtureService {
    pub fn new(
        repository: Arc<dyn FixtureRepository>,
        player_repository: Arc<dyn PlayerRepository>,
    ) -> Self {
        Self {
            repository,
            player_repository,
        }
    }

    #[instrument(skip(self))]
    pub async fn list_fixtures(&self) -> Result<Vec<Fixture>, AppError> {
        self.repository.list_fixtures().await
    }

    #[instrument(skip(self, fixture))]
    pub async fn create_fixture(&self, fixture: NewFixture) -> Result<Fixture, AppError> {
        self.validate_pairing(fixture.home_player_id, fixture.away_player_id)
            .await?;

        let fixture = self.repository.create_fixture(fixture).await?;
        info!(fixture_id = fixture.id, "Fixture scheduled");
        Ok(fixture)
    }

    /// Edits a scheduled fixture; the resulting pairing is validated like a new one
    #[instrument(skip(self, update))]
    pub async fn update_fixture(
        &self,
        id: i64,
        update: FixtureUpdate,
    ) -> Result<Fixture, AppError> {
        let mut merged = self
            .repository
            .get_fixture(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Fixture {} not found", id)))?;
        update.clone().apply_to(&mut merged);
        self.validate_pairing(merged.home_player_id, merged.away_player_id)
            .await?;

        let fixture = self
            .repository
            .update_fixture(id, update)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Fixture {} not found", id)))?;
        info!(fixture_id = id, "Fixture updated");
        Ok(fixture)
    }

    #[instrument(skip(self))]
    pub async fn delete_fixture(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete_fixture(id).await? {
            return Err(AppError::NotFound(format!("Fixture {} not found", id)));
        }
        Ok(())
    }

    /// Replaces every existing fixture with a generated round-robin
    #[instrument(skip(self, request))]
    pub async fn generate_fixtures(
        &self,
        request: GenerateFixturesRequest,
    ) -> Result<Vec<Fixture>, AppError> {
        let players = self.player_repository.list_players().await?;
        let options = ScheduleOptions {
            start_date: request
                .start_date
                .unwrap_or_else(|| Utc::now().date_naive()),
            days_between: request.days_between.unwrap_or(DEFAULT_DAYS_BETWEEN),
            venues: request.venues,
        };

        let schedule = generate_schedule(&players, &options)?;
        let fixtures = self.repository.replace_all(schedule).await?;

        info!(
            fixture_count = fixtures.len(),
            player_count = players.len(),
            "Fixtures generated"
        );
        Ok(fixtures)
    }

    async fn validate_pairing(
        &self,
        home_player_id: i64,
        away_player_id: i64,
    ) -> Result<(), AppError> {
        if home_player_id == away_player_id {
            return Err(AppError::Validation(
                "A player cannot be scheduled against themselves".to_string(),
            ));
        }
        for id in [home_player_id, away_player_id] {
            if self.player_repository.get_player(id).await?.is_none() {
                return Err(AppError::Validation(format!("Unknown player {}", id)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::repository::InMemoryFixtureRepository;
    use crate::player::repository::InMemoryPlayerRepository;
    use crate::shared::test_utils::player;
    use chrono::NaiveDate;

    fn service(players: usize) -> FixtureService {
        let roster = (1..=players as i64)
            .map(|id| player(id, &format!("p{id}"), "Team", 100.0))
            .collect();
        FixtureService::new(
            Arc::new(InMemoryFixtureRepository::new()),
            Arc::new(InMemoryPlayerRepository::with_players(roster)),
        )
    }

    fn new_fixture(home: i64, away: i64) -> NewFixture {
        NewFixture {
            home_player_id: home,
            away_player_id: away,
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            venue: None,
        }
    }

    #[tokio::test]
    async fn test_create_rejects_self_match_and_unknown_players() {
        let service = service(2);

        let result = service.create_fixture(new_fixture(1, 1)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        let result = service.create_fixture(new_fixture(1, 9)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        let fixture = service.create_fixture(new_fixture(1, 2)).await.unwrap();
        assert!(!fixture.played);
    }

    #[tokio::test]
    async fn test_generate_replaces_existing_fixtures() {
        let service = service(4);
        service.create_fixture(new_fixture(1, 2)).await.unwrap();

        let generated = service
            .generate_fixtures(GenerateFixturesRequest::default())
            .await
            .unwrap();

        assert_eq!(generated.len(), 6);
        assert_eq!(service.list_fixtures().await.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_update_reschedules_fixture() {
        let service = service(3);
        let created = service.create_fixture(new_fixture(1, 2)).await.unwrap();

        let update = FixtureUpdate {
            away_player_id: Some(3),
            date: NaiveDate::from_ymd_opt(2025, 6, 15),
            ..FixtureUpdate::default()
        };
        let updated = service.update_fixture(created.id, update).await.unwrap();

        assert_eq!((updated.home_player_id, updated.away_player_id), (1, 3));
        assert_eq!(updated.date.to_string(), "2025-06-15");
        assert_eq!(service.list_fixtures().await.unwrap(), vec![updated]);
    }

    #[tokio::test]
    async fn test_update_rejects_invalid_pairing() {
        let service = service(2);
        let created = service.create_fixture(new_fixture(1, 2)).await.unwrap();

        let self_match = FixtureUpdate {
            home_player_id: Some(2),
            ..FixtureUpdate::default()
        };
        let result = service.update_fixture(created.id, self_match).await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        let unknown = FixtureUpdate {
            away_player_id: Some(9),
            ..FixtureUpdate::default()
        };
        let result = service.update_fixture(created.id, unknown).await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        assert_eq!(service.list_fixtures().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_update_unknown_fixture() {
        let result = service(2).update_fixture(5, FixtureUpdate::default()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_unknown_fixture() {
        let service = service(2);
        let result = service.delete_fixture(5).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
