use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use super::models::{Fixture, FixtureUpdate, NewFixture};
use crate::shared::AppError;

/// Trait for fixture list operations
#[async_trait]
pub trait FixtureRepository: Send + Sync {
    async fn list_fixtures(&self) -> Result<Vec<Fixture>, AppError>;
    async fn get_fixture(&self, id: i64) -> Result<Option<Fixture>, AppError>;
    async fn create_fixture(&self, fixture: NewFixture) -> Result<Fixture, AppError>;
    /// Returns None when no fixture had that id
    async fn update_fixture(
        &self,
        id: i64,
        update: FixtureUpdate,
    ) -> Result<Option<Fixture>, AppError>;
    async fn delete_fixture(&self, id: i64) -> Result<bool, AppError>;

    /// Atomically swaps the whole fixture list for a freshly generated schedule
    async fn replace_all(&self, fixtures: Vec<NewFixture>) -> Result<Vec<Fixture>, AppError>;

    /// Flips the `played` flag on the lowest-id fixture for this exact pairing
    /// whose flag currently differs. Returns the touched fixture, if any.
    async fn set_played(
        &self,
        home_player_id: i64,
        away_player_id: i64,
        played: bool,
    ) -> Result<Option<Fixture>, AppError>;
}

/// In-memory implementation of FixtureRepository for development and testing
#[derive(Debug, Default)]
pub struct InMemoryFixtureRepository {
    fixtures: RwLock<BTreeMap<i64, Fixture>>,
}

impl InMemoryFixtureRepository {
    pub fn new() -> Self {
        Self {
            fixtures: RwLock::new(BTreeMap::new()),
        }
    }

    pub fn with_fixtures(fixtures: Vec<Fixture>) -> Self {
        let fixture_map = fixtures.into_iter().map(|f| (f.id, f)).collect();
        Self {
            fixtures: RwLock::new(fixture_map),
        }
    }
}

#[async_trait]
impl FixtureRepository for InMemoryFixtureRepository {
    #[instrument(skip(self))]
    async fn list_fixtures(&self) -> Result<Vec<Fixture>, AppError> {
        let fixtures = self.fixtures.read().await;
        Ok(fixtures.values().cloned().collect())
    }

    #[instrument(skip(self, fixture))]
    async fn create_fixture(&self, fixture: NewFixture) -> Result<Fixture, AppError> {
        let mut fixtures = self.fixtures.write().await;
        let id = fixtures.keys().next_back().map_or(1, |last| last + 1);
        let fixture = fixture.into_fixture(id);
        fixtures.insert(id, fixture.clone());

        debug!(fixture_id = id, "Fixture created in memory");
        Ok(fixture)
    }

    #[instrument(skip(self))]
    async fn get_fixture(&self, id: i64) -> Result<Option<Fixture>, AppError> {
        let fixtures = self.fixtures.read().await;
        Ok(fixtures.get(&id).cloned())
    }

    #[instrument(skip(self, update))]
    async fn update_fixture(
        &self,
        id: i64,
        update: FixtureUpdate,
    ) -> Result<Option<Fixture>, AppError> {
        let mut fixtures = self.fixtures.write().await;
        let Some(fixture) = fixtures.get_mut(&id) else {
            debug!(fixture_id = id, "Fixture not found for update in memory");
            return Ok(None);
        };

        update.apply_to(fixture);
        Ok(Some(fixture.clone()))
    }

    #[instrument(skip(self))]
    async fn delete_fixture(&self, id: i64) -> Result<bool, AppError> {
        let mut fixtures = self.fixtures.write().await;
        Ok(fixtures.remove(&id).is_some())
    }

    #[instrument(skip(self, fixtures))]
    async fn replace_all(&self, fixtures: Vec<NewFixture>) -> Result<Vec<Fixture>, AppError> {
        let mut stored = self.fixtures.write().await;
        stored.clear();

        let created: Vec<Fixture> = fixtures
            .into_iter()
            .zip(1..)
            .map(|(fixture, id)| fixture.into_fixture(id))
            .collect();
        for fixture in &created {
            stored.insert(fixture.id, fixture.clone());
        }

        info!(fixture_count = created.len(), "Fixture list replaced in memory");
        Ok(created)
    }

    #[instrument(skip(self))]
    async fn set_played(
        &self,
        home_player_id: i64,
        away_player_id: i64,
        played: bool,
    ) -> Result<Option<Fixture>, AppError> {
        let mut fixtures = self.fixtures.write().await;
        let target = fixtures.values_mut().find(|f| {
            f.home_player_id == home_player_id
                && f.away_player_id == away_player_id
                && f.played != played
        });

        Ok(target.map(|fixture| {
            fixture.played = played;
            fixture.clone()
        }))
    }
}

/// PostgreSQL implementation of the fixture list
pub struct PostgresFixtureRepository {
    pool: PgPool,
}

impl PostgresFixtureRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const FIXTURE_COLUMNS: &str = "id, home_player_id, away_player_id, date, venue, played";

fn database_error(e: sqlx::Error, action: &str) -> AppError {
    warn!(error = %e, "Failed to {} in database", action);
    AppError::DatabaseError(e.to_string())
}

#[async_trait]
impl FixtureRepository for PostgresFixtureRepository {
    #[instrument(skip(self))]
    async fn list_fixtures(&self) -> Result<Vec<Fixture>, AppError> {
        let query = format!("SELECT {FIXTURE_COLUMNS} FROM fixtures ORDER BY id");
        sqlx::query_as::<_, Fixture>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| database_error(e, "list fixtures"))
    }

    #[instrument(skip(self, fixture))]
    async fn create_fixture(&self, fixture: NewFixture) -> Result<Fixture, AppError> {
        let query = format!(
            "INSERT INTO fixtures (home_player_id, away_player_id, date, venue, played) \
             VALUES ($1, $2, $3, $4, FALSE) RETURNING {FIXTURE_COLUMNS}"
        );
        sqlx::query_as::<_, Fixture>(&query)
            .bind(fixture.home_player_id)
            .bind(fixture.away_player_id)
            .bind(fixture.date)
            .bind(&fixture.venue)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| database_error(e, "create fixture"))
    }

    #[instrument(skip(self))]
    async fn get_fixture(&self, id: i64) -> Result<Option<Fixture>, AppError> {
        let query = format!("SELECT {FIXTURE_COLUMNS} FROM fixtures WHERE id = $1");
        sqlx::query_as::<_, Fixture>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error(e, "fetch fixture"))
    }

    #[instrument(skip(self, update))]
    async fn update_fixture(
        &self,
        id: i64,
        update: FixtureUpdate,
    ) -> Result<Option<Fixture>, AppError> {
        let query = format!(
            "UPDATE fixtures SET \
                home_player_id = COALESCE($2, home_player_id), \
                away_player_id = COALESCE($3, away_player_id), \
                date = COALESCE($4, date), \
                venue = COALESCE($5, venue), \
                played = COALESCE($6, played) \
             WHERE id = $1 RETURNING {FIXTURE_COLUMNS}"
        );
        sqlx::query_as::<_, Fixture>(&query)
            .bind(id)
            .bind(update.home_player_id)
            .bind(update.away_player_id)
            .bind(update.date)
            .bind(update.venue)
            .bind(update.played)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error(e, "update fixture"))
    }

    #[instrument(skip(self))]
    async fn delete_fixture(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM fixtures WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| database_error(e, "delete fixture"))?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, fixtures))]
    async fn replace_all(&self, fixtures: Vec<NewFixture>) -> Result<Vec<Fixture>, AppError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| database_error(e, "begin fixture transaction"))?;

        sqlx::query("DELETE FROM fixtures")
            .execute(&mut *tx)
            .await
            .map_err(|e| database_error(e, "clear fixtures"))?;

        let query = format!(
            "INSERT INTO fixtures (home_player_id, away_player_id, date, venue, played) \
             VALUES ($1, $2, $3, $4, FALSE) RETURNING {FIXTURE_COLUMNS}"
        );
        let mut created = Vec::with_capacity(fixtures.len());
        for fixture in fixtures {
            let row = sqlx::query_as::<_, Fixture>(&query)
                .bind(fixture.home_player_id)
                .bind(fixture.away_player_id)
                .bind(fixture.date)
                .bind(&fixture.venue)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| database_error(e, "insert generated fixture"))?;
            created.push(row);
        }

        tx.commit()
            .await
            .map_err(|e| database_error(e, "commit fixture transaction"))?;

        info!(fixture_count = created.len(), "Fixture list replaced in database");
        Ok(created)
    }

    #[instrument(skip(self))]
    async fn set_played(
        &self,
        home_player_id: i64,
        away_player_id: i64,
        played: bool,
    ) -> Result<Option<Fixture>, AppError> {
        let query = format!(
            "UPDATE fixtures SET played = $3 WHERE id = ( \
                SELECT id FROM fixtures \
                WHERE home_player_id = $1 AND away_player_id = $2 AND played <> $3 \
                ORDER BY id LIMIT 1 \
             ) RETURNING {FIXTURE_COLUMNS}"
        );
        sqlx::query_as::<_, Fixture>(&query)
            .bind(home_player_id)
            .bind(away_player_id)
            .bind(played)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error(e, "update fixture played flag"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_utils::fixture;
    use chrono::NaiveDate;

    fn pairing(home: i64, away: i64) -> NewFixture {
        NewFixture {
            home_player_id: home,
            away_player_id: away,
            date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            venue: None,
        }
    }

    #[tokio::test]
    async fn test_set_played_marks_first_unplayed_match() {
        let repo = InMemoryFixtureRepository::with_fixtures(vec![
            fixture(1, 1, 2),
            fixture(2, 1, 2),
            fixture(3, 2, 1),
        ]);

        let first = repo.set_played(1, 2, true).await.unwrap().unwrap();
        assert_eq!(first.id, 1);

        let second = repo.set_played(1, 2, true).await.unwrap().unwrap();
        assert_eq!(second.id, 2);

        assert!(repo.set_played(1, 2, true).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_played_respects_home_and_away() {
        let repo = InMemoryFixtureRepository::with_fixtures(vec![fixture(1, 2, 1)]);
        assert!(repo.set_played(1, 2, true).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unmark_played() {
        let repo = InMemoryFixtureRepository::with_fixtures(vec![fixture(1, 1, 2)]);
        repo.set_played(1, 2, true).await.unwrap();

        let reverted = repo.set_played(1, 2, false).await.unwrap().unwrap();
        assert!(!reverted.played);
    }

    #[tokio::test]
    async fn test_update_fixture_in_place() {
        let repo = InMemoryFixtureRepository::with_fixtures(vec![fixture(1, 1, 2)]);

        let update = FixtureUpdate {
            venue: Some("Old Trafford".to_string()),
            ..FixtureUpdate::default()
        };
        let updated = repo.update_fixture(1, update).await.unwrap().unwrap();
        assert_eq!(updated.venue.as_deref(), Some("Old Trafford"));
        assert_eq!(repo.get_fixture(1).await.unwrap(), Some(updated));

        let missing = repo.update_fixture(4, FixtureUpdate::default()).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_replace_all_renumbers_from_one() {
        let repo = InMemoryFixtureRepository::with_fixtures(vec![fixture(7, 1, 2)]);

        let created = repo
            .replace_all(vec![pairing(1, 2), pairing(3, 4)])
            .await
            .unwrap();

        let ids: Vec<i64> = created.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(repo.list_fixtures().await.unwrap().len(), 2);
    }
}
