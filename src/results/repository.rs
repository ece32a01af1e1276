use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use super::models::{MatchResult, NewMatchResult};
use crate::shared::AppError;

/// Trait for the append-only result log
#[async_trait]
pub trait ResultRepository: Send + Sync {
    async fn list_results(&self) -> Result<Vec<MatchResult>, AppError>;
    async fn get_result(&self, id: i64) -> Result<Option<MatchResult>, AppError>;
    async fn create_result(&self, result: NewMatchResult) -> Result<MatchResult, AppError>;
    /// Replaces every field of an existing result; None when the id is unknown
    async fn update_result(
        &self,
        id: i64,
        result: NewMatchResult,
    ) -> Result<Option<MatchResult>, AppError>;
    /// Returns the removed result so callers can undo its side effects
    async fn delete_result(&self, id: i64) -> Result<Option<MatchResult>, AppError>;
}

/// In-memory implementation of ResultRepository for development and testing
#[derive(Debug, Default)]
pub struct InMemoryResultRepository {
    results: RwLock<BTreeMap<i64, MatchResult>>,
}

impl InMemoryResultRepository {
    pub fn new() -> Self {
        Self {
            results: RwLock::new(BTreeMap::new()),
        }
    }

    pub fn with_results(results: Vec<MatchResult>) -> Self {
        let result_map = results.into_iter().map(|r| (r.match_id, r)).collect();
        Self {
            results: RwLock::new(result_map),
        }
    }
}

#[async_trait]
impl ResultRepository for InMemoryResultRepository {
    #[instrument(skip(self))]
    async fn list_results(&self) -> Result<Vec<MatchResult>, AppError> {
        let results = self.results.read().await;
        debug!(result_count = results.len(), "Listing results from memory");
        Ok(results.values().cloned().collect())
    }

    #[instrument(skip(self))]
    async fn get_result(&self, id: i64) -> Result<Option<MatchResult>, AppError> {
        let results = self.results.read().await;
        Ok(results.get(&id).cloned())
    }

    #[instrument(skip(self, result))]
    async fn create_result(&self, result: NewMatchResult) -> Result<MatchResult, AppError> {
        let mut results = self.results.write().await;
        let id = results.keys().next_back().map_or(1, |last| last + 1);
        let result = result.into_result(id);
        results.insert(id, result.clone());

        debug!(match_id = id, "Result recorded in memory");
        Ok(result)
    }

    #[instrument(skip(self, result))]
    async fn update_result(
        &self,
        id: i64,
        result: NewMatchResult,
    ) -> Result<Option<MatchResult>, AppError> {
        let mut results = self.results.write().await;
        let Some(existing) = results.get_mut(&id) else {
            return Ok(None);
        };

        *existing = result.into_result(id);
        Ok(Some(existing.clone()))
    }

    #[instrument(skip(self))]
    async fn delete_result(&self, id: i64) -> Result<Option<MatchResult>, AppError> {
        let mut results = self.results.write().await;
        Ok(results.remove(&id))
    }
}

/// PostgreSQL implementation of the result log
pub struct PostgresResultRepository {
    pool: PgPool,
}

impl PostgresResultRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const RESULT_COLUMNS: &str =
    "id AS match_id, home_player_id, away_player_id, home_score, away_score, date";

fn database_error(e: sqlx::Error, action: &str) -> AppError {
    warn!(error = %e, "Failed to {} in database", action);
    AppError::DatabaseError(e.to_string())
}

#[async_trait]
impl ResultRepository for PostgresResultRepository {
    #[instrument(skip(self))]
    async fn list_results(&self) -> Result<Vec<MatchResult>, AppError> {
        let query = format!("SELECT {RESULT_COLUMNS} FROM results ORDER BY id");
        sqlx::query_as::<_, MatchResult>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| database_error(e, "list results"))
    }

    #[instrument(skip(self))]
    async fn get_result(&self, id: i64) -> Result<Option<MatchResult>, AppError> {
        let query = format!("SELECT {RESULT_COLUMNS} FROM results WHERE id = $1");
        sqlx::query_as::<_, MatchResult>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error(e, "fetch result"))
    }

    #[instrument(skip(self, result))]
    async fn create_result(&self, result: NewMatchResult) -> Result<MatchResult, AppError> {
        let query = format!(
            "INSERT INTO results (home_player_id, away_player_id, home_score, away_score, date) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {RESULT_COLUMNS}"
        );
        sqlx::query_as::<_, MatchResult>(&query)
            .bind(result.home_player_id)
            .bind(result.away_player_id)
            .bind(result.home_score)
            .bind(result.away_score)
            .bind(result.date)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| database_error(e, "create result"))
    }

    #[instrument(skip(self, result))]
    async fn update_result(
        &self,
        id: i64,
        result: NewMatchResult,
    ) -> Result<Option<MatchResult>, AppError> {
        let query = format!(
            "UPDATE results SET home_player_id = $2, away_player_id = $3, \
             home_score = $4, away_score = $5, date = $6 \
             WHERE id = $1 RETURNING {RESULT_COLUMNS}"
        );
        sqlx::query_as::<_, MatchResult>(&query)
            .bind(id)
            .bind(result.home_player_id)
            .bind(result.away_player_id)
            .bind(result.home_score)
            .bind(result.away_score)
            .bind(result.date)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error(e, "update result"))
    }

    #[instrument(skip(self))]
    async fn delete_result(&self, id: i64) -> Result<Option<MatchResult>, AppError> {
        let query = format!("DELETE FROM results WHERE id = $1 RETURNING {RESULT_COLUMNS}");
        sqlx::query_as::<_, MatchResult>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error(e, "delete result"))
    }
}
