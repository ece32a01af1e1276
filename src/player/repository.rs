use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use super::models::{NewPlayer, Player, PlayerUpdate};
use crate::shared::AppError;

/// Trait for player directory operations.
/// Listing always returns players ordered by id.
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    async fn list_players(&self) -> Result<Vec<Player>, AppError>;
    async fn get_player(&self, id: i64) -> Result<Option<Player>, AppError>;
    async fn create_player(&self, player: NewPlayer) -> Result<Player, AppError>;
    async fn update_player(
        &self,
        id: i64,
        update: PlayerUpdate,
    ) -> Result<Option<Player>, AppError>;
    /// Returns false when no player had that id
    async fn delete_player(&self, id: i64) -> Result<bool, AppError>;
}

/// In-memory implementation of PlayerRepository for development and testing
///
/// Ids are assigned as one past the highest id currently stored.
#[derive(Debug, Default)]
pub struct InMemoryPlayerRepository {
    players: RwLock<BTreeMap<i64, Player>>,
}

impl InMemoryPlayerRepository {
    pub fn new() -> Self {
        Self {
            players: RwLock::new(BTreeMap::new()),
        }
    }

    /// Creates an in-memory repository with pre-populated players
    pub fn with_players(players: Vec<Player>) -> Self {
        let player_map = players.into_iter().map(|p| (p.id, p)).collect();
        Self {
            players: RwLock::new(player_map),
        }
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    #[instrument(skip(self))]
    async fn list_players(&self) -> Result<Vec<Player>, AppError> {
        let players = self.players.read().await;
        debug!(player_count = players.len(), "Listing players from memory");
        Ok(players.values().cloned().collect())
    }

    #[instrument(skip(self))]
    async fn get_player(&self, id: i64) -> Result<Option<Player>, AppError> {
        let players = self.players.read().await;
        Ok(players.get(&id).cloned())
    }

    #[instrument(skip(self, player))]
    async fn create_player(&self, player: NewPlayer) -> Result<Player, AppError> {
        let mut players = self.players.write().await;
        let id = players.keys().next_back().map_or(1, |last| last + 1);
        let player = player.into_player(id);
        players.insert(id, player.clone());

        debug!(player_id = id, name = %player.name, "Player created in memory");
        Ok(player)
    }

    #[instrument(skip(self, update))]
    async fn update_player(
        &self,
        id: i64,
        update: PlayerUpdate,
    ) -> Result<Option<Player>, AppError> {
        let mut players = self.players.write().await;
        let Some(player) = players.get_mut(&id) else {
            debug!(player_id = id, "Player not found for update in memory");
            return Ok(None);
        };

        update.apply_to(player);
        Ok(Some(player.clone()))
    }

    #[instrument(skip(self))]
    async fn delete_player(&self, id: i64) -> Result<bool, AppError> {
        let mut players = self.players.write().await;
        Ok(players.remove(&id).is_some())
    }
}

/// PostgreSQL implementation of the player directory
pub struct PostgresPlayerRepository {
    pool: PgPool,
}

impl PostgresPlayerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const PLAYER_COLUMNS: &str = "id, name, team, strength, team_color, photo_url";

#[async_trait]
impl PlayerRepository for PostgresPlayerRepository {
    #[instrument(skip(self))]
    async fn list_players(&self) -> Result<Vec<Player>, AppError> {
        let query = format!("SELECT {PLAYER_COLUMNS} FROM players ORDER BY id");
        sqlx::query_as::<_, Player>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to list players from database");
                AppError::DatabaseError(e.to_string())
            })
    }

    #[instrument(skip(self))]
    async fn get_player(&self, id: i64) -> Result<Option<Player>, AppError> {
        let query = format!("SELECT {PLAYER_COLUMNS} FROM players WHERE id = $1");
        sqlx::query_as::<_, Player>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, player_id = id, "Failed to fetch player from database");
                AppError::DatabaseError(e.to_string())
            })
    }

    #[instrument(skip(self, player))]
    async fn create_player(&self, player: NewPlayer) -> Result<Player, AppError> {
        let query = format!(
            "INSERT INTO players (name, team, strength, team_color, photo_url) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {PLAYER_COLUMNS}"
        );
        sqlx::query_as::<_, Player>(&query)
            .bind(&player.name)
            .bind(&player.team)
            .bind(player.strength)
            .bind(&player.team_color)
            .bind(&player.photo_url)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to create player in database");
                AppError::DatabaseError(e.to_string())
            })
    }

    #[instrument(skip(self, update))]
    async fn update_player(
        &self,
        id: i64,
        update: PlayerUpdate,
    ) -> Result<Option<Player>, AppError> {
        let query = format!(
            "UPDATE players SET \
                name = COALESCE($2, name), \
                team = COALESCE($3, team), \
                strength = COALESCE($4, strength), \
                team_color = COALESCE($5, team_color), \
                photo_url = COALESCE($6, photo_url) \
             WHERE id = $1 RETURNING {PLAYER_COLUMNS}"
        );
        sqlx::query_as::<_, Player>(&query)
            .bind(id)
            .bind(update.name)
            .bind(update.team)
            .bind(update.strength)
            .bind(update.team_color)
            .bind(update.photo_url)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, player_id = id, "Failed to update player in database");
                AppError::DatabaseError(e.to_string())
            })
    }

    #[instrument(skip(self))]
    async fn delete_player(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM players WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, player_id = id, "Failed to delete player from database");
                AppError::DatabaseError(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }
}
