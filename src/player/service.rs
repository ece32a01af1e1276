use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::{
    models::{NewPlayer, Player, PlayerUpdate},
    repository::PlayerRepository,
};
use crate::{results::repository::ResultRepository, shared::AppError};

/// Service for registering and editing league players
pub struct PlayerService {
    repository: Arc<dyn PlayerRepository>,
    result_repository: Arc<dyn ResultRepository>,
}

impl PlayerService {
    pub fn new(
        repository: Arc<dyn PlayerRepository>,
        result_repository: Arc<dyn ResultRepository>,
    ) -> Self {
        Self {
            repository,
            result_repository,
        }
    }

    #[instrument(skip(self))]
    pub async fn list_players(&self) -> Result<Vec<Player>, AppError> {
        self.repository.list_players().await
    }

    #[instrument(skip(self, player), fields(name = %player.name))]
    pub async fn register_player(&self, player: NewPlayer) -> Result<Player, AppError> {
        validate_name("name", &player.name)?;
        validate_name("team", &player.team)?;
        validate_strength(player.strength)?;

        let player = self.repository.create_player(player).await?;
        info!(player_id = player.id, name = %player.name, team = %player.team, "Player registered");
        Ok(player)
    }

    #[instrument(skip(self, update))]
    pub async fn update_player(&self, id: i64, update: PlayerUpdate) -> Result<Player, AppError> {
        if let Some(name) = &update.name {
            validate_name("name", name)?;
        }
        if let Some(team) = &update.team {
            validate_name("team", team)?;
        }
        if let Some(strength) = update.strength {
            validate_strength(strength)?;
        }

        let player = self
            .repository
            .update_player(id, update)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Player {} not found", id)))?;

        debug!(player_id = id, "Player updated");
        Ok(player)
    }

    /// Removes a player, refusing while any recorded result still references them
    #[instrument(skip(self))]
    pub async fn delete_player(&self, id: i64) -> Result<(), AppError> {
        let referenced = self
            .result_repository
            .list_results()
            .await?
            .iter()
            .any(|r| r.involves(id));

        if referenced {
            warn!(player_id = id, "Refusing to delete player with recorded results");
            return Err(AppError::Validation(format!(
                "Player {} has recorded results and cannot be deleted",
                id
            )));
        }

        if !self.repository.delete_player(id).await? {
            return Err(AppError::NotFound(format!("Player {} not found", id)));
        }

        info!(player_id = id, "Player deleted");
        Ok(())
    }
}

fn validate_name(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("Missing player field: {}", field)));
    }
    Ok(())
}

fn validate_strength(strength: f64) -> Result<(), AppError> {
    if !strength.is_finite() || strength < 0.0 {
        return Err(AppError::Validation(
            "Player strength must be a non-negative number".to_string(),
        ));
    }
    Ok(())
}
