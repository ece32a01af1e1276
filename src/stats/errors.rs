use thiserror::Error;

use crate::shared::AppError;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Player {0} not found")]
    PlayerNotFound(i64),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<AppError> for StatsError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::DatabaseError(msg) => StatsError::Repository(msg),
            other => StatsError::Repository(other.to_string()),
        }
    }
}

impl From<StatsError> for AppError {
    fn from(err: StatsError) -> Self {
        match err {
            StatsError::Repository(msg) => AppError::DatabaseError(msg),
            StatsError::PlayerNotFound(id) => {
                AppError::NotFound(format!("Player {} not found", id))
            }
            StatsError::Validation(msg) => AppError::Validation(msg),
        }
    }
}
