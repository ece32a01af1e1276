use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::auth::AdminAuthService;
use crate::fixture::repository::FixtureRepository;
use crate::player::repository::PlayerRepository;
use crate::results::repository::ResultRepository;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub player_repository: Arc<dyn PlayerRepository>,
    pub result_repository: Arc<dyn ResultRepository>,
    pub fixture_repository: Arc<dyn FixtureRepository>,
    pub admin_auth: Arc<AdminAuthService>,
    pub environment: String,
}

impl AppState {
    pub fn new(
        player_repository: Arc<dyn PlayerRepository>,
        result_repository: Arc<dyn ResultRepository>,
        fixture_repository: Arc<dyn FixtureRepository>,
        admin_auth: Arc<AdminAuthService>,
        environment: String,
    ) -> Self {
        Self {
            player_repository,
            result_repository,
            fixture_repository,
            admin_auth,
            environment,
        }
    }
}

/// Acknowledgement body for operations with nothing else to return
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("JWT error: {0}")]
    JwtError(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::JwtError(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::DatabaseError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", msg),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(json!({
            "success": false,
            "error": error_message
        }));

        (status, body).into_response()
    }
}
