use axum::{extract::State, Json};
use tracing::instrument;

use super::types::{LoginRequest, TokenResponse};
use crate::shared::{AppError, AppState};

/// POST /api/admin/login
/// Exchanges the admin password for a bearer token.
#[instrument(name = "admin_login", skip(state, request))]
pub async fn admin_login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let token = state.admin_auth.login(&request.password)?;
    Ok(Json(TokenResponse {
        success: true,
        token,
    }))
}
