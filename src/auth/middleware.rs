use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::{debug, instrument, warn};

use crate::shared::{AppError, AppState};

/// Admin guard - validates the Authorization Bearer header.
/// Usage: .route_layer(middleware::from_fn_with_state(app_state.clone(), auth::admin_auth))
/// Handlers behind it can extract Extension<AdminClaims>.
#[instrument(skip(state, req, next), fields(method = %req.method(), uri = %req.uri()))]
pub async fn admin_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|header| header.to_str().ok())
        .ok_or_else(|| {
            warn!("Missing Authorization header in request");
            AppError::Unauthorized("Missing authorization header".to_string())
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        warn!("Invalid Authorization header format (expected Bearer token)");
        AppError::Unauthorized("Invalid authorization header format".to_string())
    })?;

    let claims = state.admin_auth.validate(token).map_err(|e| {
        warn!("Admin authentication failed: {}", e);
        e
    })?;

    debug!(jti = %claims.jti, "Admin request authorised");
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
