use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tracing::{debug, instrument};
use uuid::Uuid;

use super::types::AdminClaims;
use crate::shared::AppError;

pub const ADMIN_SUBJECT: &str = "admin";

/// Signing secret and lifetime for admin tokens
#[derive(Clone)]
pub struct TokenConfig {
    secret: String,
    pub expiration_hours: i64,
}

impl TokenConfig {
    pub fn new(secret: String, expiration_hours: i64) -> Self {
        Self {
            secret,
            expiration_hours,
        }
    }

    #[instrument(skip(self))]
    pub fn create_token(&self) -> Result<String, AppError> {
        let now = Utc::now();
        let exp = (now + Duration::hours(self.expiration_hours)).timestamp() as usize;

        debug!(
            expiration_hours = self.expiration_hours,
            exp_timestamp = exp,
            "Creating admin token"
        );

        let claims = AdminClaims {
            sub: ADMIN_SUBJECT.to_string(),
            jti: Uuid::new_v4().to_string(),
            exp,
            iat: now.timestamp() as usize,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_ref()),
        )
        .map_err(|e| {
            debug!(error = %e, "Failed to encode admin token");
            AppError::JwtError(e.to_string())
        })
    }

    /// Checks signature and expiry, then the subject
    #[instrument(skip(self, token))]
    pub fn validate_token(&self, token: &str) -> Result<AdminClaims, AppError> {
        let claims = decode::<AdminClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_ref()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| {
            debug!(error = %e, "Failed to decode admin token");
            AppError::JwtError(e.to_string())
        })?;

        if claims.sub != ADMIN_SUBJECT {
            return Err(AppError::Unauthorized("Not an admin token".to_string()));
        }

        debug!(jti = %claims.jti, exp = claims.exp, "Admin token decoded");
        Ok(claims)
    }
}
