use tracing::{info, instrument, warn};

use super::{token::TokenConfig, types::AdminClaims};
use crate::shared::AppError;

/// Issues and checks the tokens that guard every mutating route
pub struct AdminAuthService {
    password: String,
    tokens: TokenConfig,
}

impl AdminAuthService {
    pub fn new(password: String, tokens: TokenConfig) -> Self {
        Self { password, tokens }
    }

    #[instrument(skip(self, password))]
    pub fn login(&self, password: &str) -> Result<String, AppError> {
        if password != self.password {
            warn!("Admin login rejected");
            return Err(AppError::Unauthorized("Invalid password".to_string()));
        }

        let token = self.tokens.create_token()?;
        info!(
            expiration_hours = self.tokens.expiration_hours,
            "Admin token issued"
        );
        Ok(token)
    }

    pub fn validate(&self, token: &str) -> Result<AdminClaims, AppError> {
        self.tokens.validate_token(token)
    }
}
