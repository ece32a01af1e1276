use tracing::warn;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ADMIN_TOKEN_HOURS: i64 = 12;
const DEV_ADMIN_PASSWORD: &str = "admin-change-in-production";
const DEV_JWT_SECRET: &str = "your-secret-key-change-in-production";

/// Runtime configuration read from the process environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: Option<String>,
    pub admin_password: String,
    pub jwt_secret: String,
    pub admin_token_hours: i64,
    pub environment: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests can avoid touching process env
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let admin_token_hours = lookup("ADMIN_TOKEN_HOURS")
            .and_then(|s| s.parse().ok())
            .filter(|hours: &i64| *hours > 0)
            .unwrap_or(DEFAULT_ADMIN_TOKEN_HOURS);

        let admin_password = lookup("ADMIN_PASSWORD")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| {
                warn!("ADMIN_PASSWORD not set, using development default");
                DEV_ADMIN_PASSWORD.to_string()
            });

        let jwt_secret = lookup("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEV_JWT_SECRET.to_string());

        Self {
            port,
            database_url: lookup("DATABASE_URL").filter(|s| !s.is_empty()),
            admin_password,
            jwt_secret,
            admin_token_hours,
            environment: lookup("APP_ENV").unwrap_or_else(|| "development".to_string()),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_env_empty() {
        let config = config_from(&[]);

        assert_eq!(config.port, 3000);
        assert!(config.database_url.is_none());
        assert_eq!(config.admin_password, DEV_ADMIN_PASSWORD);
        assert_eq!(config.admin_token_hours, 12);
        assert_eq!(config.environment, "development");
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_reads_values_from_env() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("DATABASE_URL", "postgres://localhost/league"),
            ("ADMIN_PASSWORD", "s3cret"),
            ("JWT_SECRET", "jwt"),
            ("ADMIN_TOKEN_HOURS", "2"),
            ("APP_ENV", "production"),
        ]);

        assert_eq!(config.port, 8080);
        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/league")
        );
        assert_eq!(config.admin_password, "s3cret");
        assert_eq!(config.jwt_secret, "jwt");
        assert_eq!(config.admin_token_hours, 2);
        assert_eq!(config.environment, "production");
    }

    #[test]
    fn test_invalid_numbers_fall_back_to_defaults() {
        let config = config_from(&[("PORT", "not-a-port"), ("ADMIN_TOKEN_HOURS", "-4")]);

        assert_eq!(config.port, 3000);
        assert_eq!(config.admin_token_hours, 12);
    }

    #[test]
    fn test_empty_database_url_means_in_memory() {
        let config = config_from(&[("DATABASE_URL", "")]);
        assert!(config.database_url.is_none());
    }
}
