// Library crate for the eFootball league server
// This file exposes the public API for the binary and integration tests

pub mod auth;
pub mod config;
pub mod fixture;
pub mod league;
pub mod player;
pub mod results;
pub mod routes;
pub mod shared;
pub mod stats;

// Re-export commonly used types for easier access in tests
pub use config::AppConfig;
pub use league::{compute_table, Outcome, Standing};
pub use player::{default_roster, Player};
pub use results::MatchResult;
pub use routes::build_router;
pub use shared::{AppError, AppState};
pub use stats::{analyze_player, compare_players, StatsError};
