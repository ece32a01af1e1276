// Public API - what other modules can use
pub use analysis::{analyze_player, compare_players, head_to_head};
pub use errors::StatsError;
pub use handlers::{
    compare_players_stats, get_leaders, get_league_metrics, get_player_stats, get_team_stats,
};
pub use leaders::leaders;
pub use metrics::league_metrics;
pub use models::*;
pub use service::StatsService;
pub use team::team_overview;

// Internal modules
mod analysis;
mod errors;
mod handlers;
pub mod leaders;
mod metrics;
pub mod models;
pub mod service;
mod team;
pub mod types;

use crate::{player::Player, results::MatchResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardOrder {
    Descending,
    Ascending,
}

/// A single ranking on the leaders page
pub trait LeaderBoard: Send + Sync {
    fn name(&self) -> &'static str;

    fn score(&self, player: &Player, results: &[MatchResult]) -> f64;

    fn order(&self) -> BoardOrder {
        BoardOrder::Descending
    }
}
