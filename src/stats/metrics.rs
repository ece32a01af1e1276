use super::models::{percentage, LeagueMetrics};
use crate::results::MatchResult;

/// League-wide aggregates over every recorded result
pub fn league_metrics(results: &[MatchResult]) -> LeagueMetrics {
    if results.is_empty() {
        return LeagueMetrics::default();
    }

    let total_matches = results.len() as u32;
    let total_goals: i32 = results.iter().map(|r| r.home_score + r.away_score).sum();
    let draws = results.iter().filter(|r| r.home_score == r.away_score).count() as u32;
    let home_wins = results.iter().filter(|r| r.home_score > r.away_score).count() as u32;

    LeagueMetrics {
        total_matches,
        total_goals,
        avg_goals_per_match: total_goals as f64 / total_matches as f64,
        draw_percentage: percentage(draws, total_matches),
        home_advantage: percentage(home_wins, total_matches),
    }
}
