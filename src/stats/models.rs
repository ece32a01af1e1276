use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::league::Outcome;

/// Win/draw/loss tally for one slice of a player's matches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

impl Record {
    pub fn add(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Loss => self.losses += 1,
        }
    }

    pub fn played(&self) -> u32 {
        self.wins + self.draws + self.losses
    }
}

/// Percentage of `part` in `whole`, 0 for an empty whole
pub fn percentage(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        100.0 * part as f64 / whole as f64
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicStats {
    pub matches: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub home_record: Record,
    pub away_record: Record,
    pub clean_sheets: u32,
    pub avg_goals_per_match: f64,
    pub win_percentage: f64,
    pub home_win_rate: f64,
    pub away_win_rate: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum StreakKind {
    #[default]
    #[serde(rename = "none")]
    #[strum(serialize = "none")]
    None,
    #[serde(rename = "W")]
    #[strum(serialize = "W")]
    Win,
    #[serde(rename = "D")]
    #[strum(serialize = "D")]
    Draw,
    #[serde(rename = "L")]
    #[strum(serialize = "L")]
    Loss,
}

impl From<Outcome> for StreakKind {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win => StreakKind::Win,
            Outcome::Draw => StreakKind::Draw,
            Outcome::Loss => StreakKind::Loss,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    #[serde(rename = "type")]
    pub kind: StreakKind,
    pub length: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormAnalysis {
    /// Most recent first
    pub recent_form: Vec<Outcome>,
    pub current_streak: Streak,
    pub points_per_game: f64,
    /// 0 to 100
    pub form_rating: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StrengthAnalysis {
    pub current_strength: f64,
    pub projected_strength: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Strategy {
    Attacking,
    Defensive,
    Balanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictedPerformance {
    pub expected_goals: f64,
    pub predicted_win_rate: f64,
    pub recommended_strategy: Strategy,
}

/// Everything the stats page shows for one player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerReport {
    pub player_id: i64,
    pub name: String,
    pub team: String,
    pub basic_stats: BasicStats,
    pub form_analysis: FormAnalysis,
    pub strength_analysis: StrengthAnalysis,
    pub predicted_performance: PredictedPerformance,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadToHead {
    pub matches: u32,
    pub player1_wins: u32,
    pub player2_wins: u32,
    pub draws: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerComparison {
    pub player1: PlayerReport,
    pub player2: PlayerReport,
    pub head_to_head: HeadToHead,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamOverview {
    pub team: String,
    pub total_matches: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub home_played: u32,
    pub home_wins: u32,
    pub away_played: u32,
    pub away_wins: u32,
    pub win_percentage: f64,
    pub home_win_rate: f64,
    pub away_win_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderEntry {
    pub player_id: i64,
    pub name: String,
    pub team: String,
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Leaders {
    pub top_scorers: Vec<LeaderEntry>,
    pub best_defense: Vec<LeaderEntry>,
    pub most_wins: Vec<LeaderEntry>,
    pub best_form: Vec<LeaderEntry>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LeagueMetrics {
    pub total_matches: u32,
    pub total_goals: i32,
    pub avg_goals_per_match: f64,
    pub draw_percentage: f64,
    pub home_advantage: f64,
}
