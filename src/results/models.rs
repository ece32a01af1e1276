use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Database model for the results table.
/// Scores are stored as integers and validated non-negative on the way in.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct MatchResult {
    pub match_id: i64,
    pub home_player_id: i64,
    pub away_player_id: i64,
    pub home_score: i32,
    pub away_score: i32,
    pub date: NaiveDate,
}

/// A single result seen from one player's side of the pitch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerSide {
    pub is_home: bool,
    pub scored: i32,
    pub conceded: i32,
}

impl MatchResult {
    pub fn involves(&self, player_id: i64) -> bool {
        self.home_player_id == player_id || self.away_player_id == player_id
    }

    /// Home perspective wins when a player is recorded on both sides
    pub fn side_of(&self, player_id: i64) -> Option<PlayerSide> {
        if self.home_player_id == player_id {
            Some(PlayerSide {
                is_home: true,
                scored: self.home_score,
                conceded: self.away_score,
            })
        } else if self.away_player_id == player_id {
            Some(PlayerSide {
                is_home: false,
                scored: self.away_score,
                conceded: self.home_score,
            })
        } else {
            None
        }
    }

    pub fn is_between(&self, a: i64, b: i64) -> bool {
        (self.home_player_id == a && self.away_player_id == b)
            || (self.home_player_id == b && self.away_player_id == a)
    }
}

/// Request payload for recording or correcting a result
#[derive(Debug, Clone, Deserialize)]
pub struct NewMatchResult {
    pub home_player_id: i64,
    pub away_player_id: i64,
    pub home_score: i32,
    pub away_score: i32,
    #[serde(default = "today")]
    pub date: NaiveDate,
}

impl NewMatchResult {
    pub fn into_result(self, match_id: i64) -> MatchResult {
        MatchResult {
            match_id,
            home_player_id: self.home_player_id,
            away_player_id: self.away_player_id,
            home_score: self.home_score,
            away_score: self.away_score,
            date: self.date,
        }
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Orders results chronologically by date then id; ties keep their input order
pub fn sort_chronologically(results: &mut [MatchResult]) {
    results.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.match_id.cmp(&b.match_id)));
}
