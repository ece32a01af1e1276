use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum_macros::Display;

use crate::player::Player;

pub const POINTS_FOR_WIN: u32 = 3;
pub const POINTS_FOR_DRAW: u32 = 1;

/// A match reduced to what it meant for one side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Outcome {
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

impl Outcome {
    pub fn from_scores(scored: i32, conceded: i32) -> Self {
        match scored.cmp(&conceded) {
            Ordering::Greater => Outcome::Win,
            Ordering::Equal => Outcome::Draw,
            Ordering::Less => Outcome::Loss,
        }
    }

    pub fn points(self) -> u32 {
        match self {
            Outcome::Win => POINTS_FOR_WIN,
            Outcome::Draw => POINTS_FOR_DRAW,
            Outcome::Loss => 0,
        }
    }
}

/// One league table row. Derived on every request, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player_id: i64,
    pub player: String,
    pub team: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub points: u32,
}

impl Standing {
    pub fn for_player(player: &Player) -> Self {
        Self {
            player_id: player.id,
            player: player.name.clone(),
            team: player.team.clone(),
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
        }
    }

    /// Folds one match into the row from this player's side
    pub fn record(&mut self, scored: i32, conceded: i32) {
        self.played += 1;
        self.goals_for += scored;
        self.goals_against += conceded;
        self.goal_difference = self.goals_for - self.goals_against;

        let outcome = Outcome::from_scores(scored, conceded);
        match outcome {
            Outcome::Win => self.won += 1,
            Outcome::Draw => self.drawn += 1,
            Outcome::Loss => self.lost += 1,
        }
        self.points += outcome.points();
    }
}
