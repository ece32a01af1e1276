use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Database model for the fixtures table
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Fixture {
    pub id: i64,
    pub home_player_id: i64,
    pub away_player_id: i64,
    pub date: NaiveDate,
    pub venue: Option<String>,
    pub played: bool,
}

/// A scheduled pairing before the store assigns it an id
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewFixture {
    pub home_player_id: i64,
    pub away_player_id: i64,
    pub date: NaiveDate,
    #[serde(default)]
    pub venue: Option<String>,
}

impl NewFixture {
    pub fn into_fixture(self, id: i64) -> Fixture {
        Fixture {
            id,
            home_player_id: self.home_player_id,
            away_player_id: self.away_player_id,
            date: self.date,
            venue: self.venue,
            played: false,
        }
    }
}

/// Partial edit of a scheduled fixture; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixtureUpdate {
    pub home_player_id: Option<i64>,
    pub away_player_id: Option<i64>,
    pub date: Option<NaiveDate>,
    pub venue: Option<String>,
    pub played: Option<bool>,
}

impl FixtureUpdate {
    pub fn apply_to(self, fixture: &mut Fixture) {
        if let Some(home) = self.home_player_id {
            fixture.home_player_id = home;
        }
        if let Some(away) = self.away_player_id {
            fixture.away_player_id = away;
        }
        if let Some(date) = self.date {
            fixture.date = date;
        }
        if self.venue.is_some() {
            fixture.venue = self.venue;
        }
        if let Some(played) = self.played {
            fixture.played = played;
        }
    }
}
