use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::models::Fixture;

/// Response for fixture listing and generation
#[derive(Debug, Serialize, Deserialize)]
pub struct FixturesResponse {
    pub success: bool,
    pub fixtures: Vec<Fixture>,
}

/// Response for single fixture creation
#[derive(Debug, Serialize, Deserialize)]
pub struct FixtureResponse {
    pub success: bool,
    pub fixture: Fixture,
}

/// Request payload for regenerating the whole schedule
#[derive(Debug, Default, Deserialize)]
pub struct GenerateFixturesRequest {
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub days_between: Option<u32>,
    #[serde(default)]
    pub venues: Vec<String>,
}
