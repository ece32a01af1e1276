use serde::{Deserialize, Serialize};

use super::models::Standing;

/// Response for the league table endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct LeagueTableResponse {
    pub success: bool,
    pub league_table: Vec<Standing>,
}
