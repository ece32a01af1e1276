use serde::{Deserialize, Serialize};

use super::models::MatchResult;

/// Response for listing the result log
#[derive(Debug, Serialize, Deserialize)]
pub struct ResultsResponse {
    pub success: bool,
    pub results: Vec<MatchResult>,
}

/// Response for recording or correcting a single result
#[derive(Debug, Serialize, Deserialize)]
pub struct ResultResponse {
    pub success: bool,
    pub result: MatchResult,
}
