use serde::{Deserialize, Serialize};

use super::models::Player;

/// Response for listing the player directory
#[derive(Debug, Serialize, Deserialize)]
pub struct PlayersResponse {
    pub success: bool,
    pub players: Vec<Player>,
}

/// Response for single-player create/update endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct PlayerResponse {
    pub success: bool,
    pub player: Player,
}
