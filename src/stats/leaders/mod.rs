mod best_defense;
mod best_form;
mod most_wins;
mod top_scorers;

pub use best_defense::BestDefenseBoard;
pub use best_form::BestFormBoard;
pub use most_wins::MostWinsBoard;
pub use top_scorers::TopScorersBoard;

use tracing::debug;

use super::{models::LeaderEntry, BoardOrder, LeaderBoard, Leaders};
use crate::{player::Player, results::MatchResult};

/// Entries kept on each board
pub const BOARD_SIZE: usize = 3;

/// Scores every player on `board` and keeps the top [`BOARD_SIZE`].
/// Ties keep roster order.
pub fn rank(
    board: &dyn LeaderBoard,
    players: &[Player],
    results: &[MatchResult],
) -> Vec<LeaderEntry> {
    let mut entries: Vec<LeaderEntry> = players
        .iter()
        .map(|player| LeaderEntry {
            player_id: player.id,
            name: player.name.clone(),
            team: player.team.clone(),
            value: board.score(player, results),
        })
        .collect();

    match board.order() {
        BoardOrder::Descending => entries.sort_by(|a, b| b.value.total_cmp(&a.value)),
        BoardOrder::Ascending => entries.sort_by(|a, b| a.value.total_cmp(&b.value)),
    }
    entries.truncate(BOARD_SIZE);

    debug!(board = board.name(), entries = entries.len(), "Leader board ranked");
    entries
}

pub fn leaders(players: &[Player], results: &[MatchResult]) -> Leaders {
    Leaders {
        top_scorers: rank(&TopScorersBoard, players, results),
        best_defense: rank(&BestDefenseBoard, players, results),
        most_wins: rank(&MostWinsBoard, players, results),
        best_form: rank(&BestFormBoard, players, results),
    }
}
