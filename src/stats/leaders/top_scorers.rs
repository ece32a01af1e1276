use super::super::{analysis::player_results, LeaderBoard};
use crate::{player::Player, results::MatchResult};

/// Goals scored across every result
pub struct TopScorersBoard;

impl LeaderBoard for TopScorersBoard {
    fn name(&self) -> &'static str {
        "top_scorers"
    }

    fn score(&self, player: &Player, results: &[MatchResult]) -> f64 {
        player_results(player.id, results)
            .iter()
            .filter_map(|r| r.side_of(player.id))
            .map(|side| side.scored as f64)
            .sum()
    }
}
