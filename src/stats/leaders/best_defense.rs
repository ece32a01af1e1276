use super::super::{analysis::player_results, BoardOrder, LeaderBoard};
use crate::{player::Player, results::MatchResult};

/// Goals conceded; fewest first
pub struct BestDefenseBoard;

impl LeaderBoard for BestDefenseBoard {
    fn name(&self) -> &'static str {
        "best_defense"
    }

    fn score(&self, player: &Player, results: &[MatchResult]) -> f64 {
        player_results(player.id, results)
            .iter()
            .filter_map(|r| r.side_of(player.id))
            .map(|side| side.conceded as f64)
            .sum()
    }

    fn order(&self) -> BoardOrder {
        BoardOrder::Ascending
    }
}
