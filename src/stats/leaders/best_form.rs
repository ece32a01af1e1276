use super::super::{
    analysis::{form_analysis, player_results},
    LeaderBoard,
};
use crate::{player::Player, results::MatchResult};

/// Form rating over the recent window
pub struct BestFormBoard;

impl LeaderBoard for BestFormBoard {
    fn name(&self) -> &'static str {
        "best_form"
    }

    fn score(&self, player: &Player, results: &[MatchResult]) -> f64 {
        let matches = player_results(player.id, results);
        form_analysis(player.id, &matches).form_rating as f64
    }
}
