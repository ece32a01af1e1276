use super::super::{analysis::player_results, LeaderBoard};
use crate::{league::Outcome, player::Player, results::MatchResult};

pub struct MostWinsBoard;

impl LeaderBoard for MostWinsBoard {
    fn name(&self) -> &'static str {
        "most_wins"
    }

    fn score(&self, player: &Player, results: &[MatchResult]) -> f64 {
        player_results(player.id, results)
            .iter()
            .filter_map(|r| r.side_of(player.id))
            .filter(|side| Outcome::from_scores(side.scored, side.conceded) == Outcome::Win)
            .count() as f64
    }
}
