use std::collections::HashMap;

use super::models::{percentage, TeamOverview};
use crate::{league::Outcome, player::Player, results::MatchResult};

/// One row per club, in the order clubs first appear in the roster.
///
/// A result belongs to a club when either player plays for it. When both do,
/// it counts once, from the home side.
pub fn team_overview(players: &[Player], results: &[MatchResult]) -> Vec<TeamOverview> {
    let mut team_by_player: HashMap<i64, &str> = HashMap::with_capacity(players.len());
    let mut teams: Vec<&str> = Vec::new();
    for player in players {
        team_by_player.entry(player.id).or_insert(&player.team);
        if !player.team.is_empty() && !teams.contains(&player.team.as_str()) {
            teams.push(&player.team);
        }
    }

    teams
        .into_iter()
        .map(|team| {
            let mut row = TeamOverview {
                team: team.to_string(),
                ..TeamOverview::default()
            };

            for result in results {
                let home_team = team_by_player.get(&result.home_player_id).copied();
                let away_team = team_by_player.get(&result.away_player_id).copied();

                let (is_home, scored, conceded) = if home_team == Some(team) {
                    (true, result.home_score, result.away_score)
                } else if away_team == Some(team) {
                    (false, result.away_score, result.home_score)
                } else {
                    continue;
                };

                row.total_matches += 1;
                row.goals_for += scored;
                row.goals_against += conceded;

                let outcome = Outcome::from_scores(scored, conceded);
                match outcome {
                    Outcome::Win => row.wins += 1,
                    Outcome::Draw => row.draws += 1,
                    Outcome::Loss => row.losses += 1,
                }
                if is_home {
                    row.home_played += 1;
                    row.home_wins += u32::from(outcome == Outcome::Win);
                } else {
                    row.away_played += 1;
                    row.away_wins += u32::from(outcome == Outcome::Win);
                }
            }

            row.win_percentage = percentage(row.wins, row.total_matches);
            row.home_win_rate = percentage(row.home_wins, row.home_played);
            row.away_win_rate = percentage(row.away_wins, row.away_played);
            row
        })
        .collect()
}
