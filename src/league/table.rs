use std::collections::HashMap;
use tracing::debug;

use super::models::Standing;
use crate::{player::Player, results::MatchResult};

/// Computes the full league table from player and result snapshots.
///
/// Every player gets a row, in input order, before any result is applied. A
/// result counts only when both sides resolve to a known, distinct player;
/// otherwise it is dropped whole so neither side is updated asymmetrically.
/// Rows are ordered by points then goal difference, and the sort is stable
/// so equal rows keep their input order.
pub fn compute_table(players: &[Player], results: &[MatchResult]) -> Vec<Standing> {
    let mut table: Vec<Standing> = players.iter().map(Standing::for_player).collect();

    let mut index_by_id: HashMap<i64, usize> = HashMap::with_capacity(players.len());
    for (index, player) in players.iter().enumerate() {
        index_by_id.entry(player.id).or_insert(index);
    }

    for result in results {
        let home = index_by_id.get(&result.home_player_id).copied();
        let away = index_by_id.get(&result.away_player_id).copied();

        let (Some(home), Some(away)) = (home, away) else {
            debug!(
                match_id = result.match_id,
                home_player_id = result.home_player_id,
                away_player_id = result.away_player_id,
                "Skipping result with unknown player"
            );
            continue;
        };
        if home == away {
            debug!(match_id = result.match_id, "Skipping result with same player on both sides");
            continue;
        }

        table[home].record(result.home_score, result.away_score);
        table[away].record(result.away_score, result.home_score);
    }

    table.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| b.goal_difference.cmp(&a.goal_difference))
    });

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_utils::{player, result};

    fn two_players() -> Vec<Player> {
        vec![player(1, "A", "Kenya", 0.0), player(2, "B", "Chelsea", 0.0)]
    }

    #[test]
    fn test_win_and_draw_example() {
        let results = vec![result(1, 1, 2, 2, 1, 1), result(2, 2, 1, 0, 0, 2)];

        let table = compute_table(&two_players(), &results);

        assert_eq!(table[0].player, "A");
        assert_eq!(
            (table[0].played, table[0].won, table[0].drawn, table[0].lost),
            (2, 1, 1, 0)
        );
        assert_eq!(table[0].points, 4);
        assert_eq!(table[0].goal_difference, 1);

        assert_eq!(table[1].player, "B");
        assert_eq!(
            (table[1].played, table[1].won, table[1].drawn, table[1].lost),
            (2, 0, 1, 1)
        );
        assert_eq!(table[1].points, 1);
        assert_eq!(table[1].goal_difference, -1);
    }

    #[test]
    fn test_no_results_keeps_input_order() {
        let players = vec![
            player(3, "C", "x", 0.0),
            player(1, "A", "x", 0.0),
            player(2, "B", "x", 0.0),
        ];
        let table = compute_table(&players, &[]);

        let names: Vec<&str> = table.iter().map(|s| s.player.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
        assert!(table.iter().all(|s| s.played == 0 && s.points == 0));
    }

    #[test]
    fn test_result_with_unknown_player_is_skipped_entirely() {
        let results = vec![result(1, 1, 99, 5, 0, 1), result(2, 98, 2, 0, 3, 2)];

        let table = compute_table(&two_players(), &results);

        assert!(table.iter().all(|s| s.played == 0 && s.goals_for == 0));
    }

    #[test]
    fn test_self_match_is_skipped() {
        let results = vec![result(1, 1, 1, 4, 0, 1)];
        let table = compute_table(&two_players(), &results);
        assert!(table.iter().all(|s| s.played == 0));
    }

    #[test]
    fn test_goal_difference_breaks_points_tie() {
        let players = vec![
            player(1, "A", "x", 0.0),
            player(2, "B", "x", 0.0),
            player(3, "C", "x", 0.0),
        ];
        // A and C both win once; C by the bigger margin.
        let results = vec![result(1, 1, 2, 1, 0, 1), result(2, 3, 2, 4, 0, 2)];

        let table = compute_table(&players, &results);

        let order: Vec<i64> = table.iter().map(|s| s.player_id).collect();
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[test]
    fn test_full_ties_keep_input_order() {
        let players = vec![
            player(1, "A", "x", 0.0),
            player(2, "B", "x", 0.0),
            player(3, "C", "x", 0.0),
            player(4, "D", "x", 0.0),
        ];
        // Two identical 1-1 draws: every row ends on 1 point, 0 goal difference.
        let results = vec![result(1, 3, 4, 1, 1, 1), result(2, 1, 2, 1, 1, 2)];

        let table = compute_table(&players, &results);

        let order: Vec<i64> = table.iter().map(|s| s.player_id).collect();
        assert_eq!(order, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_points_total_matches_outcomes() {
        let players = vec![
            player(1, "A", "x", 0.0),
            player(2, "B", "x", 0.0),
            player(3, "C", "x", 0.0),
        ];
        let results = vec![
            result(1, 1, 2, 3, 1, 1),
            result(2, 2, 3, 2, 2, 2),
            result(3, 3, 1, 0, 1, 3),
            result(4, 1, 3, 0, 0, 4),
        ];

        let table = compute_table(&players, &results);

        let decisive = 2;
        let drawn = 2;
        let total: u32 = table.iter().map(|s| s.points).sum();
        assert_eq!(total, 3 * decisive + 2 * drawn);
        for standing in &table {
            assert_eq!(
                standing.goal_difference,
                standing.goals_for - standing.goals_against
            );
            assert_eq!(standing.played, standing.won + standing.drawn + standing.lost);
        }
    }

    #[test]
    fn test_duplicate_player_id_counts_first_occurrence_only() {
        let players = vec![
            player(1, "A", "x", 0.0),
            player(2, "B", "x", 0.0),
            player(1, "A-again", "x", 0.0),
        ];
        let results = vec![result(1, 1, 2, 1, 0, 1)];

        let table = compute_table(&players, &results);

        assert_eq!(table.len(), 3);
        let duplicate = table.iter().find(|s| s.player == "A-again").unwrap();
        assert_eq!(duplicate.played, 0);
        assert_eq!(table[0].player, "A");
    }

    #[test]
    fn test_is_idempotent() {
        let results = vec![result(1, 1, 2, 2, 1, 1), result(2, 2, 1, 3, 3, 2)];
        let players = two_players();

        assert_eq!(
            compute_table(&players, &results),
            compute_table(&players, &results)
        );
    }
}
