use super::models::{
    percentage, BasicStats, FormAnalysis, HeadToHead, PlayerComparison, PlayerReport,
    PredictedPerformance, Record, Strategy, Streak, StreakKind, StrengthAnalysis,
};
use crate::{
    league::Outcome,
    player::Player,
    results::{models::sort_chronologically, MatchResult},
};

/// Number of most recent matches the form window covers
pub const FORM_WINDOW: usize = 5;

const MAX_STRENGTH: f64 = 100.0;

/// A player's matches, oldest first. Self-matches are left out.
pub fn player_results(player_id: i64, results: &[MatchResult]) -> Vec<MatchResult> {
    let mut own: Vec<MatchResult> = results
        .iter()
        .filter(|r| r.involves(player_id) && r.home_player_id != r.away_player_id)
        .cloned()
        .collect();
    sort_chronologically(&mut own);
    own
}

pub fn basic_stats(player_id: i64, matches: &[MatchResult]) -> BasicStats {
    let mut stats = BasicStats::default();
    let mut home = Record::default();
    let mut away = Record::default();

    for side in matches.iter().filter_map(|r| r.side_of(player_id)) {
        let outcome = Outcome::from_scores(side.scored, side.conceded);
        if side.is_home {
            home.add(outcome);
        } else {
            away.add(outcome);
        }

        stats.goals_for += side.scored;
        stats.goals_against += side.conceded;
        if side.conceded == 0 {
            stats.clean_sheets += 1;
        }
    }

    stats.wins = home.wins + away.wins;
    stats.draws = home.draws + away.draws;
    stats.losses = home.losses + away.losses;
    stats.matches = home.played() + away.played();
    stats.avg_goals_per_match = if stats.matches == 0 {
        0.0
    } else {
        stats.goals_for as f64 / stats.matches as f64
    };
    stats.win_percentage = percentage(stats.wins, stats.matches);
    stats.home_win_rate = percentage(home.wins, home.played());
    stats.away_win_rate = percentage(away.wins, away.played());
    stats.home_record = home;
    stats.away_record = away;

    stats
}

/// Form over the last [`FORM_WINDOW`] matches. `matches` must be oldest first.
pub fn form_analysis(player_id: i64, matches: &[MatchResult]) -> FormAnalysis {
    let recent_form: Vec<Outcome> = matches
        .iter()
        .rev()
        .filter_map(|r| r.side_of(player_id))
        .take(FORM_WINDOW)
        .map(|side| Outcome::from_scores(side.scored, side.conceded))
        .collect();

    if recent_form.is_empty() {
        return FormAnalysis::default();
    }

    let first = recent_form[0];
    let run = recent_form.iter().take_while(|o| **o == first).count();
    let current_streak = Streak {
        kind: StreakKind::from(first),
        length: run as u32,
    };

    let window = recent_form.len() as f64;
    let points: u32 = recent_form.iter().map(|o| o.points()).sum();
    let weight: f64 = recent_form
        .iter()
        .map(|o| match o {
            Outcome::Win => 1.0,
            Outcome::Draw => 0.5,
            Outcome::Loss => 0.0,
        })
        .sum();

    FormAnalysis {
        current_streak,
        points_per_game: points as f64 / window,
        form_rating: (weight / window * 100.0).round() as u32,
        recent_form,
    }
}

/// Placeholder projection: ten percent up, capped at the rating ceiling.
pub fn strength_analysis(current_strength: f64) -> StrengthAnalysis {
    StrengthAnalysis {
        current_strength,
        projected_strength: (current_strength + current_strength / 10.0).min(MAX_STRENGTH),
    }
}

/// Placeholder prediction built from fixed multipliers and thresholds.
pub fn predict_performance(stats: &BasicStats) -> PredictedPerformance {
    let recommended_strategy = if stats.goals_for as f64 > 1.5 * stats.goals_against as f64 {
        Strategy::Attacking
    } else if stats.goals_against > stats.goals_for {
        Strategy::Defensive
    } else {
        Strategy::Balanced
    };

    PredictedPerformance {
        expected_goals: stats.avg_goals_per_match * 1.1,
        predicted_win_rate: stats.win_percentage * 1.05,
        recommended_strategy,
    }
}

/// Full report for one player. An id missing from `players` still gets a
/// report, labelled as unknown with strength 0.
pub fn analyze_player(player_id: i64, players: &[Player], results: &[MatchResult]) -> PlayerReport {
    let player = players.iter().find(|p| p.id == player_id);
    let matches = player_results(player_id, results);
    let basic_stats = basic_stats(player_id, &matches);

    PlayerReport {
        player_id,
        name: player.map_or_else(|| "Unknown Player".to_string(), |p| p.name.clone()),
        team: player.map_or_else(|| "Unknown Team".to_string(), |p| p.team.clone()),
        form_analysis: form_analysis(player_id, &matches),
        strength_analysis: strength_analysis(player.map_or(0.0, |p| p.strength)),
        predicted_performance: predict_performance(&basic_stats),
        basic_stats,
    }
}

pub fn head_to_head(player1: i64, player2: i64, results: &[MatchResult]) -> HeadToHead {
    let mut record = HeadToHead::default();

    for result in results.iter().filter(|r| r.is_between(player1, player2)) {
        let Some(side) = result.side_of(player1) else {
            continue;
        };
        record.matches += 1;
        match Outcome::from_scores(side.scored, side.conceded) {
            Outcome::Win => record.player1_wins += 1,
            Outcome::Loss => record.player2_wins += 1,
            Outcome::Draw => record.draws += 1,
        }
    }

    record
}

pub fn compare_players(
    player1: i64,
    player2: i64,
    players: &[Player],
    results: &[MatchResult],
) -> PlayerComparison {
    PlayerComparison {
        player1: analyze_player(player1, players, results),
        player2: analyze_player(player2, players, results),
        head_to_head: head_to_head(player1, player2, results),
    }
}
