use chrono::{Days, NaiveDate};
use std::collections::HashSet;
use tracing::debug;

use super::models::NewFixture;
use crate::{player::Player, shared::AppError};

/// Knobs for fixture generation
#[derive(Debug, Clone)]
pub struct ScheduleOptions {
    pub start_date: NaiveDate,
    pub days_between: u32,
    /// Rotated one per matchday; empty means no venue is recorded
    pub venues: Vec<String>,
}

struct Pairing {
    home: i64,
    away: i64,
    strength_gap: f64,
}

/// Builds a single round-robin: every pair of distinct players meets once.
///
/// Closely matched pairs are scheduled first. Each matchday is filled
/// greedily so nobody plays twice on the same day, and matchday `k` lands on
/// `start_date + k * days_between`.
pub fn generate_schedule(
    players: &[Player],
    options: &ScheduleOptions,
) -> Result<Vec<NewFixture>, AppError> {
    if options.days_between == 0 {
        return Err(AppError::Validation(
            "days_between must be at least 1".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    let roster: Vec<&Player> = players.iter().filter(|p| seen.insert(p.id)).collect();

    if roster.len() < 2 {
        return Err(AppError::Validation(
            "Need at least 2 players to generate fixtures".to_string(),
        ));
    }

    let mut pending = Vec::with_capacity(roster.len() * (roster.len() - 1) / 2);
    for (i, home) in roster.iter().enumerate() {
        for away in &roster[i + 1..] {
            pending.push(Pairing {
                home: home.id,
                away: away.id,
                strength_gap: (home.strength - away.strength).abs(),
            });
        }
    }
    pending.sort_by(|a, b| a.strength_gap.total_cmp(&b.strength_gap));

    let mut fixtures = Vec::with_capacity(pending.len());
    let mut matchday: u32 = 0;

    while !pending.is_empty() {
        let date = matchday_date(options, matchday)?;
        let venue = if options.venues.is_empty() {
            None
        } else {
            Some(options.venues[matchday as usize % options.venues.len()].clone())
        };

        let mut busy = HashSet::new();
        let mut deferred = Vec::new();
        for pairing in pending {
            if busy.contains(&pairing.home) || busy.contains(&pairing.away) {
                deferred.push(pairing);
                continue;
            }
            busy.insert(pairing.home);
            busy.insert(pairing.away);
            fixtures.push(NewFixture {
                home_player_id: pairing.home,
                away_player_id: pairing.away,
                date,
                venue: venue.clone(),
            });
        }

        debug!(matchday, scheduled = busy.len() / 2, "Matchday filled");
        pending = deferred;
        matchday += 1;
    }

    Ok(fixtures)
}

fn matchday_date(options: &ScheduleOptions, matchday: u32) -> Result<NaiveDate, AppError> {
    matchday
        .checked_mul(options.days_between)
        .and_then(|offset| options.start_date.checked_add_days(Days::new(u64::from(offset))))
        .ok_or_else(|| {
            AppError::Validation("Schedule runs past the supported date range".to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_utils::player;
    use std::collections::HashMap;

    fn options(days_between: u32) -> ScheduleOptions {
        ScheduleOptions {
            start_date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            days_between,
            venues: vec![],
        }
    }

    fn roster(n: i64) -> Vec<Player> {
        (1..=n)
            .map(|id| player(id, &format!("p{id}"), "Team", (id * 100) as f64))
            .collect()
    }

    #[test]
    fn test_every_pair_meets_exactly_once() {
        let fixtures = generate_schedule(&roster(5), &options(3)).unwrap();
        assert_eq!(fixtures.len(), 10);

        let pairs: HashSet<(i64, i64)> = fixtures
            .iter()
            .map(|f| {
                (
                    f.home_player_id.min(f.away_player_id),
                    f.home_player_id.max(f.away_player_id),
                )
            })
            .collect();
        assert_eq!(pairs.len(), 10);
    }

    #[test]
    fn test_no_player_plays_twice_on_one_day() {
        let fixtures = generate_schedule(&roster(6), &options(2)).unwrap();

        let mut per_day: HashMap<(NaiveDate, i64), u32> = HashMap::new();
        for f in &fixtures {
            *per_day.entry((f.date, f.home_player_id)).or_default() += 1;
            *per_day.entry((f.date, f.away_player_id)).or_default() += 1;
        }
        assert!(per_day.values().all(|&count| count == 1));
    }

    #[test]
    fn test_closest_strengths_play_first() {
        let players = vec![
            player(1, "a", "x", 1000.0),
            player(2, "b", "x", 3000.0),
            player(3, "c", "x", 1010.0),
        ];
        let fixtures = generate_schedule(&players, &options(7)).unwrap();

        assert_eq!(fixtures[0].home_player_id, 1);
        assert_eq!(fixtures[0].away_player_id, 3);
        assert_eq!(fixtures[0].date, NaiveDate::from_ymd_opt(2025, 5, 1).unwrap());
        assert_eq!(fixtures[1].date, NaiveDate::from_ymd_opt(2025, 5, 8).unwrap());
    }

    #[test]
    fn test_venues_rotate_per_matchday() {
        let mut opts = options(1);
        opts.venues = vec!["Main".to_string(), "Annex".to_string()];

        let fixtures = generate_schedule(&roster(3), &opts).unwrap();
        let venues: Vec<Option<&str>> = fixtures.iter().map(|f| f.venue.as_deref()).collect();
        assert_eq!(venues, vec![Some("Main"), Some("Annex"), Some("Main")]);
    }

    #[test]
    fn test_needs_two_distinct_players() {
        let lonely = vec![player(1, "a", "x", 1.0), player(1, "a-dup", "x", 1.0)];
        let result = generate_schedule(&lonely, &options(1));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_spacing_past_calendar_range_rejected() {
        let result = generate_schedule(&roster(3), &options(100_000_000));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_start_at_calendar_end_rejected() {
        let mut opts = options(1);
        opts.start_date = NaiveDate::MAX;
        let result = generate_schedule(&roster(3), &opts);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_zero_spacing_rejected() {
        let result = generate_schedule(&roster(2), &options(0));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
