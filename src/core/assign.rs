use crate::domain::model::{Match, ScheduledGame, Slot};
use crate::utils::error::{CalendarError, Result};

/// Running state of a greedy assignment pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    pub games: Vec<ScheduledGame>,
    /// Matches placed so far across all slots.
    pub placed: usize,
}

impl Assignment {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            games: Vec::with_capacity(capacity),
            placed: 0,
        }
    }
}

/// Even-distribution target: `ceil(matches / slots)`.
pub fn games_per_slot(match_count: usize, slot_count: usize) -> usize {
    if slot_count == 0 {
        return 0;
    }
    match_count.div_ceil(slot_count)
}

/// Places the next matches (in input order) into `slot`.
///
/// At most `max_per_slot` go in, and filling stops once the run-wide count reaches
/// `(slot.index + 1) * games_per_slot`. The cutoff is checked after each placement,
/// so a slot visited while matches remain always receives at least one.
pub fn fill_slot(
    mut acc: Assignment,
    slot: &Slot,
    matches: &[Match],
    games_per_slot: usize,
    max_per_slot: usize,
) -> Assignment {
    let cutoff = (slot.index + 1) * games_per_slot;
    let mut in_slot = 0;

    while acc.placed < matches.len() && in_slot < max_per_slot {
        acc.games.push(ScheduledGame {
            date: slot.date,
            time: slot.time,
            game: matches[acc.placed].clone(),
        });
        acc.placed += 1;
        in_slot += 1;

        if acc.placed >= cutoff {
            break;
        }
    }

    tracing::trace!(
        "Slot #{} {} {}: {} game(s), {} placed so far",
        slot.index,
        slot.date,
        slot.time.format("%H:%M"),
        in_slot,
        acc.placed
    );
    acc
}

/// Assigns every match to a slot, walking `slots` in order.
pub fn assign_slots(
    matches: &[Match],
    slots: &[Slot],
    max_per_slot: usize,
) -> Result<Vec<ScheduledGame>> {
    if slots.len() < matches.len() {
        return Err(CalendarError::InsufficientSlots {
            slots: slots.len(),
            matches: matches.len(),
        });
    }

    let per_slot = games_per_slot(matches.len(), slots.len());
    tracing::debug!(
        "Distributing {} games over {} slots ({} per slot, cap {})",
        matches.len(),
        slots.len(),
        per_slot,
        max_per_slot
    );

    let mut acc = Assignment::with_capacity(matches.len());
    for slot in slots {
        if acc.placed >= matches.len() {
            break;
        }
        acc = fill_slot(acc, slot, matches, per_slot, max_per_slot);
    }

    if acc.placed < matches.len() {
        return Err(CalendarError::UnplacedMatches {
            placed: acc.placed,
            total: matches.len(),
        });
    }

    Ok(acc.games)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::matches::generate_matches;
    use crate::core::slots::enumerate_slots;
    use crate::domain::model::{SchedulePolicy, Team};
    use chrono::{NaiveDate, NaiveTime};
    use std::collections::HashMap;

    fn teams(n: usize) -> Vec<Team> {
        (0..n)
            .map(|i| Team::new(format!("Team {}", i), format!("City {}", i)))
            .collect()
    }

    fn slot(index: usize) -> Slot {
        Slot {
            date: NaiveDate::from_ymd_opt(2026, 9, 4).unwrap() + chrono::Duration::days(index as i64),
            time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            index,
        }
    }

    fn slots(n: usize) -> Vec<Slot> {
        (0..n).map(slot).collect()
    }

    #[test]
    fn test_games_per_slot_rounds_up() {
        assert_eq!(games_per_slot(6, 9), 1);
        assert_eq!(games_per_slot(9, 9), 1);
        assert_eq!(games_per_slot(10, 4), 3);
        assert_eq!(games_per_slot(3, 0), 0);
    }

    #[test]
    fn test_fill_slot_stops_at_pacing_cutoff() {
        let matches = generate_matches(&teams(3));
        let acc = fill_slot(Assignment::default(), &slot(0), &matches, 2, 5);
        assert_eq!(acc.placed, 2);

        let acc = fill_slot(acc, &slot(1), &matches, 2, 5);
        assert_eq!(acc.placed, 4);
    }

    #[test]
    fn test_fill_slot_respects_capacity() {
        let matches = generate_matches(&teams(3));
        let acc = fill_slot(Assignment::default(), &slot(0), &matches, 3, 2);
        assert_eq!(acc.placed, 2);
        assert!(acc.games.iter().all(|g| g.date == slot(0).date));
    }

    #[test]
    fn test_fill_slot_uses_cumulative_count() {
        let matches = generate_matches(&teams(3));
        // Already past slot 1's cutoff of 2: the slot still takes one match.
        let acc = Assignment {
            games: Vec::new(),
            placed: 3,
        };
        let acc = fill_slot(acc, &slot(1), &matches, 1, 2);
        assert_eq!(acc.placed, 4);
        assert_eq!(acc.games.len(), 1);
        assert_eq!(acc.games[0].game, matches[3]);
    }

    #[test]
    fn test_fill_slot_with_nothing_left() {
        let matches = generate_matches(&teams(2));
        let acc = Assignment {
            games: Vec::new(),
            placed: 2,
        };
        let acc = fill_slot(acc, &slot(5), &matches, 1, 2);
        assert_eq!(acc.placed, 2);
        assert!(acc.games.is_empty());
    }

    #[test]
    fn test_assign_two_teams_one_per_slot() {
        let matches = generate_matches(&teams(2));
        let games = assign_slots(&matches, &slots(3), 2).unwrap();
        assert_eq!(games.len(), 2);
        assert_eq!(games[0].date, slot(0).date);
        assert_eq!(games[1].date, slot(1).date);
    }

    #[test]
    fn test_assign_insufficient_slots() {
        let matches = generate_matches(&teams(3));
        let err = assign_slots(&matches, &slots(5), 2).unwrap_err();
        assert!(matches!(
            err,
            CalendarError::InsufficientSlots {
                slots: 5,
                matches: 6
            }
        ));
    }

    #[test]
    fn test_assign_exact_slot_count_succeeds() {
        let matches = generate_matches(&teams(3));
        let games = assign_slots(&matches, &slots(6), 2).unwrap();
        assert_eq!(games.len(), 6);
    }

    #[test]
    fn test_assign_zero_capacity_is_reported() {
        let matches = generate_matches(&teams(2));
        let err = assign_slots(&matches, &slots(4), 0).unwrap_err();
        assert!(matches!(
            err,
            CalendarError::UnplacedMatches {
                placed: 0,
                total: 2
            }
        ));
    }

    #[test]
    fn test_assignment_is_total_and_within_capacity() {
        let policy = SchedulePolicy::default();
        let matches = generate_matches(&teams(6));
        let all_slots = enumerate_slots(
            NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 12, 1).unwrap(),
            &policy.game_days,
            &policy.game_times,
        );
        let games = assign_slots(&matches, &all_slots, policy.max_simultaneous_games).unwrap();

        assert_eq!(games.len(), matches.len());
        for (game, expected) in games.iter().zip(&matches) {
            assert_eq!(&game.game, expected);
        }

        let mut per_slot: HashMap<(NaiveDate, NaiveTime), usize> = HashMap::new();
        for game in &games {
            *per_slot.entry((game.date, game.time)).or_insert(0) += 1;
        }
        assert!(per_slot
            .values()
            .all(|&count| count <= policy.max_simultaneous_games));
        assert!(games.iter().all(|g| all_slots
            .iter()
            .any(|s| s.date == g.date && s.time == g.time)));
    }
}
