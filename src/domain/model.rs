use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::Serialize;
use std::fmt;

pub const MAX_SIMULTANEOUS_GAMES: usize = 2;
pub const MIN_TEAMS: usize = 2;
pub const MIN_WINDOW_DAYS: i64 = 7;
pub const GAME_DAYS: [Weekday; 3] = [Weekday::Fri, Weekday::Sat, Weekday::Sun];
pub const GAME_TIMES: [(u32, u32); 3] = [(12, 0), (15, 0), (18, 0)];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    pub name: String,
    pub city: String,
}

impl Team {
    pub fn new(name: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.city)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub home: Team,
    pub away: Team,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// 0-based position in the full enumeration of the window.
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduledGame {
    pub date: NaiveDate,
    #[serde(serialize_with = "serialize_hhmm")]
    pub time: NaiveTime,
    pub game: Match,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Weekly pattern and capacity the slot enumeration and assignment run against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulePolicy {
    pub game_days: Vec<Weekday>,
    pub game_times: Vec<NaiveTime>,
    pub max_simultaneous_games: usize,
    pub min_window_days: i64,
}

impl Default for SchedulePolicy {
    fn default() -> Self {
        Self {
            game_days: GAME_DAYS.to_vec(),
            game_times: GAME_TIMES
                .iter()
                .filter_map(|&(h, m)| NaiveTime::from_hms_opt(h, m, 0))
                .collect(),
            max_simultaneous_games: MAX_SIMULTANEOUS_GAMES,
            min_window_days: MIN_WINDOW_DAYS,
        }
    }
}

/// Output of the scheduling stage, consumed by the report renderers.
#[derive(Debug, Clone)]
pub struct Calendar {
    pub window: DateWindow,
    pub team_count: usize,
    pub slot_count: usize,
    pub games: Vec<ScheduledGame>,
}

impl Calendar {
    /// Games ordered by (date, time); assignment order within a slot is kept.
    pub fn sorted_games(&self) -> Vec<&ScheduledGame> {
        let mut games: Vec<&ScheduledGame> = self.games.iter().collect();
        games.sort_by_key(|g| (g.date, g.time));
        games
    }
}

fn serialize_hhmm<S: serde::Serializer>(time: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&time.format("%H:%M").to_string())
}
