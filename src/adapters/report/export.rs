use crate::domain::model::{Calendar, ScheduledGame};
use crate::utils::error::{CalendarError, Result};
use crate::utils::validation::format_date;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct CalendarDocument<'a> {
    start: String,
    end: String,
    teams: usize,
    total_games: usize,
    games: Vec<&'a ScheduledGame>,
}

pub fn render_json(calendar: &Calendar) -> Result<String> {
    let document = CalendarDocument {
        start: format_date(calendar.window.start),
        end: format_date(calendar.window.end),
        teams: calendar.team_count,
        total_games: calendar.games.len(),
        games: calendar.sorted_games(),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

pub fn render_csv(calendar: &Calendar) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["date", "time", "home", "home_city", "away", "away_city"])?;

    for scheduled in calendar.sorted_games() {
        writer.write_record([
            format_date(scheduled.date),
            scheduled.time.format("%H:%M").to_string(),
            scheduled.game.home.name.clone(),
            scheduled.game.home.city.clone(),
            scheduled.game.away.name.clone(),
            scheduled.game.away.city.clone(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CalendarError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| {
        CalendarError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}
