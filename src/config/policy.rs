use crate::adapters::report::{Locale, ReportFormat, DEFAULT_WIDTH, MIN_WIDTH};
use crate::core::Storage;
use crate::domain::model::SchedulePolicy;
use crate::utils::error::{CalendarError, Result};
use crate::utils::validation::{validate_non_empty, validate_positive_number, Validate};
use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// Optional TOML overrides for the weekly pattern and report layout.
///
/// ```toml
/// [schedule]
/// game_days = ["fri", "sat", "sun"]
/// game_times = ["12:00", "15:00", "18:00"]
/// max_simultaneous_games = 2
/// min_window_days = 7
///
/// [report]
/// width = 80
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyConfig {
    pub schedule: Option<ScheduleSection>,
    pub report: Option<ReportSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleSection {
    pub game_days: Option<Vec<String>>,
    pub game_times: Option<Vec<String>>,
    pub max_simultaneous_games: Option<usize>,
    pub min_window_days: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportSection {
    pub width: Option<usize>,
    pub format: Option<ReportFormat>,
    pub locale: Option<Locale>,
}

impl PolicyConfig {
    /// Reads the policy through `storage`, so relative paths share the roster's base.
    pub fn load<S: Storage>(storage: &S, path: &str) -> Result<Self> {
        let content = storage.read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            CalendarError::ConfigParse { message, .. } => CalendarError::ConfigParse {
                path: path.to_string(),
                message,
            },
            other => other,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CalendarError::ConfigParse {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    /// Builds the schedule policy, falling back to the built-in weekly pattern.
    pub fn to_policy(&self) -> Result<SchedulePolicy> {
        let defaults = SchedulePolicy::default();
        let Some(section) = &self.schedule else {
            return Ok(defaults);
        };

        let game_days = match &section.game_days {
            Some(days) => days
                .iter()
                .map(|d| parse_weekday(d))
                .collect::<Result<Vec<_>>>()?,
            None => defaults.game_days,
        };
        let game_times = match &section.game_times {
            Some(times) => times
                .iter()
                .map(|t| parse_time(t))
                .collect::<Result<Vec<_>>>()?,
            None => defaults.game_times,
        };

        let policy = SchedulePolicy {
            game_days,
            game_times,
            max_simultaneous_games: section
                .max_simultaneous_games
                .unwrap_or(defaults.max_simultaneous_games),
            min_window_days: section.min_window_days.unwrap_or(defaults.min_window_days),
        };
        policy.validate()?;
        Ok(policy)
    }

    pub fn report_width(&self) -> Result<usize> {
        let width = self
            .report
            .as_ref()
            .and_then(|r| r.width)
            .unwrap_or(DEFAULT_WIDTH);
        validate_positive_number("report.width", width, MIN_WIDTH)?;
        Ok(width)
    }

    pub fn report_format(&self) -> Option<ReportFormat> {
        self.report.as_ref().and_then(|r| r.format)
    }

    pub fn report_locale(&self) -> Option<Locale> {
        self.report.as_ref().and_then(|r| r.locale)
    }
}

fn parse_weekday(value: &str) -> Result<Weekday> {
    value
        .trim()
        .parse::<Weekday>()
        .map_err(|_| CalendarError::InvalidConfigValue {
            field: "schedule.game_days".to_string(),
            value: value.to_string(),
            reason: "Expected a weekday such as 'fri' or 'Saturday'".to_string(),
        })
}

fn parse_time(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|_| {
        CalendarError::InvalidConfigValue {
            field: "schedule.game_times".to_string(),
            value: value.to_string(),
            reason: "Expected HH:MM".to_string(),
        }
    })
}

impl Validate for SchedulePolicy {
    fn validate(&self) -> Result<()> {
        validate_non_empty("schedule.game_days", &self.game_days)?;
        validate_non_empty("schedule.game_times", &self.game_times)?;

        if let Some(pair) = self.game_times.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(CalendarError::InvalidConfigValue {
                field: "schedule.game_times".to_string(),
                value: pair[1].format("%H:%M").to_string(),
                reason: "Times must be strictly ascending".to_string(),
            });
        }

        validate_positive_number(
            "schedule.max_simultaneous_games",
            self.max_simultaneous_games,
            1,
        )?;

        if self.min_window_days < 1 {
            return Err(CalendarError::InvalidConfigValue {
                field: "schedule.min_window_days".to_string(),
                value: self.min_window_days.to_string(),
                reason: "Value must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}
