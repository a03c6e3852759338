use crate::utils::error::{CalendarError, Result};
use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%d.%m.%Y";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parses a `DD.MM.YYYY` date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        CalendarError::InvalidDateFormat {
            value: value.to_string(),
        }
    })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Start must be strictly before end and the window must span at least `min_days`.
pub fn validate_date_window(start: NaiveDate, end: NaiveDate, min_days: i64) -> Result<()> {
    if start >= end {
        return Err(CalendarError::InvalidDateRange {
            start: format_date(start),
            end: format_date(end),
            reason: "start date must be before end date".to_string(),
        });
    }

    let days = (end - start).num_days();
    if days < min_days {
        return Err(CalendarError::InvalidDateRange {
            start: format_date(start),
            end: format_date(end),
            reason: format!(
                "window of {} days is too short, need at least {}",
                days, min_days
            ),
        });
    }

    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(CalendarError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CalendarError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(CalendarError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(CalendarError::InvalidConfigValue {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "List cannot be empty".to_string(),
        });
    }
    Ok(())
}
