use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Invalid date format: {value}. Use DD.MM.YYYY")]
    InvalidDateFormat { value: String },

    #[error("Teams file does not exist: {path}")]
    MissingInputFile { path: String },

    #[error("Invalid date range {start} - {end}: {reason}")]
    InvalidDateRange {
        start: String,
        end: String,
        reason: String,
    },

    #[error("Malformed roster line {line_number}: {line}")]
    MalformedRosterLine { line_number: usize, line: String },

    #[error("Not enough teams: found {found}, need at least {required}")]
    InsufficientTeams { found: usize, required: usize },

    #[error("Not enough slots for all games: {slots} slots for {matches} games")]
    InsufficientSlots { slots: usize, matches: usize },

    #[error("Scheduling invariant violated: placed {placed} of {total} games")]
    UnplacedMatches { placed: usize, total: usize },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Roster,
    Scheduling,
    Config,
    System,
}

impl CalendarError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CalendarError::InvalidDateFormat { .. }
            | CalendarError::MissingInputFile { .. }
            | CalendarError::InvalidDateRange { .. } => ErrorCategory::Input,
            CalendarError::MalformedRosterLine { .. }
            | CalendarError::InsufficientTeams { .. } => ErrorCategory::Roster,
            CalendarError::InsufficientSlots { .. } | CalendarError::UnplacedMatches { .. } => {
                ErrorCategory::Scheduling
            }
            CalendarError::InvalidConfigValue { .. } | CalendarError::ConfigParse { .. } => {
                ErrorCategory::Config
            }
            CalendarError::IoError(_)
            | CalendarError::CsvError(_)
            | CalendarError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CalendarError::InvalidDateFormat { .. } => {
                "Write dates as DD.MM.YYYY, e.g. 01.08.2026".to_string()
            }
            CalendarError::MissingInputFile { path } => {
                format!("Check that '{}' exists and is readable", path)
            }
            CalendarError::InvalidDateRange { .. } => {
                "Pass a start date before the end date and a window of at least a week"
                    .to_string()
            }
            CalendarError::MalformedRosterLine { line_number, .. } => format!(
                "Fix line {} of the roster: expected '<n>. <team> — <city>'",
                line_number
            ),
            CalendarError::InsufficientTeams { required, .. } => {
                format!("Add teams to the roster (at least {})", required)
            }
            CalendarError::InsufficientSlots { slots, matches } => format!(
                "Widen the date window or add game days/times: {} more slots needed",
                matches.saturating_sub(*slots)
            ),
            CalendarError::UnplacedMatches { .. } => {
                "Check max_simultaneous_games in the schedule policy (must be at least 1)"
                    .to_string()
            }
            CalendarError::InvalidConfigValue { field, .. } => {
                format!("Correct '{}' in the policy file", field)
            }
            CalendarError::ConfigParse { .. } => "Check the TOML syntax of the policy file".to_string(),
            CalendarError::IoError(_) => {
                "Check file permissions and that the output directory is writable".to_string()
            }
            CalendarError::CsvError(_) | CalendarError::SerializationError(_) => {
                "Try the default text format".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::System => format!("System error: {}", self),
            _ => format!("Error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalendarError>;
