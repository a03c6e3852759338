pub mod export;
pub mod locale;
pub mod text;

use crate::domain::model::Calendar;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

pub use locale::Locale;

pub const DEFAULT_WIDTH: usize = 80;
pub const MIN_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub format: ReportFormat,
    pub locale: Locale,
    pub width: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            locale: Locale::default(),
            width: DEFAULT_WIDTH,
        }
    }
}

/// Renders the calendar in the requested format.
pub fn render(calendar: &Calendar, options: &ReportOptions) -> Result<String> {
    match options.format {
        ReportFormat::Text => Ok(text::render_text(calendar, options.locale, options.width)),
        ReportFormat::Json => export::render_json(calendar),
        ReportFormat::Csv => export::render_csv(calendar),
    }
}
