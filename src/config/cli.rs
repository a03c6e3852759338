use crate::adapters::report::{Locale, ReportFormat};
use crate::config::{CalendarRequest, RequestArgs};
use crate::core::Storage;
use crate::utils::error::Result;
use clap::Parser;

pub const USAGE_EXAMPLE: &str =
    "Example: league-calendar teams.txt 01.08.2026 01.06.2027 calendar.txt";

#[derive(Debug, Clone, Parser)]
#[command(name = "league-calendar", version)]
#[command(about = "Builds a double round-robin tournament calendar")]
#[command(after_help = USAGE_EXAMPLE)]
pub struct CliConfig {
    /// Roster file, one "<n>. <team> — <city>" per line
    pub roster: String,

    /// First day of the season (DD.MM.YYYY)
    pub start_date: String,

    /// Last day of the season (DD.MM.YYYY)
    pub end_date: String,

    /// Where to write the calendar
    pub output: String,

    /// TOML file overriding game days, times and capacity
    #[arg(long)]
    pub policy: Option<String>,

    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,

    #[arg(long, value_enum)]
    pub locale: Option<Locale>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn request_args(&self) -> RequestArgs<'_> {
        RequestArgs {
            roster_path: &self.roster,
            start_date: &self.start_date,
            end_date: &self.end_date,
            output_path: &self.output,
            policy_path: self.policy.as_deref(),
            format: self.format,
            locale: self.locale,
        }
    }

    pub fn resolve<S: Storage>(&self, storage: &S) -> Result<CalendarRequest> {
        CalendarRequest::resolve(self.request_args(), storage)
    }
}
