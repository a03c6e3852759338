#[cfg(feature = "cli")]
pub mod cli;
pub mod policy;

use crate::adapters::report::{Locale, ReportFormat, ReportOptions};
use crate::core::{ConfigProvider, Storage};
use crate::domain::model::{DateWindow, SchedulePolicy};
use crate::utils::error::{CalendarError, Result};
use crate::utils::validation::{parse_date, validate_date_window, validate_path};
use policy::PolicyConfig;

/// Raw, unvalidated inputs of one run.
#[derive(Debug, Clone, Default)]
pub struct RequestArgs<'a> {
    pub roster_path: &'a str,
    pub start_date: &'a str,
    pub end_date: &'a str,
    pub output_path: &'a str,
    pub policy_path: Option<&'a str>,
    pub format: Option<ReportFormat>,
    pub locale: Option<Locale>,
}

/// Fully validated run configuration.
#[derive(Debug, Clone)]
pub struct CalendarRequest {
    pub roster_path: String,
    pub window: DateWindow,
    pub output_path: String,
    pub policy: SchedulePolicy,
    pub report: ReportOptions,
}

impl CalendarRequest {
    /// Validates inputs before any roster or scheduling work: dates, roster
    /// existence, policy (the window check needs it), date window, output path.
    pub fn resolve<S: Storage>(args: RequestArgs<'_>, storage: &S) -> Result<Self> {
        let start = parse_date(args.start_date)?;
        let end = parse_date(args.end_date)?;

        if !storage.exists(args.roster_path) {
            return Err(CalendarError::MissingInputFile {
                path: args.roster_path.to_string(),
            });
        }

        let policy_config = match args.policy_path {
            Some(path) => {
                tracing::debug!("Loading schedule policy from: {}", path);
                PolicyConfig::load(storage, path)?
            }
            None => PolicyConfig::default(),
        };
        let policy = policy_config.to_policy()?;
        let report = ReportOptions {
            format: args
                .format
                .or_else(|| policy_config.report_format())
                .unwrap_or_default(),
            locale: args
                .locale
                .or_else(|| policy_config.report_locale())
                .unwrap_or_default(),
            width: policy_config.report_width()?,
        };

        validate_date_window(start, end, policy.min_window_days)?;
        validate_path("output", args.output_path)?;

        Ok(Self {
            roster_path: args.roster_path.to_string(),
            window: DateWindow { start, end },
            output_path: args.output_path.to_string(),
            policy,
            report,
        })
    }
}

impl ConfigProvider for CalendarRequest {
    fn roster_path(&self) -> &str {
        &self.roster_path
    }

    fn window(&self) -> DateWindow {
        self.window
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn policy(&self) -> &SchedulePolicy {
        &self.policy
    }

    fn report(&self) -> &ReportOptions {
        &self.report
    }
}
