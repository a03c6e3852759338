use crate::adapters::report::ReportOptions;
use crate::domain::model::{Calendar, DateWindow, SchedulePolicy, Team};
use crate::utils::error::Result;

pub trait Storage {
    fn exists(&self, path: &str) -> bool;
    fn read_to_string(&self, path: &str) -> Result<String>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn roster_path(&self) -> &str;
    fn window(&self) -> DateWindow;
    fn output_path(&self) -> &str;
    fn policy(&self) -> &SchedulePolicy;
    fn report(&self) -> &ReportOptions;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<Team>>;
    fn transform(&self, teams: Vec<Team>) -> Result<Calendar>;
    fn load(&self, calendar: Calendar) -> Result<String>;
}
