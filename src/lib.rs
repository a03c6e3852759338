pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::storage::LocalStorage;
pub use config::CalendarRequest;
pub use core::{engine::CalendarEngine, pipeline::CalendarPipeline};
pub use utils::error::{CalendarError, Result};
