pub mod assign;
pub mod engine;
pub mod matches;
pub mod pipeline;
pub mod slots;

pub use crate::domain::model::{Calendar, Match, ScheduledGame, Slot, Team};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
