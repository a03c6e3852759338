// Adapters: roster text input, filesystem storage and report rendering.

pub mod report;
pub mod roster;
pub mod storage;
