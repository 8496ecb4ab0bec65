//! Timewarrior tools.
//!
//! These run `timew` with the inherited environment and the configured
//! time-tracking overrides (none by default).

pub mod raw;
pub mod reports;
pub mod tracking;

pub use raw::TimewRawTool;
pub use reports::{TimewExportTool, TimewSummaryTool};
pub use tracking::{TimewContinueTool, TimewStartTool, TimewStopTool};
