//! Commands domain module.
//!
//! This module turns structured requests into invocations of the external
//! warrior binaries (`task` and `timew`) and runs them.
//!
//! ## Architecture
//!
//! - `runner.rs` - The [`CommandRunner`] seam and the real process runner
//! - `model.rs` - [`WarriorCommand`], the ordered argument groups of one call
//! - `profile.rs` - Per-family program, overrides and environment
//! - `staging.rs` - Temporary files for payloads too large for argv
//! - `context.rs` - The shared context handed to tools and resources

mod context;
mod error;
mod model;
mod profile;
mod runner;
mod staging;

#[cfg(test)]
pub mod testing;

pub use context::CommandContext;
pub use error::CommandError;
pub use model::{WarriorCommand, split_terms};
pub use profile::{CliProfile, TASKRC_VAR};
pub use runner::{CommandRunner, SystemRunner};
pub use staging::StagedPayload;
