//! Shared invocation context handed to every tool and resource.

use std::sync::Arc;

use super::error::CommandError;
use super::model::WarriorCommand;
use super::profile::CliProfile;
use super::runner::{CommandRunner, SystemRunner};
use crate::core::config::Config;

/// Immutable, process-wide state needed to run warrior commands.
///
/// Built once at startup and shared behind an `Arc`; the runner is injected
/// so tests can substitute a double.
#[derive(Clone)]
pub struct CommandContext {
    /// Profile for `task` invocations.
    pub taskwarrior: CliProfile,

    /// Profile for `timew` invocations.
    pub timewarrior: CliProfile,

    runner: Arc<dyn CommandRunner>,
}

impl CommandContext {
    /// Create a context that runs real processes.
    pub fn new(config: &Config) -> Self {
        Self::with_runner(config, Arc::new(SystemRunner))
    }

    /// Create a context with an explicit runner.
    pub fn with_runner(config: &Config, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            taskwarrior: CliProfile::taskwarrior(&config.taskwarrior),
            timewarrior: CliProfile::timewarrior(&config.timewarrior),
            runner,
        }
    }

    /// Run a task-family command.
    pub fn run_task(&self, command: &WarriorCommand) -> Result<String, CommandError> {
        self.taskwarrior.run(self.runner.as_ref(), command)
    }

    /// Run a time-tracking-family command.
    pub fn run_timew(&self, command: &WarriorCommand) -> Result<String, CommandError> {
        self.timewarrior.run(self.runner.as_ref(), command)
    }
}

impl std::fmt::Debug for CommandContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandContext")
            .field("taskwarrior", &self.taskwarrior)
            .field("timewarrior", &self.timewarrior)
            .finish_non_exhaustive()
    }
}
