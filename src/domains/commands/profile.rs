//! Per-family invocation profiles.

use tracing::instrument;

use super::error::CommandError;
use super::model::WarriorCommand;
use super::runner::CommandRunner;
use crate::core::config::{TaskwarriorConfig, TimewarriorConfig};

/// Environment variable Taskwarrior reads its configuration path from.
pub const TASKRC_VAR: &str = "TASKRC";

/// Everything that stays fixed across invocations of one tool family:
/// the binary, the leading overrides and the injected environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliProfile {
    /// Program name or path.
    pub program: String,

    /// Overrides placed before every other argument.
    pub overrides: Vec<String>,

    /// Extra environment assignments on top of the inherited environment.
    pub env: Vec<(String, String)>,
}

impl CliProfile {
    /// Profile for the task family. `TASKRC` always points at the resolved
    /// configuration file so the server and the agent's shell agree on it.
    pub fn taskwarrior(config: &TaskwarriorConfig) -> Self {
        Self {
            program: config.binary.clone(),
            overrides: config.overrides.clone(),
            env: vec![(
                TASKRC_VAR.to_string(),
                config.taskrc.to_string_lossy().into_owned(),
            )],
        }
    }

    /// Profile for the time-tracking family. Runs with the inherited
    /// environment unchanged.
    pub fn timewarrior(config: &TimewarriorConfig) -> Self {
        Self {
            program: config.binary.clone(),
            overrides: config.overrides.clone(),
            env: Vec::new(),
        }
    }

    /// Start a command for `operation`, seeded with this family's overrides.
    pub fn command(&self, operation: impl Into<String>) -> WarriorCommand {
        WarriorCommand::new(self.overrides.clone(), operation)
    }

    /// Start a raw pass-through command, seeded with this family's overrides.
    pub fn raw(&self, command_line: &str) -> WarriorCommand {
        WarriorCommand::raw(self.overrides.clone(), command_line)
    }

    /// Run `command` through `runner` with this profile's program and environment.
    #[instrument(skip_all, fields(program = %self.program, operation = %command.operation))]
    pub fn run(
        &self,
        runner: &dyn CommandRunner,
        command: &WarriorCommand,
    ) -> Result<String, CommandError> {
        runner.run(&self.program, &self.env, &command.args())
    }
}
