//! Command-specific error types.

use thiserror::Error;

/// Errors that can occur while running an external warrior command.
///
/// Both variants keep enough context for the agent to diagnose the failure:
/// the warrior tools usually print the actionable message ("No matches.",
/// "Task not found") rather than encoding it in the exit code.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The program could not be started at all (missing binary, permissions).
    #[error("{program} error: failed to start: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Reading the program's output or waiting for it failed.
    #[error("{program} error: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The program ran and exited unsuccessfully.
    #[error("{program} error: {status}\nOutput: {output}")]
    Exit {
        program: String,
        status: String,
        output: String,
    },

    /// A payload could not be staged on disk before the invocation.
    #[error("failed to stage command payload: {0}")]
    Staging(#[from] std::io::Error),
}

impl CommandError {
    /// Create a new "spawn" error.
    pub fn spawn(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::Spawn {
            program: program.into(),
            source,
        }
    }

    /// Create a new "io" error.
    pub fn io(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            program: program.into(),
            source,
        }
    }

    /// Create a new "exit" error.
    pub fn exit(
        program: impl Into<String>,
        status: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Self::Exit {
            program: program.into(),
            status: status.into(),
            output: output.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_error_carries_output() {
        let err = CommandError::exit("task", "exit status: 1", "No matches.");
        let text = err.to_string();
        assert!(text.starts_with("task error: exit status: 1"));
        assert!(text.ends_with("Output: No matches."));
    }

    #[test]
    fn test_spawn_error_names_program() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "No such file");
        let err = CommandError::spawn("timew", source);
        assert_eq!(err.to_string(), "timew error: failed to start: No such file");
    }
}
