//! Test double for [`CommandRunner`].

use std::path::Path;
use std::sync::{Arc, Mutex};

use super::context::CommandContext;
use super::error::CommandError;
use super::runner::CommandRunner;
use crate::core::config::Config;

/// One recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub program: String,
    pub env: Vec<(String, String)>,
    pub args: Vec<String>,
    /// Contents of every argument that named an existing file at call time.
    pub files: Vec<(String, String)>,
}

#[derive(Debug, Clone)]
enum Reply {
    Success(String),
    Failure { status: String, output: String },
}

/// Records every invocation and answers with a programmed reply.
#[derive(Debug)]
pub struct RecordingRunner {
    reply: Reply,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingRunner {
    /// A runner whose commands all exit zero with `output`.
    pub fn succeeding(output: impl Into<String>) -> Self {
        Self {
            reply: Reply::Success(output.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A runner whose commands all exit with `code` and `output`.
    pub fn failing(code: i32, output: impl Into<String>) -> Self {
        Self {
            reply: Reply::Failure {
                status: format!("exit status: {}", code),
                output: output.into(),
            },
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Build a command context using this runner and the default config.
    pub fn context(runner: &Arc<Self>) -> CommandContext {
        CommandContext::with_runner(&Config::default(), runner.clone())
    }

    /// All recorded calls, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// The most recent call.
    pub fn last_call(&self) -> RecordedCall {
        self.calls().pop().expect("no command was run")
    }
}

impl CommandRunner for RecordingRunner {
    fn run(
        &self,
        program: &str,
        env: &[(String, String)],
        args: &[String],
    ) -> Result<String, CommandError> {
        let files = args
            .iter()
            .filter(|arg| !arg.is_empty() && Path::new(arg.as_str()).is_file())
            .filter_map(|arg| {
                std::fs::read_to_string(arg)
                    .ok()
                    .map(|contents| (arg.clone(), contents))
            })
            .collect();

        self.calls.lock().unwrap().push(RecordedCall {
            program: program.to_string(),
            env: env.to_vec(),
            args: args.to_vec(),
            files,
        });

        match &self.reply {
            Reply::Success(output) => Ok(output.clone()),
            Reply::Failure { status, output } => {
                Err(CommandError::exit(program, status.clone(), output.clone()))
            }
        }
    }
}
