//! Process invocation for the warrior command line tools.
//!
//! The [`CommandRunner`] trait is the seam between command construction and
//! the operating system. Production code uses [`SystemRunner`]; tests swap in
//! a recording double so handlers can be verified without `task` or `timew`
//! installed.

use std::io::{self, Read};
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use super::error::CommandError;

/// Executes an external program and classifies the outcome.
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`, adding `env` on top of the inherited
    /// environment. Returns the trimmed combined output on a zero exit.
    fn run(
        &self,
        program: &str,
        env: &[(String, String)],
        args: &[String],
    ) -> Result<String, CommandError>;
}

/// Runner backed by `std::process::Command`.
///
/// Blocks until the child exits. There is no timeout; async callers run it
/// on tokio's blocking pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(
        &self,
        program: &str,
        env: &[(String, String)],
        args: &[String],
    ) -> Result<String, CommandError> {
        debug!(program, ?args, "Running external command");

        // One pipe for both streams keeps diagnostics in the order the
        // program wrote them.
        let (mut reader, writer) = io::pipe().map_err(|e| CommandError::io(program, e))?;
        let stdout = writer.try_clone().map_err(|e| CommandError::io(program, e))?;

        // stdin must never be inherited: under the STDIO transport it is the
        // MCP channel itself.
        let mut child = Command::new(program)
            .args(args)
            .envs(env.iter().map(|(key, value)| (key.as_str(), value.as_str())))
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(writer)
            .spawn()
            .map_err(|e| {
                warn!("Failed to start '{}': {}", program, e);
                CommandError::spawn(program, e)
            })?;

        // The builder and its copies of the write end are gone, so the read
        // ends once the child closes its side.
        let mut raw = Vec::new();
        let read = reader.read_to_end(&mut raw);
        let status = child.wait().map_err(|e| CommandError::io(program, e))?;
        read.map_err(|e| CommandError::io(program, e))?;

        let text = merged_output(&raw);

        if status.success() {
            Ok(text)
        } else {
            warn!("'{}' exited unsuccessfully ({})", program, status);
            Err(CommandError::exit(program, status.to_string(), text))
        }
    }
}

/// Decode the merged output stream and trim surrounding whitespace.
fn merged_output(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_merged_output_trims() {
        assert_eq!(merged_output(b"  out\nerr\n"), "out\nerr");
        assert_eq!(merged_output(b"\n\n"), "");
        assert_eq!(merged_output(b""), "");
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_keeps_stream_interleaving() {
        let result = SystemRunner.run(
            "sh",
            &[],
            &args(&["-c", "echo first; echo second >&2; echo third; exit 1"]),
        );

        let err = result.unwrap_err();
        assert!(matches!(err, CommandError::Exit { .. }));
        assert!(err.to_string().ends_with("Output: first\nsecond\nthird"));
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_stderr_only() {
        let result = SystemRunner.run("sh", &[], &args(&["-c", "echo 'warning only' >&2"]));
        assert_eq!(result.unwrap(), "warning only");
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_success() {
        let result = SystemRunner.run("sh", &[], &args(&["-c", "echo '  hello  '"]));
        assert_eq!(result.unwrap(), "hello");
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_failure_keeps_output() {
        let result = SystemRunner.run(
            "sh",
            &[],
            &args(&["-c", "echo 'No matches.'; echo 'oops' >&2; exit 3"]),
        );

        let err = result.unwrap_err();
        let text = err.to_string();
        assert!(matches!(err, CommandError::Exit { .. }));
        assert!(text.starts_with("sh error:"));
        assert!(text.contains('3'));
        assert!(text.contains("No matches.\noops"));
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_adds_environment() {
        let env = vec![("WARRIOR_RUNNER_TEST".to_string(), "from-env".to_string())];
        let result = SystemRunner.run(
            "sh",
            &env,
            &args(&["-c", "printf %s \"$WARRIOR_RUNNER_TEST\""]),
        );
        assert_eq!(result.unwrap(), "from-env");
    }

    #[test]
    fn test_system_runner_missing_program() {
        let result = SystemRunner.run("warrior-mcp-definitely-missing-binary", &[], &[]);
        assert!(matches!(result, Err(CommandError::Spawn { .. })));
    }
}
