//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults. Everything here is
//! immutable once the server starts.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Overrides applied to every `task` invocation.
///
/// - `rc.confirmation=off`: never block on an interactive prompt
/// - `rc.verbose=nothing`: no headers or footnotes around the output
/// - `rc.hooks=on`: keep on-modify hooks (e.g. the Timewarrior hook) running
pub const DEFAULT_TASK_OVERRIDES: [&str; 3] =
    ["rc.confirmation=off", "rc.verbose=nothing", "rc.hooks=on"];

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Taskwarrior invocation settings.
    pub taskwarrior: TaskwarriorConfig,

    /// Timewarrior invocation settings.
    pub timewarrior: TimewarriorConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Settings for the `task` family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskwarriorConfig {
    /// Program name or path of the Taskwarrior binary.
    pub binary: String,

    /// Overrides placed first on every command line.
    pub overrides: Vec<String>,

    /// Configuration file exported as `TASKRC` to every invocation.
    pub taskrc: PathBuf,
}

/// Settings for the `timew` family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimewarriorConfig {
    /// Program name or path of the Timewarrior binary.
    pub binary: String,

    /// Overrides placed first on every command line.
    pub overrides: Vec<String>,
}

impl Default for TaskwarriorConfig {
    fn default() -> Self {
        Self {
            binary: "task".to_string(),
            overrides: DEFAULT_TASK_OVERRIDES.iter().map(|s| s.to_string()).collect(),
            taskrc: resolve_taskrc(|_| None, dirs::home_dir().as_deref()),
        }
    }
}

impl Default for TimewarriorConfig {
    fn default() -> Self {
        Self {
            binary: "timew".to_string(),
            overrides: Vec::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "warrior-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            taskwarrior: TaskwarriorConfig::default(),
            timewarrior: TimewarriorConfig::default(),
        }
    }
}

/// Resolve the Taskwarrior configuration file.
///
/// Priority: `TASKRC`, then `$XDG_CONFIG_HOME/task/taskrc`, then
/// `~/.config/task/taskrc`. Empty variables count as unset.
pub fn resolve_taskrc<F>(lookup: F, home: Option<&Path>) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

    if let Some(taskrc) = var("TASKRC") {
        return PathBuf::from(taskrc);
    }

    let config_home = var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| home.unwrap_or_else(|| Path::new(".")).join(".config"));

    config_home.join("task").join("taskrc")
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_TASK_BIN`, ...). The taskrc location follows
    /// Taskwarrior's own variables (`TASKRC`, `XDG_CONFIG_HOME`).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        if let Ok(binary) = std::env::var("MCP_TASK_BIN") {
            config.taskwarrior.binary = binary;
        }

        if let Ok(overrides) = std::env::var("MCP_TASK_OVERRIDES") {
            config.taskwarrior.overrides = split_overrides(&overrides);
            info!("Taskwarrior overrides: {:?}", config.taskwarrior.overrides);
        }

        config.taskwarrior.taskrc =
            resolve_taskrc(|key| std::env::var(key).ok(), dirs::home_dir().as_deref());
        debug!("Using taskrc at {}", config.taskwarrior.taskrc.display());

        if let Ok(binary) = std::env::var("MCP_TIMEW_BIN") {
            config.timewarrior.binary = binary;
        }

        if let Ok(overrides) = std::env::var("MCP_TIMEW_OVERRIDES") {
            config.timewarrior.overrides = split_overrides(&overrides);
            info!("Timewarrior overrides: {:?}", config.timewarrior.overrides);
        }

        config
    }
}

fn split_overrides(value: &str) -> Vec<String> {
    value.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_taskrc_explicit_variable_wins() {
        let lookup = lookup_from(&[("TASKRC", "/srv/taskrc"), ("XDG_CONFIG_HOME", "/xdg")]);
        let path = resolve_taskrc(lookup, Some(Path::new("/home/user")));
        assert_eq!(path, PathBuf::from("/srv/taskrc"));
    }

    #[test]
    fn test_taskrc_xdg_config_home() {
        let lookup = lookup_from(&[("XDG_CONFIG_HOME", "/xdg")]);
        let path = resolve_taskrc(lookup, Some(Path::new("/home/user")));
        assert_eq!(path, PathBuf::from("/xdg/task/taskrc"));
    }

    #[test]
    fn test_taskrc_home_fallback() {
        let lookup = lookup_from(&[("TASKRC", ""), ("XDG_CONFIG_HOME", "")]);
        let path = resolve_taskrc(lookup, Some(Path::new("/home/user")));
        assert_eq!(path, PathBuf::from("/home/user/.config/task/taskrc"));
    }

    #[test]
    fn test_default_overrides() {
        let config = Config::default();
        assert_eq!(config.taskwarrior.binary, "task");
        assert_eq!(config.taskwarrior.overrides, DEFAULT_TASK_OVERRIDES);
        assert_eq!(config.timewarrior.binary, "timew");
        assert!(config.timewarrior.overrides.is_empty());
    }

    #[test]
    fn test_overrides_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_TASK_OVERRIDES", "rc.confirmation=off  rc.color=off");
            std::env::set_var("MCP_TIMEW_BIN", "/opt/bin/timew");
        }
        let config = Config::from_env();
        assert_eq!(
            config.taskwarrior.overrides,
            vec!["rc.confirmation=off", "rc.color=off"]
        );
        assert_eq!(config.timewarrior.binary, "/opt/bin/timew");
        unsafe {
            std::env::remove_var("MCP_TASK_OVERRIDES");
            std::env::remove_var("MCP_TIMEW_BIN");
        }
    }

    #[test]
    fn test_taskrc_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("TASKRC", "/tmp/warrior-test/taskrc");
        }
        let config = Config::from_env();
        assert_eq!(config.taskwarrior.taskrc, PathBuf::from("/tmp/warrior-test/taskrc"));
        unsafe {
            std::env::remove_var("TASKRC");
        }
    }
}
