//! Read-only reports over the whole database.

use rmcp::model::CallToolResult;

use super::super::params::NoParams;
use super::super::{CommandTool, Confirmation};
use crate::domains::commands::CommandContext;
use crate::domains::tools::handlers::command_result;

/// Declares a tool that runs a single argument-free `task` report.
macro_rules! report_tool {
    ($(#[$meta:meta])* $tool:ident, $name:literal, $operation:literal, $description:literal) => {
        $(#[$meta])*
        pub struct $tool;

        impl CommandTool for $tool {
            const NAME: &'static str = $name;
            const DESCRIPTION: &'static str = $description;
            const CONFIRMATION: Confirmation = Confirmation::NotNeeded;

            type Params = NoParams;

            fn execute(_params: &Self::Params, ctx: &CommandContext) -> CallToolResult {
                command_result(ctx.run_task(&ctx.taskwarrior.command($operation)))
            }
        }
    };
}

report_tool!(TaskTagsTool, "task_tags", "tags", "List all tags in use.");
report_tool!(TaskProjectsTool, "task_projects", "projects", "List all projects in use.");
report_tool!(
    TaskUdasTool,
    "task_udas",
    "udas",
    "List all configured User Defined Attributes."
);
report_tool!(
    /// Version, configuration and environment details; a good first check.
    TaskDiagnosticsTool,
    "task_diagnostics",
    "diagnostics",
    "Show Taskwarrior diagnostic information (config, version, environment)."
);
report_tool!(TaskStatsTool, "task_stats", "stats", "Show database statistics.");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::testing::{invocation, task_tail};
    use serde_json::json;

    #[test]
    fn test_reports_are_operation_only() {
        assert_eq!(task_tail(&invocation::<TaskTagsTool>(json!({}))), vec!["tags"]);
        assert_eq!(task_tail(&invocation::<TaskProjectsTool>(json!({}))), vec!["projects"]);
        assert_eq!(task_tail(&invocation::<TaskUdasTool>(json!({}))), vec!["udas"]);
        assert_eq!(
            task_tail(&invocation::<TaskDiagnosticsTool>(json!({}))),
            vec!["diagnostics"]
        );
        assert_eq!(task_tail(&invocation::<TaskStatsTool>(json!(null))), vec!["stats"]);
    }

    #[test]
    fn test_reports_ignore_arguments() {
        let call = invocation::<TaskTagsTool>(json!({ "filter": "+next" }));
        assert_eq!(task_tail(&call), vec!["tags"]);
    }
}
