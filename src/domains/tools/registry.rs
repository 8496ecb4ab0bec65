//! Tool Registry - the dispatch table from tool name to handler.
//!
//! This module provides:
//! - The list of all available tools and their metadata
//! - Synchronous dispatch of a tool call by name
//!
//! The rmcp router built in `router.rs` forwards every protocol call here.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;
use tracing::warn;

use super::definitions::{
    CommandTool, TaskAddTool, TaskAnnotateTool, TaskAppendTool, TaskCalcTool, TaskConfigTool,
    TaskDeleteTool, TaskDenoteTool, TaskDiagnosticsTool, TaskDoneTool, TaskImportTool,
    TaskListTool, TaskLogTool, TaskModifyTool, TaskPrependTool, TaskProjectsTool, TaskPurgeTool,
    TaskRawTool, TaskStartTool, TaskStatsTool, TaskStopTool, TaskTagsTool, TaskUdasTool,
    TaskUndoTool, TimewContinueTool, TimewExportTool, TimewRawTool, TimewStartTool,
    TimewStopTool, TimewSummaryTool,
};
use super::error::ToolError;
use crate::domains::commands::CommandContext;

/// Expands `$body` once per tool type, bound to `$tool`.
macro_rules! for_each_tool {
    ($tool:ident => $body:expr) => {
        vec![
            { type $tool = TaskAddTool; $body },
            { type $tool = TaskLogTool; $body },
            { type $tool = TaskModifyTool; $body },
            { type $tool = TaskDoneTool; $body },
            { type $tool = TaskDeleteTool; $body },
            { type $tool = TaskListTool; $body },
            { type $tool = TaskAnnotateTool; $body },
            { type $tool = TaskDenoteTool; $body },
            { type $tool = TaskStartTool; $body },
            { type $tool = TaskStopTool; $body },
            { type $tool = TaskUndoTool; $body },
            { type $tool = TaskCalcTool; $body },
            { type $tool = TaskRawTool; $body },
            { type $tool = TaskConfigTool; $body },
            { type $tool = TaskPurgeTool; $body },
            { type $tool = TaskAppendTool; $body },
            { type $tool = TaskPrependTool; $body },
            { type $tool = TaskImportTool; $body },
            { type $tool = TaskTagsTool; $body },
            { type $tool = TaskProjectsTool; $body },
            { type $tool = TaskUdasTool; $body },
            { type $tool = TaskDiagnosticsTool; $body },
            { type $tool = TaskStatsTool; $body },
            { type $tool = TimewStartTool; $body },
            { type $tool = TimewStopTool; $body },
            { type $tool = TimewContinueTool; $body },
            { type $tool = TimewSummaryTool; $body },
            { type $tool = TimewExportTool; $body },
            { type $tool = TimewRawTool; $body },
        ]
    };
}

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    context: Arc<CommandContext>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(context: Arc<CommandContext>) -> Self {
        Self { context }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        for_each_tool!(T => T::NAME)
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        for_each_tool!(T => T::to_tool())
    }

    /// Dispatch a tool call to the appropriate handler.
    ///
    /// A failing command is an `Ok` error result; `Err` is reserved for
    /// unknown tools and malformed arguments.
    pub fn call_tool(&self, name: &str, arguments: Value) -> Result<CallToolResult, ToolError> {
        let ctx = self.context.as_ref();
        match name {
            TaskAddTool::NAME => TaskAddTool::call(arguments, ctx),
            TaskLogTool::NAME => TaskLogTool::call(arguments, ctx),
            TaskModifyTool::NAME => TaskModifyTool::call(arguments, ctx),
            TaskDoneTool::NAME => TaskDoneTool::call(arguments, ctx),
            TaskDeleteTool::NAME => TaskDeleteTool::call(arguments, ctx),
            TaskListTool::NAME => TaskListTool::call(arguments, ctx),
            TaskAnnotateTool::NAME => TaskAnnotateTool::call(arguments, ctx),
            TaskDenoteTool::NAME => TaskDenoteTool::call(arguments, ctx),
            TaskStartTool::NAME => TaskStartTool::call(arguments, ctx),
            TaskStopTool::NAME => TaskStopTool::call(arguments, ctx),
            TaskUndoTool::NAME => TaskUndoTool::call(arguments, ctx),
            TaskCalcTool::NAME => TaskCalcTool::call(arguments, ctx),
            TaskRawTool::NAME => TaskRawTool::call(arguments, ctx),
            TaskConfigTool::NAME => TaskConfigTool::call(arguments, ctx),
            TaskPurgeTool::NAME => TaskPurgeTool::call(arguments, ctx),
            TaskAppendTool::NAME => TaskAppendTool::call(arguments, ctx),
            TaskPrependTool::NAME => TaskPrependTool::call(arguments, ctx),
            TaskImportTool::NAME => TaskImportTool::call(arguments, ctx),
            TaskTagsTool::NAME => TaskTagsTool::call(arguments, ctx),
            TaskProjectsTool::NAME => TaskProjectsTool::call(arguments, ctx),
            TaskUdasTool::NAME => TaskUdasTool::call(arguments, ctx),
            TaskDiagnosticsTool::NAME => TaskDiagnosticsTool::call(arguments, ctx),
            TaskStatsTool::NAME => TaskStatsTool::call(arguments, ctx),
            TimewStartTool::NAME => TimewStartTool::call(arguments, ctx),
            TimewStopTool::NAME => TimewStopTool::call(arguments, ctx),
            TimewContinueTool::NAME => TimewContinueTool::call(arguments, ctx),
            TimewSummaryTool::NAME => TimewSummaryTool::call(arguments, ctx),
            TimewExportTool::NAME => TimewExportTool::call(arguments, ctx),
            TimewRawTool::NAME => TimewRawTool::call(arguments, ctx),
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DEFAULT_TASK_OVERRIDES;
    use crate::domains::commands::testing::RecordingRunner;
    use crate::domains::tools::handlers::result_text;
    use serde_json::json;

    fn registry_with(runner: &Arc<RecordingRunner>) -> ToolRegistry {
        ToolRegistry::new(Arc::new(RecordingRunner::context(runner)))
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = registry_with(&Arc::new(RecordingRunner::succeeding("")));
        let names = registry.tool_names();
        assert_eq!(names.len(), 29);
        assert!(names.contains(&"task_add"));
        assert!(names.contains(&"task_import"));
        assert!(names.contains(&"task_stats"));
        assert!(names.contains(&"timew_start"));
        assert!(names.contains(&"timew_raw"));

        let mut unique = names.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn test_metadata_matches_names() {
        let registry = registry_with(&Arc::new(RecordingRunner::succeeding("")));
        let tools = ToolRegistry::get_all_tools();
        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert_eq!(names, registry.tool_names());
    }

    #[test]
    fn test_registry_call_unknown() {
        let runner = Arc::new(RecordingRunner::succeeding(""));
        let registry = registry_with(&runner);

        let result = registry.call_tool("task_frobnicate", json!({}));
        assert!(matches!(result, Err(ToolError::NotFound(name)) if name == "task_frobnicate"));
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn test_registry_rejects_non_object_arguments() {
        let runner = Arc::new(RecordingRunner::succeeding(""));
        let registry = registry_with(&runner);

        let result = registry.call_tool("task_done", json!("abc"));
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn test_registry_dispatches_by_name() {
        let runner = Arc::new(RecordingRunner::succeeding("Created task 1."));
        let registry = registry_with(&runner);

        let result = registry
            .call_tool("task_add", json!({ "description": "Buy milk" }))
            .unwrap();
        assert_eq!(result_text(&result), Some("Created task 1."));
        assert_eq!(runner.last_call().args.last().map(String::as_str), Some("Buy milk"));
    }

    #[test]
    fn test_command_failure_is_not_a_protocol_error() {
        let runner = Arc::new(RecordingRunner::failing(1, "record not found"));
        let registry = registry_with(&runner);

        let result = registry
            .call_tool("task_done", json!({ "uuid": "missing" }))
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).unwrap().contains("record not found"));
    }

    #[test]
    fn test_overrides_lead_every_invocation() {
        let runner = Arc::new(RecordingRunner::succeeding(""));
        let registry = registry_with(&runner);
        let arguments = json!({
            "uuid": "u1",
            "text": "note",
            "description": "d",
            "modifications": "+tag",
            "filter": "+next",
            "expression": "1d",
            "command": "version",
            "json_data": "[]",
            "tags": "work",
            "range": ":day",
        });

        for name in registry.tool_names() {
            registry.call_tool(name, arguments.clone()).unwrap();
            let call = runner.last_call();

            if name.starts_with("task_") {
                assert_eq!(call.program, "task", "{}", name);
                assert_eq!(call.args[..DEFAULT_TASK_OVERRIDES.len()], DEFAULT_TASK_OVERRIDES, "{}", name);
                assert_eq!(call.env.len(), 1, "{}", name);
            } else {
                assert_eq!(call.program, "timew", "{}", name);
                assert!(call.env.is_empty(), "{}", name);
            }
        }
        assert_eq!(runner.calls().len(), 29);
    }
}
