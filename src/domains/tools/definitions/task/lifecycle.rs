//! Status transitions of a single task.

use rmcp::model::CallToolResult;

use super::super::params::{NoParams, RecordParams};
use super::super::{CommandTool, Confirmation};
use crate::domains::commands::CommandContext;
use crate::domains::tools::handlers::command_result;

/// Run `operation` against the task named by `uuid`. An empty UUID is
/// still passed through so the failure comes from `task` itself.
fn transition(operation: &str, params: &RecordParams, ctx: &CommandContext) -> CallToolResult {
    let cmd = ctx
        .taskwarrior
        .command(operation)
        .with_filter(params.uuid.as_str());

    command_result(ctx.run_task(&cmd))
}

pub struct TaskDoneTool;

impl CommandTool for TaskDoneTool {
    const NAME: &'static str = "task_done";
    const DESCRIPTION: &'static str = "Mark a task as done.";
    const CONFIRMATION: Confirmation = Confirmation::Required;
    const REQUIRED: &'static [&'static str] = &["uuid"];

    type Params = RecordParams;

    fn execute(params: &Self::Params, ctx: &CommandContext) -> CallToolResult {
        transition("done", params, ctx)
    }
}

pub struct TaskDeleteTool;

impl CommandTool for TaskDeleteTool {
    const NAME: &'static str = "task_delete";
    const DESCRIPTION: &'static str = "Delete a task.";
    const CONFIRMATION: Confirmation = Confirmation::Required;
    const REQUIRED: &'static [&'static str] = &["uuid"];

    type Params = RecordParams;

    fn execute(params: &Self::Params, ctx: &CommandContext) -> CallToolResult {
        transition("delete", params, ctx)
    }
}

/// Starting a task also fires the on-modify hooks (e.g. Timewarrior).
pub struct TaskStartTool;

impl CommandTool for TaskStartTool {
    const NAME: &'static str = "task_start";
    const DESCRIPTION: &'static str = "Start a task.";
    const CONFIRMATION: Confirmation = Confirmation::Required;
    const REQUIRED: &'static [&'static str] = &["uuid"];

    type Params = RecordParams;

    fn execute(params: &Self::Params, ctx: &CommandContext) -> CallToolResult {
        transition("start", params, ctx)
    }
}

pub struct TaskStopTool;

impl CommandTool for TaskStopTool {
    const NAME: &'static str = "task_stop";
    const DESCRIPTION: &'static str = "Stop a task.";
    const CONFIRMATION: Confirmation = Confirmation::Required;
    const REQUIRED: &'static [&'static str] = &["uuid"];

    type Params = RecordParams;

    fn execute(params: &Self::Params, ctx: &CommandContext) -> CallToolResult {
        transition("stop", params, ctx)
    }
}

pub struct TaskUndoTool;

impl CommandTool for TaskUndoTool {
    const NAME: &'static str = "task_undo";
    const DESCRIPTION: &'static str = "Undo the last Taskwarrior operation.";
    const CONFIRMATION: Confirmation = Confirmation::Required;

    type Params = NoParams;

    fn execute(_params: &Self::Params, ctx: &CommandContext) -> CallToolResult {
        command_result(ctx.run_task(&ctx.taskwarrior.command("undo")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::commands::testing::RecordingRunner;
    use crate::domains::tools::definitions::testing::{call, invocation, task_tail};
    use crate::domains::tools::handlers::result_text;
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn test_transitions_put_uuid_before_operation() {
        let args = json!({ "uuid": "abc-123" });
        assert_eq!(task_tail(&invocation::<TaskDoneTool>(args.clone())), vec!["abc-123", "done"]);
        assert_eq!(task_tail(&invocation::<TaskDeleteTool>(args.clone())), vec!["abc-123", "delete"]);
        assert_eq!(task_tail(&invocation::<TaskStartTool>(args.clone())), vec!["abc-123", "start"]);
        assert_eq!(task_tail(&invocation::<TaskStopTool>(args)), vec!["abc-123", "stop"]);
    }

    #[test]
    fn test_missing_uuid_is_passed_as_empty() {
        let call = invocation::<TaskDoneTool>(json!({}));
        assert_eq!(task_tail(&call), vec!["", "done"]);

        let call = invocation::<TaskStartTool>(json!({ "uuid": 7 }));
        assert_eq!(task_tail(&call), vec!["", "start"]);
    }

    #[test]
    fn test_undo_is_operation_only() {
        let call = invocation::<TaskUndoTool>(json!({}));
        assert_eq!(task_tail(&call), vec!["undo"]);
    }

    #[test]
    fn test_failure_becomes_error_result() {
        let runner = Arc::new(RecordingRunner::failing(1, "record not found"));
        let result = call::<TaskDoneTool>(&runner, json!({ "uuid": "nope" }));

        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).unwrap().contains("record not found"));
    }

    #[test]
    fn test_success_output_is_verbatim() {
        let runner = Arc::new(RecordingRunner::succeeding("Completed task abc-123 'Buy milk'."));
        let result = call::<TaskDoneTool>(&runner, json!({ "uuid": "abc-123" }));

        assert_eq!(result.is_error, Some(false));
        assert_eq!(result_text(&result), Some("Completed task abc-123 'Buy milk'."));
    }
}
