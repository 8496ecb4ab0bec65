//! Free-text edits of a single task.
//!
//! All four tools share one shape: the task UUID as the only filter and the
//! caller's text as a single argument, spaces included.

use rmcp::model::CallToolResult;

use super::super::params::RecordTextParams;
use super::super::{CommandTool, Confirmation};
use crate::domains::commands::CommandContext;
use crate::domains::tools::handlers::command_result;

fn edit_text(operation: &str, params: &RecordTextParams, ctx: &CommandContext) -> CallToolResult {
    let cmd = ctx
        .taskwarrior
        .command(operation)
        .with_filter(params.uuid.as_str())
        .with_modification(params.text.as_str());

    command_result(ctx.run_task(&cmd))
}

pub struct TaskAnnotateTool;

impl CommandTool for TaskAnnotateTool {
    const NAME: &'static str = "task_annotate";
    const DESCRIPTION: &'static str = "Add an annotation (note) to a task.";
    const CONFIRMATION: Confirmation = Confirmation::Required;
    const REQUIRED: &'static [&'static str] = &["uuid", "text"];

    type Params = RecordTextParams;

    fn execute(params: &Self::Params, ctx: &CommandContext) -> CallToolResult {
        edit_text("annotate", params, ctx)
    }
}

/// Removes the annotation matching the text (substring match).
pub struct TaskDenoteTool;

impl CommandTool for TaskDenoteTool {
    const NAME: &'static str = "task_denote";
    const DESCRIPTION: &'static str =
        "Remove an annotation from a task. The text is matched as a substring.";
    const CONFIRMATION: Confirmation = Confirmation::Required;
    const REQUIRED: &'static [&'static str] = &["uuid", "text"];

    type Params = RecordTextParams;

    fn execute(params: &Self::Params, ctx: &CommandContext) -> CallToolResult {
        edit_text("denote", params, ctx)
    }
}

pub struct TaskAppendTool;

impl CommandTool for TaskAppendTool {
    const NAME: &'static str = "task_append";
    const DESCRIPTION: &'static str = "Append text to a task's description.";
    const CONFIRMATION: Confirmation = Confirmation::Required;
    const REQUIRED: &'static [&'static str] = &["uuid", "text"];

    type Params = RecordTextParams;

    fn execute(params: &Self::Params, ctx: &CommandContext) -> CallToolResult {
        edit_text("append", params, ctx)
    }
}

pub struct TaskPrependTool;

impl CommandTool for TaskPrependTool {
    const NAME: &'static str = "task_prepend";
    const DESCRIPTION: &'static str = "Prepend text to a task's description.";
    const CONFIRMATION: Confirmation = Confirmation::Required;
    const REQUIRED: &'static [&'static str] = &["uuid", "text"];

    type Params = RecordTextParams;

    fn execute(params: &Self::Params, ctx: &CommandContext) -> CallToolResult {
        edit_text("prepend", params, ctx)
    }
}
