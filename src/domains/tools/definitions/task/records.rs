//! Creating, changing and listing tasks.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;

use super::super::params::{EntryParams, FilterParams, lenient_string};
use super::super::{CommandTool, Confirmation};
use crate::domains::commands::{CommandContext, split_terms};
use crate::domains::tools::handlers::command_result;

/// Filter used by `task_list` when the caller gives none.
pub const DEFAULT_LIST_FILTER: &str = "status:pending";

/// Build an entry command: the description stays one argument, the
/// metadata is split into attribute terms.
fn entry(operation: &str, params: &EntryParams, ctx: &CommandContext) -> CallToolResult {
    let cmd = ctx
        .taskwarrior
        .command(operation)
        .with_modification(params.description.as_str())
        .with_modifications(split_terms(&params.metadata));

    command_result(ctx.run_task(&cmd))
}

pub struct TaskAddTool;

impl CommandTool for TaskAddTool {
    const NAME: &'static str = "task_add";
    const DESCRIPTION: &'static str = "Create a new task.";
    const CONFIRMATION: Confirmation = Confirmation::Required;
    const REQUIRED: &'static [&'static str] = &["description"];

    type Params = EntryParams;

    fn execute(params: &Self::Params, ctx: &CommandContext) -> CallToolResult {
        entry("add", params, ctx)
    }
}

/// Records work that is already finished.
pub struct TaskLogTool;

impl CommandTool for TaskLogTool {
    const NAME: &'static str = "task_log";
    const DESCRIPTION: &'static str =
        "Record a task that is already completed (useful for filling history gaps).";
    const CONFIRMATION: Confirmation = Confirmation::Required;
    const REQUIRED: &'static [&'static str] = &["description"];

    type Params = EntryParams;

    fn execute(params: &Self::Params, ctx: &CommandContext) -> CallToolResult {
        entry("log", params, ctx)
    }
}

/// Parameters for `task_modify`.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ModifyParams {
    /// UUID of a single task to modify.
    #[serde(default, deserialize_with = "lenient_string")]
    #[schemars(with = "String")]
    pub uuid: String,

    /// Filter for tasks to modify (e.g., '+PENDING project:Work').
    #[serde(default, deserialize_with = "lenient_string")]
    #[schemars(with = "String")]
    pub filter: String,

    /// Modifications to apply (e.g., 'project:New /old/new/ +tag').
    #[serde(default, deserialize_with = "lenient_string")]
    #[schemars(with = "String")]
    pub modifications: String,
}

pub struct TaskModifyTool;

impl CommandTool for TaskModifyTool {
    const NAME: &'static str = "task_modify";
    const DESCRIPTION: &'static str =
        "Modify tasks selected by UUID and/or filter. Accepts multiple modifications.";
    const CONFIRMATION: Confirmation = Confirmation::Required;
    const REQUIRED: &'static [&'static str] = &["modifications"];

    type Params = ModifyParams;

    fn execute(params: &Self::Params, ctx: &CommandContext) -> CallToolResult {
        let mut cmd = ctx.taskwarrior.command("modify");
        if !params.uuid.is_empty() {
            cmd = cmd.with_filter(params.uuid.as_str());
        }
        let cmd = cmd
            .with_filters(split_terms(&params.filter))
            .with_modifications(split_terms(&params.modifications));

        command_result(ctx.run_task(&cmd))
    }
}

pub struct TaskListTool;

impl CommandTool for TaskListTool {
    const NAME: &'static str = "task_list";
    const DESCRIPTION: &'static str =
        "List tasks as exported JSON. Filter defaults to 'status:pending'.";
    const CONFIRMATION: Confirmation = Confirmation::NotNeeded;

    type Params = FilterParams;

    fn execute(params: &Self::Params, ctx: &CommandContext) -> CallToolResult {
        let mut filters = split_terms(&params.filter);
        if filters.is_empty() {
            filters.push(DEFAULT_LIST_FILTER.to_string());
        }

        let cmd = ctx.taskwarrior.command("export").with_filters(filters);
        command_result(ctx.run_task(&cmd))
    }
}
