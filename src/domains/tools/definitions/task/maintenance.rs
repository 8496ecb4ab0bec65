//! Database and configuration maintenance.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;

use super::super::params::{FilterParams, RawParams, lenient_string};
use super::super::{CommandTool, Confirmation};
use crate::domains::commands::{CommandContext, StagedPayload, split_terms};
use crate::domains::tools::handlers::command_result;

/// Parameters for `task_calc`.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct CalcParams {
    /// Date or math expression (e.g. 'now + 4d').
    #[serde(default, deserialize_with = "lenient_string")]
    #[schemars(with = "String")]
    pub expression: String,
}

pub struct TaskCalcTool;

impl CommandTool for TaskCalcTool {
    const NAME: &'static str = "task_calc";
    const DESCRIPTION: &'static str = "Evaluate Taskwarrior date math (e.g. 'now + 4d').";
    const CONFIRMATION: Confirmation = Confirmation::NotNeeded;
    const REQUIRED: &'static [&'static str] = &["expression"];

    type Params = CalcParams;

    fn execute(params: &Self::Params, ctx: &CommandContext) -> CallToolResult {
        let cmd = ctx
            .taskwarrior
            .command("calc")
            .with_modification(params.expression.as_str());

        command_result(ctx.run_task(&cmd))
    }
}

/// Pass-through for anything the dedicated tools do not cover.
pub struct TaskRawTool;

impl CommandTool for TaskRawTool {
    const NAME: &'static str = "task_raw";
    const DESCRIPTION: &'static str =
        "Run a raw task command. The first word is the subcommand; quotes are not interpreted.";
    const CONFIRMATION: Confirmation = Confirmation::Required;
    const REQUIRED: &'static [&'static str] = &["command"];

    type Params = RawParams;

    fn execute(params: &Self::Params, ctx: &CommandContext) -> CallToolResult {
        command_result(ctx.run_task(&ctx.taskwarrior.raw(&params.command)))
    }
}

/// Parameters for `task_config`.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ConfigParams {
    /// Configuration setting to view or set.
    #[serde(default, deserialize_with = "lenient_string")]
    #[schemars(with = "String")]
    pub name: String,

    /// Value to set. Leave empty to view the setting.
    #[serde(default, deserialize_with = "lenient_string")]
    #[schemars(with = "String")]
    pub value: String,
}

pub struct TaskConfigTool;

impl CommandTool for TaskConfigTool {
    const NAME: &'static str = "task_config";
    const DESCRIPTION: &'static str =
        "View or modify Taskwarrior configuration. Without a name, lists all settings.";
    const CONFIRMATION: Confirmation = Confirmation::WhenModifying;

    type Params = ConfigParams;

    fn execute(params: &Self::Params, ctx: &CommandContext) -> CallToolResult {
        let mut cmd = ctx.taskwarrior.command("config");
        if !params.name.is_empty() {
            cmd = cmd.with_modification(params.name.as_str());
            if !params.value.is_empty() {
                cmd = cmd.with_modification(params.value.as_str());
            }
        }

        command_result(ctx.run_task(&cmd))
    }
}

pub struct TaskPurgeTool;

impl CommandTool for TaskPurgeTool {
    const NAME: &'static str = "task_purge";
    const DESCRIPTION: &'static str = "Permanently remove deleted tasks from the database.";
    const CONFIRMATION: Confirmation = Confirmation::Required;
    const REQUIRED: &'static [&'static str] = &["filter"];

    type Params = FilterParams;

    fn execute(params: &Self::Params, ctx: &CommandContext) -> CallToolResult {
        let cmd = ctx
            .taskwarrior
            .command("purge")
            .with_filters(split_terms(&params.filter));

        command_result(ctx.run_task(&cmd))
    }
}

/// Parameters for `task_import`.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ImportParams {
    /// JSON array of tasks to import.
    #[serde(default, deserialize_with = "lenient_string")]
    #[schemars(with = "String")]
    pub json_data: String,
}

/// Bulk import. The payload goes through a temporary file, never the
/// command line.
pub struct TaskImportTool;

impl CommandTool for TaskImportTool {
    const NAME: &'static str = "task_import";
    const DESCRIPTION: &'static str = "Import tasks from JSON for bulk state updates.";
    const CONFIRMATION: Confirmation = Confirmation::Required;
    const REQUIRED: &'static [&'static str] = &["json_data"];

    type Params = ImportParams;

    fn execute(params: &Self::Params, ctx: &CommandContext) -> CallToolResult {
        let staged = match StagedPayload::write("task_import_", ".json", &params.json_data) {
            Ok(staged) => staged,
            Err(e) => return command_result(Err(e)),
        };

        let cmd = ctx
            .taskwarrior
            .command("import")
            .with_modification(staged.arg());

        // `staged` is dropped on return, removing the file whatever the outcome.
        command_result(ctx.run_task(&cmd))
    }
}
