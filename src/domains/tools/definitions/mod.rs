//! Tool definitions module.
//!
//! Every tool is a zero-sized type implementing [`CommandTool`]: a name, a
//! description, a confirmation policy, a typed parameter struct and an
//! `execute()` that builds one [`WarriorCommand`] and runs it. Schema
//! generation and argument resolution are shared through the trait's
//! provided methods.
//!
//! Tools are grouped by family:
//! - `task/` - Taskwarrior (`task`)
//! - `timew/` - Timewarrior (`timew`)
//!
//! [`WarriorCommand`]: crate::domains::commands::WarriorCommand

pub mod params;
pub mod task;
pub mod timew;

use std::sync::Arc;

use rmcp::{
    handler::server::tool::schema_for_type,
    model::{CallToolResult, JsonObject, Tool, ToolAnnotations},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::info;

use super::error::ToolError;
use crate::domains::commands::CommandContext;

pub use task::{
    TaskAddTool, TaskAnnotateTool, TaskAppendTool, TaskCalcTool, TaskConfigTool, TaskDeleteTool,
    TaskDenoteTool, TaskDiagnosticsTool, TaskDoneTool, TaskImportTool, TaskListTool, TaskLogTool,
    TaskModifyTool, TaskPrependTool, TaskProjectsTool, TaskPurgeTool, TaskRawTool, TaskStartTool,
    TaskStatsTool, TaskStopTool, TaskTagsTool, TaskUdasTool, TaskUndoTool,
};
pub use timew::{
    TimewContinueTool, TimewExportTool, TimewRawTool, TimewStartTool, TimewStopTool,
    TimewSummaryTool,
};

/// Whether the calling agent should ask the user before invoking a tool.
///
/// Advisory only: it is surfaced in the description and the tool
/// annotations, the server itself always executes the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// The tool changes state; confirm first.
    Required,
    /// The tool only reads state.
    NotNeeded,
    /// The tool reads by default and writes when given a value.
    WhenModifying,
}

impl Confirmation {
    /// Sentence appended to the tool description.
    pub fn notice(self) -> &'static str {
        match self {
            Self::Required => "PROMPT FOR CONFIRMATION.",
            Self::NotNeeded => "NO CONFIRMATION NEEDED.",
            Self::WhenModifying => "PROMPT FOR CONFIRMATION when setting a value.",
        }
    }

    /// MCP behaviour hints matching this policy.
    pub fn annotations(self) -> ToolAnnotations {
        let (read_only, destructive) = match self {
            Self::Required => (false, true),
            Self::NotNeeded => (true, false),
            Self::WhenModifying => (false, false),
        };

        ToolAnnotations::new()
            .read_only(read_only)
            .destructive(destructive)
            .open_world(false)
    }
}

/// A tool backed by exactly one warrior command invocation.
pub trait CommandTool: Sized + 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients, without the confirmation notice.
    const DESCRIPTION: &'static str;

    /// Confirmation policy advertised to the agent.
    const CONFIRMATION: Confirmation;

    /// Fields advertised as required in the input schema.
    ///
    /// Missing fields still resolve to empty strings; the external tool
    /// reports what it cannot work with.
    const REQUIRED: &'static [&'static str] = &[];

    /// Typed arguments, resolved once from the untyped call payload.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Build and run the command, translating the outcome into a result.
    fn execute(params: &Self::Params, ctx: &CommandContext) -> CallToolResult;

    /// Full description including the confirmation notice.
    fn description() -> String {
        format!("{} {}", Self::DESCRIPTION, Self::CONFIRMATION.notice())
    }

    /// Input schema generated from `Params`, with the required list applied.
    fn input_schema() -> Arc<JsonObject> {
        let mut schema = JsonObject::clone(&schema_for_type::<Self::Params>());
        if !Self::REQUIRED.is_empty() {
            schema.insert("required".to_string(), Value::from(Self::REQUIRED.to_vec()));
        }
        Arc::new(schema)
    }

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::description().into()),
            input_schema: Self::input_schema(),
            annotations: Some(Self::CONFIRMATION.annotations()),
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Resolve an untyped payload into `Params`.
    ///
    /// `null` counts as "no arguments"; anything other than an object is a
    /// protocol-shape error.
    fn parse(arguments: Value) -> Result<Self::Params, ToolError> {
        let arguments = match arguments {
            Value::Object(map) => map,
            Value::Null => JsonObject::new(),
            other => {
                return Err(ToolError::invalid_arguments(format!(
                    "expected an object for '{}', got {}",
                    Self::NAME,
                    other
                )));
            }
        };

        serde_json::from_value(Value::Object(arguments))
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))
    }

    /// Resolve arguments and execute synchronously.
    fn call(arguments: Value, ctx: &CommandContext) -> Result<CallToolResult, ToolError> {
        let params = Self::parse(arguments)?;
        info!("Tool called: {}", Self::NAME);
        Ok(Self::execute(&params, ctx))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use rmcp::model::CallToolResult;
    use serde_json::Value;

    use super::CommandTool;
    use crate::core::config::DEFAULT_TASK_OVERRIDES;
    use crate::domains::commands::testing::{RecordedCall, RecordingRunner};

    /// Call `T` through a context backed by `runner`.
    pub fn call<T: CommandTool>(runner: &Arc<RecordingRunner>, arguments: Value) -> CallToolResult {
        let ctx = RecordingRunner::context(runner);
        T::call(arguments, &ctx).unwrap()
    }

    /// Call `T` with a succeeding runner and return the recorded invocation.
    pub fn invocation<T: CommandTool>(arguments: Value) -> RecordedCall {
        let runner = Arc::new(RecordingRunner::succeeding("ok"));
        call::<T>(&runner, arguments);
        runner.last_call()
    }

    /// Arguments following the default task overrides.
    pub fn task_tail(call: &RecordedCall) -> Vec<&str> {
        assert_eq!(call.program, "task");
        assert_eq!(call.args[..DEFAULT_TASK_OVERRIDES.len()], DEFAULT_TASK_OVERRIDES);
        call.args[DEFAULT_TASK_OVERRIDES.len()..]
            .iter()
            .map(String::as_str)
            .collect()
    }

    /// Arguments of a time-tracking call; the default overrides are empty.
    pub fn timew_args(call: &RecordedCall) -> Vec<&str> {
        assert_eq!(call.program, "timew");
        assert!(call.env.is_empty());
        call.args.iter().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_description_carries_confirmation_notice() {
        assert!(TaskAddTool::description().ends_with("PROMPT FOR CONFIRMATION."));
        assert!(TaskListTool::description().ends_with("NO CONFIRMATION NEEDED."));
        assert!(TaskConfigTool::description().ends_with("PROMPT FOR CONFIRMATION when setting a value."));
    }

    #[test]
    fn test_annotations_follow_policy() {
        let tool = TaskDeleteTool::to_tool();
        let annotations = tool.annotations.unwrap();
        assert_eq!(annotations.read_only_hint, Some(false));
        assert_eq!(annotations.destructive_hint, Some(true));

        let annotations = TimewSummaryTool::to_tool().annotations.unwrap();
        assert_eq!(annotations.read_only_hint, Some(true));
        assert_eq!(annotations.destructive_hint, Some(false));
    }

    #[test]
    fn test_input_schema_marks_required_fields() {
        let schema = TaskAnnotateTool::input_schema();
        assert_eq!(schema.get("required"), Some(&json!(["uuid", "text"])));
        assert!(schema["properties"].get("uuid").is_some());

        let schema = TaskListTool::input_schema();
        assert!(schema.get("required").is_none());
    }

    #[test]
    fn test_parse_rejects_non_objects() {
        let err = TaskDoneTool::parse(json!("abc")).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));

        let err = TaskDoneTool::parse(json!([1, 2])).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn test_parse_treats_null_as_empty() {
        let params = TaskDoneTool::parse(Value::Null).unwrap();
        assert_eq!(params.uuid, "");
    }
}
