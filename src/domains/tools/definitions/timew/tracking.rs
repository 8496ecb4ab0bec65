//! Starting and stopping time tracking.

use rmcp::model::CallToolResult;

use super::super::params::{NoParams, TagsParams};
use super::super::{CommandTool, Confirmation};
use crate::domains::commands::{CommandContext, split_terms};
use crate::domains::tools::handlers::command_result;

fn track(operation: &str, params: &TagsParams, ctx: &CommandContext) -> CallToolResult {
    let cmd = ctx
        .timewarrior
        .command(operation)
        .with_modifications(split_terms(&params.tags));

    command_result(ctx.run_timew(&cmd))
}

pub struct TimewStartTool;

impl CommandTool for TimewStartTool {
    const NAME: &'static str = "timew_start";
    const DESCRIPTION: &'static str = "Start tracking time.";
    const CONFIRMATION: Confirmation = Confirmation::Required;

    type Params = TagsParams;

    fn execute(params: &Self::Params, ctx: &CommandContext) -> CallToolResult {
        track("start", params, ctx)
    }
}

pub struct TimewStopTool;

impl CommandTool for TimewStopTool {
    const NAME: &'static str = "timew_stop";
    const DESCRIPTION: &'static str =
        "Stop tracking time. Tags stop only the matching part of the open interval.";
    const CONFIRMATION: Confirmation = Confirmation::Required;

    type Params = TagsParams;

    fn execute(params: &Self::Params, ctx: &CommandContext) -> CallToolResult {
        track("stop", params, ctx)
    }
}

pub struct TimewContinueTool;

impl CommandTool for TimewContinueTool {
    const NAME: &'static str = "timew_continue";
    const DESCRIPTION: &'static str = "Continue tracking the most recent activity.";
    const CONFIRMATION: Confirmation = Confirmation::Required;

    type Params = NoParams;

    fn execute(_params: &Self::Params, ctx: &CommandContext) -> CallToolResult {
        command_result(ctx.run_timew(&ctx.timewarrior.command("continue")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::testing::{invocation, timew_args};
    use serde_json::json;

    #[test]
    fn test_start_splits_tags() {
        let call = invocation::<TimewStartTool>(json!({ "tags": "client-a  meeting" }));
        assert_eq!(timew_args(&call), vec!["start", "client-a", "meeting"]);
    }

    #[test]
    fn test_stop_without_tags() {
        let call = invocation::<TimewStopTool>(json!({}));
        assert_eq!(timew_args(&call), vec!["stop"]);
    }

    #[test]
    fn test_continue_is_operation_only() {
        let call = invocation::<TimewContinueTool>(json!({}));
        assert_eq!(timew_args(&call), vec!["continue"]);
    }
}
