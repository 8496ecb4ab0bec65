//! Time tracking reports.

use rmcp::model::CallToolResult;

use super::super::params::RangeParams;
use super::super::{CommandTool, Confirmation};
use crate::domains::commands::{CommandContext, split_terms};
use crate::domains::tools::handlers::command_result;

/// Run a report over `range`; an empty range lets `timew` pick its default.
fn report(operation: &str, params: &RangeParams, ctx: &CommandContext) -> CallToolResult {
    let cmd = ctx
        .timewarrior
        .command(operation)
        .with_modifications(split_terms(&params.range));

    command_result(ctx.run_timew(&cmd))
}

pub struct TimewSummaryTool;

impl CommandTool for TimewSummaryTool {
    const NAME: &'static str = "timew_summary";
    const DESCRIPTION: &'static str = "Get a time tracking summary.";
    const CONFIRMATION: Confirmation = Confirmation::NotNeeded;

    type Params = RangeParams;

    fn execute(params: &Self::Params, ctx: &CommandContext) -> CallToolResult {
        report("summary", params, ctx)
    }
}

pub struct TimewExportTool;

impl CommandTool for TimewExportTool {
    const NAME: &'static str = "timew_export";
    const DESCRIPTION: &'static str = "Export tracked intervals as JSON.";
    const CONFIRMATION: Confirmation = Confirmation::NotNeeded;

    type Params = RangeParams;

    fn execute(params: &Self::Params, ctx: &CommandContext) -> CallToolResult {
        report("export", params, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::testing::{invocation, timew_args};
    use serde_json::json;

    #[test]
    fn test_summary_with_range() {
        let call = invocation::<TimewSummaryTool>(json!({ "range": ":week" }));
        assert_eq!(timew_args(&call), vec!["summary", ":week"]);
    }

    #[test]
    fn test_export_range_is_split() {
        let call = invocation::<TimewExportTool>(json!({ "range": "2024-01-01 - 2024-01-31" }));
        assert_eq!(
            timew_args(&call),
            vec!["export", "2024-01-01", "-", "2024-01-31"]
        );
    }

    #[test]
    fn test_empty_range_is_omitted() {
        let call = invocation::<TimewExportTool>(json!({ "range": "" }));
        assert_eq!(timew_args(&call), vec!["export"]);
    }
}
