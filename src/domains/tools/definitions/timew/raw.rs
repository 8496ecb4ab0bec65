//! Raw Timewarrior pass-through.

use rmcp::model::CallToolResult;

use super::super::params::RawParams;
use super::super::{CommandTool, Confirmation};
use crate::domains::commands::CommandContext;
use crate::domains::tools::handlers::command_result;

pub struct TimewRawTool;

impl CommandTool for TimewRawTool {
    const NAME: &'static str = "timew_raw";
    const DESCRIPTION: &'static str =
        "Run a raw timew command. The first word is the subcommand; quotes are not interpreted.";
    const CONFIRMATION: Confirmation = Confirmation::Required;
    const REQUIRED: &'static [&'static str] = &["command"];

    type Params = RawParams;

    fn execute(params: &Self::Params, ctx: &CommandContext) -> CallToolResult {
        command_result(ctx.run_timew(&ctx.timewarrior.raw(&params.command)))
    }
}
