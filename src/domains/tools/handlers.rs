//! Translation of command outcomes into MCP tool results.
//!
//! Every tool funnels its [`CommandError`] through here, so a failing
//! external command always becomes an error *result* (visible to the agent,
//! `isError: true`) and never a protocol fault.

use rmcp::model::{CallToolResult, Content, RawContent};
use tracing::warn;

use crate::domains::commands::CommandError;

/// Wrap a command outcome: output text verbatim on success, the full error
/// text (cause plus captured output) on failure.
pub fn command_result(outcome: Result<String, CommandError>) -> CallToolResult {
    match outcome {
        Ok(output) => CallToolResult::success(vec![Content::text(output)]),
        Err(e) => {
            warn!("Command failed: {}", e);
            CallToolResult::error(vec![Content::text(e.to_string())])
        }
    }
}

/// Extract the first text block of a result.
pub fn result_text(result: &CallToolResult) -> Option<&str> {
    match &result.content.first()?.raw {
        RawContent::Text(text) => Some(text.text.as_str()),
        _ => None,
    }
}
