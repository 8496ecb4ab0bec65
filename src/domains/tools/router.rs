//! Tool Router - builds the rmcp ToolRouter served over the transports.
//!
//! Every route forwards to the shared [`ToolRegistry`], so the table that
//! answers protocol calls is the registry's `call_tool`. Execution happens on
//! tokio's blocking pool because each call waits on an external process.

use std::borrow::Cow;
use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
    model::{CallToolResult, JsonObject, Tool},
};
use serde_json::Value;

use super::error::ToolError;
use super::registry::ToolRegistry;
use crate::domains::commands::CommandContext;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(ctx: Arc<CommandContext>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    let registry = Arc::new(ToolRegistry::new(ctx));

    ToolRegistry::get_all_tools()
        .into_iter()
        .fold(ToolRouter::new(), |router, tool| {
            router.with_route(route(registry.clone(), tool))
        })
}

fn route<S>(registry: Arc<ToolRegistry>, tool: Tool) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    let name = tool.name.clone();
    ToolRoute::new_dyn(tool, move |call: ToolCallContext<'_, S>| {
        let arguments = call.arguments.clone().unwrap_or_default();
        dispatch(registry.clone(), name.clone(), arguments).boxed()
    })
}

/// Run one tool call through the registry on the blocking pool.
async fn dispatch(
    registry: Arc<ToolRegistry>,
    name: Cow<'static, str>,
    arguments: JsonObject,
) -> Result<CallToolResult, McpError> {
    tokio::task::spawn_blocking(move || registry.call_tool(&name, Value::Object(arguments)))
        .await
        .map_err(|e| tool_error(ToolError::internal(e.to_string())))?
        .map_err(tool_error)
}

fn tool_error(e: ToolError) -> McpError {
    match e {
        ToolError::NotFound(_) | ToolError::InvalidArguments(_) => {
            McpError::invalid_params(e.to_string(), None)
        }
        ToolError::Internal(_) => McpError::internal_error(e.to_string(), None),
    }
}
