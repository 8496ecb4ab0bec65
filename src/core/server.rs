//! MCP Server implementation.
//!
//! This module contains the server handler that implements the MCP protocol
//! by delegating to the domain services. Tool calls are routed through the
//! rmcp `ToolRouter` built in `domains/tools/router.rs`; resources and
//! prompts go through their services.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::{
    commands::{CommandContext, CommandRunner},
    prompts::{PromptError, PromptService},
    resources::{ResourceError, ResourceService},
    tools::build_tool_router,
};

const INSTRUCTIONS: &str = "Manages tasks with Taskwarrior (task_* tools) and time tracking with \
Timewarrior (timew_* tools). Tool output is the raw text of the command. Tools whose description \
says PROMPT FOR CONFIRMATION change data: ask the user before calling them. Use task_list to find \
task UUIDs before acting on a task.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Shared context used to run `task` and `timew`.
    context: Arc<CommandContext>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Service for handling prompt-related requests.
    prompt_service: Arc<PromptService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server that runs the real binaries.
    pub fn new(config: Config) -> Self {
        let context = CommandContext::new(&config);
        Self::with_context(config, context)
    }

    /// Create a server with a custom command runner.
    pub fn with_runner(config: Config, runner: Arc<dyn CommandRunner>) -> Self {
        let context = CommandContext::with_runner(&config, runner);
        Self::with_context(config, context)
    }

    fn with_context(config: Config, context: CommandContext) -> Self {
        let config = Arc::new(config);
        let context = Arc::new(context);

        let resource_service = Arc::new(ResourceService::new(
            context.clone(),
            config.taskwarrior.taskrc.clone(),
        ));
        let prompt_service = Arc::new(PromptService::new());

        Self {
            tool_router: build_tool_router::<Self>(context.clone()),
            config,
            context,
            resource_service,
            prompt_service,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the shared command context.
    pub fn context(&self) -> &Arc<CommandContext> {
        &self.context
    }

    /// All tools served by this instance.
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }
}

fn resource_error(e: ResourceError) -> McpError {
    match e {
        ResourceError::NotFound(_) => McpError::resource_not_found(e.to_string(), None),
        _ => McpError::internal_error(e.to_string(), None),
    }
}

fn prompt_error(e: PromptError) -> McpError {
    McpError::invalid_params(e.to_string(), None)
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(resource_error)
    }

    #[instrument(skip(self, _context))]
    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        info!("Listing prompts");
        let prompts = self.prompt_service.list_prompts().await;
        Ok(ListPromptsResult {
            prompts,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        info!("Getting prompt: {}", request.name);
        let arguments = request.arguments.map(|map| {
            map.into_iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k, s.to_string())))
                .collect()
        });
        self.prompt_service
            .get_prompt(&request.name, arguments)
            .await
            .map_err(prompt_error)
    }
}
