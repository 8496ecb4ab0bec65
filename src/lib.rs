//! Warrior MCP Server Library
//!
//! A Model Context Protocol (MCP) server that exposes Taskwarrior (`task`)
//! and Timewarrior (`timew`) as tools for an AI agent.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler and transports
//! - **domains**: functionality organized by bounded context
//!   - **commands**: building and running `task`/`timew` command lines
//!   - **tools**: one MCP tool per supported subcommand
//!   - **resources**: the taskrc and read-only `task` reports
//!   - **prompts**: canned planning and setup-check prompts
//!
//! # Example
//!
//! ```rust,no_run
//! use warrior_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone());
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
