//! Tools domain module.
//!
//! This module exposes the Taskwarrior and Timewarrior subcommands as MCP
//! tools. Each tool turns its arguments into exactly one command invocation
//! and returns the command's output as text.
//!
//! ## Architecture
//!
//! - `definitions/` - Tool implementations, grouped by family (`task/`, `timew/`)
//! - `router.rs` - ToolRouter builder; every route calls into the registry
//! - `registry.rs` - Tool name to handler dispatch table
//! - `handlers.rs` - Command outcome to `CallToolResult` translation
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Implement `CommandTool` for a new type in the matching family module
//! 2. Export it from `definitions/mod.rs`
//! 3. Add it to `for_each_tool!` and the `call_tool` match in `registry.rs`

pub mod definitions;
mod error;
mod handlers;
mod registry;
pub mod router;

pub use error::ToolError;
pub use handlers::*;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
