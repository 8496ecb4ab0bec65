//! Error types and handling for the MCP server.
//!
//! Domain errors never reach this level: tool, resource and prompt failures
//! are mapped to MCP errors or error results inside the server handler. What
//! remains is what can stop the process itself.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that end the server.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport setup or serving failed.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}
