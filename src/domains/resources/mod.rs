//! Resources domain module.
//!
//! Read-only views of the Taskwarrior setup: the configuration file itself
//! and a handful of `task` reports, all served as plain text.
//!
//! ## Architecture
//!
//! - `definitions/` - Resource definitions (URI, metadata, content source)
//! - `registry.rs` - Central resource registration
//! - `service.rs` - Resource service for listing and reading
//!
//! ## Adding a New Resource
//!
//! 1. Implement the `ResourceDefinition` trait in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it in `registry.rs`

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::ResourceDefinition;
pub use error::ResourceError;
pub use registry::{get_all_resources, resource_uris};
pub use service::{ResourceContent, ResourceEntry, ResourceService};
