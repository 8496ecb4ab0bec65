//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access.
//! Resources are defined in `definitions/` and registered via `registry.rs`.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use tracing::{debug, info};

use super::error::ResourceError;
use super::registry::get_all_resources;
use crate::domains::commands::CommandContext;

/// Service for managing and accessing resources.
pub struct ResourceService {
    /// Shared command context used for report resources.
    context: Arc<CommandContext>,

    /// The resolved taskrc path.
    taskrc: PathBuf,

    /// Registry of available resources.
    /// Key: resource URI, Value: resource metadata
    resources: HashMap<String, ResourceEntry>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Where a resource's content comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceContent {
    /// The taskrc file, read directly from disk.
    TaskrcFile,

    /// Output of an argument-free `task` operation.
    TaskReport(&'static str),
}

impl ResourceService {
    /// Create a new ResourceService.
    pub fn new(context: Arc<CommandContext>, taskrc: PathBuf) -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            context,
            taskrc,
            resources: HashMap::new(),
        };

        for entry in get_all_resources() {
            service.register_resource(entry);
        }

        service
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        debug!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .get(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let text = match entry.content {
            ResourceContent::TaskrcFile => tokio::fs::read_to_string(&self.taskrc)
                .await
                .map_err(|e| ResourceError::unreadable(self.taskrc.clone(), e))?,
            ResourceContent::TaskReport(operation) => self.run_report(operation).await?,
        };

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, uri)],
        })
    }

    /// Run a `task` report on the blocking pool.
    async fn run_report(&self, operation: &'static str) -> Result<String, ResourceError> {
        let context = self.context.clone();
        let output = tokio::task::spawn_blocking(move || {
            context.run_task(&context.taskwarrior.command(operation))
        })
        .await
        .map_err(|e| ResourceError::internal(e.to_string()))??;

        Ok(output)
    }
}
