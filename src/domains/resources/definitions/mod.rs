//! Resource definitions module.
//!
//! Each resource declares its URI, metadata and where its content comes
//! from. Reading is done by the service.

mod reports;
mod taskrc;

pub use reports::{
    TaskDiagnosticsResource, TaskProjectsResource, TaskSummaryResource, TaskTagsResource,
    TaskUdasResource,
};
pub use taskrc::TaskConfigResource;

use super::service::ResourceContent;

/// Trait for resource definitions.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str = "text/plain";

    /// Where the content for this resource comes from.
    fn content() -> ResourceContent;
}
