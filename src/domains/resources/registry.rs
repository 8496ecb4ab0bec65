//! Resource Registry - central registration of all resources.
//!
//! When adding a new resource:
//! 1. Create the resource in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_resources()`

use rmcp::model::{AnnotateAble, RawResource};

use super::definitions::{
    ResourceDefinition, TaskConfigResource, TaskDiagnosticsResource, TaskProjectsResource,
    TaskSummaryResource, TaskTagsResource, TaskUdasResource,
};
use super::service::ResourceEntry;

/// Helper function to create an annotated resource from a definition.
fn build_resource<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        content: R::content(),
    }
}

/// Get all registered resources as ResourceEntries.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![
        build_resource::<TaskConfigResource>(),
        build_resource::<TaskSummaryResource>(),
        build_resource::<TaskTagsResource>(),
        build_resource::<TaskProjectsResource>(),
        build_resource::<TaskUdasResource>(),
        build_resource::<TaskDiagnosticsResource>(),
    ]
}

/// Get the list of all resource URIs.
pub fn resource_uris() -> Vec<&'static str> {
    vec![
        TaskConfigResource::URI,
        TaskSummaryResource::URI,
        TaskTagsResource::URI,
        TaskProjectsResource::URI,
        TaskUdasResource::URI,
        TaskDiagnosticsResource::URI,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_resources() {
        let resources = get_all_resources();
        assert_eq!(resources.len(), 6);

        let uris: Vec<_> = resources
            .iter()
            .map(|r| r.resource.raw.uri.as_str())
            .collect();
        assert_eq!(uris, resource_uris());
    }

    #[test]
    fn test_resources_are_plain_text() {
        for entry in get_all_resources() {
            assert_eq!(entry.resource.raw.mime_type.as_deref(), Some("text/plain"));
            assert!(entry.resource.raw.description.is_some());
        }
    }
}
