//! The Taskwarrior configuration file.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;

/// The resolved taskrc, read verbatim from disk.
pub struct TaskConfigResource;

impl ResourceDefinition for TaskConfigResource {
    const URI: &'static str = "task://config";
    const NAME: &'static str = "Taskwarrior Configuration";
    const DESCRIPTION: &'static str = "The content of the taskrc file";

    fn content() -> ResourceContent {
        ResourceContent::TaskrcFile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_config_metadata() {
        assert_eq!(TaskConfigResource::URI, "task://config");
        assert_eq!(TaskConfigResource::MIME_TYPE, "text/plain");
        assert!(matches!(TaskConfigResource::content(), ResourceContent::TaskrcFile));
    }
}
