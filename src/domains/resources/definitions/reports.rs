//! Resources backed by a `task` report.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;

pub struct TaskSummaryResource;

impl ResourceDefinition for TaskSummaryResource {
    const URI: &'static str = "task://summary";
    const NAME: &'static str = "Taskwarrior Summary";
    const DESCRIPTION: &'static str = "A high-level summary of active projects and pending tasks";

    fn content() -> ResourceContent {
        ResourceContent::TaskReport("summary")
    }
}

pub struct TaskTagsResource;

impl ResourceDefinition for TaskTagsResource {
    const URI: &'static str = "task://tags";
    const NAME: &'static str = "Taskwarrior Tags";
    const DESCRIPTION: &'static str = "List of all unique tags used in Taskwarrior";

    fn content() -> ResourceContent {
        ResourceContent::TaskReport("tags")
    }
}

pub struct TaskProjectsResource;

impl ResourceDefinition for TaskProjectsResource {
    const URI: &'static str = "task://projects";
    const NAME: &'static str = "Taskwarrior Projects";
    const DESCRIPTION: &'static str = "List of all unique projects in Taskwarrior";

    fn content() -> ResourceContent {
        ResourceContent::TaskReport("projects")
    }
}

pub struct TaskUdasResource;

impl ResourceDefinition for TaskUdasResource {
    const URI: &'static str = "task://udas";
    const NAME: &'static str = "Taskwarrior UDAs";
    const DESCRIPTION: &'static str = "List of all User Defined Attributes configured";

    fn content() -> ResourceContent {
        ResourceContent::TaskReport("udas")
    }
}

pub struct TaskDiagnosticsResource;

impl ResourceDefinition for TaskDiagnosticsResource {
    const URI: &'static str = "task://diagnostics";
    const NAME: &'static str = "Taskwarrior Diagnostics";
    const DESCRIPTION: &'static str =
        "Taskwarrior diagnostic information (config, version, environment)";

    fn content() -> ResourceContent {
        ResourceContent::TaskReport("diagnostics")
    }
}
