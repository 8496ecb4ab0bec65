//! Taskwarrior tools.
//!
//! Every tool runs `task` through the task-family profile, so the
//! configured overrides lead the argument vector and `TASKRC` is set.

pub mod annotations;
pub mod lifecycle;
pub mod maintenance;
pub mod records;
pub mod reports;

pub use annotations::{TaskAnnotateTool, TaskAppendTool, TaskDenoteTool, TaskPrependTool};
pub use lifecycle::{TaskDeleteTool, TaskDoneTool, TaskStartTool, TaskStopTool, TaskUndoTool};
pub use maintenance::{TaskCalcTool, TaskConfigTool, TaskImportTool, TaskPurgeTool, TaskRawTool};
pub use records::{TaskAddTool, TaskListTool, TaskLogTool, TaskModifyTool};
pub use reports::{
    TaskDiagnosticsTool, TaskProjectsTool, TaskStatsTool, TaskTagsTool, TaskUdasTool,
};
