// ABOUTME: The BV-BRC tool catalog - workspace, app, and job tools.
// ABOUTME: catalog() builds the fixed registry the router dispatches through.

mod apps;
mod jobs;
mod workspace;

pub use apps::{AppSchemaTool, AppsListTool};
pub use jobs::{
    DEFAULT_JOB_LIST_LIMIT, JobCancelTool, JobListTool, JobLogsTool, JobStatusTool, JobSubmitTool,
    MAX_JOB_LIST_LIMIT, clamp_limit,
};
pub use workspace::{
    DEFAULT_UPLOAD_TYPE, WorkspaceCopyTool, WorkspaceCreateFolderTool, WorkspaceDeleteTool,
    WorkspaceDownloadUrlTool, WorkspaceGetTool, WorkspaceListTool, WorkspaceMoveTool,
    WorkspaceShareTool, WorkspaceUploadTool,
};

use std::sync::Arc;

use crate::client::BvbrcClient;
use crate::tool::Registry;

/// Build the full tool catalog in its advertised order.
pub fn catalog(client: Arc<BvbrcClient>) -> Registry {
    let mut registry = Registry::new();

    registry.register(WorkspaceListTool::new(client.clone()));
    registry.register(WorkspaceGetTool::new(client.clone()));
    registry.register(WorkspaceCreateFolderTool::new(client.clone()));
    registry.register(WorkspaceUploadTool::new(client.clone()));
    registry.register(WorkspaceDeleteTool::new(client.clone()));
    registry.register(WorkspaceCopyTool::new(client.clone()));
    registry.register(WorkspaceMoveTool::new(client.clone()));
    registry.register(WorkspaceShareTool::new(client.clone()));
    registry.register(WorkspaceDownloadUrlTool::new(client.clone()));

    registry.register(AppsListTool::new(client.clone()));
    registry.register(AppSchemaTool::new(client.clone()));

    registry.register(JobSubmitTool::new(client.clone()));
    registry.register(JobStatusTool::new(client.clone()));
    registry.register(JobListTool::new(client.clone()));
    registry.register(JobCancelTool::new(client.clone()));
    registry.register(JobLogsTool::new(client));

    registry
}
