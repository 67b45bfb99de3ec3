// ABOUTME: Workspace tools - list, get, create, upload, delete, copy, move, share, download.
// ABOUTME: Thin wrappers that call BvbrcClient workspace methods and format the result.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::client::BvbrcClient;
use crate::error::BvbrcError;
use crate::tool::{Tool, parse_args, to_json};

/// Object type used by `workspace_upload` when none is given.
pub const DEFAULT_UPLOAD_TYPE: &str = "unspecified";

#[derive(Deserialize)]
struct PathArgs {
    path: String,
}

#[derive(Deserialize)]
struct TransferArgs {
    source: String,
    destination: String,
}

fn transfer_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "source": { "type": "string", "description": "Source workspace path" },
            "destination": { "type": "string", "description": "Destination workspace path" }
        },
        "required": ["source", "destination"]
    })
}

/// Lists a workspace directory.
pub struct WorkspaceListTool {
    client: Arc<BvbrcClient>,
}

impl WorkspaceListTool {
    pub fn new(client: Arc<BvbrcClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for WorkspaceListTool {
    fn name(&self) -> &str {
        "workspace_list"
    }

    fn description(&self) -> &str {
        "List contents of a BV-BRC workspace directory"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "path": { "type": "string", "description": "Workspace path" },
                "recursive": { "type": "boolean", "default": false }
            },
            "required": ["path"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<String, BvbrcError> {
        #[derive(Deserialize)]
        struct Params {
            path: String,
            #[serde(default)]
            recursive: bool,
        }
        let params: Params = parse_args(params)?;

        let listing = self.client.workspace_ls(&[params.path], params.recursive).await?;
        to_json(&listing)
    }
}

/// Fetches one object's metadata and optionally its content.
pub struct WorkspaceGetTool {
    client: Arc<BvbrcClient>,
}

impl WorkspaceGetTool {
    pub fn new(client: Arc<BvbrcClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for WorkspaceGetTool {
    fn name(&self) -> &str {
        "workspace_get"
    }

    fn description(&self) -> &str {
        "Get file metadata and optionally content from BV-BRC workspace"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "path": { "type": "string" },
                "metadata_only": { "type": "boolean", "default": false }
            },
            "required": ["path"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<String, BvbrcError> {
        #[derive(Deserialize)]
        struct Params {
            path: String,
            #[serde(default)]
            metadata_only: bool,
        }
        let params: Params = parse_args(params)?;

        let objects = self
            .client
            .workspace_get(&[params.path], params.metadata_only)
            .await?;
        to_json(&objects.first())
    }
}

/// Creates a folder.
pub struct WorkspaceCreateFolderTool {
    client: Arc<BvbrcClient>,
}

impl WorkspaceCreateFolderTool {
    pub fn new(client: Arc<BvbrcClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for WorkspaceCreateFolderTool {
    fn name(&self) -> &str {
        "workspace_create_folder"
    }

    fn description(&self) -> &str {
        "Create a new folder in the BV-BRC workspace"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": { "path": { "type": "string" } },
            "required": ["path"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<String, BvbrcError> {
        let params: PathArgs = parse_args(params)?;
        let created = self
            .client
            .workspace_create(&params.path, "folder", None, false)
            .await?;
        to_json(&created)
    }
}

/// Uploads inline content, overwriting any existing object.
pub struct WorkspaceUploadTool {
    client: Arc<BvbrcClient>,
}

impl WorkspaceUploadTool {
    pub fn new(client: Arc<BvbrcClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for WorkspaceUploadTool {
    fn name(&self) -> &str {
        "workspace_upload"
    }

    fn description(&self) -> &str {
        "Upload file content to the BV-BRC workspace"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "path": { "type": "string" },
                "content": { "type": "string" },
                "type": { "type": "string", "default": DEFAULT_UPLOAD_TYPE }
            },
            "required": ["path", "content"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<String, BvbrcError> {
        #[derive(Deserialize)]
        struct Params {
            path: String,
            content: String,
            #[serde(rename = "type")]
            object_type: Option<String>,
        }
        let params: Params = parse_args(params)?;

        let object_type = params.object_type.as_deref().unwrap_or(DEFAULT_UPLOAD_TYPE);
        let created = self
            .client
            .workspace_create(&params.path, object_type, Some(&params.content), true)
            .await?;
        to_json(&created)
    }
}

/// Deletes a file or folder.
pub struct WorkspaceDeleteTool {
    client: Arc<BvbrcClient>,
}

impl WorkspaceDeleteTool {
    pub fn new(client: Arc<BvbrcClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for WorkspaceDeleteTool {
    fn name(&self) -> &str {
        "workspace_delete"
    }

    fn description(&self) -> &str {
        "Delete a file or folder from the BV-BRC workspace"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "path": { "type": "string" },
                "force": { "type": "boolean", "default": false }
            },
            "required": ["path"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<String, BvbrcError> {
        #[derive(Deserialize)]
        struct Params {
            path: String,
            #[serde(default)]
            force: bool,
        }
        let params: Params = parse_args(params)?;

        self.client
            .workspace_delete(std::slice::from_ref(&params.path), params.force)
            .await?;
        Ok(format!("Deleted: {}", params.path))
    }
}

/// Copies a file or folder.
pub struct WorkspaceCopyTool {
    client: Arc<BvbrcClient>,
}

impl WorkspaceCopyTool {
    pub fn new(client: Arc<BvbrcClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for WorkspaceCopyTool {
    fn name(&self) -> &str {
        "workspace_copy"
    }

    fn description(&self) -> &str {
        "Copy a file or folder in the BV-BRC workspace"
    }

    fn schema(&self) -> serde_json::Value {
        transfer_schema()
    }

    async fn execute(&self, params: serde_json::Value) -> Result<String, BvbrcError> {
        let params: TransferArgs = parse_args(params)?;
        let copied = self
            .client
            .workspace_copy(&params.source, &params.destination)
            .await?;
        to_json(&copied)
    }
}

/// Moves or renames a file or folder.
pub struct WorkspaceMoveTool {
    client: Arc<BvbrcClient>,
}

impl WorkspaceMoveTool {
    pub fn new(client: Arc<BvbrcClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for WorkspaceMoveTool {
    fn name(&self) -> &str {
        "workspace_move"
    }

    fn description(&self) -> &str {
        "Move or rename a file or folder in the BV-BRC workspace"
    }

    fn schema(&self) -> serde_json::Value {
        transfer_schema()
    }

    async fn execute(&self, params: serde_json::Value) -> Result<String, BvbrcError> {
        let params: TransferArgs = parse_args(params)?;
        let moved = self
            .client
            .workspace_move(&params.source, &params.destination)
            .await?;
        to_json(&moved)
    }
}

/// Grants a user a permission on an object.
pub struct WorkspaceShareTool {
    client: Arc<BvbrcClient>,
}

impl WorkspaceShareTool {
    pub fn new(client: Arc<BvbrcClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for WorkspaceShareTool {
    fn name(&self) -> &str {
        "workspace_share"
    }

    fn description(&self) -> &str {
        "Set sharing permissions on a workspace object"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "path": { "type": "string" },
                "user": { "type": "string" },
                "permission": { "type": "string", "enum": ["r", "w", "n"] }
            },
            "required": ["path", "user", "permission"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<String, BvbrcError> {
        #[derive(Deserialize)]
        struct Params {
            path: String,
            user: String,
            permission: String,
        }
        let params: Params = parse_args(params)?;

        let permissions = [(params.user.clone(), params.permission.clone())];
        self.client
            .workspace_set_permissions(&params.path, &permissions)
            .await?;
        Ok(format!(
            "Permission '{}' set for {} on {}",
            params.permission, params.user, params.path
        ))
    }
}

/// Resolves a download URL for one file.
pub struct WorkspaceDownloadUrlTool {
    client: Arc<BvbrcClient>,
}

impl WorkspaceDownloadUrlTool {
    pub fn new(client: Arc<BvbrcClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for WorkspaceDownloadUrlTool {
    fn name(&self) -> &str {
        "workspace_download_url"
    }

    fn description(&self) -> &str {
        "Get a download URL for a workspace file"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": { "path": { "type": "string" } },
            "required": ["path"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<String, BvbrcError> {
        let params: PathArgs = parse_args(params)?;
        let mut urls = self
            .client
            .workspace_get_download_url(std::slice::from_ref(&params.path))
            .await?;
        to_json(&serde_json::json!({ "url": urls.remove(&params.path) }))
    }
}
