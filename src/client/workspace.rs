// ABOUTME: Workspace operations - list, get, create, delete, copy, move, share, download.
// ABOUTME: Builds each method's parameter mapping and decodes object tuples.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use super::{
    BvbrcClient, CreateParams, DeleteParams, DownloadUrlParams, Flag, GetParams, LsParams,
    SetPermissionsParams, TransferParams, WorkspaceObject, first, items,
};
use crate::error::RpcError;

impl BvbrcClient {
    /// List directories. Maps each requested path to its entries.
    pub async fn workspace_ls(
        &self,
        paths: &[String],
        recursive: bool,
    ) -> Result<BTreeMap<String, Vec<WorkspaceObject>>, RpcError> {
        let params = LsParams {
            paths: paths.to_vec(),
            recursive: recursive.into(),
        };
        let result = self.workspace_call("Workspace.ls", &params).await?;

        let listing = match first(result) {
            Some(Value::Object(entries)) => entries
                .into_iter()
                .map(|(path, tuples)| (path, decode_all(Some(tuples))))
                .collect(),
            _ => BTreeMap::new(),
        };
        Ok(listing)
    }

    /// Get objects, with content unless `metadata_only` is set.
    pub async fn workspace_get(
        &self,
        paths: &[String],
        metadata_only: bool,
    ) -> Result<Vec<WorkspaceObject>, RpcError> {
        let params = GetParams {
            objects: paths.to_vec(),
            metadata_only: metadata_only.into(),
        };
        let result = self.workspace_call("Workspace.get", &params).await?;
        Ok(items(first(result)).iter().map(decode_get_item).collect())
    }

    /// Create one object. `overwrite` is only sent when true.
    pub async fn workspace_create(
        &self,
        path: &str,
        object_type: &str,
        content: Option<&str>,
        overwrite: bool,
    ) -> Result<WorkspaceObject, RpcError> {
        let params = CreateParams {
            objects: vec![(
                path.to_string(),
                object_type.to_string(),
                Map::new(),
                content.map(str::to_string),
            )],
            overwrite: overwrite.into(),
        };
        let result = self.workspace_call("Workspace.create", &params).await?;
        let created = items(first(result)).into_iter().next().ok_or_else(|| {
            RpcError::Malformed(format!("Workspace.create returned no object for {}", path))
        })?;
        Ok(WorkspaceObject::from_value(&created))
    }

    /// Delete objects. Directories are always deleted recursively.
    pub async fn workspace_delete(&self, paths: &[String], force: bool) -> Result<(), RpcError> {
        let params = DeleteParams {
            objects: paths.to_vec(),
            delete_directories: true,
            force: force.into(),
        };
        self.workspace_call("Workspace.delete", &params).await?;
        Ok(())
    }

    /// Copy an object or folder tree.
    pub async fn workspace_copy(
        &self,
        source: &str,
        destination: &str,
    ) -> Result<Vec<WorkspaceObject>, RpcError> {
        let params = TransferParams {
            objects: vec![(source.to_string(), destination.to_string())],
            recursive: Flag::SET,
        };
        let result = self.workspace_call("Workspace.copy", &params).await?;
        Ok(decode_all(first(result)))
    }

    /// Move or rename an object.
    pub async fn workspace_move(
        &self,
        source: &str,
        destination: &str,
    ) -> Result<Vec<WorkspaceObject>, RpcError> {
        let params = TransferParams {
            objects: vec![(source.to_string(), destination.to_string())],
            recursive: Flag::UNSET,
        };
        let result = self.workspace_call("Workspace.move", &params).await?;
        Ok(decode_all(first(result)))
    }

    /// Set `(user, permission)` pairs on an object.
    pub async fn workspace_set_permissions(
        &self,
        path: &str,
        permissions: &[(String, String)],
    ) -> Result<(), RpcError> {
        let params = SetPermissionsParams {
            path: path.to_string(),
            permissions: permissions.to_vec(),
        };
        self.workspace_call("Workspace.set_permissions", &params).await?;
        Ok(())
    }

    /// Download URLs keyed by requested path. Paths without a URL are absent.
    pub async fn workspace_get_download_url(
        &self,
        paths: &[String],
    ) -> Result<BTreeMap<String, String>, RpcError> {
        let params = DownloadUrlParams {
            objects: paths.to_vec(),
        };
        let result = self.workspace_call("Workspace.get_download_url", &params).await?;

        let urls = match first(result) {
            Some(Value::Object(urls)) => urls
                .into_iter()
                .filter_map(|(path, url)| url_string(url).map(|url| (path, url)))
                .collect(),
            Some(Value::Array(urls)) => paths
                .iter()
                .zip(urls)
                .filter_map(|(path, url)| url_string(url).map(|url| (path.clone(), url)))
                .collect(),
            _ => BTreeMap::new(),
        };
        Ok(urls)
    }

    async fn workspace_call<P: Serialize>(&self, method: &str, params: &P) -> Result<Value, RpcError> {
        let params = serde_json::to_value(params)?;
        self.call_workspace(method, vec![params]).await
    }
}

fn decode_all(tuples: Option<Value>) -> Vec<WorkspaceObject> {
    items(tuples).iter().map(WorkspaceObject::from_value).collect()
}

/// `Workspace.get` items may be a bare tuple or a `[tuple, data]` pair.
fn decode_get_item(item: &Value) -> WorkspaceObject {
    match item.as_array().map(Vec::as_slice) {
        Some([Value::Array(meta), data]) => {
            let mut object = WorkspaceObject::from_tuple(meta);
            if let Some(data) = data.as_str().filter(|d| !d.is_empty()) {
                object.data = Some(data.to_string());
            }
            object
        }
        _ => WorkspaceObject::from_value(item),
    }
}

fn url_string(url: Value) -> Option<String> {
    match url {
        Value::String(url) if !url.is_empty() => Some(url),
        _ => None,
    }
}
