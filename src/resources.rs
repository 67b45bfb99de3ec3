// ABOUTME: Declarative MCP resources - the live app catalog and workspace type table.
// ABOUTME: Reading bvbrc://apps calls the app service; workspace types are static.

use serde::Serialize;

use crate::client::BvbrcClient;
use crate::error::{BvbrcError, ToolError};
use crate::tool::to_json;

pub const APPS_URI: &str = "bvbrc://apps";
pub const WORKSPACE_TYPES_URI: &str = "bvbrc://workspace-types";

const JSON_MIME: &str = "application/json";

/// A resource as advertised by `resources/list`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceInfo {
    pub uri: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "mimeType")]
    pub mime_type: &'static str,
}

/// A known workspace object type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkspaceType {
    #[serde(rename = "type")]
    pub name: &'static str,
    pub description: &'static str,
}

const fn ws_type(name: &'static str, description: &'static str) -> WorkspaceType {
    WorkspaceType { name, description }
}

pub const WORKSPACE_TYPES: [WorkspaceType; 14] = [
    ws_type("folder", "Directory/container"),
    ws_type("job_result", "Job output folder"),
    ws_type("contigs", "FASTA contigs"),
    ws_type("reads", "FASTQ reads"),
    ws_type("feature_group", "Genomic features"),
    ws_type("genome_group", "Genome collection"),
    ws_type("unspecified", "General file"),
    ws_type("txt", "Plain text"),
    ws_type("json", "JSON data"),
    ws_type("csv", "CSV data"),
    ws_type("html", "HTML report"),
    ws_type("pdf", "PDF document"),
    ws_type("nwk", "Newick tree"),
    ws_type("svg", "SVG graphic"),
];

pub fn list_resources() -> Vec<ResourceInfo> {
    vec![
        ResourceInfo {
            uri: APPS_URI,
            name: "BV-BRC Application Catalog",
            description: "List of available bioinformatics applications",
            mime_type: JSON_MIME,
        },
        ResourceInfo {
            uri: WORKSPACE_TYPES_URI,
            name: "Workspace Object Types",
            description: "Reference of valid workspace object types",
            mime_type: JSON_MIME,
        },
    ]
}

/// Render a resource's content as JSON text.
pub async fn read_resource(client: &BvbrcClient, uri: &str) -> Result<String, BvbrcError> {
    match uri {
        APPS_URI => {
            let apps = client.enumerate_apps().await?;
            to_json(&apps)
        }
        WORKSPACE_TYPES_URI => to_json(&WORKSPACE_TYPES),
        _ => Err(ToolError::UnknownResource(uri.to_string()).into()),
    }
}
