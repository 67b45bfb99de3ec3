// ABOUTME: App catalog tools - list applications and fetch one app's parameter schema.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::client::{AppSummary, BvbrcClient};
use crate::error::BvbrcError;
use crate::tool::{Tool, parse_args, to_json};

/// Lists applications as `{id, label, description}` summaries.
pub struct AppsListTool {
    client: Arc<BvbrcClient>,
}

impl AppsListTool {
    pub fn new(client: Arc<BvbrcClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for AppsListTool {
    fn name(&self) -> &str {
        "apps_list"
    }

    fn description(&self) -> &str {
        "List all available BV-BRC bioinformatics applications"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({ "type": "object", "properties": {} })
    }

    async fn execute(&self, _params: serde_json::Value) -> Result<String, BvbrcError> {
        let apps = self.client.enumerate_apps().await?;
        let summary: Vec<AppSummary<'_>> = apps.iter().map(AppSummary::from).collect();
        to_json(&summary)
    }
}

/// Returns the full description of one application.
pub struct AppSchemaTool {
    client: Arc<BvbrcClient>,
}

impl AppSchemaTool {
    pub fn new(client: Arc<BvbrcClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for AppSchemaTool {
    fn name(&self) -> &str {
        "app_schema"
    }

    fn description(&self) -> &str {
        "Get the parameter schema for a specific BV-BRC application"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": { "app_id": { "type": "string" } },
            "required": ["app_id"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<String, BvbrcError> {
        #[derive(Deserialize)]
        struct Params {
            app_id: String,
        }
        let params: Params = parse_args(params)?;

        let app = self.client.query_app_description(&params.app_id).await?;
        to_json(&app)
    }
}
