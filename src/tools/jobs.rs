// ABOUTME: Job tools - submit, status, list, cancel, and the log-location hint.
// ABOUTME: job_logs answers from task status because the log RPC is unavailable.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::BvbrcClient;
use crate::error::BvbrcError;
use crate::tool::{Tool, parse_args, to_json};

pub const DEFAULT_JOB_LIST_LIMIT: i64 = 25;
pub const MAX_JOB_LIST_LIMIT: i64 = 100;

/// Cap a requested page size at [`MAX_JOB_LIST_LIMIT`]. Out-of-range input is not an error.
pub fn clamp_limit(limit: i64) -> i64 {
    limit.min(MAX_JOB_LIST_LIMIT)
}

#[derive(Deserialize)]
struct TaskIdArgs {
    task_id: String,
}

fn task_id_schema() -> Value {
    serde_json::json!({
        "type": "object",
        "properties": { "task_id": { "type": "string" } },
        "required": ["task_id"]
    })
}

/// Submits a job.
pub struct JobSubmitTool {
    client: Arc<BvbrcClient>,
}

impl JobSubmitTool {
    pub fn new(client: Arc<BvbrcClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for JobSubmitTool {
    fn name(&self) -> &str {
        "job_submit"
    }

    fn description(&self) -> &str {
        "Submit a new BV-BRC bioinformatics job"
    }

    fn schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "app_id": { "type": "string" },
                "params": { "type": "object" },
                "output_path": { "type": "string" }
            },
            "required": ["app_id", "params", "output_path"]
        })
    }

    async fn execute(&self, params: Value) -> Result<String, BvbrcError> {
        #[derive(Deserialize)]
        struct Params {
            app_id: String,
            params: Map<String, Value>,
            output_path: String,
        }
        let params: Params = parse_args(params)?;

        let task = self
            .client
            .start_app(&params.app_id, params.params, &params.output_path)
            .await?;
        to_json(&task)
    }
}

/// Reports the status of one or more jobs.
pub struct JobStatusTool {
    client: Arc<BvbrcClient>,
}

impl JobStatusTool {
    pub fn new(client: Arc<BvbrcClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for JobStatusTool {
    fn name(&self) -> &str {
        "job_status"
    }

    fn description(&self) -> &str {
        "Check the status of one or more BV-BRC jobs"
    }

    fn schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "task_ids": { "type": "array", "items": { "type": "string" } }
            },
            "required": ["task_ids"]
        })
    }

    async fn execute(&self, params: Value) -> Result<String, BvbrcError> {
        #[derive(Deserialize)]
        struct Params {
            task_ids: Vec<String>,
        }
        let params: Params = parse_args(params)?;

        let tasks = self.client.query_tasks(&params.task_ids).await?;
        to_json(&tasks)
    }
}

/// Pages through the caller's jobs.
pub struct JobListTool {
    client: Arc<BvbrcClient>,
}

impl JobListTool {
    pub fn new(client: Arc<BvbrcClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for JobListTool {
    fn name(&self) -> &str {
        "job_list"
    }

    fn description(&self) -> &str {
        "List recent BV-BRC jobs for the authenticated user"
    }

    fn schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "offset": { "type": "number", "default": 0 },
                "limit": { "type": "number", "default": DEFAULT_JOB_LIST_LIMIT }
            }
        })
    }

    async fn execute(&self, params: Value) -> Result<String, BvbrcError> {
        // "number" in the schema, so whole floats like 25.0 are accepted.
        #[derive(Deserialize)]
        struct Params {
            offset: Option<f64>,
            limit: Option<f64>,
        }
        let params: Params = parse_args(params)?;

        let offset = params.offset.map_or(0, |o| o as i64);
        let limit = clamp_limit(params.limit.map_or(DEFAULT_JOB_LIST_LIMIT, |l| l as i64));
        let tasks = self.client.enumerate_tasks(offset, limit).await?;
        to_json(&tasks)
    }
}

/// Cancels a queued or running job.
pub struct JobCancelTool {
    client: Arc<BvbrcClient>,
}

impl JobCancelTool {
    pub fn new(client: Arc<BvbrcClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for JobCancelTool {
    fn name(&self) -> &str {
        "job_cancel"
    }

    fn description(&self) -> &str {
        "Cancel a running or queued BV-BRC job"
    }

    fn schema(&self) -> Value {
        task_id_schema()
    }

    async fn execute(&self, params: Value) -> Result<String, BvbrcError> {
        let params: TaskIdArgs = parse_args(params)?;
        if self.client.kill_task(&params.task_id).await? {
            Ok(format!("Cancelled: {}", params.task_id))
        } else {
            Ok(format!("Failed to cancel: {}", params.task_id))
        }
    }
}

/// Where to look for a job's logs, since they cannot be fetched directly.
#[derive(Debug, Serialize)]
struct LogHint<'a> {
    note: &'static str,
    task_id: &'a str,
    status: &'a str,
    output_path: Option<&'a str>,
    suggestion: String,
}

/// Points at a job's output folder in place of fetching its logs.
pub struct JobLogsTool {
    client: Arc<BvbrcClient>,
}

impl JobLogsTool {
    pub fn new(client: Arc<BvbrcClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for JobLogsTool {
    fn name(&self) -> &str {
        "job_logs"
    }

    fn description(&self) -> &str {
        "Get execution logs for a BV-BRC job"
    }

    fn schema(&self) -> Value {
        task_id_schema()
    }

    async fn execute(&self, params: Value) -> Result<String, BvbrcError> {
        let params: TaskIdArgs = parse_args(params)?;
        let task_id = params.task_id;

        let tasks = self.client.query_tasks(std::slice::from_ref(&task_id)).await?;
        let Some(task) = tasks.get(&task_id) else {
            return Ok(format!("Task {} not found", task_id));
        };

        let output_path = task.output_path.as_deref();
        to_json(&LogHint {
            note: "Direct log retrieval is not available via API",
            task_id: &task_id,
            status: &task.status,
            output_path,
            suggestion: format!(
                "Use workspace_list on '{}' to find log files (.log, .err, .out)",
                output_path.unwrap_or_default()
            ),
        })
    }
}
