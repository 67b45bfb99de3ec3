// ABOUTME: AppService operations - app catalog, job submission, status, cancellation.
// ABOUTME: Each method unwraps the single-element result list and decodes records.

use std::collections::BTreeMap;

use serde_json::{Map, Value, json};

use super::{AppDescription, BvbrcClient, Task, first, items};
use crate::error::RpcError;

/// `kill_task` reports success with exactly this value.
const KILL_SUCCESS: i64 = 1;

impl BvbrcClient {
    /// List all available applications.
    pub async fn enumerate_apps(&self) -> Result<Vec<AppDescription>, RpcError> {
        let result = self.call_app_service("AppService.enumerate_apps", vec![]).await?;
        Ok(items(first(result))
            .iter()
            .map(AppDescription::from_record)
            .collect())
    }

    /// Get the description of one application, if the server knows it.
    pub async fn query_app_description(
        &self,
        app_id: &str,
    ) -> Result<Option<AppDescription>, RpcError> {
        let result = self
            .call_app_service("AppService.query_app_description", vec![json!(app_id)])
            .await?;
        Ok(first(result).as_ref().map(AppDescription::from_record))
    }

    /// Submit a new job.
    pub async fn start_app(
        &self,
        app_id: &str,
        params: Map<String, Value>,
        output_path: &str,
    ) -> Result<Task, RpcError> {
        let result = self
            .call_app_service(
                "AppService.start_app",
                vec![json!(app_id), Value::Object(params), json!(output_path)],
            )
            .await?;
        let record = first(result)
            .ok_or_else(|| RpcError::Malformed("AppService.start_app returned no task".into()))?;
        Ok(Task::from_record(&record))
    }

    /// Query task status. Ids the server does not return are absent from the map.
    pub async fn query_tasks(&self, task_ids: &[String]) -> Result<BTreeMap<String, Task>, RpcError> {
        let result = self
            .call_app_service("AppService.query_tasks", vec![json!(task_ids)])
            .await?;
        let tasks = match first(result) {
            Some(Value::Object(records)) => records
                .iter()
                .map(|(id, record)| (id.clone(), Task::from_record(record)))
                .collect(),
            _ => BTreeMap::new(),
        };
        Ok(tasks)
    }

    /// List the caller's tasks, most recent first.
    pub async fn enumerate_tasks(&self, offset: i64, limit: i64) -> Result<Vec<Task>, RpcError> {
        let result = self
            .call_app_service("AppService.enumerate_tasks", vec![json!(offset), json!(limit)])
            .await?;
        Ok(items(first(result)).iter().map(Task::from_record).collect())
    }

    /// Cancel a task. Returns `false` unless the server answers with the success value.
    pub async fn kill_task(&self, task_id: &str) -> Result<bool, RpcError> {
        let result = self
            .call_app_service("AppService.kill_task", vec![json!(task_id)])
            .await?;
        Ok(first(result).and_then(|v| v.as_i64()) == Some(KILL_SUCCESS))
    }

    /// Fetch a task's log. An empty string means no log was available.
    #[cfg(feature = "app-log")]
    pub async fn query_app_log(&self, task_id: &str) -> Result<String, RpcError> {
        let result = self
            .call_app_service("AppService.query_app_log", vec![json!(task_id)])
            .await?;
        let log = match result {
            Value::String(log) => log,
            Value::Array(items) => match items.into_iter().next() {
                Some(Value::String(log)) => log,
                Some(Value::Null) | None => String::new(),
                Some(other) => other.to_string(),
            },
            _ => String::new(),
        };
        Ok(log)
    }
}
