// ABOUTME: Tests for AppService operations - wire params and result decoding.
// ABOUTME: Uses the recording transport; no network access.

use serde_json::json;

use super::testing::{RecordingTransport, client_with};

#[tokio::test]
async fn test_enumerate_apps() {
    let transport = RecordingTransport::new().respond(json!([[
        {"id": "GenomeAssembly2", "label": "Assemble", "description": "Assemble reads"},
        {"id": "Date", "label": "Date"}
    ]]));
    let client = client_with(transport.clone());

    let apps = client.enumerate_apps().await.unwrap();

    let call = transport.only_call();
    assert_eq!(call.request.method, "AppService.enumerate_apps");
    assert!(call.request.params.is_empty());
    assert_eq!(apps.len(), 2);
    assert_eq!(apps[0].label, "Assemble");
    assert_eq!(apps[1].description, "");
}

#[tokio::test]
async fn test_enumerate_apps_null_result() {
    for result in [json!(null), json!([]), json!([null])] {
        let client = client_with(RecordingTransport::new().respond(result));
        assert!(client.enumerate_apps().await.unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_query_app_description() {
    let transport = RecordingTransport::new()
        .respond(json!([{"id": "Date", "label": "Date", "parameters": []}]));
    let client = client_with(transport.clone());

    let app = client.query_app_description("Date").await.unwrap().unwrap();
    assert_eq!(app.id, "Date");
    assert_eq!(app.parameters, Some(vec![]));
    assert_eq!(transport.only_call().request.params, vec![json!("Date")]);

    let client = client_with(RecordingTransport::new().respond(json!([])));
    assert!(client.query_app_description("Missing").await.unwrap().is_none());
}

#[tokio::test]
async fn test_start_app() {
    let transport = RecordingTransport::new().respond(json!([{
        "id": "16000001",
        "app": "Date",
        "owner": "alice@patricbrc.org",
        "status": "queued",
        "submit_time": "2024-05-01T00:00:00Z",
        "output_path": "/alice@patricbrc.org/home/out"
    }]));
    let client = client_with(transport.clone());

    let mut params = serde_json::Map::new();
    params.insert("output_file".into(), json!("date"));
    let task = client
        .start_app("Date", params, "/alice@patricbrc.org/home/out")
        .await
        .unwrap();

    assert_eq!(task.id, "16000001");
    assert_eq!(task.status, "queued");
    assert_eq!(task.start_time, None);
    assert_eq!(
        transport.only_call().request.params,
        vec![
            json!("Date"),
            json!({"output_file": "date"}),
            json!("/alice@patricbrc.org/home/out")
        ]
    );
}

#[tokio::test]
async fn test_start_app_empty_result_is_malformed() {
    let client = client_with(RecordingTransport::new().respond(json!([])));
    let err = client
        .start_app("Date", serde_json::Map::new(), "/out")
        .await
        .unwrap_err();
    assert!(matches!(err, crate::error::RpcError::Malformed(_)));
}

#[tokio::test]
async fn test_query_tasks_omits_unknown_ids() {
    let transport = RecordingTransport::new()
        .respond(json!([{"1": {"id": "1", "status": "completed"}}]));
    let client = client_with(transport.clone());

    let ids = vec!["1".to_string(), "2".to_string()];
    let tasks = client.query_tasks(&ids).await.unwrap();

    assert_eq!(transport.only_call().request.params, vec![json!(["1", "2"])]);
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks["1"].status, "completed");
    assert!(!tasks.contains_key("2"));
}

#[tokio::test]
async fn test_query_tasks_empty_result() {
    let client = client_with(RecordingTransport::new().respond(json!(null)));
    assert!(client.query_tasks(&["9".to_string()]).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_enumerate_tasks() {
    let transport = RecordingTransport::new()
        .respond(json!([[{"id": "1", "status": "completed"}, {"id": "2", "status": "failed"}]]));
    let client = client_with(transport.clone());

    let tasks = client.enumerate_tasks(10, 25).await.unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[1].status, "failed");
    assert_eq!(transport.only_call().request.params, vec![json!(10), json!(25)]);
}

#[tokio::test]
async fn test_kill_task_only_succeeds_on_one() {
    let cases = [
        (json!([1]), true),
        (json!([0]), false),
        (json!([null]), false),
        (json!([]), false),
        (json!(null), false),
        (json!(["1"]), false),
        (json!([true]), false),
        (json!([2]), false),
    ];
    for (result, expected) in cases {
        let client = client_with(RecordingTransport::new().respond(result.clone()));
        assert_eq!(client.kill_task("42").await.unwrap(), expected, "result {}", result);
    }
}

#[cfg(feature = "app-log")]
#[tokio::test]
async fn test_query_app_log_shapes() {
    let cases = [
        (json!("line one\nline two"), "line one\nline two"),
        (json!(["from list"]), "from list"),
        (json!([]), ""),
        (json!(null), ""),
        (json!({"log": "x"}), ""),
    ];
    for (result, expected) in cases {
        let client = client_with(RecordingTransport::new().respond(result));
        assert_eq!(client.query_app_log("42").await.unwrap(), expected);
    }
}
