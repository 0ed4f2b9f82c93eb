use anyhow::Result;
use async_trait::async_trait;
use fetch_display::{
    DisplayOutcome, FetchAndDisplay, FetchError, FileSurface, HttpJsonSource, Notifier,
    OutputSurface,
};
use httpmock::prelude::*;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

#[derive(Clone, Default)]
struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, message: &str) -> fetch_display::Result<()> {
        self.messages.lock().unwrap().push(message.to_string());
        Ok(())
    }
}

fn file_engine(
    endpoint: String,
    temp_dir: &TempDir,
) -> (
    FetchAndDisplay<HttpJsonSource, RecordingNotifier, FileSurface>,
    RecordingNotifier,
    std::path::PathBuf,
) {
    let output = temp_dir.path().join("result");
    let notifier = RecordingNotifier::default();
    let engine = FetchAndDisplay::new(
        HttpJsonSource::new(endpoint),
        notifier.clone(),
        FileSurface::new(&output),
    );
    (engine, notifier, output)
}

#[tokio::test]
async fn test_end_to_end_success_displays_result() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/search/entries.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"result": "hello"}));
        })
        .await;

    let (engine, notifier, output) = file_engine(server.url("/search/entries.json"), &temp_dir);
    let outcome = engine.run().await?;

    api_mock.assert_hits_async(1).await;
    assert_eq!(outcome, DisplayOutcome::Displayed { text: "hello".to_string() });
    assert_eq!(notifier.messages(), vec!["Your Json result is:  hello"]);
    assert_eq!(std::fs::read_to_string(&output)?, "hello");
    assert_eq!(engine.surface().name(), "result");
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_server_error_leaves_output_untouched() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/search/entries.json");
            then.status(500);
        })
        .await;

    let (engine, notifier, output) = file_engine(server.url("/search/entries.json"), &temp_dir);
    let outcome = engine.run().await?;

    // One request, no retry.
    api_mock.assert_hits_async(1).await;
    assert_eq!(outcome, DisplayOutcome::Failed { status: 500 });
    assert_eq!(notifier.messages(), vec!["Something went wrong."]);
    assert!(!output.exists());
    Ok(())
}

#[tokio::test]
async fn test_not_found_keeps_previous_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/search/entries.json");
            then.status(404).body("Not Found");
        })
        .await;

    let (engine, notifier, output) = file_engine(server.url("/search/entries.json"), &temp_dir);
    std::fs::write(&output, "previous")?;

    let outcome = engine.run().await?;

    assert_eq!(outcome, DisplayOutcome::Failed { status: 404 });
    assert_eq!(notifier.messages(), vec!["Something went wrong."]);
    assert_eq!(std::fs::read_to_string(&output)?, "previous");
    Ok(())
}

#[tokio::test]
async fn test_missing_result_field_writes_empty_text() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/search/entries.json");
            then.status(200)
                .json_body(serde_json::json!({"entries": [{"title": "a"}]}));
        })
        .await;

    let (engine, notifier, output) = file_engine(server.url("/search/entries.json"), &temp_dir);
    let outcome = engine.run().await?;

    assert_eq!(outcome, DisplayOutcome::Displayed { text: String::new() });
    assert_eq!(notifier.messages(), vec!["Your Json result is:  "]);
    assert_eq!(std::fs::read_to_string(&output)?, "");
    Ok(())
}

#[tokio::test]
async fn test_invalid_json_reports_failure_once() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/search/entries.json");
            then.status(200).body("{\"result\": ");
        })
        .await;

    let (engine, notifier, output) = file_engine(server.url("/search/entries.json"), &temp_dir);
    let err = engine.run().await.unwrap_err();

    api_mock.assert_hits_async(1).await;
    assert!(matches!(err, FetchError::SerializationError(_)));
    assert_eq!(notifier.messages(), vec!["Something went wrong."]);
    assert!(!output.exists());
    Ok(())
}

#[tokio::test]
async fn test_connection_refused_reports_failure() -> Result<()> {
    let temp_dir = TempDir::new()?;

    // Grab a free port and release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let port = listener.local_addr()?.port();
    drop(listener);

    let (engine, notifier, output) =
        file_engine(format!("http://127.0.0.1:{}/entries.json", port), &temp_dir);
    let err = engine.run().await.unwrap_err();

    assert!(matches!(err, FetchError::HttpError(_)));
    assert_eq!(notifier.messages(), vec!["Something went wrong."]);
    assert!(!output.exists());
    Ok(())
}
