//! End-to-end session flow against a mock service.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use code_session::{
    ClipboardProvider, Error, Language, Outcome, ReviewStatus, RunStatus, ServiceConfig,
    SessionController,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct RecordingClipboard {
    copied: Mutex<Vec<String>>,
}

impl ClipboardProvider for RecordingClipboard {
    fn set_text(&self, text: &str) -> Result<(), Error> {
        self.copied.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

#[tokio::test]
async fn test_full_session_flow() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/run"))
        .and(body_json(json!({
            "language": "py",
            "code": "print(int(input()) * 2)",
            "input": "21"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "output": "42\n" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/ai-review"))
        .and(body_json(json!({ "code": "print(int(input()) * 2)" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "review": "Consider a docstring." })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let clipboard = Arc::new(RecordingClipboard {
        copied: Mutex::new(Vec::new()),
    });
    let controller = SessionController::with_clipboard(
        ServiceConfig::new()
            .with_base_url(mock_server.uri())
            .with_timeout(Duration::from_secs(5)),
        Arc::clone(&clipboard) as Arc<dyn ClipboardProvider>,
    )
    .unwrap();

    // The user picks Python and writes a doubling program.
    controller.switch_language("py").unwrap();
    controller.update_source("print(int(input()) * 2)");
    controller.update_stdin("21");

    let run = controller.submit_run().await.unwrap();
    assert_eq!(run, Outcome::Success("42\n".to_string()));
    assert!(!run.is_failure());

    let review = controller.submit_review().await.unwrap();
    assert_eq!(review, Outcome::Success("Consider a docstring.".to_string()));

    assert!(controller.copy_source());

    let state = controller.state();
    assert_eq!(state.language, Language::Python);
    assert_eq!(state.run_status, RunStatus::Idle);
    assert_eq!(state.review_status, ReviewStatus::Idle);
    assert_eq!(state.last_output, Some(run));
    assert_eq!(state.last_review, Some(review));
    assert!(state.last_execution_latency_ms.is_some());
    assert!(state.clipboard_acknowledged);
    assert_eq!(
        clipboard.copied.lock().unwrap().as_slice(),
        &["print(int(input()) * 2)".to_string()]
    );
}

#[tokio::test]
async fn test_failures_stay_local_to_their_slot() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/run"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({ "error": "missing semicolon" })),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/ai-review"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "review": "Style is fine." })),
        )
        .mount(&mock_server)
        .await;

    let controller = SessionController::with_clipboard(
        ServiceConfig::new().with_base_url(mock_server.uri()),
        Arc::new(RecordingClipboard {
            copied: Mutex::new(Vec::new()),
        }),
    )
    .unwrap();

    let run = controller.submit_run().await.unwrap();
    assert_eq!(run, Outcome::Failure("missing semicolon".to_string()));
    assert!(run.is_failure());

    // A failed run does not poison the review path or the editor state.
    let review = controller.submit_review().await.unwrap();
    assert_eq!(review, Outcome::Success("Style is fine.".to_string()));

    let state = controller.state();
    assert_eq!(state.last_output, Some(run));
    assert_eq!(state.last_review, Some(review));
    assert_eq!(state.source_text, code_session::languages::template(Language::Cpp));
}
