//! The session controller: owns the editing state and drives the run
//! and review request lifecycles.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::{
    client::ApiClient,
    clipboard::{ClipboardProvider, SystemClipboard},
    config::ServiceConfig,
    error::Error,
    languages,
    types::{Language, Outcome, ReviewRequest, ReviewStatus, RunRequest, RunStatus},
};

/// How long the copied indicator stays up after a successful hand-off
const CLIPBOARD_ACK_WINDOW: Duration = Duration::from_secs(2);

/// Mutable per-session editing and result state. One instance per
/// session, owned by the controller; never persisted.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub language: Language,
    pub source_text: String,
    pub stdin_text: String,
    pub run_status: RunStatus,
    pub review_status: ReviewStatus,
    pub last_output: Option<Outcome>,
    pub last_review: Option<Outcome>,
    pub last_execution_latency_ms: Option<u64>,
    pub clipboard_acknowledged: bool,
}

impl SessionState {
    fn new(language: Language) -> Self {
        Self {
            language,
            source_text: languages::template(language).to_string(),
            stdin_text: String::new(),
            run_status: RunStatus::Idle,
            review_status: ReviewStatus::Idle,
            last_output: None,
            last_review: None,
            last_execution_latency_ms: None,
            clipboard_acknowledged: false,
        }
    }
}

/// Drives one editing session.
///
/// The run and review orchestrators are independent: each is guarded by
/// its own status latch and both may be in flight at once. They share
/// only the source text, read at submission time. Neither request can be
/// cancelled once issued; its result still lands when it settles, even
/// after a language switch (last-write-wins).
pub struct SessionController {
    state: Arc<Mutex<SessionState>>,
    client: Arc<ApiClient>,
    clipboard: Arc<dyn ClipboardProvider>,
    ack_clear: Mutex<Option<JoinHandle<()>>>,
}

impl SessionController {
    /// Create a controller talking to the configured service, using the
    /// system clipboard.
    pub fn new(config: ServiceConfig) -> Result<Self, Error> {
        Self::with_clipboard(config, Arc::new(SystemClipboard))
    }

    /// Create a controller with an injected clipboard provider.
    pub fn with_clipboard(
        config: ServiceConfig,
        clipboard: Arc<dyn ClipboardProvider>,
    ) -> Result<Self, Error> {
        Ok(Self {
            state: Arc::new(Mutex::new(SessionState::new(Language::Cpp))),
            client: Arc::new(ApiClient::new(config)?),
            clipboard,
            ack_clear: Mutex::new(None),
        })
    }

    /// Snapshot of the current session state for the presentation layer.
    pub fn state(&self) -> SessionState {
        self.lock_state().clone()
    }

    /// Switch the session to another language: reseeds the source text
    /// from that language's template and clears prior output, review and
    /// latency. Does not touch an in-flight run or review.
    pub fn switch_language(&self, id: &str) -> Result<(), Error> {
        let language: Language = id.parse()?;
        let mut state = self.lock_state();
        state.language = language;
        state.source_text = languages::template(language).to_string();
        state.last_output = None;
        state.last_review = None;
        state.last_execution_latency_ms = None;
        Ok(())
    }

    /// Accept edited source text from the editing surface.
    pub fn update_source(&self, text: &str) {
        self.lock_state().source_text = text.to_string();
    }

    /// Accept stdin text for the next run.
    pub fn update_stdin(&self, text: &str) {
        self.lock_state().stdin_text = text.to_string();
    }

    /// Submit the current source for execution.
    ///
    /// Returns `None` without issuing a request when a run is already
    /// outstanding. Latency is recorded whenever the service produced a
    /// response payload, success or not; a transport-level failure
    /// leaves it unset. Transport and service failures both degrade to a
    /// [`Outcome::Failure`] stored in `last_output`; they are never
    /// surfaced as errors.
    pub async fn submit_run(&self) -> Option<Outcome> {
        let request = {
            let mut state = self.lock_state();
            if state.run_status == RunStatus::Running {
                debug!("run already in flight, ignoring submission");
                return None;
            }
            state.run_status = RunStatus::Running;
            state.last_output = None;
            state.last_execution_latency_ms = None;
            RunRequest {
                language: state.language,
                code: state.source_text.clone(),
                input: state.stdin_text.clone(),
            }
        };

        debug!(language = request.language.id(), "submitting run request");
        let started = Instant::now();

        let mut latency_ms = None;
        let outcome = match self.client.execute(&request).await {
            Ok(output) => {
                let ms = elapsed_ms(started);
                info!(latency_ms = ms, "run completed");
                latency_ms = Some(ms);
                Outcome::Success(output)
            }
            Err(Error::Api {
                status_code,
                message,
            }) => {
                // The service answered; the exchange still has a latency.
                latency_ms = Some(elapsed_ms(started));
                error!(status_code, %message, "run rejected by service");
                Outcome::Failure(message)
            }
            Err(err) => {
                error!(error = %err, "run request failed");
                Outcome::Failure(err.to_string())
            }
        };

        let mut state = self.lock_state();
        state.last_execution_latency_ms = latency_ms;
        state.last_output = Some(outcome.clone());
        state.run_status = RunStatus::Idle;
        Some(outcome)
    }

    /// Submit the current source for AI review.
    ///
    /// Returns `None` without issuing a request when a review is already
    /// outstanding. No timing is recorded for reviews.
    pub async fn submit_review(&self) -> Option<Outcome> {
        let request = {
            let mut state = self.lock_state();
            if state.review_status == ReviewStatus::Reviewing {
                debug!("review already in flight, ignoring submission");
                return None;
            }
            state.review_status = ReviewStatus::Reviewing;
            state.last_review = None;
            ReviewRequest {
                code: state.source_text.clone(),
            }
        };

        debug!("submitting review request");
        let outcome = match self.client.review(&request).await {
            Ok(review) => {
                info!("review completed");
                Outcome::Success(review)
            }
            Err(Error::Api {
                status_code,
                message,
            }) => {
                error!(status_code, %message, "review rejected by service");
                Outcome::Failure(message)
            }
            Err(err) => {
                error!(error = %err, "review request failed");
                Outcome::Failure(err.to_string())
            }
        };

        let mut state = self.lock_state();
        state.last_review = Some(outcome.clone());
        state.review_status = ReviewStatus::Idle;
        Some(outcome)
    }

    /// Hand the current source text to the clipboard provider.
    ///
    /// On success the acknowledgement flag rises immediately and a
    /// scheduled task clears it two seconds later; a pending clear from
    /// an earlier copy is superseded, never stacked. Provider failure is
    /// a no-op apart from a warning. Must be called from within a Tokio
    /// runtime.
    pub fn copy_source(&self) -> bool {
        let text = self.lock_state().source_text.clone();
        if let Err(err) = self.clipboard.set_text(&text) {
            warn!(error = %err, "clipboard hand-off failed");
            return false;
        }

        self.lock_state().clipboard_acknowledged = true;

        let state = Arc::clone(&self.state);
        let clear = tokio::spawn(async move {
            tokio::time::sleep(CLIPBOARD_ACK_WINDOW).await;
            state
                .lock()
                .expect("session state lock poisoned")
                .clipboard_acknowledged = false;
        });

        let mut pending = self.ack_clear.lock().expect("ack timer lock poisoned");
        if let Some(previous) = pending.replace(clear) {
            previous.abort();
        }
        true
    }

    fn lock_state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().expect("session state lock poisoned")
    }
}

impl Drop for SessionController {
    fn drop(&mut self) {
        // The pending acknowledgement clear dies with the session.
        if let Ok(mut pending) = self.ack_clear.lock() {
            if let Some(task) = pending.take() {
                task.abort();
            }
        }
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}
