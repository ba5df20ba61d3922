//! # Code Session
//!
//! Session controller for an interactive code-execution client. A
//! [`SessionController`] owns the editing state of one user session,
//! submits the current source to a remote execution service (compile and
//! run with optional stdin) and, independently, to a remote AI-review
//! service, then classifies and stores the settled results for display.
//!
//! ## Features
//!
//! - Closed set of supported languages with default source templates
//! - Independent run and review orchestrators, each with its own
//!   busy latch, free to be in flight simultaneously
//! - Tagged success/failure results carried end-to-end, never inferred
//!   from output text
//! - Execution latency measurement per run
//! - Clipboard hand-off with a self-clearing acknowledgement flag
//!
//! ## Example
//!
//! ```rust,no_run
//! use code_session::{ServiceConfig, SessionController};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let controller = SessionController::new(ServiceConfig::new())?;
//!
//!     controller.switch_language("py")?;
//!     controller.update_source("print(input())");
//!     controller.update_stdin("hello");
//!
//!     if let Some(outcome) = controller.submit_run().await {
//!         println!("{}", outcome.text());
//!     }
//!     if let Some(review) = controller.submit_review().await {
//!         println!("{}", review.text());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Run and review failures never escape as errors: transport problems
//! and service-signaled failures both degrade to a stored
//! [`Outcome::Failure`] local to that operation's result slot. The only
//! fallible entry points are construction and the language switch.

mod client;
mod clipboard;
mod config;
mod error;
pub mod languages;
mod session;
mod types;

pub use client::ApiClient;
pub use clipboard::{ClipboardProvider, SystemClipboard};
pub use config::ServiceConfig;
pub use error::Error;
pub use languages::LanguageConfig;
pub use session::{SessionController, SessionState};
pub use types::{
    ErrorBody, Language, Outcome, ReviewRequest, ReviewResponse, ReviewStatus, RunRequest,
    RunResponse, RunStatus,
};

/// Result type for session operations
pub type Result<T> = std::result::Result<T, Error>;
