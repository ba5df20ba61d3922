use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Service error: {status_code} - {message}")]
    Api { status_code: u16, message: String },

    #[error("Language not supported: {0}")]
    UnsupportedLanguage(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}
