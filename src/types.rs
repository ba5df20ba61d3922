use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Error;

/// Supported programming languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Cpp,
    C,
    Java,
    #[serde(rename = "py")]
    Python,
}

impl Language {
    /// Every supported language, in menu order.
    pub const ALL: [Language; 4] = [Language::Cpp, Language::C, Language::Java, Language::Python];

    /// Wire identifier, as sent to the execution service.
    pub fn id(&self) -> &'static str {
        match self {
            Language::Cpp => "cpp",
            Language::C => "c",
            Language::Java => "java",
            Language::Python => "py",
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cpp" => Ok(Language::Cpp),
            "c" => Ok(Language::C),
            "java" => Ok(Language::Java),
            "py" => Ok(Language::Python),
            _ => Err(Error::UnsupportedLanguage(s.to_string())),
        }
    }
}

/// Code execution request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRequest {
    /// Programming language
    pub language: Language,
    /// Source code to compile and run
    pub code: String,
    /// Stdin handed to the program
    pub input: String,
}

/// Successful execution response body
#[derive(Debug, Clone, Deserialize)]
pub struct RunResponse {
    /// Program output, possibly empty
    #[serde(default)]
    pub output: String,
}

/// AI review request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRequest {
    /// Source code to review
    pub code: String,
}

/// Successful review response body
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewResponse {
    #[serde(default)]
    pub review: String,
}

/// Body returned by the service on a non-2xx status. The `error` field
/// is optional; absence falls back to a per-operation message.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Settled result of a run or review operation. Replaces any prior
/// value on completion; no history is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(String),
    Failure(String),
}

impl Outcome {
    /// Classification for the presentation layer, decided by the tag
    /// alone. Success text is never inspected, so program output that
    /// happens to start with "Error" stays a success.
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// The payload, success output or failure message.
    pub fn text(&self) -> &str {
        match self {
            Outcome::Success(text) | Outcome::Failure(text) => text,
        }
    }
}

/// Run orchestrator latch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunStatus {
    #[default]
    Idle,
    Running,
}

/// Review orchestrator latch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewStatus {
    #[default]
    Idle,
    Reviewing,
}

pub(crate) mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}
