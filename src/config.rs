use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::types::duration_serde;

/// Connection settings for the remote execution and review service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL for the service API
    pub base_url: String,

    /// Timeout applied to every request, in seconds on the wire
    #[serde(with = "duration_serde")]
    pub timeout: Duration,
}

impl ServiceConfig {
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::new()
    }
}
