use reqwest::Client;

use crate::{
    config::ServiceConfig,
    error::Error,
    types::{ErrorBody, ReviewRequest, ReviewResponse, RunRequest, RunResponse},
};

/// Client for the remote execution and review API.
///
/// One HTTP call per invocation, no retries: a failed attempt is
/// reported verbatim to the caller.
pub struct ApiClient {
    client: Client,
    config: ServiceConfig,
}

impl ApiClient {
    /// Create a new ApiClient with the given configuration
    pub fn new(config: ServiceConfig) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(Error::Http)?;

        Ok(Self { client, config })
    }

    /// Submit code for compilation and execution.
    ///
    /// A non-2xx status becomes [`Error::Api`] carrying the service's
    /// error string, or "Compilation failed" when the field is absent.
    /// Transport failures and malformed bodies become [`Error::Http`].
    pub async fn execute(&self, request: &RunRequest) -> Result<String, Error> {
        let response = self
            .client
            .post(format!("{}/run", self.config.base_url))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body: ErrorBody = response.json().await.map_err(Error::Http)?;
            return Err(Error::Api {
                status_code: status.as_u16(),
                message: body
                    .error
                    .unwrap_or_else(|| "Compilation failed".to_string()),
            });
        }

        let body: RunResponse = response.json().await.map_err(Error::Http)?;
        Ok(body.output)
    }

    /// Submit code for AI review. Same classification as [`execute`],
    /// with "Review failed" as the fallback message.
    ///
    /// [`execute`]: ApiClient::execute
    pub async fn review(&self, request: &ReviewRequest) -> Result<String, Error> {
        let response = self
            .client
            .post(format!("{}/ai-review", self.config.base_url))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body: ErrorBody = response.json().await.map_err(Error::Http)?;
            return Err(Error::Api {
                status_code: status.as_u16(),
                message: body.error.unwrap_or_else(|| "Review failed".to_string()),
            });
        }

        let body: ReviewResponse = response.json().await.map_err(Error::Http)?;
        Ok(body.review)
    }
}
