//! HTTP client for the answering service.

use super::{AnswerRequest, AnswerResult, AnsweringService};
use crate::error::{NavigatorError, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

/// Path of the answer endpoint, relative to the service base URL.
const ANSWER_PATH: &str = "answer";

/// Answering service reached over HTTP.
pub struct HttpAnsweringService {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpAnsweringService {
    /// Create a client for the service at `base_url`.
    ///
    /// Without a timeout the transport default applies.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let endpoint = answer_endpoint(base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }

    /// The full URL requests are posted to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// Resolve the answer endpoint under a service base URL.
///
/// A base with a path prefix keeps it: `http://host/api` becomes
/// `http://host/api/answer`.
pub fn answer_endpoint(base_url: &str) -> Result<Url> {
    let mut base = Url::parse(base_url)
        .map_err(|e| NavigatorError::Config(format!("Invalid service URL '{}': {}", base_url, e)))?;

    if !matches!(base.scheme(), "http" | "https") {
        return Err(NavigatorError::Config(format!(
            "Service URL must use http or https: {}",
            base_url
        )));
    }

    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join(ANSWER_PATH)
        .map_err(|e| NavigatorError::Config(format!("Invalid service URL '{}': {}", base_url, e)))
}

#[async_trait]
impl AnsweringService for HttpAnsweringService {
    #[instrument(skip(self, request), fields(method = request.method.wire_name(), bytes = request.transcript.len()))]
    async fn answer(&self, request: &AnswerRequest) -> Result<AnswerResult> {
        debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| NavigatorError::RequestFailure(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NavigatorError::RequestFailure(format!(
                "service returned {}",
                status
            )));
        }

        let result = response
            .json::<AnswerResult>()
            .await
            .map_err(|e| NavigatorError::RequestFailure(format!("invalid response body: {}", e)))?;
        debug!(timestamp = %result.timestamp, method_used = %result.method_used, "Received answer");
        Ok(result)
    }
}
