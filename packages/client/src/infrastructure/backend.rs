//! HTTP implementation of the backend capabilities.

use async_trait::async_trait;
use serde_json::Value;
use shiori_shared::api::{
    PROCESS_URL_PATH, QUERY_PATH, QueryAnswerResult, QuerySubmission, UrlProcessResult,
    UrlSubmission,
};

use crate::domain::{ChatBackend, ChatError};

/// Backend reached over HTTP with reqwest.
///
/// Both endpoints are resolved against one base URL, so every request stays
/// on the origin the client was started with. No timeout is configured: a
/// request runs until it completes or fails.
pub struct HttpChatBackend {
    client: reqwest::Client,
    process_url_endpoint: String,
    query_endpoint: String,
}

impl HttpChatBackend {
    /// Create a backend for the server at `base_url` (e.g. `http://127.0.0.1:8000`)
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            client,
            process_url_endpoint: format!("{}{}", base, PROCESS_URL_PATH),
            query_endpoint: format!("{}{}", base, QUERY_PATH),
        }
    }
}

#[async_trait]
impl ChatBackend for HttpChatBackend {
    async fn process_url(
        &self,
        submission: UrlSubmission,
    ) -> Result<UrlProcessResult, ChatError> {
        let response = self
            .client
            .post(&self.process_url_endpoint)
            .json(&submission)
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;

        let status = response.status();
        tracing::debug!("{} responded with {}", PROCESS_URL_PATH, status);

        if !status.is_success() {
            let body: Value = response
                .json()
                .await
                .map_err(|e| ChatError::Decode(e.to_string()))?;
            return Err(ChatError::request(failure_detail(&body)));
        }

        response
            .json()
            .await
            .map_err(|e| ChatError::Decode(e.to_string()))
    }

    async fn query(&self, submission: QuerySubmission) -> Result<QueryAnswerResult, ChatError> {
        let response = self
            .client
            .post(&self.query_endpoint)
            .json(&submission)
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;

        tracing::debug!("{} responded with {}", QUERY_PATH, response.status());

        response
            .json()
            .await
            .map_err(|e| ChatError::Decode(e.to_string()))
    }
}

/// Extract the `detail` of a failure body.
///
/// Non-string details (e.g. a list of validation errors) are rendered as
/// JSON text. `null` and a missing field yield `None`.
fn failure_detail(body: &Value) -> Option<String> {
    match body.get("detail") {
        None | Some(Value::Null) => None,
        Some(Value::String(detail)) => Some(detail.clone()),
        Some(other) => Some(other.to_string()),
    }
}
