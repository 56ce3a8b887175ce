//! Web page loader backed by reqwest.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{Document, DocumentLoader, LoadError};

use super::html::extract_text;

const REQUEST_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("shiori/", env!("CARGO_PKG_VERSION"));

/// Fetches a page over HTTP and turns it into a single plain-text document
pub struct WebPageLoader {
    client: reqwest::Client,
}

impl Default for WebPageLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl WebPageLoader {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .unwrap_or_default(),
        }
    }
}

#[async_trait]
impl DocumentLoader for WebPageLoader {
    async fn load(&self, url: &str) -> Result<Vec<Document>, LoadError> {
        let request_error = |e: reqwest::Error| LoadError::Request {
            url: url.to_string(),
            reason: e.to_string(),
        };

        let response = self.client.get(url).send().await.map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(request_error)?;
        let content = extract_text(&body);
        tracing::debug!("Loaded {} ({} characters of text)", url, content.chars().count());

        Ok(vec![Document::new(url, content)])
    }
}
