//! JSON bodies of the two backend endpoints.
//!
//! | Endpoint       | Request            | Success              | Failure              |
//! |----------------|--------------------|----------------------|----------------------|
//! | `/process_url` | [`UrlSubmission`]   | [`UrlProcessResult`] | [`ErrorDetail`]      |
//! | `/query`       | [`QuerySubmission`] | [`QueryAnswerResult`] | [`ErrorDetail`] (server side only) |

use serde::{Deserialize, Serialize};

/// Path of the URL processing endpoint
pub const PROCESS_URL_PATH: &str = "/process_url";

/// Path of the question answering endpoint
pub const QUERY_PATH: &str = "/query";

/// Request body of `POST /process_url`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlSubmission {
    pub url: String,
}

/// Request body of `POST /query`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySubmission {
    pub query: String,
}

/// Success body of `POST /process_url`
///
/// `message` is optional on the wire: any 2xx response counts as success,
/// and a body without the field yields `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlProcessResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Success body of `POST /query`
///
/// `answer` is optional on the wire: the client decodes every `/query`
/// response with this type regardless of status, so an error body simply
/// yields `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryAnswerResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

/// Failure body returned with a non-2xx status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: Some(detail.into()),
        }
    }
}
