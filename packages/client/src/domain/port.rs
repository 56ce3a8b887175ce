//! Collaborator interfaces injected into the chat client.
//!
//! The client owns no global state: the input fields, the transcript and
//! the backend are all handed over at construction. Concrete
//! implementations live in the infrastructure and ui layers.

use async_trait::async_trait;
use shiori_shared::api::{QueryAnswerResult, QuerySubmission, UrlProcessResult, UrlSubmission};

use super::{ChatError, ChatMessage};

/// A text input the client can read and clear
pub trait InputField: Send + Sync {
    /// Current raw value of the field
    fn value(&self) -> String;

    /// Reset the field to an empty value
    fn clear(&self);
}

/// Append-only target of transcript messages
pub trait MessageSink: Send + Sync {
    fn append(&self, message: ChatMessage);
}

/// The two backend capabilities.
///
/// Each call is one request/response exchange. Errors carry the text shown
/// to the user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// `POST /process_url`
    ///
    /// Fails with [`ChatError::Request`] when the backend answers with a
    /// non-success status.
    async fn process_url(&self, submission: UrlSubmission)
    -> Result<UrlProcessResult, ChatError>;

    /// `POST /query`
    ///
    /// The response body is decoded regardless of the status code.
    async fn query(&self, submission: QuerySubmission) -> Result<QueryAnswerResult, ChatError>;
}
