//! Domain error types.

use thiserror::Error;

/// Failure to load a document
#[derive(Debug, Error)]
pub enum LoadError {
    /// The request could not be sent or the body could not be read
    #[error("Failed to fetch {url}: {reason}")]
    Request { url: String, reason: String },

    /// The server answered with a non-success status
    #[error("Failed to fetch {url}: HTTP {status}")]
    Status { url: String, status: u16 },
}

/// Failure of a language model call
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Language model request failed: {0}")]
    Request(String),

    #[error("Language model returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Failed to parse language model response: {0}")]
    Decode(String),

    #[error("Language model returned no choices")]
    EmptyResponse,

    #[error("Embedding API returned {actual} vectors for {expected} inputs")]
    EmbeddingCount { expected: usize, actual: usize },
}

/// Invalid text splitter settings
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SplitterConfigError {
    #[error("Chunk size must be greater than zero")]
    ZeroChunkSize,

    #[error("Chunk overlap ({overlap}) must be smaller than chunk size ({size})")]
    OverlapTooLarge { size: usize, overlap: usize },
}
