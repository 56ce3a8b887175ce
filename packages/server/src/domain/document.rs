//! Documents loaded from the web and the chunks they are split into.

/// Text extracted from one source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Where the text was loaded from (the submitted URL)
    pub source: String,
    pub content: String,
}

impl Document {
    pub fn new(source: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            content: content.into(),
        }
    }
}

/// A piece of a document small enough to be handed to the language model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub source: String,
    pub content: String,
}
