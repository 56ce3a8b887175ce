//! Domain layer of the question answering server.

pub mod chain;
pub mod document;
pub mod error;
pub mod index;
pub mod port;
pub mod splitter;

pub use chain::{Prompt, QaChain};
pub use document::{Chunk, Document};
pub use error::{LlmError, LoadError, SplitterConfigError};
pub use index::ChunkIndex;
pub use port::{ChainStore, DocumentLoader, Embedder, LanguageModel};
pub use splitter::TextSplitter;

#[cfg(test)]
pub use port::{MockDocumentLoader, MockEmbedder, MockLanguageModel};
