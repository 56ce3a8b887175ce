//! 言語モデルの実装

pub mod openai;

pub use openai::{OpenAiChatModel, OpenAiEmbeddingModel};
