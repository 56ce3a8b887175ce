//! UseCase 層のエラー型

use thiserror::Error;

use crate::domain::{LlmError, LoadError};

/// URL 処理のエラー
#[derive(Debug, Error)]
pub enum ProcessUrlError {
    /// ページの読み込みに失敗
    #[error(transparent)]
    Load(#[from] LoadError),

    /// ページにテキストが含まれていない
    #[error("No text content found at {0}")]
    NoContent(String),

    /// チャンクの埋め込みに失敗
    #[error(transparent)]
    Embedding(#[from] LlmError),
}

/// 質問応答のエラー
#[derive(Debug, Error)]
pub enum AnswerQueryError {
    /// URL がまだ処理されていない
    #[error("Please process a URL first")]
    NoUrlProcessed,

    /// 言語モデルの呼び出しに失敗
    #[error(transparent)]
    Model(#[from] LlmError),
}
