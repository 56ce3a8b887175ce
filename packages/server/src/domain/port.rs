//! Port trait 定義
//!
//! ドメイン層が必要とする外部サービスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use std::sync::Arc;

use async_trait::async_trait;

use super::{Document, LlmError, LoadError, QaChain};

/// Document Loader trait
///
/// URL からドキュメントを読み込むためのインターフェース。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentLoader: Send + Sync {
    /// URL の内容をテキストとして読み込む
    async fn load(&self, url: &str) -> Result<Vec<Document>, LoadError>;
}

/// Language Model trait
///
/// システムプロンプトとユーザーの質問から回答を生成するためのインターフェース。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// 回答を生成
    async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError>;
}

/// Embedder trait
///
/// テキストを埋め込みベクトルに変換するためのインターフェース。
/// チャンクと質問は同じモデルで埋め込む必要がある。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Embedder: Send + Sync {
    /// 入力と同じ順序で 1 テキストにつき 1 ベクトルを返す
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, LlmError>;
}

/// Chain Store trait
///
/// 最後に処理した URL から構築したチェーンを保持する。
/// URL を処理するたびに置き換えられる。
#[async_trait]
pub trait ChainStore: Send + Sync {
    /// 現在のチェーンを取得（未処理の場合は None）
    async fn current(&self) -> Option<Arc<QaChain>>;

    /// チェーンを置き換える
    async fn replace(&self, chain: QaChain);
}
