//! UseCase: URL 処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ProcessUrlUseCase::execute() メソッド
//! - ページの読み込み、チャンク分割、チャンクの埋め込み、チェーンの置き換え
//!
//! ### なぜこのテストが必要か
//! - 処理に成功した場合のみチェーンが置き換えられることを保証
//! - 読み込み失敗・空ページ・埋め込み失敗がエラーとして返されることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：ページを読み込んでチェーンを構築
//! - 異常系：読み込み失敗、テキストの無いページ、埋め込み API の失敗
//! - エッジケース：2 回目の URL 処理でチェーンが置き換えられる

use std::sync::Arc;

use crate::domain::{
    ChainStore, ChunkIndex, DocumentLoader, Embedder, LlmError, QaChain, TextSplitter,
};

use super::error::ProcessUrlError;

/// Message returned when a URL has been processed
pub const PROCESS_URL_SUCCESS_MESSAGE: &str = "URL processed successfully";

/// URL 処理のユースケース
pub struct ProcessUrlUseCase {
    /// DocumentLoader（ページ読み込みの抽象化）
    loader: Arc<dyn DocumentLoader>,
    /// Embedder（チャンクの埋め込み）
    embedder: Arc<dyn Embedder>,
    /// ChainStore（現在のチェーンの保持）
    store: Arc<dyn ChainStore>,
    splitter: TextSplitter,
}

impl ProcessUrlUseCase {
    /// 新しい ProcessUrlUseCase を作成
    pub fn new(
        loader: Arc<dyn DocumentLoader>,
        embedder: Arc<dyn Embedder>,
        store: Arc<dyn ChainStore>,
        splitter: TextSplitter,
    ) -> Self {
        Self {
            loader,
            embedder,
            store,
            splitter,
        }
    }

    /// URL 処理を実行
    ///
    /// # Arguments
    ///
    /// * `url` - 読み込むページの URL
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - 構築したチェーンのチャンク数
    /// * `Err(ProcessUrlError)` - 処理失敗（現在のチェーンは変更されない）
    pub async fn execute(&self, url: &str) -> Result<usize, ProcessUrlError> {
        // 1. ページを読み込む
        let documents = self.loader.load(url).await?;

        // 2. チャンクに分割
        let chunks = self.splitter.split_documents(&documents);
        if chunks.is_empty() {
            return Err(ProcessUrlError::NoContent(url.to_string()));
        }
        let chunk_count = chunks.len();

        // 3. チャンクを埋め込む
        let texts: Vec<String> = chunks.iter().map(|chunk| chunk.content.clone()).collect();
        let embeddings = self.embedder.embed(&texts).await?;
        if embeddings.len() != chunk_count {
            return Err(LlmError::EmbeddingCount {
                expected: chunk_count,
                actual: embeddings.len(),
            }
            .into());
        }

        // 4. チェーンを構築して置き換える
        let chain = QaChain::new(url, ChunkIndex::build(chunks, embeddings));
        self.store.replace(chain).await;

        tracing::info!("Processed {} into {} chunks", url, chunk_count);

        Ok(chunk_count)
    }
}
