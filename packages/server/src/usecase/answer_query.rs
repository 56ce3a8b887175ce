//! UseCase: 質問応答
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - AnswerQueryUseCase::execute() メソッド
//! - 質問の埋め込み、関連チャンクの検索とプロンプトの組み立て、言語モデルの呼び出し
//!
//! ### なぜこのテストが必要か
//! - URL 未処理の状態で外部 API が呼ばれないことを保証
//! - 質問と語を共有しないチャンクでも、埋め込みが近ければコンテキストに入ることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：回答の生成
//! - 異常系：URL 未処理、埋め込みの失敗、言語モデルの呼び出し失敗

use std::sync::Arc;

use crate::domain::{ChainStore, Embedder, LanguageModel, LlmError};

use super::error::AnswerQueryError;

/// 質問応答のユースケース
pub struct AnswerQueryUseCase {
    /// ChainStore（現在のチェーンの保持）
    store: Arc<dyn ChainStore>,
    /// Embedder（質問の埋め込み）
    embedder: Arc<dyn Embedder>,
    /// LanguageModel（回答生成の抽象化）
    model: Arc<dyn LanguageModel>,
    /// プロンプトに含めるチャンク数
    top_k: usize,
}

impl AnswerQueryUseCase {
    /// 新しい AnswerQueryUseCase を作成
    pub fn new(
        store: Arc<dyn ChainStore>,
        embedder: Arc<dyn Embedder>,
        model: Arc<dyn LanguageModel>,
        top_k: usize,
    ) -> Self {
        Self {
            store,
            embedder,
            model,
            top_k,
        }
    }

    /// 質問応答を実行
    ///
    /// # Arguments
    ///
    /// * `query` - ユーザーの質問
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - 生成された回答
    /// * `Err(AnswerQueryError)` - URL 未処理、または埋め込み・回答生成の失敗
    pub async fn execute(&self, query: &str) -> Result<String, AnswerQueryError> {
        // 1. 現在のチェーンを取得
        let chain = self
            .store
            .current()
            .await
            .ok_or(AnswerQueryError::NoUrlProcessed)?;

        // 2. 質問を埋め込む
        let query_embedding = self
            .embedder
            .embed(&[query.to_string()])
            .await?
            .into_iter()
            .next()
            .ok_or(LlmError::EmbeddingCount {
                expected: 1,
                actual: 0,
            })?;

        // 3. 関連チャンクからプロンプトを組み立てる
        let prompt = chain.prompt(query, &query_embedding, self.top_k);

        // 4. 言語モデルで回答を生成
        let answer = self.model.complete(&prompt.system, &prompt.user).await?;

        tracing::info!("Answered query against {}", chain.source());

        Ok(answer)
    }
}
