//! Server state shared by the handlers.

use std::sync::Arc;

use crate::usecase::{AnswerQueryUseCase, ProcessUrlUseCase};

/// Shared application state
pub struct AppState {
    /// ProcessUrlUseCase（URL 処理のユースケース）
    pub process_url_usecase: Arc<ProcessUrlUseCase>,
    /// AnswerQueryUseCase（質問応答のユースケース）
    pub answer_query_usecase: Arc<AnswerQueryUseCase>,
}
