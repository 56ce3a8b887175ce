//! UseCase 層
//!
//! HTTP ハンドラから呼び出されるアプリケーションのユースケースを定義します。

mod answer_query;
mod error;
mod process_url;

pub use answer_query::AnswerQueryUseCase;
pub use error::{AnswerQueryError, ProcessUrlError};
pub use process_url::{PROCESS_URL_SUCCESS_MESSAGE, ProcessUrlUseCase};
