//! Infrastructure 層
//!
//! ドメイン層の port trait の具体的な実装を提供します。
//!
//! - `loader`: reqwest を使った Web ページの読み込み
//! - `llm`: OpenAI 互換 API を使った言語モデル
//! - `store`: インメモリのチェーン保持

pub mod llm;
pub mod loader;
pub mod store;
