//! UseCase: URL 処理と質問送信
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ChatClient::submit_url() / submit_query() / submit_url_input() / handle_key()
//! - 1 回のリクエスト/レスポンスに対してトランスクリプトへ追加されるメッセージ
//!
//! ### なぜこのテストが必要か
//! - 空入力ではメッセージもリクエストも発生しないことを保証
//! - ネットワーク完了前に確認メッセージの追加と入力欄のクリアが行われることを保証
//! - 失敗が全てエラーメッセージに変換され、呼び出し元へ伝播しないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：URL 処理成功、回答取得成功
//! - 異常系：非 2xx 応答、通信失敗
//! - エッジケース：answer を含まない応答、並行した質問の完了順序の入れ替わり

use std::{future::Future, sync::Arc};

use shiori_shared::api::{QuerySubmission, UrlSubmission};
use tokio::task::JoinHandle;

use crate::domain::{ChatBackend, ChatMessage, InputField, Key, MessageSink};

/// Acknowledgement emitted as soon as a URL is submitted
pub const PROCESSING_URL_MESSAGE: &str = "Processing URL...";

/// Chat client: forwards URLs and questions to the backend and reports the
/// outcome of each exchange to the transcript.
///
/// Each submission is split in two parts. The synchronous part (input
/// validation, acknowledgement, clearing the query field) runs before the
/// submitting call returns. The network part is an independent future;
/// overlapping submissions complete in whatever order their responses
/// arrive.
#[derive(Clone)]
pub struct ChatClient {
    /// Backend（/process_url と /query の抽象化）
    backend: Arc<dyn ChatBackend>,
    /// URL 入力欄
    url_input: Arc<dyn InputField>,
    /// 質問入力欄
    query_input: Arc<dyn InputField>,
    /// トランスクリプト
    sink: Arc<dyn MessageSink>,
}

impl ChatClient {
    /// 新しい ChatClient を作成
    pub fn new(
        backend: Arc<dyn ChatBackend>,
        url_input: Arc<dyn InputField>,
        query_input: Arc<dyn InputField>,
        sink: Arc<dyn MessageSink>,
    ) -> Self {
        Self {
            backend,
            url_input,
            query_input,
            sink,
        }
    }

    /// Submit `url` to `/process_url` and wait for the outcome.
    ///
    /// An empty `url` is a silent no-op.
    pub async fn submit_url(&self, url: &str) {
        if let Some(request) = self.begin_url(url) {
            request.await;
        }
    }

    /// Submit `query` to `/query` and wait for the outcome.
    ///
    /// An empty `query` is a silent no-op. The query input is cleared before
    /// the request is sent.
    pub async fn submit_query(&self, query: &str) {
        if let Some(request) = self.begin_query(query) {
            request.await;
        }
    }

    /// Submit the current value of the URL input.
    ///
    /// Returns the handle of the spawned request, or `None` when the input
    /// was empty. The URL input keeps its value.
    pub fn submit_url_input(&self) -> Option<JoinHandle<()>> {
        let url = self.url_input.value();
        self.begin_url(&url).map(tokio::spawn)
    }

    /// Handle a key press on the query input.
    ///
    /// `Key::Enter` submits the current query input; every other key is
    /// ignored.
    pub fn handle_key(&self, key: Key) -> Option<JoinHandle<()>> {
        match key {
            Key::Enter => {
                let query = self.query_input.value();
                self.begin_query(&query).map(tokio::spawn)
            }
            Key::Other => None,
        }
    }

    fn begin_url(&self, url: &str) -> Option<impl Future<Output = ()> + Send + 'static> {
        if url.is_empty() {
            return None;
        }

        self.sink.append(ChatMessage::system(PROCESSING_URL_MESSAGE));

        let backend = Arc::clone(&self.backend);
        let sink = Arc::clone(&self.sink);
        let submission = UrlSubmission {
            url: url.to_string(),
        };

        Some(async move {
            tracing::debug!("Submitting URL '{}'", submission.url);
            match backend.process_url(submission).await {
                Ok(result) => {
                    if result.message.is_none() {
                        tracing::warn!("Response to process_url carried no message");
                    }
                    sink.append(ChatMessage::system(result.message.unwrap_or_default()));
                }
                Err(e) => {
                    tracing::error!("Error in process_url: {}", e);
                    sink.append(ChatMessage::error(format!("Failed to process URL: {}", e)));
                }
            }
        })
    }

    fn begin_query(&self, query: &str) -> Option<impl Future<Output = ()> + Send + 'static> {
        if query.is_empty() {
            return None;
        }

        self.sink.append(ChatMessage::user(query));
        self.query_input.clear();

        let backend = Arc::clone(&self.backend);
        let sink = Arc::clone(&self.sink);
        let submission = QuerySubmission {
            query: query.to_string(),
        };

        Some(async move {
            tracing::debug!("Submitting query '{}'", submission.query);
            match backend.query(submission).await {
                Ok(result) => {
                    // The status code is not inspected on this path, so an
                    // error body decodes to a missing answer.
                    if result.answer.is_none() {
                        tracing::warn!("Response to query carried no answer");
                    }
                    sink.append(ChatMessage::bot(result.answer.unwrap_or_default()));
                }
                Err(e) => {
                    tracing::error!("Error in query: {}", e);
                    sink.append(ChatMessage::error(format!("Failed to get answer: {}", e)));
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, sync::Mutex};

    use async_trait::async_trait;
    use mockall::predicate::eq;
    use shiori_shared::api::{QueryAnswerResult, UrlProcessResult};
    use tokio::sync::Notify;

    use super::*;
    use crate::{
        domain::{ChatError, MessageKind, MockChatBackend},
        infrastructure::{InMemoryTranscript, TextInput},
    };

    struct Fixture {
        client: ChatClient,
        url_input: Arc<TextInput>,
        query_input: Arc<TextInput>,
        transcript: Arc<InMemoryTranscript>,
    }

    fn create_fixture(backend: Arc<dyn ChatBackend>) -> Fixture {
        let url_input = Arc::new(TextInput::new());
        let query_input = Arc::new(TextInput::new());
        let transcript = Arc::new(InMemoryTranscript::new());
        let client = ChatClient::new(
            backend,
            url_input.clone(),
            query_input.clone(),
            transcript.clone(),
        );
        Fixture {
            client,
            url_input,
            query_input,
            transcript,
        }
    }

    fn entries(transcript: &InMemoryTranscript) -> Vec<(MessageKind, String)> {
        transcript
            .messages()
            .into_iter()
            .map(|m| (m.kind(), m.body().to_string()))
            .collect()
    }

    /// Backend whose `/query` responses are held until released per query
    struct GatedBackend {
        gates: Mutex<HashMap<String, Arc<Notify>>>,
    }

    impl GatedBackend {
        fn new() -> Self {
            Self {
                gates: Mutex::new(HashMap::new()),
            }
        }

        fn gate(&self, query: &str) -> Arc<Notify> {
            self.gates
                .lock()
                .unwrap()
                .entry(query.to_string())
                .or_insert_with(|| Arc::new(Notify::new()))
                .clone()
        }

        fn release(&self, query: &str) {
            self.gate(query).notify_one();
        }
    }

    #[async_trait]
    impl ChatBackend for GatedBackend {
        async fn process_url(
            &self,
            _submission: UrlSubmission,
        ) -> Result<UrlProcessResult, ChatError> {
            Ok(UrlProcessResult {
                message: Some("URL processed successfully".to_string()),
            })
        }

        async fn query(&self, submission: QuerySubmission) -> Result<QueryAnswerResult, ChatError> {
            self.gate(&submission.query).notified().await;
            Ok(QueryAnswerResult {
                answer: Some(format!("answer to {}", submission.query)),
            })
        }
    }

    #[tokio::test]
    async fn test_empty_inputs_are_silent_no_ops() {
        // テスト項目: 空の URL・質問ではメッセージもリクエストも発生しない
        // given (前提条件):
        let mut backend = MockChatBackend::new();
        backend.expect_process_url().never();
        backend.expect_query().never();
        let fixture = create_fixture(Arc::new(backend));

        // when (操作):
        fixture.client.submit_url("").await;
        fixture.client.submit_query("").await;
        let url_handle = fixture.client.submit_url_input();
        let query_handle = fixture.client.handle_key(Key::Enter);

        // then (期待する結果):
        assert!(url_handle.is_none());
        assert!(query_handle.is_none());
        assert!(fixture.transcript.is_empty());
    }

    #[tokio::test]
    async fn test_submit_url_success() {
        // テスト項目: URL 処理に成功すると、処理中メッセージと結果メッセージが順に追加される
        // given (前提条件):
        let mut backend = MockChatBackend::new();
        backend
            .expect_process_url()
            .with(eq(UrlSubmission {
                url: "http://x".to_string(),
            }))
            .times(1)
            .returning(|_| {
                Ok(UrlProcessResult {
                    message: Some("ok".to_string()),
                })
            });
        let fixture = create_fixture(Arc::new(backend));

        // when (操作):
        fixture.client.submit_url("http://x").await;

        // then (期待する結果):
        assert_eq!(
            entries(&fixture.transcript),
            vec![
                (MessageKind::System, "Processing URL...".to_string()),
                (MessageKind::System, "ok".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_submit_url_success_without_message() {
        // テスト項目: message を持たない成功応答は空のシステムメッセージになり、エラーにはならない
        // given (前提条件):
        let mut backend = MockChatBackend::new();
        backend
            .expect_process_url()
            .times(1)
            .returning(|_| Ok(UrlProcessResult { message: None }));
        let fixture = create_fixture(Arc::new(backend));

        // when (操作):
        fixture.client.submit_url("http://x").await;

        // then (期待する結果):
        assert_eq!(
            entries(&fixture.transcript),
            vec![
                (MessageKind::System, "Processing URL...".to_string()),
                (MessageKind::System, String::new()),
            ]
        );
    }

    #[tokio::test]
    async fn test_submit_url_request_error() {
        // テスト項目: 非 2xx 応答の detail がエラーメッセージとして表示される
        // given (前提条件):
        let mut backend = MockChatBackend::new();
        backend
            .expect_process_url()
            .times(1)
            .returning(|_| Err(ChatError::request(Some("bad url".to_string()))));
        let fixture = create_fixture(Arc::new(backend));

        // when (操作):
        fixture.client.submit_url("http://x").await;

        // then (期待する結果):
        assert_eq!(
            entries(&fixture.transcript),
            vec![
                (MessageKind::System, "Processing URL...".to_string()),
                (
                    MessageKind::Error,
                    "Failed to process URL: bad url".to_string()
                ),
            ]
        );
    }

    #[tokio::test]
    async fn test_submit_url_transport_error() {
        // テスト項目: 通信失敗もエラーメッセージに変換され、呼び出し元へ伝播しない
        // given (前提条件):
        let mut backend = MockChatBackend::new();
        backend
            .expect_process_url()
            .times(1)
            .returning(|_| Err(ChatError::Transport("connection refused".to_string())));
        let fixture = create_fixture(Arc::new(backend));

        // when (操作):
        fixture.client.submit_url("http://x").await;

        // then (期待する結果):
        let messages = fixture.transcript.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].kind(), MessageKind::Error);
        assert_eq!(messages[1].sender(), "Error");
        assert_eq!(
            messages[1].body(),
            "Failed to process URL: connection refused"
        );
    }

    #[tokio::test]
    async fn test_submit_url_input_keeps_url_value() {
        // テスト項目: URL 入力欄からの送信では入力値がクリアされない
        // given (前提条件):
        let mut backend = MockChatBackend::new();
        backend.expect_process_url().times(1).returning(|_| {
            Ok(UrlProcessResult {
                message: Some("URL processed successfully".to_string()),
            })
        });
        let fixture = create_fixture(Arc::new(backend));
        fixture.url_input.set("https://example.com");

        // when (操作):
        let handle = fixture.client.submit_url_input().unwrap();
        handle.await.unwrap();

        // then (期待する結果):
        assert_eq!(fixture.url_input.value(), "https://example.com");
        assert_eq!(
            entries(&fixture.transcript),
            vec![
                (MessageKind::System, "Processing URL...".to_string()),
                (
                    MessageKind::System,
                    "URL processed successfully".to_string()
                ),
            ]
        );
    }

    #[tokio::test]
    async fn test_query_is_acknowledged_and_cleared_before_response() {
        // テスト項目: 応答を受け取る前に、質問がトランスクリプトに追加され入力欄がクリアされる
        // given (前提条件):
        let backend = Arc::new(GatedBackend::new());
        let fixture = create_fixture(backend.clone());
        fixture.query_input.set("what is x?");

        // when (操作):
        let handle = fixture.client.handle_key(Key::Enter).unwrap();

        // then (期待する結果):
        assert_eq!(fixture.query_input.value(), "");
        assert_eq!(
            entries(&fixture.transcript),
            vec![(MessageKind::User, "what is x?".to_string())]
        );

        backend.release("what is x?");
        handle.await.unwrap();
        assert_eq!(
            entries(&fixture.transcript),
            vec![
                (MessageKind::User, "what is x?".to_string()),
                (MessageKind::Bot, "answer to what is x?".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_submit_query_success() {
        // テスト項目: 回答取得に成功すると、質問と回答が順に追加される
        // given (前提条件):
        let mut backend = MockChatBackend::new();
        backend
            .expect_query()
            .with(eq(QuerySubmission {
                query: "q".to_string(),
            }))
            .times(1)
            .returning(|_| {
                Ok(QueryAnswerResult {
                    answer: Some("a".to_string()),
                })
            });
        let fixture = create_fixture(Arc::new(backend));
        fixture.query_input.set("q");

        // when (操作):
        fixture.client.submit_query("q").await;

        // then (期待する結果):
        assert_eq!(fixture.query_input.value(), "");
        assert_eq!(
            entries(&fixture.transcript),
            vec![
                (MessageKind::User, "q".to_string()),
                (MessageKind::Bot, "a".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_submit_query_transport_error() {
        // テスト項目: 通信失敗時は "Failed to get answer: " で始まるエラーメッセージが追加される
        // given (前提条件):
        let mut backend = MockChatBackend::new();
        backend
            .expect_query()
            .times(1)
            .returning(|_| Err(ChatError::Transport("connection reset".to_string())));
        let fixture = create_fixture(Arc::new(backend));

        // when (操作):
        fixture.client.submit_query("q").await;

        // then (期待する結果):
        let messages = fixture.transcript.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].kind(), MessageKind::Error);
        assert!(messages[1].body().starts_with("Failed to get answer: "));
        assert!(messages[1].body().ends_with("connection reset"));
    }

    #[tokio::test]
    async fn test_submit_query_without_answer_yields_empty_bot_message() {
        // テスト項目: answer を含まない応答では本文が空の bot メッセージになる（エラーにはならない）
        // given (前提条件):
        let mut backend = MockChatBackend::new();
        backend
            .expect_query()
            .times(1)
            .returning(|_| Ok(QueryAnswerResult { answer: None }));
        let fixture = create_fixture(Arc::new(backend));

        // when (操作):
        fixture.client.submit_query("q").await;

        // then (期待する結果):
        assert_eq!(
            entries(&fixture.transcript),
            vec![
                (MessageKind::User, "q".to_string()),
                (MessageKind::Bot, String::new()),
            ]
        );
    }

    #[tokio::test]
    async fn test_overlapping_queries_both_complete() {
        // テスト項目: 並行した 2 つの質問は完了順に関わらず両方の回答が追加される
        // given (前提条件):
        let backend = Arc::new(GatedBackend::new());
        let fixture = create_fixture(backend.clone());

        // when (操作):
        // the second query is released first
        let release = async {
            tokio::task::yield_now().await;
            backend.release("second");
            tokio::task::yield_now().await;
            backend.release("first");
        };
        futures_util::future::join3(
            fixture.client.submit_query("first"),
            fixture.client.submit_query("second"),
            release,
        )
        .await;

        // then (期待する結果):
        let bots: Vec<String> = entries(&fixture.transcript)
            .into_iter()
            .filter(|(kind, _)| *kind == MessageKind::Bot)
            .map(|(_, body)| body)
            .collect();
        assert_eq!(bots.len(), 2);
        assert!(bots.contains(&"answer to first".to_string()));
        assert!(bots.contains(&"answer to second".to_string()));
    }

    #[tokio::test]
    async fn test_non_enter_keys_are_ignored() {
        // テスト項目: Enter 以外のキーでは質問が送信されない
        // given (前提条件):
        let mut backend = MockChatBackend::new();
        backend.expect_query().never();
        let fixture = create_fixture(Arc::new(backend));
        fixture.query_input.set("q");

        // when (操作):
        let handle = fixture.client.handle_key(Key::Other);

        // then (期待する結果):
        assert!(handle.is_none());
        assert_eq!(fixture.query_input.value(), "q");
        assert!(fixture.transcript.is_empty());
    }
}
