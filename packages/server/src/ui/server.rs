//! Server execution logic.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use shiori_shared::api::{PROCESS_URL_PATH, QUERY_PATH};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::usecase::{AnswerQueryUseCase, ProcessUrlUseCase};

use super::{
    handler::{health_check, process_url, query},
    signal::shutdown_signal,
    state::AppState,
};

/// Question answering server
///
/// This struct encapsulates the server configuration and provides methods to run the server.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(process_url_usecase, answer_query_usecase);
/// server.run("0.0.0.0".to_string(), 8000).await?;
/// ```
pub struct Server {
    /// ProcessUrlUseCase（URL 処理のユースケース）
    process_url_usecase: Arc<ProcessUrlUseCase>,
    /// AnswerQueryUseCase（質問応答のユースケース）
    answer_query_usecase: Arc<AnswerQueryUseCase>,
}

impl Server {
    /// Create a new Server instance
    ///
    /// # Arguments
    ///
    /// * `process_url_usecase` - UseCase for loading and indexing a page
    /// * `answer_query_usecase` - UseCase for answering questions
    pub fn new(
        process_url_usecase: Arc<ProcessUrlUseCase>,
        answer_query_usecase: Arc<AnswerQueryUseCase>,
    ) -> Self {
        Self {
            process_url_usecase,
            answer_query_usecase,
        }
    }

    /// Build the router with every endpoint and middleware
    pub fn into_router(self) -> Router {
        let app_state = Arc::new(AppState {
            process_url_usecase: self.process_url_usecase,
            answer_query_usecase: self.answer_query_usecase,
        });

        // Browser pages served from other origins may call the API
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_headers(Any)
            .allow_methods(Any);

        Router::new()
            .route(PROCESS_URL_PATH, post(process_url))
            .route(QUERY_PATH, post(query))
            .route("/api/health", get(health_check))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .with_state(app_state)
    }

    /// Run the question answering server
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "0.0.0.0")
    /// * `port` - The port number to bind to (e.g., 8000)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.into_router();

        // Bind the server to the host and port
        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        // Start the server
        tracing::info!("Shiori server listening on {}", listener.local_addr()?);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        // Set up graceful shutdown signal handler
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
