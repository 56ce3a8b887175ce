//! Question answering server for Shiori.
//!
//! `POST /process_url` loads a web page and indexes its text, `POST /query`
//! answers questions about the last processed page with an OpenAI-compatible
//! chat model.
//!
//! Settings are read from the command line, the environment, or a `.env`
//! file in the working directory.
//!
//! Run with:
//! ```not_rust
//! OPENAI_API_KEY=sk-... cargo run --bin shiori-server
//! cargo run --bin shiori-server -- --host 127.0.0.1 --port 3000
//! ```

use std::sync::Arc;

use clap::Parser;

use shiori_server::{
    domain::{TextSplitter, index::DEFAULT_TOP_K},
    infrastructure::{
        llm::{
            OpenAiChatModel, OpenAiEmbeddingModel,
            openai::{DEFAULT_BASE_URL, DEFAULT_EMBEDDING_MODEL, DEFAULT_MODEL},
        },
        loader::WebPageLoader,
        store::InMemoryChainStore,
    },
    ui::Server,
    usecase::{AnswerQueryUseCase, ProcessUrlUseCase},
};
use shiori_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "shiori-server")]
#[command(about = "Question answering server over a web page", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "0.0.0.0")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8000")]
    port: u16,

    /// API key of the chat completions API
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    openai_api_key: String,

    /// Base URL of the chat completions API
    #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    openai_base_url: String,

    /// Chat model answering the questions
    #[arg(short = 'm', long, env = "OPENAI_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Embedding model used to index pages and questions
    #[arg(long, env = "OPENAI_EMBEDDING_MODEL", default_value = DEFAULT_EMBEDDING_MODEL)]
    embedding_model: String,
}

#[tokio::main]
async fn main() {
    // Load .env before reading the environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Adapters (loader, embedder, language model, chain store)
    // 2. UseCases
    // 3. Server

    // 1. Create adapters
    let loader = Arc::new(WebPageLoader::new());
    let embedder = Arc::new(OpenAiEmbeddingModel::new(
        args.openai_api_key.clone(),
        args.embedding_model,
        args.openai_base_url.clone(),
    ));
    let model = Arc::new(OpenAiChatModel::new(
        args.openai_api_key,
        args.model,
        args.openai_base_url,
    ));
    tracing::info!(
        "Answering with model {}, embedding with {}",
        model.model(),
        embedder.model()
    );
    let store = Arc::new(InMemoryChainStore::new());

    // 2. Create UseCases
    let process_url_usecase = Arc::new(ProcessUrlUseCase::new(
        loader,
        embedder.clone(),
        store.clone(),
        TextSplitter::default(),
    ));
    let answer_query_usecase = Arc::new(AnswerQueryUseCase::new(
        store,
        embedder,
        model,
        DEFAULT_TOP_K,
    ));

    // 3. Create and run the server
    let server = Server::new(process_url_usecase, answer_query_usecase);
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
