//! Terminal chat client for Shiori.
//!
//! Loads a web page on the server with `/url <url>` and sends every other
//! line as a question. Answers are appended to the transcript as they
//! arrive, in whatever order the server responds.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin shiori-client
//! cargo run --bin shiori-client -- --base-url http://127.0.0.1:3000
//! ```

use clap::Parser;

use shiori_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "shiori-client")]
#[command(about = "Chat client asking questions about a web page", long_about = None)]
struct Args {
    /// Base URL of the Shiori server
    #[arg(short = 'u', long, default_value = "http://127.0.0.1:8000")]
    base_url: String,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    // Run the client
    if let Err(e) = shiori_client::ui::run_client(args.base_url).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
