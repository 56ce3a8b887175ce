//! Terminal front end of the chat client.

mod command;
mod console;
mod formatter;
mod session;

pub use console::ConsoleTranscript;
pub use session::run_client;
