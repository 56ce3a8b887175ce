//! UseCase layer of the chat client.

mod chat_client;

pub use chat_client::{ChatClient, PROCESSING_URL_MESSAGE};
