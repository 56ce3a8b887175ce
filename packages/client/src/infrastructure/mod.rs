//! Infrastructure layer of the chat client.
//!
//! - `backend`: reqwest implementation of `ChatBackend`
//! - `input`: in-memory text input
//! - `transcript`: in-memory transcript

pub mod backend;
pub mod input;
pub mod transcript;

pub use backend::HttpChatBackend;
pub use input::TextInput;
pub use transcript::InMemoryTranscript;
