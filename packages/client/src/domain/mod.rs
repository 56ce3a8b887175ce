//! Domain layer of the chat client.
//!
//! - `message`: transcript entries
//! - `port`: interfaces of the collaborators injected into the client
//! - `error`: failures of a single request/response exchange
//! - `key`: key signals delivered by the front end

pub mod error;
pub mod key;
pub mod message;
pub mod port;

pub use error::ChatError;
pub use key::Key;
pub use message::{ChatMessage, MessageKind};
pub use port::{ChatBackend, InputField, MessageSink};

#[cfg(test)]
pub use port::MockChatBackend;
