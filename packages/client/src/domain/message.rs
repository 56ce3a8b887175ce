//! Transcript entries.

use std::fmt;

/// Classification tag controlling how a message is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    System,
    User,
    Bot,
    Error,
}

impl MessageKind {
    /// Sender label shown in front of the message body
    pub fn sender(&self) -> &'static str {
        match self {
            MessageKind::System => "System",
            MessageKind::User => "You",
            MessageKind::Bot => "Bot",
            MessageKind::Error => "Error",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::System => "system",
            MessageKind::User => "user",
            MessageKind::Bot => "bot",
            MessageKind::Error => "error",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single transcript entry.
///
/// Fields are private: a message is never mutated once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    sender: String,
    body: String,
    kind: MessageKind,
}

impl ChatMessage {
    /// Create a message with the sender label of its kind
    pub fn new(kind: MessageKind, body: impl Into<String>) -> Self {
        Self {
            sender: kind.sender().to_string(),
            body: body.into(),
            kind,
        }
    }

    pub fn system(body: impl Into<String>) -> Self {
        Self::new(MessageKind::System, body)
    }

    pub fn user(body: impl Into<String>) -> Self {
        Self::new(MessageKind::User, body)
    }

    pub fn bot(body: impl Into<String>) -> Self {
        Self::new(MessageKind::Bot, body)
    }

    pub fn error(body: impl Into<String>) -> Self {
        Self::new(MessageKind::Error, body)
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn kind(&self) -> MessageKind {
        self.kind
    }
}
