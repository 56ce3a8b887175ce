//! In-memory transcript.

use std::sync::Mutex;

use crate::domain::{ChatMessage, MessageSink};

/// Append-only list of messages kept in memory
#[derive(Debug, Default)]
pub struct InMemoryTranscript {
    messages: Mutex<Vec<ChatMessage>>,
}

impl InMemoryTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the messages in append order
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.messages
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.messages.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MessageSink for InMemoryTranscript {
    fn append(&self, message: ChatMessage) {
        self.messages
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(message);
    }
}
