//! Transcript rendered to the terminal.

use std::{
    io::{self, Write},
    sync::{Arc, Mutex},
};

use shiori_shared::time::Clock;

use crate::domain::{ChatMessage, MessageSink};

use super::formatter::MessageFormatter;

/// Sink printing every message as it is appended, then redisplaying the
/// prompt so the newest line is always the last one on screen.
pub struct ConsoleTranscript<W: Write + Send = io::Stdout> {
    out: Mutex<W>,
    clock: Arc<dyn Clock>,
    prompt: String,
}

impl ConsoleTranscript<io::Stdout> {
    /// Create a transcript printing to stdout
    pub fn stdout(clock: Arc<dyn Clock>, prompt: impl Into<String>) -> Self {
        Self::new(io::stdout(), clock, prompt)
    }
}

impl<W: Write + Send> ConsoleTranscript<W> {
    pub fn new(out: W, clock: Arc<dyn Clock>, prompt: impl Into<String>) -> Self {
        Self {
            out: Mutex::new(out),
            clock,
            prompt: prompt.into(),
        }
    }

    /// Consume the transcript and return the underlying writer
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W: Write + Send> MessageSink for ConsoleTranscript<W> {
    fn append(&self, message: ChatMessage) {
        let formatted = MessageFormatter::format_message(&message, self.clock.now_millis());
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = write!(out, "{}{}", formatted, self.prompt).and_then(|_| out.flush()) {
            tracing::warn!("Failed to write message to terminal: {}", e);
        }
    }
}
