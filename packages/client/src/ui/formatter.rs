//! Message formatting utilities for client display.

use shiori_shared::time::timestamp_to_jst_clock;

use crate::domain::{ChatMessage, MessageKind};

/// Message formatter for client display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format a transcript message
    ///
    /// # Arguments
    ///
    /// * `message` - The message to display
    /// * `received_at` - Unix timestamp when the message was appended (milliseconds)
    ///
    /// # Returns
    ///
    /// A formatted line such as `12:34:56 Bot: answer`. Error messages are
    /// marked with `!` so they stand out in a plain terminal.
    pub fn format_message(message: &ChatMessage, received_at: i64) -> String {
        let marker = match message.kind() {
            MessageKind::Error => "! ",
            MessageKind::System | MessageKind::User | MessageKind::Bot => "",
        };
        format!(
            "\n{}{} {}: {}\n",
            marker,
            timestamp_to_jst_clock(received_at),
            message.sender(),
            message.body()
        )
    }

    /// Format the greeting shown when the session starts
    pub fn format_welcome(base_url: &str) -> String {
        format!(
            "\n============================================================\n\
             Connected to {}\n\
             {}\
             ============================================================\n",
            base_url,
            Self::format_help()
        )
    }

    /// Format the list of available commands
    pub fn format_help() -> String {
        "  /url <url>  load a web page to ask questions about\n\
         \x20 /help       show this help\n\
         \x20 /quit       exit\n\
         \x20 anything else is sent as a question\n"
            .to_string()
    }
}
