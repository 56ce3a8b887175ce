//! Parsing of lines typed at the prompt.
//!
//! Pure functions without side effects, kept apart from the session loop so
//! they are easy to test.

/// What a line typed at the prompt asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fill the URL input with the value and submit it
    Url(String),
    /// Fill the query input with the value and press Enter
    Ask(String),
    Help,
    Quit,
}

/// Parse a line typed at the prompt.
///
/// Lines starting with `/url` load a page, `/help` and `/quit` are handled
/// locally, and anything else is a question.
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();

    if let Some(rest) = line.strip_prefix("/url") {
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            return Command::Url(rest.trim().to_string());
        }
    }

    match line {
        "/help" => Command::Help,
        "/quit" | "/exit" => Command::Quit,
        _ => Command::Ask(line.to_string()),
    }
}
