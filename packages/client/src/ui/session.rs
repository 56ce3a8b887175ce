//! Interactive terminal session.

use std::sync::Arc;

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use shiori_shared::time::SystemClock;
use tokio::sync::mpsc;

use crate::{
    domain::Key,
    infrastructure::{HttpChatBackend, TextInput},
    usecase::ChatClient,
};

use super::{
    command::{Command, parse_command},
    console::ConsoleTranscript,
    formatter::MessageFormatter,
};

const PROMPT: &str = "> ";

/// Run the chat client against the server at `base_url` until the user exits.
///
/// Lines are read with rustyline on a dedicated thread and forwarded over a
/// channel. Each submission is spawned as its own task, so a slow answer
/// never blocks the prompt.
pub async fn run_client(base_url: String) -> Result<(), Box<dyn std::error::Error>> {
    let url_input = Arc::new(TextInput::new());
    let query_input = Arc::new(TextInput::new());
    let transcript = Arc::new(ConsoleTranscript::stdout(Arc::new(SystemClock), PROMPT));
    let backend = Arc::new(HttpChatBackend::new(&base_url));

    let client = ChatClient::new(
        backend,
        url_input.clone(),
        query_input.clone(),
        transcript,
    );

    tracing::info!("Chat client started for {}", base_url);
    print!("{}", MessageFormatter::format_welcome(&base_url));

    // Create channel for rustyline input
    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<String>();

    // Spawn a blocking thread for rustyline (synchronous readline)
    let readline_handle = std::thread::spawn(move || -> Result<(), ReadlineError> {
        let mut rl = DefaultEditor::new()?;

        loop {
            match rl.readline(PROMPT) {
                Ok(line) => {
                    let line = line.trim();
                    if !line.is_empty() {
                        rl.add_history_entry(line).ok();
                        if input_tx.send(line.to_string()).is_err() {
                            // Channel closed, exit thread
                            break;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C
                    tracing::info!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl+D
                    tracing::info!("EOF");
                    break;
                }
                Err(err) => return Err(err),
            }
        }

        Ok(())
    });

    while let Some(line) = input_rx.recv().await {
        match parse_command(&line) {
            Command::Url(url) => {
                url_input.set(url);
                client.submit_url_input();
            }
            Command::Ask(query) => {
                query_input.set(query);
                client.handle_key(Key::Enter);
            }
            Command::Help => print!("\n{}", MessageFormatter::format_help()),
            Command::Quit => break,
        }
    }

    // Dropping the receiver ends the readline thread on its next line
    drop(input_rx);

    if readline_handle.is_finished() {
        match readline_handle.join() {
            Ok(Err(e)) => return Err(Box::new(e)),
            Ok(Ok(())) => {}
            Err(_) => tracing::error!("Readline thread panicked"),
        }
    }

    tracing::info!("Chat client exited");

    Ok(())
}
