//! Shiori question answering server library.
//!
//! `POST /process_url` loads a web page and indexes its text;
//! `POST /query` answers a question from the most relevant passages of the
//! last processed page with a language model.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
