//! Shiori chat client library.
//!
//! The client reads a URL and questions from its input fields, forwards them
//! to the `/process_url` and `/query` endpoints and appends the outcome of
//! every exchange to a transcript.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
