//! Shared building blocks for the Shiori client and server.
//!
//! - `api`: JSON bodies exchanged on `/process_url` and `/query`
//! - `logger`: tracing subscriber setup for the binaries
//! - `time`: clock abstraction and timestamp formatting

pub mod api;
pub mod logger;
pub mod time;
