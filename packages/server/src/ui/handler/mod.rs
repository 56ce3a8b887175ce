//! Request handlers.

mod http;

pub use http::{health_check, process_url, query};
