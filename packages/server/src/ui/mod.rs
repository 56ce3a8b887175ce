//! HTTP server of the question answering service.

mod handler;
mod server;
mod signal;
pub mod state;

pub use server::Server;
