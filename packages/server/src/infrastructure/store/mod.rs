//! チェーン保持の実装

pub mod inmemory;

pub use inmemory::InMemoryChainStore;
