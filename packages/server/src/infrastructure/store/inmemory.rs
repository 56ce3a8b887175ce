//! In-memory chain store.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{ChainStore, QaChain};

/// Holds the chain of the last processed URL for the lifetime of the server
#[derive(Default)]
pub struct InMemoryChainStore {
    chain: RwLock<Option<Arc<QaChain>>>,
}

impl InMemoryChainStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChainStore for InMemoryChainStore {
    async fn current(&self) -> Option<Arc<QaChain>> {
        self.chain.read().await.clone()
    }

    async fn replace(&self, chain: QaChain) {
        *self.chain.write().await = Some(Arc::new(chain));
    }
}
