//! In-Memory JSON Source Adapter
//!
//! Serves documents from memory and can inject failures per path.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{FetchError, JsonSource};

/// In-memory document store keyed by data path
#[derive(Debug, Clone, Default)]
pub struct InMemoryJsonSource {
    documents: Arc<RwLock<HashMap<String, serde_json::Value>>>,
    failures: Arc<RwLock<HashMap<String, FetchError>>>,
    fetches: Arc<RwLock<HashMap<String, usize>>>,
}

impl InMemoryJsonSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a document under a path, replacing any previous one
    pub async fn insert(&self, path: impl Into<String>, document: serde_json::Value) {
        self.documents.write().await.insert(path.into(), document);
    }

    /// Make every fetch of `path` fail with `error` until cleared
    pub async fn fail(&self, path: impl Into<String>, error: FetchError) {
        self.failures.write().await.insert(path.into(), error);
    }

    pub async fn clear_failure(&self, path: &str) {
        self.failures.write().await.remove(path);
    }

    /// Number of fetches issued for a path, failed ones included
    pub async fn fetch_count(&self, path: &str) -> usize {
        self.fetches.read().await.get(path).copied().unwrap_or(0)
    }

    pub async fn total_fetches(&self) -> usize {
        self.fetches.read().await.values().sum()
    }
}

#[async_trait]
impl JsonSource for InMemoryJsonSource {
    async fn fetch(&self, path: &str) -> Result<serde_json::Value, FetchError> {
        *self.fetches.write().await.entry(path.to_string()).or_insert(0) += 1;

        if let Some(error) = self.failures.read().await.get(path) {
            return Err(error.clone());
        }

        self.documents
            .read()
            .await
            .get(path)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(path.to_string()))
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
