//! JsonSource port - read-only access to the published dashboard JSON files.
//!
//! Paths are relative to the data root, e.g.
//! `Visao_Geral/Fortaleza/visao_geral_consolidado.json` or `links_provas.json`.

use async_trait::async_trait;

/// Errors that can occur while fetching a JSON document
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("HTTP {status} fetching {path}")]
    Http { status: u16, path: String },

    #[error("Request for {path} timed out after {timeout_secs}s")]
    Timeout { path: String, timeout_secs: u64 },

    #[error("Transport error fetching {path}: {message}")]
    Transport { path: String, message: String },

    #[error("Malformed JSON in {path}: {message}")]
    Parse { path: String, message: String },

    #[error("IO error reading {path}: {message}")]
    Io { path: String, message: String },
}

impl FetchError {
    pub fn parse(path: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Parse {
            path: path.into(),
            message: err.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Port for fetching static JSON resources
#[async_trait]
pub trait JsonSource: Send + Sync {
    /// Fetch and parse one document.
    ///
    /// # Errors
    /// Returns `FetchError::NotFound` when the resource does not exist and
    /// another variant for transport or decoding failures.
    async fn fetch(&self, path: &str) -> Result<serde_json::Value, FetchError>;

    /// Short description for logs ("http https://...", "file ./data").
    fn describe(&self) -> String;
}
