//! File-based JSON Source Adapter
//!
//! Reads the pipeline's output tree (`Visao_Geral/`, `Desempenho_Topico/`, ...)
//! from a local directory.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

use crate::ports::{FetchError, JsonSource};

/// Reads dashboard JSON files below a base directory
#[derive(Debug, Clone)]
pub struct FileJsonSource {
    base_path: PathBuf,
}

impl FileJsonSource {
    /// Create a new file source rooted at `base_path`
    ///
    /// # Example
    /// ```ignore
    /// let source = FileJsonSource::new("./frontend/public/data");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Resolve a data path, refusing anything that leaves the base directory
    fn resolve(&self, path: &str) -> Result<PathBuf, FetchError> {
        let relative = Path::new(path.trim_start_matches('/'));
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Err(FetchError::Io {
                path: path.to_string(),
                message: "path escapes the data directory".to_string(),
            });
        }
        Ok(self.base_path.join(relative))
    }
}

#[async_trait]
impl JsonSource for FileJsonSource {
    async fn fetch(&self, path: &str) -> Result<serde_json::Value, FetchError> {
        let file_path = self.resolve(path)?;

        let content = fs::read_to_string(&file_path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                FetchError::NotFound(path.to_string())
            } else {
                FetchError::Io {
                    path: path.to_string(),
                    message: e.to_string(),
                }
            }
        })?;

        serde_json::from_str(&content).map_err(|e| FetchError::parse(path, e))
    }

    fn describe(&self) -> String {
        format!("file {}", self.base_path.display())
    }
}
