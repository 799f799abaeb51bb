//! Data source configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;

/// Where the published JSON files are read from
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DataSourceKind {
    Http,
    #[default]
    File,
}

/// Data source configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DataSourceConfig {
    #[serde(default)]
    pub kind: DataSourceKind,

    /// Root URL of the static host (required for `http`)
    pub base_url: Option<String>,

    /// Root directory of the pipeline output (used for `file`)
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,

    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl DataSourceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate data source configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        match self.kind {
            DataSourceKind::Http => {
                let url = self
                    .base_url
                    .as_deref()
                    .ok_or(ValidationError::MissingRequired("data_source.base_url"))?;
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    return Err(ValidationError::InvalidBaseUrl(url.to_string()));
                }
            }
            DataSourceKind::File => {
                if self.base_dir.as_os_str().is_empty() {
                    return Err(ValidationError::MissingRequired("data_source.base_dir"));
                }
            }
        }
        Ok(())
    }
}

impl Default for DataSourceConfig {
    fn default() -> Self {
        Self {
            kind: DataSourceKind::default(),
            base_url: None,
            base_dir: default_base_dir(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_timeout() -> u64 {
    15
}
