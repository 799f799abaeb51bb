//! JSON Source Adapters
//!
//! Implementations of the JsonSource port.
//!
//! ## Available Adapters
//!
//! - **HttpJsonSource** - Fetches the published files from a static host
//! - **FileJsonSource** - Reads the pipeline output directory from disk
//! - **InMemoryJsonSource** - Serves documents from memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::source::{FileJsonSource, HttpJsonSource, HttpSourceConfig};
//!
//! // Production: static host
//! let source = HttpJsonSource::new(HttpSourceConfig::new("https://enade.example.org/data"))?;
//!
//! // Local: pipeline output
//! let source = FileJsonSource::new("./frontend/public/data");
//! ```

mod file_json_source;
mod http_json_source;
mod in_memory_json_source;

pub use file_json_source::FileJsonSource;
pub use http_json_source::{HttpJsonSource, HttpSourceConfig};
pub use in_memory_json_source::InMemoryJsonSource;

use std::sync::Arc;

use crate::config::{DataSourceConfig, DataSourceKind};
use crate::ports::{FetchError, JsonSource};

/// Builds the configured source.
pub fn from_config(config: &DataSourceConfig) -> Result<Arc<dyn JsonSource>, FetchError> {
    match config.kind {
        DataSourceKind::Http => {
            let base_url = config.base_url.clone().unwrap_or_default();
            let source = HttpJsonSource::new(HttpSourceConfig::new(base_url).with_timeout(config.timeout()))?;
            Ok(Arc::new(source))
        }
        DataSourceKind::File => Ok(Arc::new(FileJsonSource::new(&config.base_dir))),
    }
}
