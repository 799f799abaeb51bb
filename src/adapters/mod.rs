//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `source` - JSON dataset sources (HTTP, filesystem, in-memory)

pub mod source;

pub use source::{from_config, FileJsonSource, HttpJsonSource, HttpSourceConfig, InMemoryJsonSource};
