//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `JsonSource` - Read-only access to the published JSON dataset

mod json_source;

pub use json_source::{FetchError, JsonSource};
