//! Application layer - repository, coordinator and query handlers.
//!
//! This layer orchestrates domain projections and coordinates between ports.

pub mod dataset_repository;
pub mod handlers;
pub mod view_coordinator;

pub use dataset_repository::{DatasetError, DatasetRepository};
pub use handlers::{LocateQuestionHandler, LocateQuestionQuery, LocateQuestionResult};
pub use view_coordinator::{
    ApplyOutcome, CompletedLoad, CoordinatorOptions, LoadStatus, Notice, PendingLoad, ViewCoordinator,
};
