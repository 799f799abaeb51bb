//! Query handlers, grouped by area.

pub mod dashboard;

pub use dashboard::{LocateQuestionHandler, LocateQuestionQuery, LocateQuestionResult};
