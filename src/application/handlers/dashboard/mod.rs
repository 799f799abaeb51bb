//! Dashboard query handlers.
//!
//! Read-only handlers over the dataset repository.

mod locate_question;

pub use locate_question::{LocateQuestionHandler, LocateQuestionQuery, LocateQuestionResult};
