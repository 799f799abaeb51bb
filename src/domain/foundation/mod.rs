//! Foundation module - Shared domain primitives.
//!
//! Identifiers, enums and error types that form the vocabulary of the
//! dashboard engine.

mod errors;
mod ids;
mod question_type;

pub use errors::{ErrorKind, ValidationError};
pub use ids::{CampusName, CourseCode, ExamYear};
pub use question_type::QuestionType;
