//! Exam booklet lookups for the embedded PDF viewer.

mod locator;

pub use locator::{question_number, resolve_page, ExamPageRef, QuestionNotFound};
