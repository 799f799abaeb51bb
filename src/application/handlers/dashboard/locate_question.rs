//! LocateQuestionHandler - resolves a question label to its exam booklet page.
//!
//! Failures are reported as `QuestionNotFound` and never escalate.

use std::sync::Arc;
use tracing::debug;

use crate::application::DatasetRepository;
use crate::domain::exam::{resolve_page, ExamPageRef, QuestionNotFound};
use crate::domain::foundation::{CourseCode, ExamYear, QuestionType};

/// Query to locate one question of one exam.
#[derive(Debug, Clone)]
pub struct LocateQuestionQuery {
    pub course: CourseCode,
    pub year: ExamYear,
    /// Free-form label such as "Q5" or "Questão 10".
    pub label: String,
    pub question_type: QuestionType,
}

/// Result of a successful lookup.
pub type LocateQuestionResult = ExamPageRef;

/// Handler for question → page lookups.
pub struct LocateQuestionHandler {
    repository: Arc<DatasetRepository>,
}

impl LocateQuestionHandler {
    pub fn new(repository: Arc<DatasetRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: LocateQuestionQuery,
    ) -> Result<LocateQuestionResult, QuestionNotFound> {
        let links = self
            .repository
            .load_exam_links(&query.course)
            .await
            .map_err(|e| QuestionNotFound::IndexUnavailable(e.to_string()))?;

        let result = resolve_page(
            links.as_ref(),
            &query.course,
            query.year,
            &query.label,
            query.question_type,
        );
        if let Err(ref reason) = result {
            debug!(course = %query.course, year = %query.year, label = %query.label, %reason, "Question not located");
        }
        result
    }
}
