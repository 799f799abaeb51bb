//! Question label → exam booklet page resolution.

use serde::Serialize;
use thiserror::Error;

use crate::domain::dataset::{CourseExamLinks, ExamLinkEntry};
use crate::domain::foundation::{CourseCode, ErrorKind, ExamYear, QuestionType};

/// Why a question could not be located. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionNotFound {
    #[error("Select a course and year before opening a question")]
    NoSelection,

    #[error("Question label '{0}' contains no number")]
    InvalidLabel(String),

    #[error("Exam index unavailable: {0}")]
    IndexUnavailable(String),

    #[error("No exam booklet indexed for course {0}")]
    UnknownCourse(CourseCode),

    #[error("No exam booklet for course {course} in {year}")]
    UnknownYear { course: CourseCode, year: ExamYear },

    #[error("No {question_type} page map for course {course} in {year}")]
    NoPageMap {
        course: CourseCode,
        year: ExamYear,
        question_type: QuestionType,
    },

    #[error("Question {number} ({question_type}) is not mapped for course {course} in {year}")]
    UnknownQuestion {
        course: CourseCode,
        year: ExamYear,
        question_type: QuestionType,
        number: String,
    },
}

impl QuestionNotFound {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::QuestionNotFound
    }
}

/// A resolved page, with the booklet URL when one is indexed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamPageRef {
    pub year: ExamYear,
    pub question_type: QuestionType,
    pub question_number: String,
    pub page: u32,
    pub url: Option<String>,
}

impl ExamPageRef {
    /// URL that opens the embedded PDF viewer at the resolved page.
    pub fn viewer_url(&self) -> Option<String> {
        self.url
            .as_ref()
            .map(|url| format!("{}#page={}", url, self.page))
    }
}

/// Strips every non-digit character; `None` when nothing is left.
pub fn question_number(label: &str) -> Option<String> {
    let digits: String = label.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        None
    } else {
        Some(digits)
    }
}

/// Resolves a question label within one course's exam booklets.
///
/// The exact digit string is looked up first; "05" then falls back to "5".
pub fn resolve_page(
    course_links: Option<&CourseExamLinks>,
    course: &CourseCode,
    year: ExamYear,
    label: &str,
    question_type: QuestionType,
) -> Result<ExamPageRef, QuestionNotFound> {
    let number =
        question_number(label).ok_or_else(|| QuestionNotFound::InvalidLabel(label.to_string()))?;
    let entry: &ExamLinkEntry = course_links
        .ok_or_else(|| QuestionNotFound::UnknownCourse(course.clone()))?
        .get(&year)
        .ok_or_else(|| QuestionNotFound::UnknownYear {
            course: course.clone(),
            year,
        })?;

    let pages = entry.page_maps.for_type(question_type);
    if pages.is_empty() {
        return Err(QuestionNotFound::NoPageMap {
            course: course.clone(),
            year,
            question_type,
        });
    }

    let unpadded = number.trim_start_matches('0');
    let page = pages
        .get(&number)
        .or_else(|| pages.get(unpadded))
        .copied()
        .ok_or_else(|| QuestionNotFound::UnknownQuestion {
            course: course.clone(),
            year,
            question_type,
            number: number.clone(),
        })?;

    Ok(ExamPageRef {
        year,
        question_type,
        question_number: number,
        page,
        url: entry.url.clone(),
    })
}
