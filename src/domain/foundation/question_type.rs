//! QuestionType enum for the two ENADE item formats.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Objective (multiple choice) or discursive (open answer) items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum QuestionType {
    #[default]
    #[serde(rename = "objetivas")]
    Objective,
    #[serde(rename = "discursivas")]
    Discursive,
}

impl QuestionType {
    pub fn all() -> &'static [QuestionType] {
        &[QuestionType::Objective, QuestionType::Discursive]
    }

    /// Key used in `mapa_paginas` and in the selection UI.
    pub fn source_key(&self) -> &'static str {
        match self {
            QuestionType::Objective => "objetivas",
            QuestionType::Discursive => "discursivas",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            QuestionType::Objective => "Questões Objetivas",
            QuestionType::Discursive => "Questões Discursivas",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_source_keys() {
        assert_eq!(
            serde_json::to_string(&QuestionType::Discursive).unwrap(),
            "\"discursivas\""
        );
        let parsed: QuestionType = serde_json::from_str("\"objetivas\"").unwrap();
        assert_eq!(parsed, QuestionType::Objective);
    }
}
