//! Score metrics and exam components.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three score categories reported per course and year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    #[default]
    Overall,
    GeneralFormation,
    SpecificComponent,
}

impl Metric {
    pub fn all() -> &'static [Metric] {
        &[
            Metric::Overall,
            Metric::GeneralFormation,
            Metric::SpecificComponent,
        ]
    }

    /// Row index into the metric field table.
    pub fn index(&self) -> usize {
        match self {
            Metric::Overall => 0,
            Metric::GeneralFormation => 1,
            Metric::SpecificComponent => 2,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Metric::Overall => "overall",
            Metric::GeneralFormation => "general-formation",
            Metric::SpecificComponent => "specific-component",
        };
        write!(f, "{}", s)
    }
}

/// The two parts of the exam whose competencies are scored separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExamComponent {
    /// Componente Específico (`desempenho_CE`).
    #[default]
    #[serde(rename = "CE")]
    Specific,
    /// Formação Geral (`desempenho_FG`).
    #[serde(rename = "FG")]
    General,
}

impl ExamComponent {
    pub fn all() -> &'static [ExamComponent] {
        &[ExamComponent::Specific, ExamComponent::General]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ExamComponent::Specific => "Componente Específico",
            ExamComponent::General => "Formação Geral",
        }
    }
}

impl fmt::Display for ExamComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
