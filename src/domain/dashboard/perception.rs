use serde::Serialize;

use crate::domain::dataset::{PerceptionCategory, PerceptionProfile, PerceptionQuestion};
use crate::domain::foundation::ExamYear;
use crate::domain::selection::SelectionState;

/// How far a question's mean can be trusted, from its "don't know" share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReliabilityTier {
    Reliable,
    Moderate,
    HighUncertainty,
    /// No percentage was reported.
    Unknown,
}

impl ReliabilityTier {
    /// `< 20` reliable, `20..50` moderate, `>= 50` high uncertainty.
    /// A missing or non-finite share is unknown.
    pub fn from_share(nao_sei_perc: Option<f64>) -> Self {
        match nao_sei_perc {
            Some(perc) if !perc.is_finite() => ReliabilityTier::Unknown,
            Some(perc) if perc >= 50.0 => ReliabilityTier::HighUncertainty,
            Some(perc) if perc >= 20.0 => ReliabilityTier::Moderate,
            Some(_) => ReliabilityTier::Reliable,
            None => ReliabilityTier::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReliabilityTier::Reliable => "Confiável",
            ReliabilityTier::Moderate => "Moderado",
            ReliabilityTier::HighUncertainty => "Alta incerteza",
            ReliabilityTier::Unknown => "Sem dados",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerceptionItem {
    #[serde(flatten)]
    pub question: PerceptionQuestion,
    pub status: ReliabilityTier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerceptionProjection {
    /// The year actually shown, after falling back to the latest survey
    pub year: Option<ExamYear>,
    pub category: PerceptionCategory,
    pub available_years: Vec<ExamYear>,
    pub questions: Vec<PerceptionItem>,
}

pub fn project_perception(profile: Option<&PerceptionProfile>, selection: &SelectionState) -> PerceptionProjection {
    let category = selection.perception_category;
    let available_years = profile.map(PerceptionProfile::years_descending).unwrap_or_default();
    let year = selection.year.or_else(|| available_years.first().copied());

    let questions = match (profile, year) {
        (Some(profile), Some(year)) => profile
            .questions(year, category)
            .iter()
            .map(|question| PerceptionItem {
                question: question.clone(),
                status: ReliabilityTier::from_share(question.nao_sei_perc),
            })
            .collect(),
        _ => Vec::new(),
    };

    PerceptionProjection {
        year,
        category,
        available_years,
        questions,
    }
}

#[cfg(test)]
#[path = "perception_test.rs"]
mod perception_test;
