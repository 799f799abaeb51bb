//! Historical evolution (`Evolucao_Historica/{campus}/evolucao_historica.json`).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ScoreRecord;
use crate::domain::foundation::{CourseCode, ExamYear};

/// One year of a course's score history.
///
/// The snapshot carries the same fields as [`ScoreRecord`]; the pipeline
/// writes them in their short form (`ufc_geral`, `nacional_ce`, ...), which
/// the record accepts as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionSnapshot {
    #[serde(rename = "ano", alias = "year")]
    pub year: ExamYear,
    #[serde(flatten)]
    pub scores: ScoreRecord,
}

/// Campus-wide evolution: course → snapshots, year ascending.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvolutionHistory(BTreeMap<CourseCode, Vec<EvolutionSnapshot>>);

impl EvolutionHistory {
    /// Returns the snapshots of a course; empty when the course is absent.
    pub fn course(&self, code: &CourseCode) -> &[EvolutionSnapshot] {
        self.0.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, code: &CourseCode) -> bool {
        self.0.contains_key(code)
    }
}
