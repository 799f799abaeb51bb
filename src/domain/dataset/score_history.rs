//! Score overview records (`Visao_Geral/{campus}/visao_geral_consolidado.json`).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{CourseCode, ExamYear};

/// Course scores and comparison averages for one exam year.
///
/// Every field is optional: an absent or `null` value means "unknown" and is
/// never coerced to zero here. The legacy spellings emitted by older pipeline
/// runs are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    #[serde(default, rename = "NO_CURSO", skip_serializing_if = "Option::is_none")]
    pub course_name: Option<String>,

    #[serde(default, alias = "nota_geral_media_curso")]
    pub nota_geral: Option<f64>,
    #[serde(default, alias = "nota_fg_media_curso")]
    pub nota_fg: Option<f64>,
    #[serde(default, alias = "nota_ce_media_curso")]
    pub nota_ce: Option<f64>,

    #[serde(default, alias = "ufc_geral")]
    pub media_ufc_geral: Option<f64>,
    #[serde(default, alias = "ufc_fg")]
    pub media_ufc_fg: Option<f64>,
    #[serde(default, alias = "ufc_ce")]
    pub media_ufc_ce: Option<f64>,

    #[serde(default, alias = "nacional_geral")]
    pub media_nacional_geral: Option<f64>,
    #[serde(default, alias = "nacional_fg")]
    pub media_nacional_fg: Option<f64>,
    #[serde(default, alias = "nacional_ce")]
    pub media_nacional_ce: Option<f64>,

    #[serde(default, alias = "regiao_geral")]
    pub media_regiao_geral: Option<f64>,
    #[serde(default, alias = "regiao_fg")]
    pub media_regiao_fg: Option<f64>,
    #[serde(default, alias = "regiao_ce")]
    pub media_regiao_ce: Option<f64>,

    #[serde(default, alias = "uf_geral")]
    pub media_uf_geral: Option<f64>,
    #[serde(default, alias = "uf_fg")]
    pub media_uf_fg: Option<f64>,
    #[serde(default, alias = "uf_ce")]
    pub media_uf_ce: Option<f64>,

    #[serde(default, alias = "total_participantes")]
    pub numero_participantes: Option<u32>,
}

/// Year-indexed score records for a single course.
pub type CourseScores = BTreeMap<ExamYear, ScoreRecord>;

/// Campus-wide score overview: course → year → record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreHistory(BTreeMap<CourseCode, CourseScores>);

impl ScoreHistory {
    /// Returns the year-indexed records of a course, if present.
    pub fn course(&self, code: &CourseCode) -> Option<&CourseScores> {
        self.0.get(code)
    }

    /// Returns the record for a course in a given year, if present.
    pub fn record(&self, code: &CourseCode, year: ExamYear) -> Option<&ScoreRecord> {
        self.course(code).and_then(|years| years.get(&year))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
