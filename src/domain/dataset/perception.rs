//! Course perception survey (`Analise_Perfil/{campus}/perfil_consolidado.json`).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::foundation::{CourseCode, ExamYear};

/// Question groups of the student questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PerceptionCategory {
    #[default]
    DidacticPedagogical,
    Infrastructure,
    Opportunities,
    General,
}

impl PerceptionCategory {
    /// Returns all categories in display order.
    pub fn all() -> &'static [PerceptionCategory] {
        &[
            PerceptionCategory::DidacticPedagogical,
            PerceptionCategory::Infrastructure,
            PerceptionCategory::Opportunities,
            PerceptionCategory::General,
        ]
    }

    /// Key used by the consolidated profile file.
    pub fn source_key(&self) -> &'static str {
        match self {
            PerceptionCategory::DidacticPedagogical => "didatica",
            PerceptionCategory::Infrastructure => "infra",
            PerceptionCategory::Opportunities => "oportunidades",
            PerceptionCategory::General => "geral",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PerceptionCategory::DidacticPedagogical => "Org. Didático-Pedagógica",
            PerceptionCategory::Infrastructure => "Infraestrutura",
            PerceptionCategory::Opportunities => "Oportunidades",
            PerceptionCategory::General => "Avaliação Geral",
        }
    }
}

impl fmt::Display for PerceptionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A single Likert question with its "don't know" share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerceptionQuestion {
    pub codigo: String,
    #[serde(default)]
    pub pergunta: String,
    /// Mean agreement, 1.0 to 6.0.
    #[serde(default)]
    pub nota: Option<f64>,
    #[serde(default)]
    pub nao_sei_qtd: Option<u32>,
    #[serde(default)]
    pub nao_sei_perc: Option<f64>,
}

/// Category key → questions, for one year.
pub type PerceptionYear = BTreeMap<String, Vec<PerceptionQuestion>>;

/// Survey history of one course.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerceptionProfile {
    #[serde(default)]
    pub historico: BTreeMap<ExamYear, PerceptionYear>,
}

impl PerceptionProfile {
    /// Questions of a category in a year; empty when either is absent.
    pub fn questions(&self, year: ExamYear, category: PerceptionCategory) -> &[PerceptionQuestion] {
        self.historico
            .get(&year)
            .and_then(|by_category| by_category.get(category.source_key()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Years with survey data, most recent first.
    pub fn years_descending(&self) -> Vec<ExamYear> {
        self.historico.keys().rev().copied().collect()
    }
}

/// Campus-wide perception profiles: course → profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PerceptionProfiles(BTreeMap<CourseCode, PerceptionProfile>);

impl PerceptionProfiles {
    pub fn course(&self, code: &CourseCode) -> Option<&PerceptionProfile> {
        self.0.get(code)
    }
}
