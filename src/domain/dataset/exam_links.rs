//! Exam document index (`estrutura_links_provas.json`).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{CourseCode, ExamYear, QuestionType};

/// Question number → printed page, per question type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMaps {
    #[serde(default)]
    pub objetivas: BTreeMap<String, u32>,
    #[serde(default)]
    pub discursivas: BTreeMap<String, u32>,
}

impl PageMaps {
    pub fn for_type(&self, question_type: QuestionType) -> &BTreeMap<String, u32> {
        match question_type {
            QuestionType::Objective => &self.objetivas,
            QuestionType::Discursive => &self.discursivas,
        }
    }
}

/// Exam booklet of one course in one year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawExamLinkEntry")]
pub struct ExamLinkEntry {
    pub url: Option<String>,
    #[serde(rename = "mapa_paginas")]
    pub page_maps: PageMaps,
}

/// The template generator writes bare URL strings before page maps exist.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawExamLinkEntry {
    UrlOnly(String),
    Full {
        #[serde(default)]
        url: Option<String>,
        #[serde(default)]
        mapa_paginas: PageMaps,
    },
}

impl From<RawExamLinkEntry> for ExamLinkEntry {
    fn from(raw: RawExamLinkEntry) -> Self {
        let (url, page_maps) = match raw {
            RawExamLinkEntry::UrlOnly(url) => (Some(url), PageMaps::default()),
            RawExamLinkEntry::Full { url, mapa_paginas } => (url, mapa_paginas),
        };
        Self {
            url: url.filter(|u| !u.trim().is_empty()),
            page_maps,
        }
    }
}

/// Exam booklets of one course, by year.
pub type CourseExamLinks = BTreeMap<ExamYear, ExamLinkEntry>;

/// Course → year → exam booklet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExamLinkIndex(BTreeMap<CourseCode, CourseExamLinks>);

impl ExamLinkIndex {
    pub fn course(&self, code: &CourseCode) -> Option<&CourseExamLinks> {
        self.0.get(code)
    }
}
