//! Per-competency performance (`Desempenho_Topico/{campus}/competencias_consolidado.json`).

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::foundation::{CourseCode, ExamYear};

/// Scores of one competency for the course and its four comparison groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompetencyStats {
    #[serde(default)]
    pub percentual_objetivas_curso: Option<f64>,
    #[serde(default)]
    pub percentual_objetivas_ufc: Option<f64>,
    #[serde(default)]
    pub percentual_objetivas_br: Option<f64>,
    #[serde(default)]
    pub percentual_objetivas_regiao: Option<f64>,
    #[serde(default)]
    pub percentual_objetivas_uf: Option<f64>,

    #[serde(default)]
    pub media_discursivas_curso: Option<f64>,
    #[serde(default)]
    pub media_discursivas_ufc: Option<f64>,
    #[serde(default)]
    pub media_discursivas_br: Option<f64>,
    #[serde(default)]
    pub media_discursivas_regiao: Option<f64>,
    #[serde(default)]
    pub media_discursivas_uf: Option<f64>,

    #[serde(default)]
    pub quantidade_questoes_total: Option<u32>,
    #[serde(default, deserialize_with = "labels")]
    pub lista_questoes_objetivas: Vec<String>,
    #[serde(default, deserialize_with = "labels")]
    pub lista_questoes_discursivas: Vec<String>,
    #[serde(default, deserialize_with = "labels")]
    pub lista_disciplinas: Vec<String>,
}

/// Question lists mix `"Q3"`, `"3"` and `3`; `null` means empty.
fn labels<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Label {
        Text(String),
        Number(u64),
    }

    let raw: Option<Vec<Label>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|label| match label {
            Label::Text(text) => text,
            Label::Number(n) => n.to_string(),
        })
        .collect())
}

/// Competency name → stats, in source order.
///
/// Order matters: the distribution ranking breaks ties by it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Competencies(Vec<(String, CompetencyStats)>);

impl Competencies {
    pub fn new(entries: Vec<(String, CompetencyStats)>) -> Self {
        Self(entries)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CompetencyStats)> {
        self.0.iter().map(|(name, stats)| (name.as_str(), stats))
    }

    pub fn get(&self, name: &str) -> Option<&CompetencyStats> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, stats)| stats)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for Competencies {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CompetenciesVisitor;

        impl<'de> Visitor<'de> for CompetenciesVisitor {
            type Value = Competencies;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of competency name to stats")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, stats)) = map.next_entry::<String, CompetencyStats>()? {
                    entries.push((name, stats));
                }
                Ok(Competencies(entries))
            }
        }

        deserializer.deserialize_map(CompetenciesVisitor)
    }
}

impl Serialize for Competencies {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, stats) in &self.0 {
            map.serialize_entry(name, stats)?;
        }
        map.end()
    }
}

/// Both exam components for one course in one year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicYear {
    #[serde(rename = "desempenho_CE", default)]
    pub specific: Competencies,
    #[serde(rename = "desempenho_FG", default)]
    pub general: Competencies,
}

/// Year-indexed topic performance for a single course.
pub type CourseTopics = BTreeMap<ExamYear, TopicYear>;

/// Campus-wide topic performance: course → year → components.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicPerformance(BTreeMap<CourseCode, CourseTopics>);

impl TopicPerformance {
    pub fn course(&self, code: &CourseCode) -> Option<&CourseTopics> {
        self.0.get(code)
    }

    pub fn year(&self, code: &CourseCode, year: ExamYear) -> Option<&TopicYear> {
        self.course(code).and_then(|years| years.get(&year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_competency_source_order() {
        let json = r#"{
            "Redes": {"percentual_objetivas_curso": 40.0},
            "Algoritmos": {"percentual_objetivas_curso": 70.0},
            "Banco de Dados": {"percentual_objetivas_curso": 55.0}
        }"#;
        let competencies: Competencies = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = competencies.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Redes", "Algoritmos", "Banco de Dados"]);
    }

    #[test]
    fn question_labels_accept_numbers_strings_and_null() {
        let json = r#"{
            "quantidade_questoes_total": 3,
            "lista_questoes_objetivas": ["Q9", 12],
            "lista_questoes_discursivas": null,
            "lista_disciplinas": ["Redes de Computadores"]
        }"#;
        let stats: CompetencyStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.lista_questoes_objetivas, vec!["Q9", "12"]);
        assert!(stats.lista_questoes_discursivas.is_empty());
        assert_eq!(stats.quantidade_questoes_total, Some(3));
    }

    #[test]
    fn topic_year_reads_component_keys() {
        let json = r#"{
            "1001": {
                "2021": {
                    "desempenho_CE": {"Algoritmos": {"media_discursivas_curso": 61.5}},
                    "desempenho_FG": {}
                }
            }
        }"#;
        let topics: TopicPerformance = serde_json::from_str(json).unwrap();
        let code = CourseCode::new("1001").unwrap();
        let year = ExamYear::new(2021).unwrap();
        let topic_year = topics.year(&code, year).unwrap();

        assert_eq!(
            topic_year.specific.get("Algoritmos").unwrap().media_discursivas_curso,
            Some(61.5)
        );
        assert!(topic_year.general.is_empty());
    }

    #[test]
    fn missing_component_defaults_to_empty() {
        let topic_year: TopicYear = serde_json::from_str(r#"{"desempenho_FG": {}}"#).unwrap();
        assert!(topic_year.specific.is_empty());
    }
}
