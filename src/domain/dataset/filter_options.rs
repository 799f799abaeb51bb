//! Campus/course catalog (`opcoes_filtro.json`).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{CampusName, CourseCode, ExamYear};

/// A selectable course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseEntry {
    pub codigo: CourseCode,
    pub nome: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampusCatalog {
    #[serde(default)]
    pub cursos: Vec<CourseEntry>,
}

/// Options offered by the selection UI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    #[serde(default)]
    pub anos: Vec<ExamYear>,
    #[serde(default)]
    pub campi: BTreeMap<CampusName, CampusCatalog>,
}

impl FilterOptions {
    pub fn campuses(&self) -> impl Iterator<Item = &CampusName> {
        self.campi.keys()
    }

    /// Courses of a campus; empty for an unknown campus.
    pub fn courses(&self, campus: &CampusName) -> &[CourseEntry] {
        self.campi
            .get(campus)
            .map(|catalog| catalog.cursos.as_slice())
            .unwrap_or(&[])
    }

    /// Display name of a course within a campus.
    pub fn course_name(&self, campus: &CampusName, code: &CourseCode) -> Option<&str> {
        self.courses(campus)
            .iter()
            .find(|entry| &entry.codigo == code)
            .map(|entry| entry.nome.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_catalog_with_numeric_codes() {
        let json = r#"{
            "anos": [2014, 2017, 2021],
            "campi": {
                "Quixadá": {"cursos": [{"codigo": 1001, "nome": "Ciência da Computação"}]}
            }
        }"#;
        let options: FilterOptions = serde_json::from_str(json).unwrap();
        let campus = CampusName::new("Quixadá").unwrap();

        assert_eq!(options.anos.len(), 3);
        assert_eq!(options.courses(&campus).len(), 1);
        assert_eq!(
            options.course_name(&campus, &CourseCode::new("1001").unwrap()),
            Some("Ciência da Computação")
        );
    }

    #[test]
    fn unknown_campus_has_no_courses() {
        let options = FilterOptions::default();
        assert!(options.courses(&CampusName::new("Sobral").unwrap()).is_empty());
    }
}
