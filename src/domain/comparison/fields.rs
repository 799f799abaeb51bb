//! Field-name tables mapping (metric or question type, value source) to a
//! record field.
//!
//! Projections never branch on metric or baseline: they index into these
//! tables. A new chart only needs a new table row.

use super::{ExamComponent, Metric, ValueSource};
use crate::domain::dataset::{Competencies, CompetencyStats, ScoreRecord, TopicYear};
use crate::domain::foundation::QuestionType;

/// A named numeric field of a record type.
pub struct FieldSpec<R> {
    /// Source JSON field name.
    pub name: &'static str,
    pub read: fn(&R) -> Option<f64>,
}

impl<R> FieldSpec<R> {
    pub fn value(&self, record: &R) -> Option<f64> {
        (self.read)(record)
    }
}

pub type ScoreField = FieldSpec<ScoreRecord>;
pub type CompetencyField = FieldSpec<CompetencyStats>;

macro_rules! field {
    ($record:ty, $name:ident) => {
        FieldSpec {
            name: stringify!($name),
            read: |record: &$record| record.$name,
        }
    };
}

/// One metric row: display label plus a field per value source.
pub struct MetricFields {
    pub metric: Metric,
    pub label: &'static str,
    pub title: &'static str,
    /// Indexed by [`ValueSource::index`].
    pub fields: [ScoreField; 5],
}

/// Three metrics × five value sources. Rows indexed by [`Metric::index`].
pub static METRIC_TABLE: [MetricFields; 3] = [
    MetricFields {
        metric: Metric::Overall,
        label: "Nota Geral",
        title: "Evolução da Nota Geral",
        fields: [
            field!(ScoreRecord, nota_geral),
            field!(ScoreRecord, media_ufc_geral),
            field!(ScoreRecord, media_nacional_geral),
            field!(ScoreRecord, media_regiao_geral),
            field!(ScoreRecord, media_uf_geral),
        ],
    },
    MetricFields {
        metric: Metric::GeneralFormation,
        label: "Form. Geral",
        title: "Evolução da Formação Geral (FG)",
        fields: [
            field!(ScoreRecord, nota_fg),
            field!(ScoreRecord, media_ufc_fg),
            field!(ScoreRecord, media_nacional_fg),
            field!(ScoreRecord, media_regiao_fg),
            field!(ScoreRecord, media_uf_fg),
        ],
    },
    MetricFields {
        metric: Metric::SpecificComponent,
        label: "Comp. Específico",
        title: "Evolução do Componente Específico (CE)",
        fields: [
            field!(ScoreRecord, nota_ce),
            field!(ScoreRecord, media_ufc_ce),
            field!(ScoreRecord, media_nacional_ce),
            field!(ScoreRecord, media_regiao_ce),
            field!(ScoreRecord, media_uf_ce),
        ],
    },
];

/// One question-type row of the competency table.
pub struct QuestionTypeFields {
    pub question_type: QuestionType,
    /// Indexed by [`ValueSource::index`].
    pub fields: [CompetencyField; 5],
}

/// Two question types × five value sources. Rows follow [`QuestionType::all`].
pub static COMPETENCY_TABLE: [QuestionTypeFields; 2] = [
    QuestionTypeFields {
        question_type: QuestionType::Objective,
        fields: [
            field!(CompetencyStats, percentual_objetivas_curso),
            field!(CompetencyStats, percentual_objetivas_ufc),
            field!(CompetencyStats, percentual_objetivas_br),
            field!(CompetencyStats, percentual_objetivas_regiao),
            field!(CompetencyStats, percentual_objetivas_uf),
        ],
    },
    QuestionTypeFields {
        question_type: QuestionType::Discursive,
        fields: [
            field!(CompetencyStats, media_discursivas_curso),
            field!(CompetencyStats, media_discursivas_ufc),
            field!(CompetencyStats, media_discursivas_br),
            field!(CompetencyStats, media_discursivas_regiao),
            field!(CompetencyStats, media_discursivas_uf),
        ],
    },
];

pub fn metric_fields(metric: Metric) -> &'static MetricFields {
    &METRIC_TABLE[metric.index()]
}

pub fn score_field(metric: Metric, source: ValueSource) -> &'static ScoreField {
    &metric_fields(metric).fields[source.index()]
}

pub fn competency_field(question_type: QuestionType, source: ValueSource) -> &'static CompetencyField {
    let row = match question_type {
        QuestionType::Objective => &COMPETENCY_TABLE[0],
        QuestionType::Discursive => &COMPETENCY_TABLE[1],
    };
    &row.fields[source.index()]
}

/// Competency map of a component within one topic year.
pub fn component_competencies(topic_year: &TopicYear, component: ExamComponent) -> &Competencies {
    match component {
        ExamComponent::Specific => &topic_year.specific,
        ExamComponent::General => &topic_year.general,
    }
}
