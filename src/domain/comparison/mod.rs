//! Comparison tables: metrics, baselines, and the field-name lookup tables
//! every projection is expressed in.

mod baseline;
mod fields;
mod metric;

pub use baseline::{Baseline, BaselineSet, SeriesStyle, ValueSource, COURSE_SERIES};
pub use fields::{
    competency_field, component_competencies, metric_fields, score_field, CompetencyField,
    FieldSpec, MetricFields, QuestionTypeFields, ScoreField, COMPETENCY_TABLE, METRIC_TABLE,
};
pub use metric::{ExamComponent, Metric};
