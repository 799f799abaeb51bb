use serde::Serialize;

use super::series::{score_values, SeriesValues};
use crate::domain::comparison::{metric_fields, Metric, SeriesStyle};
use crate::domain::dataset::CourseScores;
use crate::domain::foundation::ExamYear;
use crate::domain::selection::SelectionState;

/// The overview bar chart for one metric in one year
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewProjection {
    pub year: Option<ExamYear>,
    pub metric: Metric,
    /// Metric label ("Nota Geral", ...)
    pub label: &'static str,
    /// At most one row; empty when the course has no record for the year
    pub rows: Vec<OverviewRow>,
    pub legend: Vec<SeriesStyle>,
    /// Stat cards, independent of metric and baselines
    pub summary: Option<OverviewSummary>,
}

/// One bar group: `Curso` plus one key per enabled baseline, nothing else.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct OverviewRow {
    pub values: SeriesValues,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewSummary {
    pub overall: Option<f64>,
    pub general_formation: Option<f64>,
    pub specific_component: Option<f64>,
    pub participants: Option<u32>,
}

/// Projects the `(course, year)` score record for the active metric.
pub fn project_overview(scores: Option<&CourseScores>, selection: &SelectionState) -> OverviewProjection {
    let metric = selection.active_metric;
    let record = selection
        .year
        .and_then(|year| scores.and_then(|years| years.get(&year)));

    let rows = record
        .map(|record| {
            vec![OverviewRow {
                values: score_values(record, metric, &selection.baselines),
            }]
        })
        .unwrap_or_default();

    let summary = record.map(|record| OverviewSummary {
        overall: record.nota_geral,
        general_formation: record.nota_fg,
        specific_component: record.nota_ce,
        participants: record.numero_participantes,
    });

    OverviewProjection {
        year: selection.year,
        metric,
        label: metric_fields(metric).label,
        rows,
        legend: selection.baselines.legend(),
        summary,
    }
}

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;
