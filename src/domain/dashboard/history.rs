use serde::Serialize;

use super::series::{score_values, SeriesValues};
use crate::domain::comparison::{metric_fields, Metric, SeriesStyle};
use crate::domain::dataset::EvolutionSnapshot;
use crate::domain::foundation::ExamYear;
use crate::domain::selection::SelectionState;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryProjection {
    pub metric: Metric,
    pub title: &'static str,
    pub rows: Vec<HistoryRow>,
    pub legend: Vec<SeriesStyle>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryRow {
    pub year: ExamYear,
    #[serde(flatten)]
    pub values: SeriesValues,
}

/// One row per snapshot, year ascending. Nothing is filtered; missing
/// values stay `null` so the line chart shows a gap.
pub fn project_history(snapshots: &[EvolutionSnapshot], selection: &SelectionState) -> HistoryProjection {
    let metric = selection.active_metric;
    let mut rows: Vec<HistoryRow> = snapshots
        .iter()
        .map(|snapshot| HistoryRow {
            year: snapshot.year,
            values: score_values(&snapshot.scores, metric, &selection.baselines),
        })
        .collect();
    rows.sort_by_key(|row| row.year);

    HistoryProjection {
        metric,
        title: metric_fields(metric).title,
        rows,
        legend: selection.baselines.legend(),
    }
}

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;
