use serde::Serialize;

use super::history::{project_history, HistoryProjection};
use super::overview::{project_overview, OverviewProjection};
use super::perception::{project_perception, PerceptionProjection};
use super::topic::{project_topic_distribution, project_topic_performance, DistributionRow, TopicProjection};
use crate::domain::dataset::{CourseDataset, DatasetSlice, SliceState};
use crate::domain::selection::{ActiveView, SelectionState};

/// Series for whichever view is active.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "kebab-case")]
pub enum ViewSeries {
    Overview(OverviewProjection),
    Topic {
        performance: TopicProjection,
        distribution: Vec<DistributionRow>,
    },
    History(HistoryProjection),
    Perception(PerceptionProjection),
    /// The backing slice failed to load; the view shows a placeholder.
    Unavailable { slice: DatasetSlice, reason: String },
}

impl ViewSeries {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, ViewSeries::Unavailable { .. })
    }
}

/// The slice a view reads from.
pub fn view_slice(view: ActiveView) -> DatasetSlice {
    match view {
        ActiveView::Overview => DatasetSlice::Scores,
        ActiveView::Topic => DatasetSlice::Topics,
        ActiveView::History => DatasetSlice::Evolution,
        ActiveView::Perception => DatasetSlice::Perception,
    }
}

fn unavailable<T>(slice: DatasetSlice, state: &SliceState<T>) -> Option<ViewSeries> {
    match state {
        SliceState::Unavailable { reason } => Some(ViewSeries::Unavailable {
            slice,
            reason: reason.clone(),
        }),
        _ => None,
    }
}

/// Projects the active view over a loaded dataset.
///
/// A failed slice only degrades its own view. An absent course key projects
/// to empty series.
pub fn project_view(dataset: &CourseDataset, selection: &SelectionState) -> ViewSeries {
    let slice = view_slice(selection.active_view);
    match selection.active_view {
        ActiveView::Overview => unavailable(slice, &dataset.scores)
            .unwrap_or_else(|| ViewSeries::Overview(project_overview(dataset.scores.ready(), selection))),
        ActiveView::Topic => unavailable(slice, &dataset.topics).unwrap_or_else(|| {
            let topics = dataset.topics.ready();
            ViewSeries::Topic {
                performance: project_topic_performance(topics, selection),
                distribution: project_topic_distribution(topics, selection.year),
            }
        }),
        ActiveView::History => unavailable(slice, &dataset.evolution).unwrap_or_else(|| {
            let snapshots = dataset.evolution.ready().map(Vec::as_slice).unwrap_or(&[]);
            ViewSeries::History(project_history(snapshots, selection))
        }),
        ActiveView::Perception => unavailable(slice, &dataset.perception).unwrap_or_else(|| {
            ViewSeries::Perception(project_perception(dataset.perception.ready(), selection))
        }),
    }
}
