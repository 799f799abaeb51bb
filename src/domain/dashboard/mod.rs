//! Projection engine: pure functions from a loaded dataset and the current
//! selection to chart-ready series.

pub mod history;
pub mod overview;
pub mod perception;
pub mod series;
pub mod topic;
pub mod view;

pub use history::{project_history, HistoryProjection, HistoryRow};
pub use overview::{project_overview, OverviewProjection, OverviewRow, OverviewSummary};
pub use perception::{project_perception, PerceptionItem, PerceptionProjection, ReliabilityTier};
pub use series::{score_values, SeriesValues};
pub use topic::{
    project_topic_distribution, project_topic_performance, DistributionRow, TopicProjection, TopicRow,
};
pub use view::{project_view, view_slice, ViewSeries};
