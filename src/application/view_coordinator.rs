//! ViewCoordinator - owns the selection and the loaded dataset.
//!
//! Events go through [`ViewCoordinator::dispatch`]. A course change returns a
//! [`PendingLoad`] that the caller runs on its runtime and hands back through
//! [`ViewCoordinator::apply`]. Results whose [`LoadTag`] is no longer current
//! are dropped, so the last selection always wins.

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::handlers::{LocateQuestionHandler, LocateQuestionQuery};
use super::DatasetRepository;
use crate::domain::dashboard::{project_view, ViewSeries};
use crate::domain::dataset::{CourseDataset, DatasetSlice, PrimarySliceUnavailable};
use crate::domain::exam::{ExamPageRef, QuestionNotFound};
use crate::domain::foundation::ErrorKind;
use crate::domain::selection::{
    LoadGeneration, LoadTag, SelectionEffect, SelectionEvent, SelectionState,
};

/// Coordinator switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinatorOptions {
    /// Show a notice listing slices that failed to load.
    pub partial_data_notice: bool,
}

impl Default for CoordinatorOptions {
    fn default() -> Self {
        Self {
            partial_data_notice: true,
        }
    }
}

/// Where the current dataset load stands.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "kebab-case")]
pub enum LoadStatus {
    /// No course selected.
    Idle,
    Loading { tag: LoadTag },
    Ready,
    /// Scores failed; other slices may still be shown.
    Degraded { reason: String },
    /// Nothing could be fetched.
    Failed { reason: String },
}

/// A dismissible message for the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Notice {
    PartialData { slices: Vec<DatasetSlice> },
    QuestionNotFound { message: String },
}

impl Notice {
    pub fn error_kind(&self) -> ErrorKind {
        match self {
            Notice::PartialData { .. } => ErrorKind::ResourceUnavailable,
            Notice::QuestionNotFound { .. } => ErrorKind::QuestionNotFound,
        }
    }
}

/// A dataset load that has been requested but not run.
#[must_use = "a pending load does nothing until run"]
pub struct PendingLoad {
    repository: Arc<DatasetRepository>,
    tag: LoadTag,
}

impl PendingLoad {
    pub fn tag(&self) -> &LoadTag {
        &self.tag
    }

    pub async fn run(self) -> CompletedLoad {
        let dataset = self.repository.load(&self.tag.campus, &self.tag.course).await;
        CompletedLoad {
            tag: self.tag,
            dataset,
        }
    }
}

/// A finished load, not yet applied.
#[derive(Debug, Clone)]
pub struct CompletedLoad {
    pub tag: LoadTag,
    pub dataset: CourseDataset,
}

/// What [`ViewCoordinator::apply`] did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// Superseded by a later selection; discarded.
    Stale,
}

impl ApplyOutcome {
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            ApplyOutcome::Applied => None,
            ApplyOutcome::Stale => Some(ErrorKind::StaleResult),
        }
    }
}

pub struct ViewCoordinator {
    repository: Arc<DatasetRepository>,
    locator: LocateQuestionHandler,
    options: CoordinatorOptions,
    selection: SelectionState,
    generation: LoadGeneration,
    dataset: Option<CourseDataset>,
    status: LoadStatus,
    partial_notice: Option<Notice>,
    question_notice: Option<Notice>,
}

impl ViewCoordinator {
    pub fn new(repository: Arc<DatasetRepository>, options: CoordinatorOptions) -> Self {
        Self {
            locator: LocateQuestionHandler::new(Arc::clone(&repository)),
            repository,
            options,
            selection: SelectionState::new(),
            generation: LoadGeneration::default(),
            dataset: None,
            status: LoadStatus::Idle,
            partial_notice: None,
            question_notice: None,
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Slices of the applied dataset that failed to load.
    pub fn partial_data_notice(&self) -> Option<&Notice> {
        self.partial_notice.as_ref()
    }

    /// The last question lookup miss.
    pub fn question_notice(&self) -> Option<&Notice> {
        self.question_notice.as_ref()
    }

    /// Every active notice, partial data first.
    pub fn notices(&self) -> Vec<&Notice> {
        self.partial_notice
            .iter()
            .chain(self.question_notice.iter())
            .collect()
    }

    pub fn dataset(&self) -> Option<&CourseDataset> {
        self.dataset.as_ref()
    }

    /// Applies a selection event. Returns a load to run when the course changed.
    pub fn dispatch(&mut self, event: SelectionEvent) -> Option<PendingLoad> {
        match self.selection.apply(event) {
            SelectionEffect::Unchanged | SelectionEffect::Recompute => None,
            SelectionEffect::Reset => {
                // outstanding loads for the old campus must not land
                self.generation.advance();
                self.dataset = None;
                self.status = LoadStatus::Idle;
                self.partial_notice = None;
                self.question_notice = None;
                None
            }
            SelectionEffect::Load => {
                let (campus, course) = self.selection.load_key()?;
                let tag = LoadTag::new(self.generation.advance(), campus.clone(), course.clone());
                debug!(tag = %tag, "Dataset load requested");
                // the previous course's data must not be projected under the new selection
                self.dataset = None;
                self.partial_notice = None;
                self.status = LoadStatus::Loading { tag: tag.clone() };
                Some(PendingLoad {
                    repository: Arc::clone(&self.repository),
                    tag,
                })
            }
        }
    }

    /// Applies a finished load if it still matches the selection.
    pub fn apply(&mut self, completed: CompletedLoad) -> ApplyOutcome {
        let CompletedLoad { tag, dataset } = completed;
        if !tag.is_current(self.generation.current(), &self.selection) {
            debug!(tag = %tag, latest = self.generation.current(), "Discarding stale dataset load");
            return ApplyOutcome::Stale;
        }

        if self.selection.year.is_none() {
            self.selection.year = dataset.latest_year();
        }

        self.status = if !dataset.is_usable() {
            let reason = dataset
                .load_error()
                .map(|e| e.reason)
                .unwrap_or_else(|| "no dataset resource could be fetched".to_string());
            warn!(tag = %tag, %reason, "Dataset load failed");
            LoadStatus::Failed { reason }
        } else if let Some(PrimarySliceUnavailable { reason, .. }) = dataset.load_error() {
            LoadStatus::Degraded { reason }
        } else {
            LoadStatus::Ready
        };

        let unavailable = dataset.unavailable_slices();
        self.partial_notice = if self.options.partial_data_notice && !unavailable.is_empty() {
            Some(Notice::PartialData { slices: unavailable })
        } else {
            None
        };

        info!(tag = %tag, year = ?self.selection.year, "Dataset applied");
        self.dataset = Some(dataset);
        ApplyOutcome::Applied
    }

    /// Dispatches an event and, if it needs data, loads and applies it.
    pub async fn select(&mut self, event: SelectionEvent) -> Option<ApplyOutcome> {
        let pending = self.dispatch(event)?;
        let completed = pending.run().await;
        Some(self.apply(completed))
    }

    /// Series of the active view; `None` until a dataset is applied.
    pub fn active_series(&self) -> Option<ViewSeries> {
        self.dataset
            .as_ref()
            .map(|dataset| project_view(dataset, &self.selection))
    }

    /// Resolves a question of the selected course and year.
    ///
    /// A miss sets the question notice and leaves every other field alone,
    /// the partial-data notice included. A hit clears the question notice.
    pub async fn locate_question(&mut self, label: &str) -> Result<ExamPageRef, QuestionNotFound> {
        let result = match (&self.selection.course, self.selection.year) {
            (Some(course), Some(year)) => {
                self.locator
                    .handle(LocateQuestionQuery {
                        course: course.clone(),
                        year,
                        label: label.to_string(),
                        question_type: self.selection.question_type,
                    })
                    .await
            }
            _ => Err(QuestionNotFound::NoSelection),
        };

        self.question_notice = result.as_ref().err().map(|reason| Notice::QuestionNotFound {
            message: reason.to_string(),
        });
        result
    }

    pub fn dismiss_partial_data_notice(&mut self) {
        self.partial_notice = None;
    }

    pub fn dismiss_question_notice(&mut self) {
        self.question_notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryJsonSource;
    use crate::domain::comparison::{Baseline, Metric};
    use crate::domain::foundation::{CampusName, CourseCode, ExamYear};
    use crate::domain::selection::ActiveView;
    use crate::ports::FetchError;
    use serde_json::json;

    // ─────────────────────────────────────────────────────────────────────
    // Fixtures
    // ─────────────────────────────────────────────────────────────────────

    fn campus() -> CampusName {
        CampusName::new("Crateús").unwrap()
    }

    fn code(value: &str) -> CourseCode {
        CourseCode::new(value).unwrap()
    }

    async fn seeded_source() -> InMemoryJsonSource {
        let source = InMemoryJsonSource::new();
        let campus = campus();
        source
            .insert(
                DatasetSlice::Scores.resource_path(&campus),
                json!({
                    "A": {"2019": {"nota_geral": 50.0}, "2022": {"nota_geral": 62.0, "media_nacional_geral": 58.0}},
                    "B": {"2022": {"nota_geral": 70.0}}
                }),
            )
            .await;
        source
            .insert(DatasetSlice::Topics.resource_path(&campus), json!({}))
            .await;
        source
            .insert(DatasetSlice::Evolution.resource_path(&campus), json!({}))
            .await;
        source
            .insert(DatasetSlice::Perception.resource_path(&campus), json!({}))
            .await;
        source
    }

    fn build_coordinator(source: &InMemoryJsonSource, options: CoordinatorOptions) -> ViewCoordinator {
        let repository = Arc::new(DatasetRepository::new(Arc::new(source.clone())));
        ViewCoordinator::new(repository, options)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Loading
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_course_selection_loads_and_defaults_year() {
        let source = seeded_source().await;
        let mut coordinator = build_coordinator(&source, CoordinatorOptions::default());

        assert!(coordinator.dispatch(SelectionEvent::SelectCampus(campus())).is_none());
        let outcome = coordinator.select(SelectionEvent::SelectCourse(code("A"))).await;

        assert_eq!(outcome, Some(ApplyOutcome::Applied));
        assert_eq!(coordinator.status(), &LoadStatus::Ready);
        assert_eq!(coordinator.selection().year, Some(ExamYear::new(2022).unwrap()));
        assert!(coordinator.notices().is_empty());
    }

    #[tokio::test]
    async fn test_late_result_for_previous_course_is_discarded() {
        let source = seeded_source().await;
        let mut coordinator = build_coordinator(&source, CoordinatorOptions::default());
        coordinator.dispatch(SelectionEvent::SelectCampus(campus()));

        let load_a = coordinator.dispatch(SelectionEvent::SelectCourse(code("A"))).unwrap();
        let load_b = coordinator.dispatch(SelectionEvent::SelectCourse(code("B"))).unwrap();

        let done_b = load_b.run().await;
        assert_eq!(coordinator.apply(done_b), ApplyOutcome::Applied);
        let done_a = load_a.run().await;
        let outcome = coordinator.apply(done_a);
        assert_eq!(outcome, ApplyOutcome::Stale);
        assert_eq!(outcome.error_kind(), Some(ErrorKind::StaleResult));

        assert_eq!(coordinator.dataset().unwrap().course, code("B"));
    }

    #[tokio::test]
    async fn test_course_switch_hides_previous_dataset_until_applied() {
        let source = seeded_source().await;
        let mut coordinator = build_coordinator(&source, CoordinatorOptions::default());
        coordinator.dispatch(SelectionEvent::SelectCampus(campus()));
        coordinator.select(SelectionEvent::SelectCourse(code("A"))).await;
        assert!(coordinator.active_series().is_some());

        let pending = coordinator.dispatch(SelectionEvent::SelectCourse(code("B"))).unwrap();
        assert!(coordinator.dataset().is_none());
        assert!(coordinator.active_series().is_none());
        assert!(matches!(coordinator.status(), LoadStatus::Loading { .. }));

        assert_eq!(coordinator.apply(pending.run().await), ApplyOutcome::Applied);
        assert_eq!(coordinator.dataset().unwrap().course, code("B"));
        assert!(coordinator.active_series().is_some());
    }

    #[tokio::test]
    async fn test_campus_change_clears_course_and_drops_inflight_load() {
        let source = seeded_source().await;
        let mut coordinator = build_coordinator(&source, CoordinatorOptions::default());
        coordinator.dispatch(SelectionEvent::SelectCampus(campus()));
        coordinator.dispatch(SelectionEvent::SelectMetric(Metric::SpecificComponent));
        let pending = coordinator.dispatch(SelectionEvent::SelectCourse(code("A"))).unwrap();

        coordinator.dispatch(SelectionEvent::SelectCampus(CampusName::new("Sobral").unwrap()));
        assert_eq!(coordinator.apply(pending.run().await), ApplyOutcome::Stale);
        assert!(coordinator.selection().course.is_none());
        assert_eq!(coordinator.selection().active_metric, Metric::SpecificComponent);
        assert_eq!(coordinator.status(), &LoadStatus::Idle);
        assert!(coordinator.active_series().is_none());
    }

    #[tokio::test]
    async fn test_recompute_events_never_fetch() {
        let source = seeded_source().await;
        let mut coordinator = build_coordinator(&source, CoordinatorOptions::default());
        coordinator.dispatch(SelectionEvent::SelectCampus(campus()));
        coordinator.select(SelectionEvent::SelectCourse(code("A"))).await;
        let fetches = source.total_fetches().await;

        assert!(coordinator.dispatch(SelectionEvent::SelectYear(ExamYear::new(2019).unwrap())).is_none());
        assert!(coordinator.dispatch(SelectionEvent::SelectMetric(Metric::GeneralFormation)).is_none());
        assert!(coordinator.dispatch(SelectionEvent::ToggleBaseline(Baseline::National)).is_none());
        assert!(coordinator.dispatch(SelectionEvent::SelectView(ActiveView::History)).is_none());

        assert_eq!(source.total_fetches().await, fetches);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Degraded data
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_partial_failure_sets_notice_and_placeholder() {
        let source = seeded_source().await;
        let path = DatasetSlice::Perception.resource_path(&campus());
        source.fail(path.clone(), FetchError::NotFound(path)).await;
        let mut coordinator = build_coordinator(&source, CoordinatorOptions::default());

        coordinator.dispatch(SelectionEvent::SelectCampus(campus()));
        coordinator.select(SelectionEvent::SelectCourse(code("A"))).await;

        assert_eq!(coordinator.status(), &LoadStatus::Ready);
        assert_eq!(
            coordinator.partial_data_notice(),
            Some(&Notice::PartialData {
                slices: vec![DatasetSlice::Perception]
            })
        );
        coordinator.dispatch(SelectionEvent::SelectView(ActiveView::Perception));
        assert!(coordinator.active_series().unwrap().is_unavailable());

        coordinator.dismiss_partial_data_notice();
        assert!(coordinator.partial_data_notice().is_none());
    }

    #[tokio::test]
    async fn test_partial_notice_can_be_disabled() {
        let source = seeded_source().await;
        let path = DatasetSlice::Topics.resource_path(&campus());
        source.fail(path.clone(), FetchError::NotFound(path)).await;
        let mut coordinator = build_coordinator(
            &source,
            CoordinatorOptions {
                partial_data_notice: false,
            },
        );

        coordinator.dispatch(SelectionEvent::SelectCampus(campus()));
        coordinator.select(SelectionEvent::SelectCourse(code("A"))).await;
        assert!(coordinator.partial_data_notice().is_none());
    }

    #[tokio::test]
    async fn test_primary_failure_is_degraded_and_total_failure_is_failed() {
        let source = seeded_source().await;
        let scores = DatasetSlice::Scores.resource_path(&campus());
        source
            .fail(scores.clone(), FetchError::Http { status: 500, path: scores })
            .await;
        let mut coordinator = build_coordinator(&source, CoordinatorOptions::default());
        coordinator.dispatch(SelectionEvent::SelectCampus(campus()));
        coordinator.select(SelectionEvent::SelectCourse(code("A"))).await;
        assert!(matches!(coordinator.status(), LoadStatus::Degraded { .. }));

        let empty = InMemoryJsonSource::new();
        let mut coordinator = build_coordinator(&empty, CoordinatorOptions::default());
        coordinator.dispatch(SelectionEvent::SelectCampus(campus()));
        coordinator.select(SelectionEvent::SelectCourse(code("A"))).await;
        assert!(matches!(coordinator.status(), LoadStatus::Failed { .. }));
        assert_eq!(coordinator.selection().year, None);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Questions
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_question_miss_sets_notice_only() {
        let source = seeded_source().await;
        let mut coordinator = build_coordinator(&source, CoordinatorOptions::default());
        coordinator.dispatch(SelectionEvent::SelectCampus(campus()));
        coordinator.select(SelectionEvent::SelectCourse(code("A"))).await;
        let before = coordinator.selection().clone();

        let err = coordinator.locate_question("Q5").await.unwrap_err();
        assert!(matches!(err, QuestionNotFound::IndexUnavailable(_)));
        assert_eq!(coordinator.selection(), &before);
        assert_eq!(
            coordinator.question_notice().map(Notice::error_kind),
            Some(ErrorKind::QuestionNotFound)
        );
    }

    #[tokio::test]
    async fn test_question_miss_keeps_partial_data_notice() {
        let source = seeded_source().await;
        let path = DatasetSlice::Perception.resource_path(&campus());
        source.fail(path.clone(), FetchError::NotFound(path)).await;
        let mut coordinator = build_coordinator(&source, CoordinatorOptions::default());
        coordinator.dispatch(SelectionEvent::SelectCampus(campus()));
        coordinator.select(SelectionEvent::SelectCourse(code("A"))).await;
        let partial = Notice::PartialData {
            slices: vec![DatasetSlice::Perception],
        };

        assert!(coordinator.locate_question("Q5").await.is_err());
        assert_eq!(coordinator.partial_data_notice(), Some(&partial));
        assert_eq!(coordinator.notices().len(), 2);

        coordinator.dismiss_question_notice();
        assert!(coordinator.question_notice().is_none());
        assert_eq!(coordinator.partial_data_notice(), Some(&partial));
    }

    #[tokio::test]
    async fn test_question_without_selection() {
        let source = seeded_source().await;
        let mut coordinator = build_coordinator(&source, CoordinatorOptions::default());
        assert_eq!(
            coordinator.locate_question("Q1").await,
            Err(QuestionNotFound::NoSelection)
        );
    }
}
