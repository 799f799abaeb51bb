//! SelectionState - the single source of truth for what the dashboard shows.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::comparison::{Baseline, BaselineSet, ExamComponent, Metric};
use crate::domain::dataset::PerceptionCategory;
use crate::domain::foundation::{CampusName, CourseCode, ExamYear, QuestionType};

/// The four analysis views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActiveView {
    #[default]
    Overview,
    Topic,
    History,
    Perception,
}

impl fmt::Display for ActiveView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActiveView::Overview => "overview",
            ActiveView::Topic => "topic",
            ActiveView::History => "history",
            ActiveView::Perception => "perception",
        };
        write!(f, "{}", s)
    }
}

/// Current dashboard selection.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    pub campus: Option<CampusName>,
    pub course: Option<CourseCode>,
    pub year: Option<ExamYear>,
    pub active_view: ActiveView,
    pub active_metric: Metric,
    pub baselines: BaselineSet,
    pub topic_component: ExamComponent,
    pub question_type: QuestionType,
    pub perception_category: PerceptionCategory,
}

/// A user-driven change to the selection.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    SelectCampus(CampusName),
    SelectCourse(CourseCode),
    SelectYear(ExamYear),
    SelectView(ActiveView),
    SelectMetric(Metric),
    ToggleBaseline(Baseline),
    SetBaseline(Baseline, bool),
    SelectTopicComponent(ExamComponent),
    SelectQuestionType(QuestionType),
    SelectPerceptionCategory(PerceptionCategory),
}

/// What the coordinator must do after a selection change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEffect {
    /// Nothing changed.
    Unchanged,
    /// Re-run the active projection over already loaded data.
    Recompute,
    /// Campus changed: course and derived data are gone, nothing to load yet.
    Reset,
    /// Course changed: a fresh dataset load is needed.
    Load,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one event, returning the effect it requires.
    ///
    /// Campus changes clear the course but keep view, metric and baselines.
    /// Course changes keep everything else. All other fields only recompute.
    pub fn apply(&mut self, event: SelectionEvent) -> SelectionEffect {
        match event {
            SelectionEvent::SelectCampus(campus) => {
                if self.campus.as_ref() == Some(&campus) {
                    return SelectionEffect::Unchanged;
                }
                self.campus = Some(campus);
                self.course = None;
                SelectionEffect::Reset
            }
            SelectionEvent::SelectCourse(course) => {
                // a course only exists within a campus
                if self.campus.is_none() || self.course.as_ref() == Some(&course) {
                    return SelectionEffect::Unchanged;
                }
                self.course = Some(course);
                SelectionEffect::Load
            }
            SelectionEvent::SelectYear(year) => replace(&mut self.year, Some(year)),
            SelectionEvent::SelectView(view) => replace(&mut self.active_view, view),
            SelectionEvent::SelectMetric(metric) => replace(&mut self.active_metric, metric),
            SelectionEvent::ToggleBaseline(baseline) => {
                self.baselines.toggle(baseline);
                SelectionEffect::Recompute
            }
            SelectionEvent::SetBaseline(baseline, enabled) => {
                if self.baselines.is_enabled(baseline) == enabled {
                    return SelectionEffect::Unchanged;
                }
                self.baselines.set(baseline, enabled);
                SelectionEffect::Recompute
            }
            SelectionEvent::SelectTopicComponent(component) => {
                replace(&mut self.topic_component, component)
            }
            SelectionEvent::SelectQuestionType(question_type) => {
                replace(&mut self.question_type, question_type)
            }
            SelectionEvent::SelectPerceptionCategory(category) => {
                replace(&mut self.perception_category, category)
            }
        }
    }

    /// The (campus, course) pair a dataset load is keyed on.
    pub fn load_key(&self) -> Option<(&CampusName, &CourseCode)> {
        match (&self.campus, &self.course) {
            (Some(campus), Some(course)) => Some((campus, course)),
            _ => None,
        }
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> SelectionEffect {
    if *slot == value {
        return SelectionEffect::Unchanged;
    }
    *slot = value;
    SelectionEffect::Recompute
}
