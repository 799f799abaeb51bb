//! The per-course view of a campus dataset, as handed to projections.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

use super::{CourseScores, CourseTopics, EvolutionSnapshot, PerceptionProfile};
use crate::domain::foundation::{CampusName, CourseCode, ErrorKind, ExamYear};

/// The four independently loaded dataset slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DatasetSlice {
    Scores,
    Topics,
    Evolution,
    Perception,
}

impl DatasetSlice {
    pub fn all() -> &'static [DatasetSlice] {
        &[
            DatasetSlice::Scores,
            DatasetSlice::Topics,
            DatasetSlice::Evolution,
            DatasetSlice::Perception,
        ]
    }

    /// Logical path of the consolidated file backing this slice.
    pub fn resource_path(&self, campus: &CampusName) -> String {
        let (folder, file) = match self {
            DatasetSlice::Scores => ("Visao_Geral", "visao_geral_consolidado.json"),
            DatasetSlice::Topics => ("Desempenho_Topico", "competencias_consolidado.json"),
            DatasetSlice::Evolution => ("Evolucao_Historica", "evolucao_historica.json"),
            DatasetSlice::Perception => ("Analise_Perfil", "perfil_consolidado.json"),
        };
        format!("{}/{}/{}", folder, campus, file)
    }
}

impl fmt::Display for DatasetSlice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DatasetSlice::Scores => "score overview",
            DatasetSlice::Topics => "topic performance",
            DatasetSlice::Evolution => "historical evolution",
            DatasetSlice::Perception => "course perception",
        };
        write!(f, "{}", s)
    }
}

/// Outcome of one slice for one course.
#[derive(Debug, Clone, PartialEq)]
pub enum SliceState<T> {
    /// The resource loaded and contains the course.
    Ready(T),
    /// The resource loaded but has no entry for the course.
    Absent,
    /// The resource failed to load.
    Unavailable { reason: String },
}

impl<T> SliceState<T> {
    /// Builds a state from a fetch outcome and a lookup into the fetched data.
    pub fn from_lookup<R, E: fmt::Display>(
        fetched: Result<R, E>,
        lookup: impl FnOnce(R) -> Option<T>,
    ) -> Self {
        match fetched {
            Ok(resource) => lookup(resource).map_or(SliceState::Absent, SliceState::Ready),
            Err(err) => SliceState::Unavailable {
                reason: err.to_string(),
            },
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            SliceState::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// True when the underlying resource was fetched, whether or not it held the course.
    pub fn is_fetched(&self) -> bool {
        !self.is_unavailable()
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, SliceState::Unavailable { .. })
    }

    /// Error category for a slice that cannot feed its view.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            SliceState::Ready(_) => None,
            SliceState::Absent => Some(ErrorKind::MissingKey),
            SliceState::Unavailable { .. } => Some(ErrorKind::ResourceUnavailable),
        }
    }
}

/// Reported when the primary (score overview) slice failed to load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Score overview unavailable for campus {campus}: {reason}")]
pub struct PrimarySliceUnavailable {
    pub campus: CampusName,
    pub reason: String,
}

/// Everything the projections need for one (campus, course) pair.
#[derive(Debug, Clone)]
pub struct CourseDataset {
    pub campus: CampusName,
    pub course: CourseCode,
    pub scores: SliceState<CourseScores>,
    pub topics: SliceState<CourseTopics>,
    pub evolution: SliceState<Vec<EvolutionSnapshot>>,
    pub perception: SliceState<PerceptionProfile>,
    pub loaded_at: DateTime<Utc>,
}

impl CourseDataset {
    /// Usable when at least one slice was fetched.
    pub fn is_usable(&self) -> bool {
        self.scores.is_fetched()
            || self.topics.is_fetched()
            || self.evolution.is_fetched()
            || self.perception.is_fetched()
    }

    /// Top-level load error, set only when the primary slice failed.
    pub fn load_error(&self) -> Option<PrimarySliceUnavailable> {
        match &self.scores {
            SliceState::Unavailable { reason } => Some(PrimarySliceUnavailable {
                campus: self.campus.clone(),
                reason: reason.clone(),
            }),
            _ => None,
        }
    }

    pub fn unavailable_slices(&self) -> Vec<DatasetSlice> {
        DatasetSlice::all()
            .iter()
            .copied()
            .filter(|slice| self.is_slice_unavailable(*slice))
            .collect()
    }

    pub fn is_slice_unavailable(&self, slice: DatasetSlice) -> bool {
        match slice {
            DatasetSlice::Scores => self.scores.is_unavailable(),
            DatasetSlice::Topics => self.topics.is_unavailable(),
            DatasetSlice::Evolution => self.evolution.is_unavailable(),
            DatasetSlice::Perception => self.perception.is_unavailable(),
        }
    }

    /// Years with a score record, ascending.
    pub fn available_years(&self) -> Vec<ExamYear> {
        self.scores
            .ready()
            .map(|years| years.keys().copied().collect())
            .unwrap_or_default()
    }

    pub fn latest_year(&self) -> Option<ExamYear> {
        self.scores
            .ready()
            .and_then(|years| years.keys().next_back().copied())
    }

    /// Course display name from the most recent record carrying one.
    pub fn course_name(&self) -> Option<&str> {
        self.scores.ready().and_then(|years| {
            years
                .values()
                .rev()
                .find_map(|record| record.course_name.as_deref())
        })
    }
}
