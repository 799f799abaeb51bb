//! DatasetRepository - fetches, caches and slices the campus JSON resources.
//!
//! Every campus resource is fetched at most once per process when it
//! succeeds. Failed fetches are not cached and are retried on the next load.

use chrono::Utc;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fmt::Display;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::domain::dataset::{
    CourseDataset, CourseEntry, CourseExamLinks, DatasetSlice, EvolutionHistory, ExamLinkIndex,
    FilterOptions, PerceptionProfiles, ScoreHistory, SliceState, TopicPerformance,
};
use crate::domain::foundation::{CampusName, CourseCode, ErrorKind};
use crate::ports::{FetchError, JsonSource};

pub const EXAM_LINKS_PATH: &str = "estrutura_links_provas.json";
pub const FILTER_OPTIONS_PATH: &str = "opcoes_filtro.json";

/// Errors raised while loading a resource
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatasetError {
    #[error("Failed to fetch {path}: {source}")]
    Fetch {
        path: String,
        #[source]
        source: FetchError,
    },

    #[error("Unexpected structure in {path}: {message}")]
    Decode { path: String, message: String },
}

impl DatasetError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::ResourceUnavailable
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Fetch { path, .. } | Self::Decode { path, .. } => path,
        }
    }
}

type CampusCache<T> = RwLock<HashMap<CampusName, Arc<T>>>;
type SharedCache<T> = RwLock<Option<Arc<T>>>;

/// Read-through cache over a [`JsonSource`]
pub struct DatasetRepository {
    source: Arc<dyn JsonSource>,
    scores: CampusCache<ScoreHistory>,
    topics: CampusCache<TopicPerformance>,
    evolution: CampusCache<EvolutionHistory>,
    perception: CampusCache<PerceptionProfiles>,
    exam_links: SharedCache<ExamLinkIndex>,
    filter_options: SharedCache<FilterOptions>,
}

impl DatasetRepository {
    pub fn new(source: Arc<dyn JsonSource>) -> Self {
        Self {
            source,
            scores: RwLock::new(HashMap::new()),
            topics: RwLock::new(HashMap::new()),
            evolution: RwLock::new(HashMap::new()),
            perception: RwLock::new(HashMap::new()),
            exam_links: RwLock::new(None),
            filter_options: RwLock::new(None),
        }
    }

    /// Loads the four slices of one course.
    ///
    /// The fetches run concurrently and are awaited together. A failed slice
    /// becomes `Unavailable` without affecting its siblings.
    pub async fn load(&self, campus: &CampusName, course: &CourseCode) -> CourseDataset {
        let (scores, topics, evolution, perception) = futures::join!(
            self.campus_resource(&self.scores, campus, DatasetSlice::Scores),
            self.campus_resource(&self.topics, campus, DatasetSlice::Topics),
            self.campus_resource(&self.evolution, campus, DatasetSlice::Evolution),
            self.campus_resource(&self.perception, campus, DatasetSlice::Perception),
        );

        log_failure(campus, DatasetSlice::Scores, &scores);
        log_failure(campus, DatasetSlice::Topics, &topics);
        log_failure(campus, DatasetSlice::Evolution, &evolution);
        log_failure(campus, DatasetSlice::Perception, &perception);

        let dataset = CourseDataset {
            campus: campus.clone(),
            course: course.clone(),
            scores: SliceState::from_lookup(scores, |history| history.course(course).cloned()),
            topics: SliceState::from_lookup(topics, |topics| topics.course(course).cloned()),
            evolution: SliceState::from_lookup(evolution, |history| {
                history
                    .contains(course)
                    .then(|| history.course(course).to_vec())
            }),
            perception: SliceState::from_lookup(perception, |profiles| profiles.course(course).cloned()),
            loaded_at: Utc::now(),
        };

        info!(
            campus = %campus,
            course = %course,
            unavailable = dataset.unavailable_slices().len(),
            "Course dataset loaded"
        );
        dataset
    }

    /// Exam booklets of a course; `Ok(None)` when the index has no entry for it.
    pub async fn load_exam_links(&self, course: &CourseCode) -> Result<Option<CourseExamLinks>, DatasetError> {
        let index = self.shared_resource(&self.exam_links, EXAM_LINKS_PATH).await?;
        Ok(index.course(course).cloned())
    }

    /// Campus and course catalog for the selectors.
    pub async fn filter_options(&self) -> Result<Arc<FilterOptions>, DatasetError> {
        self.shared_resource(&self.filter_options, FILTER_OPTIONS_PATH).await
    }

    /// Courses offered by a campus; empty for an unknown campus.
    pub async fn courses_for(&self, campus: &CampusName) -> Result<Vec<CourseEntry>, DatasetError> {
        Ok(self.filter_options().await?.courses(campus).to_vec())
    }

    /// Source description, for logs.
    pub fn source(&self) -> String {
        self.source.describe()
    }

    async fn campus_resource<T>(
        &self,
        cache: &CampusCache<T>,
        campus: &CampusName,
        slice: DatasetSlice,
    ) -> Result<Arc<T>, DatasetError>
    where
        T: DeserializeOwned + Send + Sync,
    {
        if let Some(cached) = cache.read().await.get(campus) {
            debug!(campus = %campus, slice = %slice, "Campus resource cache hit");
            return Ok(Arc::clone(cached));
        }

        let fetched = Arc::new(self.fetch_typed::<T>(&slice.resource_path(campus)).await?);
        let mut entries = cache.write().await;
        // a concurrent load may have stored it first; keep the first copy
        let stored = entries.entry(campus.clone()).or_insert(fetched);
        Ok(Arc::clone(stored))
    }

    async fn shared_resource<T>(&self, cache: &SharedCache<T>, path: &str) -> Result<Arc<T>, DatasetError>
    where
        T: DeserializeOwned + Send + Sync,
    {
        if let Some(cached) = cache.read().await.as_ref() {
            debug!(path, "Shared resource cache hit");
            return Ok(Arc::clone(cached));
        }

        let fetched = Arc::new(self.fetch_typed::<T>(path).await?);
        let mut slot = cache.write().await;
        Ok(Arc::clone(slot.get_or_insert(fetched)))
    }

    async fn fetch_typed<T: DeserializeOwned>(&self, path: &str) -> Result<T, DatasetError> {
        let value = self
            .source
            .fetch(path)
            .await
            .map_err(|source| DatasetError::Fetch {
                path: path.to_string(),
                source,
            })?;

        serde_json::from_value(value).map_err(|e| DatasetError::Decode {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}

fn log_failure<T, E: Display>(campus: &CampusName, slice: DatasetSlice, result: &Result<T, E>) {
    if let Err(e) = result {
        warn!(campus = %campus, slice = %slice, error = %e, "Dataset slice unavailable");
    }
}
