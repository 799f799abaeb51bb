//! Typed records for the consolidated JSON resources.
//!
//! Every slice is decoded into explicit record types; absent keys become
//! `Option::None` or empty collections rather than implicit zeros.

mod course_dataset;
mod evolution;
mod exam_links;
mod filter_options;
mod perception;
mod score_history;
mod topic_performance;

pub use course_dataset::{CourseDataset, DatasetSlice, PrimarySliceUnavailable, SliceState};
pub use evolution::{EvolutionHistory, EvolutionSnapshot};
pub use exam_links::{CourseExamLinks, ExamLinkEntry, ExamLinkIndex, PageMaps};
pub use filter_options::{CampusCatalog, CourseEntry, FilterOptions};
pub use perception::{
    PerceptionCategory, PerceptionProfile, PerceptionProfiles, PerceptionQuestion, PerceptionYear,
};
pub use score_history::{CourseScores, ScoreHistory, ScoreRecord};
pub use topic_performance::{
    Competencies, CompetencyStats, CourseTopics, TopicPerformance, TopicYear,
};
