//! Load tags for last-selection-wins staleness checks.

use serde::Serialize;
use std::fmt;

use super::SelectionState;
use crate::domain::foundation::{CampusName, CourseCode};

/// Identifies the selection that started a dataset load.
///
/// A result is applied only while its generation is the latest one issued and
/// the selection still points at the same (campus, course) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadTag {
    pub generation: u64,
    pub campus: CampusName,
    pub course: CourseCode,
}

impl LoadTag {
    pub fn new(generation: u64, campus: CampusName, course: CourseCode) -> Self {
        Self {
            generation,
            campus,
            course,
        }
    }

    /// True if this load still reflects the current selection.
    pub fn is_current(&self, latest_generation: u64, selection: &SelectionState) -> bool {
        self.generation == latest_generation
            && selection
                .load_key()
                .is_some_and(|(campus, course)| campus == &self.campus && course == &self.course)
    }
}

impl fmt::Display for LoadTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}/{}", self.generation, self.campus, self.course)
    }
}

/// Monotonic source of load generations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadGeneration(u64);

impl LoadGeneration {
    pub fn current(&self) -> u64 {
        self.0
    }

    /// Invalidates every outstanding load and returns the new generation.
    pub fn advance(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }
}
