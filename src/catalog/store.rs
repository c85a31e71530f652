//! In-memory cache of courses and subjects
//!
//! Populated once from the backend and afterwards mutated only by
//! reconciling records the backend returned from a save.

use crate::error::AssuntoError;
use crate::types::{Course, Subject};

use super::filter::find_course;

/// How a saved record was merged into the local list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciled {
    /// An entry with the same id was replaced in place
    Replaced(usize),
    /// No entry had that id; the record was appended
    Appended(usize),
}

/// Which list a load failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSlice {
    Courses,
    Subjects,
}

impl std::fmt::Display for CatalogSlice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogSlice::Courses => write!(f, "courses"),
            CatalogSlice::Subjects => write!(f, "subjects"),
        }
    }
}

/// A failed fetch for one slice of the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    pub slice: CatalogSlice,
    pub message: String,
}

/// Result of the initial concurrent load.
///
/// Each slice resolves on its own; a failure in one does not keep the other
/// from being populated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadOutcome {
    pub courses: Option<Vec<Course>>,
    pub subjects: Option<Vec<Subject>>,
    pub failures: Vec<LoadFailure>,
}

impl LoadOutcome {
    /// Assemble an outcome from the two independent fetch results
    pub fn from_results(
        courses: Result<Vec<Course>, AssuntoError>,
        subjects: Result<Vec<Subject>, AssuntoError>,
    ) -> Self {
        let mut outcome = LoadOutcome::default();

        match courses {
            Ok(courses) => outcome.courses = Some(courses),
            Err(e) => outcome.failures.push(LoadFailure {
                slice: CatalogSlice::Courses,
                message: e.to_string(),
            }),
        }

        match subjects {
            Ok(subjects) => outcome.subjects = Some(subjects),
            Err(e) => outcome.failures.push(LoadFailure {
                slice: CatalogSlice::Subjects,
                message: e.to_string(),
            }),
        }

        outcome
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// One-line summary of what failed, e.g. "Failed to load courses, subjects"
    pub fn failure_summary(&self) -> Option<String> {
        if self.failures.is_empty() {
            return None;
        }
        let slices: Vec<String> = self.failures.iter().map(|f| f.slice.to_string()).collect();
        Some(format!("Failed to load {}", slices.join(", ")))
    }
}

/// Courses and subjects as last seen from the backend
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectStore {
    pub courses: Vec<Course>,
    pub subjects: Vec<Subject>,
}

impl SubjectStore {
    pub fn new(courses: Vec<Course>, subjects: Vec<Subject>) -> Self {
        Self { courses, subjects }
    }

    /// Apply whichever slices loaded successfully; failed slices keep their
    /// previous contents.
    pub fn apply_load(&mut self, outcome: &LoadOutcome) {
        if let Some(courses) = &outcome.courses {
            self.courses = courses.clone();
        }
        if let Some(subjects) = &outcome.subjects {
            self.subjects = subjects.clone();
        }
    }

    /// Merge a record returned by the backend: replace by id, else append
    pub fn reconcile(&mut self, saved: Subject) -> Reconciled {
        match self.subjects.iter().position(|s| s.id == saved.id) {
            Some(index) => {
                self.subjects[index] = saved;
                Reconciled::Replaced(index)
            }
            None => {
                self.subjects.push(saved);
                Reconciled::Appended(self.subjects.len() - 1)
            }
        }
    }

    /// Name of the course with `course_id`, if it is known
    pub fn course_name(&self, course_id: i64) -> Option<&str> {
        find_course(&self.courses, course_id).map(|c| c.name.as_str())
    }
}
