//! Search filtering for the subjects table
//!
//! Case-insensitive substring matching against the subject name or the name
//! of its course. No diacritic folding, no tokenization.

use serde::Serialize;

use crate::types::{Course, Subject};

/// A subject that passed the filter, with its course name resolved for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilteredSubject {
    #[serde(flatten)]
    pub subject: Subject,
    /// Name of the referenced course, `None` when no course has that id
    #[serde(rename = "materia_nome")]
    pub course_name: Option<String>,
}

/// Look up a course by id (linear scan)
pub fn find_course(courses: &[Course], course_id: i64) -> Option<&Course> {
    courses.iter().find(|course| course.id == course_id)
}

/// Filter subjects by a search term
///
/// An empty term keeps every subject in its original order.
pub fn filter_subjects(subjects: &[Subject], courses: &[Course], term: &str) -> Vec<FilteredSubject> {
    let term = term.to_lowercase();

    subjects
        .iter()
        .filter_map(|subject| {
            let course_name = find_course(courses, subject.course.id).map(|c| c.name.clone());

            let matches = term.is_empty()
                || subject.name.to_lowercase().contains(&term)
                || course_name
                    .as_ref()
                    .is_some_and(|name| name.to_lowercase().contains(&term));

            matches.then(|| FilteredSubject {
                subject: subject.clone(),
                course_name,
            })
        })
        .collect()
}
