//! Mock data builders for courses, subjects and browser state.

use assuntos::catalog::{LoadOutcome, SubjectStore};
use assuntos::tui::subjects::model::SubjectsState;
use assuntos::types::{Course, Subject};

pub fn mock_courses() -> Vec<Course> {
    vec![
        Course::new(10, "Matemática"),
        Course::new(20, "História"),
        Course::new(30, "Física"),
    ]
}

pub fn mock_subjects() -> Vec<Subject> {
    vec![
        Subject::new(1, "Álgebra", 10),
        Subject::new(2, "Geometria", 10),
        Subject::new(3, "Revolução Francesa", 20),
        Subject::new(4, "Cinemática", 30),
        Subject::new(5, "Tópico órfão", 99),
    ]
}

/// Outcome of a load where both lists came back
pub fn complete_outcome() -> LoadOutcome {
    LoadOutcome {
        courses: Some(mock_courses()),
        subjects: Some(mock_subjects()),
        failures: Vec::new(),
    }
}

/// Browser state after a successful initial load
pub fn loaded_state() -> SubjectsState {
    SubjectsState {
        store: SubjectStore::new(mock_courses(), mock_subjects()),
        ..SubjectsState::default()
    }
}

/// Browser state holding `count` generated subjects, all in course 10
pub fn state_with_many_subjects(count: i64) -> SubjectsState {
    let subjects = (1..=count)
        .map(|i| Subject::new(i, format!("Assunto {i}"), 10))
        .collect();
    SubjectsState {
        store: SubjectStore::new(mock_courses(), subjects),
        ..SubjectsState::default()
    }
}
