//! Create/edit form state for a single subject

use crate::types::{Course, Subject, SubjectPayload};

/// Editable values of the open form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    /// Selected course id as a string; empty means no selection
    pub selected_course_id: String,
}

impl Draft {
    fn from_subject(subject: &Subject) -> Self {
        Self {
            name: subject.name.clone(),
            selected_course_id: subject.course.id.to_string(),
        }
    }
}

/// Which form field has keyboard focus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Name,
    Course,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Course,
            FormField::Course => FormField::Name,
        }
    }

    pub fn prev(self) -> Self {
        // two fields, so prev and next coincide
        self.next()
    }
}

/// The form is either closed, creating a new subject, or editing an existing one
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Closed,
    Creating {
        draft: Draft,
    },
    Editing {
        subject: Subject,
        draft: Draft,
    },
}

impl FormState {
    /// Open an empty form for a new subject
    pub fn open_create() -> Self {
        FormState::Creating {
            draft: Draft::default(),
        }
    }

    /// Open the form pre-populated from `subject`
    pub fn open_edit(subject: &Subject) -> Self {
        FormState::Editing {
            subject: subject.clone(),
            draft: Draft::from_subject(subject),
        }
    }

    /// Close the form, dropping the draft and editing reference
    pub fn close(&mut self) {
        *self = FormState::Closed;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, FormState::Closed)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, FormState::Editing { .. })
    }

    pub fn draft(&self) -> Option<&Draft> {
        match self {
            FormState::Closed => None,
            FormState::Creating { draft } | FormState::Editing { draft, .. } => Some(draft),
        }
    }

    fn draft_mut(&mut self) -> Option<&mut Draft> {
        match self {
            FormState::Closed => None,
            FormState::Creating { draft } | FormState::Editing { draft, .. } => Some(draft),
        }
    }

    /// Subject being edited, if any
    pub fn editing(&self) -> Option<&Subject> {
        match self {
            FormState::Editing { subject, .. } => Some(subject),
            _ => None,
        }
    }

    /// Build the write body for the current draft. `None` while closed.
    pub fn save_request(&self) -> Option<SubjectPayload> {
        let draft = self.draft()?;
        let id = self.editing().map(|s| s.id);
        Some(SubjectPayload::from_form(
            id,
            draft.name.clone(),
            &draft.selected_course_id,
        ))
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(draft) = self.draft_mut() {
            draft.name.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(draft) = self.draft_mut() {
            draft.name.pop();
        }
    }

    /// Move the course selection forward through `["", ids...]`, wrapping
    pub fn select_next_course(&mut self, courses: &[Course]) {
        self.cycle_course(courses, 1);
    }

    /// Move the course selection backward through `["", ids...]`, wrapping
    pub fn select_prev_course(&mut self, courses: &[Course]) {
        self.cycle_course(courses, -1);
    }

    fn cycle_course(&mut self, courses: &[Course], step: isize) {
        let original = self.editing().map(|s| s.course.id.to_string());
        let Some(draft) = self.draft_mut() else {
            return;
        };

        let mut options: Vec<String> = std::iter::once(String::new())
            .chain(courses.iter().map(|c| c.id.to_string()))
            .collect();

        // Ids with no loaded course stay reachable after the loaded ones
        for extra in [original, Some(draft.selected_course_id.clone())]
            .into_iter()
            .flatten()
        {
            if !options.contains(&extra) {
                options.push(extra);
            }
        }

        let current = options
            .iter()
            .position(|o| *o == draft.selected_course_id)
            .unwrap_or(0);

        let len = options.len() as isize;
        let next = (current as isize + step).rem_euclid(len) as usize;
        draft.selected_course_id = options[next].clone();
    }
}
