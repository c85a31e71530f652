//! Subjects browser model types for testable state management
//!
//! This module separates state (SubjectsState) from view (SubjectsViewModel)
//! so navigation, search, the form and the save flow can be unit tested
//! without the iocraft framework.

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::catalog::{
    FilteredSubject, FormField, FormState, LoadOutcome, Reconciled, SubjectStore, filter_subjects,
};
use crate::error::AssuntoError;
use crate::tui::components::{
    EmptyStateKind, Shortcut, Toast, alert_shortcuts, form_shortcuts, list_shortcuts,
    saving_shortcuts, search_shortcuts,
};
use crate::types::{Course, Subject, SubjectPayload};

// ============================================================================
// State Types
// ============================================================================

/// Raw state that changes during user interaction
#[derive(Debug, Clone, Default)]
pub struct SubjectsState {
    /// Courses and subjects as last loaded from the backend
    pub store: SubjectStore,

    // Form
    pub form: FormState,
    pub focused_field: FormField,
    /// A save request is in flight; further submits are ignored
    pub saving: bool,

    // Search
    pub search_query: String,
    pub search_focused: bool,

    // Navigation (indices into the filtered list)
    pub selected_index: usize,
    pub scroll_offset: usize,

    // Feedback
    pub alert: Option<Alert>,
    pub toast: Option<Toast>,

    pub is_loading: bool,
    pub should_exit: bool,
}

impl SubjectsState {
    /// State at startup, before the first load completes
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Default::default()
        }
    }

    /// Subjects passing the current search
    pub fn filtered(&self) -> Vec<FilteredSubject> {
        filter_subjects(
            &self.store.subjects,
            &self.store.courses,
            &self.search_query,
        )
    }

    /// Subject under the cursor, if any
    pub fn selected_subject(&self) -> Option<Subject> {
        self.filtered()
            .into_iter()
            .nth(self.selected_index)
            .map(|f| f.subject)
    }
}

/// Why a save did not go through
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveFailure {
    /// The backend answered with a non-success status
    Rejected { status: u16, body: String },
    /// The request never produced a usable response
    Unreachable(String),
}

impl SaveFailure {
    pub fn from_error(err: &AssuntoError) -> Self {
        match err {
            AssuntoError::RemoteRejected { status, body } => SaveFailure::Rejected {
                status: *status,
                body: body.clone(),
            },
            other => SaveFailure::Unreachable(other.to_string()),
        }
    }

    /// Message shown to the user
    pub fn user_message(&self) -> &'static str {
        match self {
            SaveFailure::Rejected { .. } => "Failed to save subject. Please try again.",
            SaveFailure::Unreachable(_) => "Network error. Check your connection.",
        }
    }
}

/// Blocking dialog that must be dismissed before anything else
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub detail: Option<String>,
}

impl Alert {
    pub fn save_failed(failure: &SaveFailure) -> Self {
        let detail = match failure {
            SaveFailure::Rejected { status, body } if body.trim().is_empty() => {
                format!("HTTP {status}")
            }
            SaveFailure::Rejected { status, body } => format!("HTTP {status}: {}", body.trim()),
            SaveFailure::Unreachable(message) => message.clone(),
        };

        Self {
            title: "Save failed".to_string(),
            message: failure.user_message().to_string(),
            detail: Some(detail),
        }
    }
}

// ============================================================================
// Action Types
// ============================================================================

/// All possible actions on the subjects browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubjectsAction {
    // Navigation
    MoveUp,
    MoveDown,
    GoToTop,
    GoToBottom,
    PageUp,
    PageDown,

    // Search
    FocusSearch,
    SearchInput(char),
    SearchBackspace,
    /// Leave search mode, keeping the query
    ExitSearch,
    ClearSearchAndExit,

    // Loading
    Reload,
    Loaded(LoadOutcome),

    // Form
    NewSubject,
    EditSelected,
    NextField,
    PrevField,
    FormInput(char),
    FormBackspace,
    NextCourse,
    PrevCourse,
    Submit,
    CancelForm,
    SaveSucceeded(Subject),
    SaveFailed(SaveFailure),

    // Feedback
    DismissAlert,

    Quit,
}

impl SubjectsAction {
    /// Actions produced by key presses (as opposed to async completions)
    fn is_user_input(&self) -> bool {
        !matches!(
            self,
            SubjectsAction::Loaded(_)
                | SubjectsAction::SaveSucceeded(_)
                | SubjectsAction::SaveFailed(_)
        )
    }
}

/// Side effect the component must start for an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Load,
    Save(SubjectPayload),
}

/// Decide which async operation an action starts, given the state before the
/// action is reduced.
pub fn effect_for(action: &SubjectsAction, state: &SubjectsState) -> Option<Effect> {
    match action {
        SubjectsAction::Reload if !state.is_loading => Some(Effect::Load),
        SubjectsAction::Submit if !state.saving => state.form.save_request().map(Effect::Save),
        _ => None,
    }
}

// ============================================================================
// View Model Types
// ============================================================================

/// Computed view model for rendering the whole browser
#[derive(Debug, Clone)]
pub struct SubjectsViewModel {
    /// Total subjects loaded
    pub subject_count: usize,
    /// Subjects passing the search
    pub match_count: usize,
    /// Visible window of the filtered list
    pub rows: Vec<SubjectRowViewModel>,
    /// Shown instead of rows when set
    pub empty_state: Option<EmptyStateKind>,
    pub search_query: String,
    pub search_focused: bool,
    pub form: Option<FormViewModel>,
    pub alert: Option<Alert>,
    pub toast: Option<Toast>,
    pub shortcuts: Vec<Shortcut>,
    /// A load or save is in flight
    pub busy: bool,
}

/// One table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectRowViewModel {
    pub id: i64,
    pub name: String,
    /// `None` when no course has the referenced id
    pub course_name: Option<String>,
    pub is_selected: bool,
}

/// Everything the form modal renders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormViewModel {
    pub title: String,
    pub name: String,
    /// First entry is the "no course" option
    pub course_options: Vec<String>,
    pub selected_course: usize,
    pub focused_field: FormField,
    pub saving: bool,
}

/// Label of the empty course option
pub const NO_COURSE_LABEL: &str = "(none)";

// ============================================================================
// Pure Functions
// ============================================================================

/// Pure function: compute view model from state
pub fn compute_subjects_view_model(state: &SubjectsState, list_height: usize) -> SubjectsViewModel {
    let filtered = state.filtered();
    let match_count = filtered.len();

    let rows = filtered
        .into_iter()
        .enumerate()
        .skip(state.scroll_offset)
        .take(list_height)
        .map(|(index, f)| SubjectRowViewModel {
            id: f.subject.id,
            name: f.subject.name,
            course_name: f.course_name,
            is_selected: index == state.selected_index,
        })
        .collect();

    let empty_state = if state.store.subjects.is_empty() {
        Some(if state.is_loading {
            EmptyStateKind::Loading
        } else {
            EmptyStateKind::NoSubjects
        })
    } else if match_count == 0 {
        Some(EmptyStateKind::NoSearchResults)
    } else {
        None
    };

    let shortcuts = if state.alert.is_some() {
        alert_shortcuts()
    } else if state.form.is_open() && state.saving {
        saving_shortcuts()
    } else if state.form.is_open() {
        form_shortcuts()
    } else if state.search_focused {
        search_shortcuts()
    } else {
        list_shortcuts()
    };

    SubjectsViewModel {
        subject_count: state.store.subjects.len(),
        match_count,
        rows,
        empty_state,
        search_query: state.search_query.clone(),
        search_focused: state.search_focused,
        form: compute_form_view_model(state),
        alert: state.alert.clone(),
        toast: state.toast.clone(),
        shortcuts,
        busy: state.is_loading || state.saving,
    }
}

fn compute_form_view_model(state: &SubjectsState) -> Option<FormViewModel> {
    let draft = state.form.draft()?;

    let title = match state.form.editing() {
        Some(subject) => format!("Edit subject #{}", subject.id),
        None => "New subject".to_string(),
    };

    let (course_options, selected_course) =
        course_options(&state.store.courses, &draft.selected_course_id);

    Some(FormViewModel {
        title,
        name: draft.name.clone(),
        course_options,
        selected_course,
        focused_field: state.focused_field,
        saving: state.saving,
    })
}

/// Option labels for the course selector and the index of `selected_id`.
///
/// An id that matches no loaded course is shown as `#id` so the user can see
/// what will be sent.
fn course_options(courses: &[Course], selected_id: &str) -> (Vec<String>, usize) {
    let mut options = vec![NO_COURSE_LABEL.to_string()];
    options.extend(courses.iter().map(|c| c.name.clone()));

    if selected_id.is_empty() {
        return (options, 0);
    }

    match courses.iter().position(|c| c.id.to_string() == selected_id) {
        Some(index) => (options, index + 1),
        None => {
            options.push(format!("#{selected_id}"));
            let last = options.len() - 1;
            (options, last)
        }
    }
}

/// Pure function: apply action to state (reducer pattern)
///
/// Actions needing network I/O (`Reload`, `Submit`) only flip the in-flight
/// flags here; the component starts the request via [`effect_for`] and feeds
/// the result back as `Loaded` / `SaveSucceeded` / `SaveFailed`.
pub fn reduce_subjects_state(
    mut state: SubjectsState,
    action: SubjectsAction,
    list_height: usize,
) -> SubjectsState {
    if action.is_user_input() {
        state.toast = None;
    }

    let count = state.filtered().len();
    let page = (list_height / 2).max(1);

    match action {
        // Navigation
        SubjectsAction::MoveUp => {
            state.selected_index = state.selected_index.saturating_sub(1);
            state.scroll_offset =
                adjust_scroll(state.scroll_offset, state.selected_index, list_height);
        }
        SubjectsAction::MoveDown => {
            if count > 0 {
                state.selected_index = (state.selected_index + 1).min(count - 1);
                state.scroll_offset =
                    adjust_scroll(state.scroll_offset, state.selected_index, list_height);
            }
        }
        SubjectsAction::GoToTop => {
            state.selected_index = 0;
            state.scroll_offset = 0;
        }
        SubjectsAction::GoToBottom => {
            if count > 0 {
                state.selected_index = count - 1;
                state.scroll_offset =
                    adjust_scroll(state.scroll_offset, state.selected_index, list_height);
            }
        }
        SubjectsAction::PageUp => {
            state.selected_index = state.selected_index.saturating_sub(page);
            state.scroll_offset =
                adjust_scroll(state.scroll_offset, state.selected_index, list_height);
        }
        SubjectsAction::PageDown => {
            if count > 0 {
                state.selected_index = (state.selected_index + page).min(count - 1);
                state.scroll_offset =
                    adjust_scroll(state.scroll_offset, state.selected_index, list_height);
            }
        }

        // Search
        SubjectsAction::FocusSearch => {
            state.search_focused = true;
        }
        SubjectsAction::SearchInput(c) => {
            state.search_query.push(c);
            reset_selection(&mut state);
        }
        SubjectsAction::SearchBackspace => {
            state.search_query.pop();
            reset_selection(&mut state);
        }
        SubjectsAction::ExitSearch => {
            state.search_focused = false;
        }
        SubjectsAction::ClearSearchAndExit => {
            state.search_query.clear();
            state.search_focused = false;
            reset_selection(&mut state);
        }

        // Loading
        SubjectsAction::Reload => {
            state.is_loading = true;
        }
        SubjectsAction::Loaded(outcome) => {
            state.is_loading = false;
            state.store.apply_load(&outcome);
            clamp_selection(&mut state, list_height);
            if let Some(summary) = outcome.failure_summary() {
                state.toast = Some(Toast::error(summary));
            }
        }

        // Form
        SubjectsAction::NewSubject => {
            if !state.form.is_open() {
                state.form = FormState::open_create();
                state.focused_field = FormField::Name;
            }
        }
        SubjectsAction::EditSelected => {
            if !state.form.is_open()
                && let Some(subject) = state.selected_subject()
            {
                state.form = FormState::open_edit(&subject);
                state.focused_field = FormField::Name;
            }
        }
        SubjectsAction::NextField => {
            state.focused_field = state.focused_field.next();
        }
        SubjectsAction::PrevField => {
            state.focused_field = state.focused_field.prev();
        }
        SubjectsAction::FormInput(c) => {
            if !state.saving && state.focused_field == FormField::Name {
                state.form.push_char(c);
            }
        }
        SubjectsAction::FormBackspace => {
            if !state.saving && state.focused_field == FormField::Name {
                state.form.pop_char();
            }
        }
        SubjectsAction::NextCourse => {
            if !state.saving {
                state.form.select_next_course(&state.store.courses);
            }
        }
        SubjectsAction::PrevCourse => {
            if !state.saving {
                state.form.select_prev_course(&state.store.courses);
            }
        }
        SubjectsAction::Submit => {
            if state.form.is_open() {
                state.saving = true;
            }
        }
        SubjectsAction::CancelForm => {
            if !state.saving {
                state.form.close();
                state.focused_field = FormField::Name;
            }
        }
        SubjectsAction::SaveSucceeded(saved) => {
            let id = saved.id;
            let name = saved.name.clone();
            let verb = match state.store.reconcile(saved) {
                Reconciled::Appended(_) => "Created",
                Reconciled::Replaced(_) => "Updated",
            };

            state.saving = false;
            state.form.close();
            state.focused_field = FormField::Name;
            state.toast = Some(Toast::success(format!("{verb} subject '{name}'")));

            // Put the cursor on the saved row when it is visible under the search
            match state.filtered().iter().position(|f| f.subject.id == id) {
                Some(index) => {
                    state.selected_index = index;
                    state.scroll_offset = adjust_scroll(state.scroll_offset, index, list_height);
                }
                None => clamp_selection(&mut state, list_height),
            }
        }
        SubjectsAction::SaveFailed(failure) => {
            state.saving = false;
            state.alert = Some(Alert::save_failed(&failure));
        }

        // Feedback
        SubjectsAction::DismissAlert => {
            state.alert = None;
        }

        SubjectsAction::Quit => {
            state.should_exit = true;
        }
    }

    state
}

fn reset_selection(state: &mut SubjectsState) {
    state.selected_index = 0;
    state.scroll_offset = 0;
}

/// Keep the cursor inside the filtered list after it changed size
fn clamp_selection(state: &mut SubjectsState, list_height: usize) {
    let count = state.filtered().len();
    if count == 0 {
        reset_selection(state);
        return;
    }
    state.selected_index = state.selected_index.min(count - 1);
    state.scroll_offset = adjust_scroll(
        state.scroll_offset.min(state.selected_index),
        state.selected_index,
        list_height,
    );
}

/// Adjust scroll offset to keep selected item visible
pub fn adjust_scroll(scroll_offset: usize, selected_index: usize, list_height: usize) -> usize {
    if list_height == 0 {
        return 0;
    }

    if selected_index < scroll_offset {
        return selected_index;
    }

    if selected_index >= scroll_offset + list_height {
        return selected_index.saturating_sub(list_height - 1);
    }

    scroll_offset
}

/// Convert a key event to a SubjectsAction (pure function)
///
/// Input is routed by mode, innermost first: alert, form, search, list.
/// Returns `None` if the key does nothing in the current mode.
pub fn key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    state: &SubjectsState,
) -> Option<SubjectsAction> {
    // Ctrl+Q quits from anywhere
    if code == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
        return Some(SubjectsAction::Quit);
    }

    if state.alert.is_some() {
        return match code {
            KeyCode::Enter | KeyCode::Esc => Some(SubjectsAction::DismissAlert),
            _ => None,
        };
    }

    if state.form.is_open() {
        return form_key_to_action(code, modifiers, state);
    }

    if state.search_focused {
        return search_key_to_action(code, modifiers);
    }

    normal_key_to_action(code, modifiers)
}

fn form_key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    state: &SubjectsState,
) -> Option<SubjectsAction> {
    // Form is locked while the save is in flight
    if state.saving {
        return None;
    }

    match (code, modifiers) {
        (KeyCode::Esc, _) => Some(SubjectsAction::CancelForm),
        (KeyCode::Enter, _) => Some(SubjectsAction::Submit),
        (KeyCode::Char('s'), m) if m.contains(KeyModifiers::CONTROL) => {
            Some(SubjectsAction::Submit)
        }
        (KeyCode::BackTab, _) => Some(SubjectsAction::PrevField),
        (KeyCode::Tab, m) if m.contains(KeyModifiers::SHIFT) => Some(SubjectsAction::PrevField),
        (KeyCode::Tab | KeyCode::Down, _) => Some(SubjectsAction::NextField),
        (KeyCode::Up, _) => Some(SubjectsAction::PrevField),
        _ => match state.focused_field {
            FormField::Name => match code {
                KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(SubjectsAction::FormInput(c))
                }
                KeyCode::Backspace => Some(SubjectsAction::FormBackspace),
                _ => None,
            },
            FormField::Course => match code {
                KeyCode::Left | KeyCode::Char('h') => Some(SubjectsAction::PrevCourse),
                KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
                    Some(SubjectsAction::NextCourse)
                }
                _ => None,
            },
        },
    }
}

fn search_key_to_action(code: KeyCode, modifiers: KeyModifiers) -> Option<SubjectsAction> {
    match code {
        KeyCode::Esc => Some(SubjectsAction::ClearSearchAndExit),
        KeyCode::Enter => Some(SubjectsAction::ExitSearch),
        KeyCode::Backspace => Some(SubjectsAction::SearchBackspace),
        KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
            Some(SubjectsAction::SearchInput(c))
        }
        _ => None,
    }
}

fn normal_key_to_action(code: KeyCode, modifiers: KeyModifiers) -> Option<SubjectsAction> {
    match (code, modifiers) {
        // Navigation
        (KeyCode::Char('j') | KeyCode::Down, KeyModifiers::NONE) => Some(SubjectsAction::MoveDown),
        (KeyCode::Char('k') | KeyCode::Up, KeyModifiers::NONE) => Some(SubjectsAction::MoveUp),
        (KeyCode::Char('g'), KeyModifiers::NONE) => Some(SubjectsAction::GoToTop),
        (KeyCode::Char('G'), _) => Some(SubjectsAction::GoToBottom),
        (KeyCode::PageUp, _) => Some(SubjectsAction::PageUp),
        (KeyCode::PageDown, _) => Some(SubjectsAction::PageDown),

        (KeyCode::Char('/'), KeyModifiers::NONE) => Some(SubjectsAction::FocusSearch),

        // Operations
        (KeyCode::Char('n'), KeyModifiers::NONE) => Some(SubjectsAction::NewSubject),
        (KeyCode::Char('e') | KeyCode::Enter, KeyModifiers::NONE) => {
            Some(SubjectsAction::EditSelected)
        }
        (KeyCode::Char('r'), KeyModifiers::NONE) => Some(SubjectsAction::Reload),

        (KeyCode::Char('q') | KeyCode::Esc, KeyModifiers::NONE) => Some(SubjectsAction::Quit),

        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
