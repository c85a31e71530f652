//! Subjects browser
//!
//! Searchable table of subjects with a modal form for creating and editing
//! them against the remote backend.

mod alert_modal;
mod form_modal;
pub mod model;
mod operations;
mod table;
pub mod view;

pub use alert_modal::{AlertModal, AlertModalProps};
pub use form_modal::{SubjectFormModal, SubjectFormModalProps};
pub use table::{SubjectsTable, SubjectsTableProps};
pub use view::{SubjectsBrowser, SubjectsBrowserProps};
