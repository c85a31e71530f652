pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod remote;
pub mod tui;
pub mod types;

pub use catalog::{
    FilteredSubject, FormState, LoadOutcome, SubjectStore, filter_subjects, load_catalog,
};
pub use config::Config;
pub use error::{AssuntoError, Result};
pub use remote::{HttpGateway, SubjectGateway};
pub use types::{Course, CourseRef, Subject, SubjectPayload};
