//! TUI module for the interactive subjects browser

pub mod components;
pub mod subjects;
pub mod theme;

pub use subjects::{SubjectsBrowser, SubjectsBrowserProps};
pub use theme::Theme;
