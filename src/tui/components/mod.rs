//! Shared TUI components

pub mod empty_state;
pub mod footer;
pub mod header;
pub mod modal;
pub mod search_box;
pub mod select;
pub mod shortcuts;
pub mod toast;

pub use empty_state::{EmptyState, EmptyStateKind, EmptyStateProps};
pub use footer::{
    Footer, FooterProps, Shortcut, alert_shortcuts, form_shortcuts, list_shortcuts,
    saving_shortcuts, search_shortcuts,
};
pub use header::{Header, HeaderProps};
pub use modal::{ModalContainer, ModalContainerProps, ModalOverlay, ModalOverlayProps, ModalTone};
pub use search_box::{SearchBar, SearchBarProps};
pub use select::{Select, SelectProps};
pub use shortcuts::ShortcutsBuilder;
pub use toast::{Toast, ToastLevel, render_toast};
