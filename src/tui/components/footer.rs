//! Keyboard shortcuts bar component
//!
//! Displays available keyboard shortcuts at the bottom of the screen.

use iocraft::prelude::*;

use super::shortcuts::ShortcutsBuilder;
use crate::tui::theme::theme;

/// A single keyboard shortcut entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    /// The key or key combination (e.g., "q", "C-s", "Tab")
    pub key: String,
    /// Description of the action (e.g., "Quit", "Save", "Next Field")
    pub action: String,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Props for the Footer component
#[derive(Default, Props)]
pub struct FooterProps {
    /// List of keyboard shortcuts to display
    pub shortcuts: Vec<Shortcut>,
}

/// Keyboard shortcuts bar at the bottom of the screen
#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            column_gap: 2,
            background_color: theme.border,
        ) {
            #(props.shortcuts.iter().map(|shortcut| {
                let key = shortcut.key.clone();
                let action = shortcut.action.clone();
                element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(
                            content: format!("[{}]", key),
                            color: theme.highlight,
                            weight: Weight::Bold,
                        )
                        Text(
                            content: format!(" {}", action),
                            color: theme.text,
                        )
                    }
                }
            }))
        }
    }
}

/// Shortcuts for the subjects table
pub fn list_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .with_navigation()
        .with_search()
        .with_edit()
        .add("r", "Reload")
        .with_quit()
        .build()
}

/// Shortcuts for the subject form
pub fn form_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("Tab", "Next Field")
        .add("S-Tab", "Prev Field")
        .add("h/l", "Course")
        .add("Enter", "Save")
        .add("Esc", "Cancel")
        .build()
}

/// Shortcuts while a save is in flight
pub fn saving_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new().add("C-q", "Quit").build()
}

/// Shortcuts for search mode
pub fn search_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("Enter", "Apply Search")
        .add("Esc", "Clear & Exit")
        .add("C-q", "Quit")
        .build()
}

/// Shortcuts for the alert dialog
pub fn alert_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("Enter", "Dismiss")
        .add("Esc", "Dismiss")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_shortcuts_cover_actions() {
        let keys: Vec<String> = list_shortcuts().into_iter().map(|s| s.key).collect();
        for key in ["j/k", "/", "n", "e", "r", "q"] {
            assert!(keys.iter().any(|k| k == key), "missing {key}");
        }
    }

    #[test]
    fn test_form_shortcuts_include_cancel() {
        assert!(form_shortcuts().iter().any(|s| s.key == "Esc"));
    }
}
