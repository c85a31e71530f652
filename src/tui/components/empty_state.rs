//! Empty state component
//!
//! Shown in place of the subjects table while loading, when the backend has
//! no subjects, or when the search matches nothing.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Type of empty state to display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyStateKind {
    /// Backend returned no subjects
    #[default]
    NoSubjects,
    /// No subjects match the search filter
    NoSearchResults,
    /// Initial load in progress
    Loading,
}

/// Props for the EmptyState component
#[derive(Default, Props)]
pub struct EmptyStateProps {
    pub kind: EmptyStateKind,
    /// Search query (for NoSearchResults)
    pub search_query: Option<String>,
}

/// Empty state display with helpful message
#[component]
pub fn EmptyState(props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let (icon, title, message, hint) = match props.kind {
        EmptyStateKind::NoSubjects => (
            "i",
            "No Subjects",
            "The backend has no subjects yet.",
            "Press 'n' to create one, or 'r' to reload.",
        ),
        EmptyStateKind::NoSearchResults => (
            "?",
            "No Results",
            "No subject or course name matches your search.",
            "Try a different search term, or press / then Esc to clear.",
        ),
        EmptyStateKind::Loading => ("~", "Loading", "Loading subjects and courses...", ""),
    };

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: 2,
        ) {
            View(
                width: 5,
                height: 3,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: theme.border,
                margin_bottom: 1,
            ) {
                Text(content: icon, color: theme.text_dimmed, weight: Weight::Bold)
            }

            Text(content: title, color: theme.text, weight: Weight::Bold)

            View(margin_top: 1, max_width: 60) {
                Text(content: message, color: theme.text_dimmed)
            }

            #(match (&props.search_query, props.kind) {
                (Some(query), EmptyStateKind::NoSearchResults) => Some(element! {
                    View(margin_top: 1) {
                        Text(
                            content: format!("Search: \"{}\"", query),
                            color: theme.search_match,
                        )
                    }
                }),
                _ => None,
            })

            #(if !hint.is_empty() {
                Some(element! {
                    View(margin_top: 2) {
                        Text(content: hint, color: theme.text_dimmed)
                    }
                })
            } else {
                None
            })
        }
    }
}
