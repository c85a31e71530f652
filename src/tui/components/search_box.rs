//! Single-line search bar
//!
//! The query text is owned by the view state; this component only renders it.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the SearchBar component
#[derive(Default, Props)]
pub struct SearchBarProps {
    /// Current search query
    pub query: String,
    /// Whether keystrokes go to the search bar
    pub has_focus: bool,
    /// Number of rows matching the query
    pub match_count: Option<usize>,
}

/// Inline search bar: `/ query█   3 matches`
#[component]
pub fn SearchBar(props: &SearchBarProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let has_focus = props.has_focus;

    let (content, color) = if props.query.is_empty() && !has_focus {
        ("press / to search".to_string(), theme.text_dimmed)
    } else if has_focus {
        (format!("{}█", props.query), theme.text)
    } else {
        (props.query.clone(), theme.search_match)
    };

    let matches = if props.query.is_empty() {
        None
    } else {
        props.match_count
    };

    element! {
        View(
            flex_direction: FlexDirection::Row,
            width: 100pct,
            height: 1,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
        ) {
            View(margin_right: 1) {
                Text(
                    content: "/",
                    color: if has_focus { theme.border_focused } else { theme.text_dimmed },
                    weight: Weight::Bold,
                )
            }
            View(flex_grow: 1.0) {
                Text(content: content, color: color)
            }
            #(matches.map(|count| element! {
                Text(
                    content: format!("{count} match{}", if count == 1 { "" } else { "es" }),
                    color: theme.text_dimmed,
                )
            }))
        }
    }
}
