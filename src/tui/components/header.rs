//! App header bar component
//!
//! Displays the application title, the backend origin and the subject count.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the Header component
#[derive(Default, Props)]
pub struct HeaderProps {
    /// Title (defaults to "Assuntos")
    pub title: Option<String>,

    /// Backend origin shown after the title
    pub base_url: Option<String>,

    /// Number of subjects shown / total
    pub counts: Option<(usize, usize)>,

    /// Whether a request is in flight
    pub busy: bool,
}

/// App header bar showing title and subject counts
#[component]
pub fn Header(props: &HeaderProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let title = props.title.clone().unwrap_or_else(|| "Assuntos".to_string());
    let left_text = match &props.base_url {
        Some(url) => format!("{title} - {url}"),
        None => title,
    };

    let count_text = props.counts.map(|(shown, total)| {
        if shown == total {
            format!("{total} subjects")
        } else {
            format!("{shown}/{total} subjects")
        }
    });

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.highlight,
        ) {
            Text(
                content: left_text,
                color: theme.text,
                weight: Weight::Bold,
            )
            View(flex_direction: FlexDirection::Row, gap: 1) {
                #(if props.busy {
                    Some(element! {
                        Text(content: "[working]", color: theme.warning)
                    })
                } else {
                    None
                })
                #(count_text.map(|text| element! {
                    Text(content: text, color: theme.text)
                }))
            }
        }
    }
}
