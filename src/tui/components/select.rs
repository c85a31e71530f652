//! Inline option selector
//!
//! Renders as `Label: ◀ value ▶`; the owning view cycles the selection.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the Select component
#[derive(Default, Props)]
pub struct SelectProps {
    pub label: Option<String>,
    pub options: Vec<String>,
    pub selected_index: usize,
    pub has_focus: bool,
    /// Color for the value text
    pub value_color: Option<Color>,
}

#[component]
pub fn Select(props: &SelectProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let accent = if props.has_focus {
        theme.border_focused
    } else {
        theme.text_dimmed
    };

    let current_value = props
        .options
        .get(props.selected_index)
        .cloned()
        .unwrap_or_default();

    element! {
        View(flex_direction: FlexDirection::Row, gap: 1) {
            #(props.label.clone().map(|label| element! {
                Text(content: format!("{}:", label), color: accent)
            }))
            Text(content: "◀", color: accent)
            Text(
                content: current_value,
                color: props.value_color.unwrap_or(theme.text),
                weight: if props.has_focus { Weight::Bold } else { Weight::Normal },
            )
            Text(content: "▶", color: accent)
        }
    }
}
