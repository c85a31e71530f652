//! Subjects table: column header plus the visible window of rows

use iocraft::prelude::*;

use crate::tui::components::{EmptyState, EmptyStateKind};
use crate::tui::theme::theme;

use super::model::SubjectRowViewModel;

/// Props for the SubjectsTable component
#[derive(Default, Props)]
pub struct SubjectsTableProps {
    pub rows: Vec<SubjectRowViewModel>,
    /// Rendered instead of the rows when set
    pub empty_state: Option<EmptyStateKind>,
    pub search_query: Option<String>,
}

#[component]
pub fn SubjectsTable(props: &SubjectsTableProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    if let Some(kind) = props.empty_state {
        return element! {
            View(flex_grow: 1.0, width: 100pct) {
                EmptyState(kind, search_query: props.search_query.clone())
            }
        };
    }

    element! {
        View(
            flex_grow: 1.0,
            width: 100pct,
            flex_direction: FlexDirection::Column,
            overflow: Overflow::Hidden,
        ) {
            // Column header
            View(
                width: 100pct,
                height: 2,
                flex_shrink: 0.0,
                flex_direction: FlexDirection::Row,
                padding_left: 1,
                padding_right: 1,
                border_edges: Edges::Bottom,
                border_style: BorderStyle::Single,
                border_color: theme.border,
            ) {
                View(width: 8, flex_shrink: 0.0) {
                    Text(content: "Id", color: theme.text_dimmed, weight: Weight::Bold)
                }
                View(flex_grow: 1.0) {
                    Text(content: "Nome", color: theme.text_dimmed, weight: Weight::Bold)
                }
                View(width: 28, flex_shrink: 0.0) {
                    Text(content: "Materia", color: theme.text_dimmed, weight: Weight::Bold)
                }
            }

            #(props.rows.iter().map(|row| {
                let background = if row.is_selected { Some(theme.highlight) } else { None };
                let (course, course_color) = match &row.course_name {
                    Some(name) => (name.clone(), theme.course_color),
                    None => ("-".to_string(), theme.missing_value),
                };

                element! {
                    View(
                        width: 100pct,
                        height: 1,
                        flex_shrink: 0.0,
                        flex_direction: FlexDirection::Row,
                        padding_left: 1,
                        padding_right: 1,
                        background_color: background,
                    ) {
                        View(width: 8, flex_shrink: 0.0) {
                            Text(content: row.id.to_string(), color: theme.id_color)
                        }
                        View(flex_grow: 1.0, overflow: Overflow::Hidden) {
                            Text(
                                content: row.name.clone(),
                                color: theme.text,
                                weight: if row.is_selected { Weight::Bold } else { Weight::Normal },
                            )
                        }
                        View(width: 28, flex_shrink: 0.0, overflow: Overflow::Hidden) {
                            Text(content: course, color: course_color)
                        }
                    }
                }
            }))
        }
    }
}
