//! Create/edit form modal

use iocraft::prelude::*;

use crate::catalog::FormField;
use crate::tui::components::{ModalContainer, ModalOverlay, Select};
use crate::tui::theme::theme;

use super::model::FormViewModel;

/// Props for the SubjectFormModal component
#[derive(Default, Props)]
pub struct SubjectFormModalProps {
    pub form: FormViewModel,
}

#[component]
pub fn SubjectFormModal(props: &SubjectFormModalProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let form = &props.form;

    let name_focused = form.focused_field == FormField::Name && !form.saving;
    let course_focused = form.focused_field == FormField::Course && !form.saving;

    let name_text = if name_focused {
        format!("{}█", form.name)
    } else {
        form.name.clone()
    };

    let footer = if form.saving {
        "Saving...".to_string()
    } else {
        "Enter save · Esc cancel · Tab switch field".to_string()
    };

    element! {
        ModalOverlay(show_backdrop: true) {
            ModalContainer(
                width: Some(64),
                title: Some(form.title.clone()),
                footer_text: Some(footer),
            ) {
                View(flex_direction: FlexDirection::Column, gap: 1) {
                    View(flex_direction: FlexDirection::Column) {
                        Text(
                            content: "Nome",
                            color: if name_focused { theme.border_focused } else { theme.text_dimmed },
                        )
                        View(
                            width: 100pct,
                            height: 3,
                            padding_left: 1,
                            padding_right: 1,
                            border_style: BorderStyle::Round,
                            border_color: if name_focused { theme.border_focused } else { theme.border },
                        ) {
                            Text(content: name_text, color: theme.text)
                        }
                    }

                    Select(
                        label: Some("Materia".to_string()),
                        options: form.course_options.clone(),
                        selected_index: form.selected_course,
                        has_focus: course_focused,
                        value_color: Some(theme.course_color),
                    )
                }
            }
        }
    }
}
