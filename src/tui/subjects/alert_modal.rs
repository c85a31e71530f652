//! Blocking alert shown when a save fails

use iocraft::prelude::*;

use crate::tui::components::{ModalContainer, ModalOverlay, ModalTone};
use crate::tui::theme::theme;

use super::model::Alert;

#[derive(Default, Props)]
pub struct AlertModalProps {
    pub alert: Option<Alert>,
}

#[component]
pub fn AlertModal(props: &AlertModalProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let Some(alert) = props.alert.clone() else {
        return element! { View() };
    };

    element! {
        View(
            width: 100pct,
            height: 100pct,
            position: Position::Absolute,
        ) {
            ModalOverlay() {
                ModalContainer(
                    width: Some(56),
                    tone: ModalTone::Error,
                    title: Some(alert.title.clone()),
                    footer_text: Some("Press Enter to dismiss".to_string()),
                ) {
                    Text(content: alert.message.clone(), color: theme.text, weight: Weight::Bold)
                    #(alert.detail.clone().map(|detail| element! {
                        View(margin_top: 1) {
                            Text(content: detail, color: theme.text_dimmed)
                        }
                    }))
                }
            }
        }
    }
}
