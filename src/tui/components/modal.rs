//! Modal building blocks
//!
//! `ModalOverlay` centers its children over the whole screen; `ModalContainer`
//! draws the bordered box with a title row and an optional footer line.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Backdrop color behind modals
pub const MODAL_BACKDROP: Color = Color::Rgb {
    r: 30,
    g: 30,
    b: 30,
};

/// Props for the ModalOverlay component
#[derive(Default, Props)]
pub struct ModalOverlayProps<'a> {
    /// Paint the backdrop instead of leaving the screen visible behind
    pub show_backdrop: bool,
    pub children: Vec<AnyElement<'a>>,
}

/// Full-screen absolutely positioned layer that centers its children
#[component]
pub fn ModalOverlay<'a>(props: &mut ModalOverlayProps<'a>) -> impl Into<AnyElement<'a>> {
    element! {
        View(
            width: 100pct,
            height: 100pct,
            position: Position::Absolute,
            top: 0,
            left: 0,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            background_color: if props.show_backdrop { Some(MODAL_BACKDROP) } else { None },
        ) {
            #(std::mem::take(&mut props.children))
        }
    }
}

/// Border color of a modal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalTone {
    #[default]
    Normal,
    Error,
}

impl ModalTone {
    pub fn color(self) -> Color {
        match self {
            ModalTone::Normal => theme().border_focused,
            ModalTone::Error => theme().error,
        }
    }
}

/// Props for the ModalContainer component
#[derive(Default, Props)]
pub struct ModalContainerProps<'a> {
    /// Width in columns (default 60)
    pub width: Option<u32>,
    pub tone: ModalTone,
    pub title: Option<String>,
    pub footer_text: Option<String>,
    pub children: Vec<AnyElement<'a>>,
}

/// Bordered modal box
#[component]
pub fn ModalContainer<'a>(props: &mut ModalContainerProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();
    let border_color = props.tone.color();
    let title = props.title.clone();
    let footer = props.footer_text.clone();

    element! {
        View(
            width: Size::Length(props.width.unwrap_or(60)),
            background_color: theme.background,
            border_style: BorderStyle::Double,
            border_color: border_color,
            padding_left: 1,
            padding_right: 1,
            flex_direction: FlexDirection::Column,
        ) {
            #(title.map(|title| element! {
                View(
                    width: 100pct,
                    border_edges: Edges::Bottom,
                    border_style: BorderStyle::Single,
                    border_color: theme.border,
                ) {
                    Text(content: title, color: border_color, weight: Weight::Bold)
                }
            }))

            View(
                width: 100pct,
                padding_top: 1,
                padding_bottom: 1,
                flex_direction: FlexDirection::Column,
                overflow: Overflow::Hidden,
            ) {
                #(std::mem::take(&mut props.children))
            }

            #(footer.map(|footer| element! {
                View(
                    width: 100pct,
                    border_edges: Edges::Top,
                    border_style: BorderStyle::Single,
                    border_color: theme.border,
                ) {
                    Text(content: footer, color: theme.text_dimmed)
                }
            }))
        }
    }
}
