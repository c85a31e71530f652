//! Toast notifications shown above the footer

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// A toast notification message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// The message to display
    pub message: String,
    /// The severity level of the toast
    pub level: ToastLevel,
}

/// Severity level for toast notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Error,
    Success,
}

impl Toast {
    pub fn new(message: String, level: ToastLevel) -> Self {
        Self { message, level }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Error)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Success)
    }

    /// Get the color associated with this toast's level
    pub fn color(&self) -> Color {
        let theme = theme();
        match self.level {
            ToastLevel::Error => theme.error,
            ToastLevel::Success => theme.success,
        }
    }
}

/// Render a toast notification as an optional element
pub fn render_toast(toast: &Option<Toast>) -> Option<AnyElement<'static>> {
    toast.as_ref().map(|t| {
        element! {
            View(
                width: 100pct,
                height: 3,
                flex_shrink: 0.0,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                background_color: Color::Black,
                border_edges: Edges::Top,
                border_style: BorderStyle::Single,
                border_color: t.color(),
            ) {
                Text(content: t.message.clone(), color: t.color())
            }
        }
        .into_any()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_levels() {
        assert_eq!(Toast::success("ok").level, ToastLevel::Success);
        assert_eq!(Toast::error("bad").level, ToastLevel::Error);
        assert_eq!(Toast::error("bad").color(), Color::Red);
    }

    #[test]
    fn test_render_toast_none() {
        assert!(render_toast(&None).is_none());
        assert!(render_toast(&Some(Toast::success("hi"))).is_some());
    }
}
