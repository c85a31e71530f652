//! Theme system for TUI colors and styles
//!
//! Colors match the CLI table output (ids cyan, missing values dimmed).

use iocraft::prelude::Color;

const GRAY: Color = Color::Rgb {
    r: 120,
    g: 120,
    b: 120,
};

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Data colors
    pub id_color: Color,
    pub course_color: Color,
    pub missing_value: Color,

    // Feedback colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub search_match: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            id_color: Color::Cyan,
            course_color: Color::Magenta,
            missing_value: GRAY,

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,

            border: GRAY,
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: GRAY,
            highlight: Color::Blue,
            search_match: Color::Yellow,
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
