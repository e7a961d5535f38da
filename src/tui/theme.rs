//! Theme system for TUI colors and styles

use iocraft::prelude::Color;

use crate::form::NoticeLevel;

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Chrome
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,

    // Text
    pub text: Color,
    pub text_dimmed: Color,
    pub placeholder: Color,
    pub highlight: Color,
    pub title: Color,

    // Buttons
    pub button_primary: Color,
    pub button_outline: Color,
    pub button_disabled: Color,

    // Feedback
    pub error: Color,
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            border_focused: Color::Blue,
            background: Color::Reset,

            text: Color::White,
            text_dimmed: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            placeholder: Color::Rgb {
                r: 90,
                g: 90,
                b: 90,
            },
            highlight: Color::Blue,
            title: Color::Cyan,

            button_primary: Color::Blue,
            button_outline: Color::White,
            button_disabled: Color::Rgb {
                r: 80,
                g: 80,
                b: 80,
            },

            error: Color::Red,
            success: Color::Green,
        }
    }
}

impl Theme {
    /// Border color for a focusable element
    pub fn focus_border(&self, focused: bool) -> Color {
        if focused {
            self.border_focused
        } else {
            self.border
        }
    }

    /// Label color for a focusable element
    pub fn focus_label(&self, focused: bool) -> Color {
        if focused {
            self.border_focused
        } else {
            self.text_dimmed
        }
    }

    /// Get the color for a notice level
    pub fn notice_color(&self, level: NoticeLevel) -> Color {
        match level {
            NoticeLevel::Success => self.success,
            NoticeLevel::Error => self.error,
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
