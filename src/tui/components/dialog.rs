//! Dialog primitive
//!
//! A centered box over a full-screen backdrop with a header (title and
//! description) and a content area. Renders nothing while closed.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Standard backdrop color behind an open dialog
pub const DIALOG_BACKDROP: Color = Color::Rgb {
    r: 30,
    g: 30,
    b: 30,
};

/// Predefined dialog border colors
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum DialogBorder {
    #[default]
    Focused,
    /// A submission is in flight
    Busy,
    Error,
}

impl DialogBorder {
    pub fn to_color(&self) -> Color {
        match self {
            Self::Focused => theme().border_focused,
            Self::Busy => Color::Yellow,
            Self::Error => theme().error,
        }
    }
}

pub const DIALOG_WIDTH: u32 = 64;

#[derive(Default, Props)]
pub struct DialogProps<'a> {
    /// Whether the dialog is shown
    pub open: bool,
    pub border: Option<DialogBorder>,
    pub title: Option<String>,
    /// Highlight the title as the focused element
    pub title_focused: bool,
    pub description: Option<String>,
    pub children: Vec<AnyElement<'a>>,
}

/// Dialog overlay with header and content area
///
/// # Example
///
/// ```ignore
/// element! {
///     Dialog(
///         open: true,
///         title: Some("Application".to_string()),
///         description: Some("Tell us about yourself.".to_string()),
///     ) {
///         Text(content: "form goes here")
///     }
/// }
/// ```
#[component]
pub fn Dialog<'a>(props: &mut DialogProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();

    if !props.open {
        return element!(View).into_any();
    }

    let border_color = props.border.unwrap_or_default().to_color();
    let title = props.title.clone();
    let description = props.description.clone();
    let title_focused = props.title_focused;
    let title_color = if title_focused {
        theme.highlight
    } else {
        theme.title
    };

    element! {
        View(
            width: 100pct,
            height: 100pct,
            position: Position::Absolute,
            top: 0,
            left: 0,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            background_color: DIALOG_BACKDROP,
        ) {
            View(
                width: DIALOG_WIDTH,
                background_color: theme.background,
                border_style: BorderStyle::Double,
                border_color: border_color,
                padding: 1,
                flex_direction: FlexDirection::Column,
            ) {
                #(title.map(|title| element! {
                    View(
                        width: 100pct,
                        flex_direction: FlexDirection::Row,
                        gap: 1,
                    ) {
                        Text(
                            content: if title_focused { "▶" } else { " " },
                            color: title_color,
                        )
                        Text(
                            content: title,
                            color: title_color,
                            weight: Weight::Bold,
                            decoration: if title_focused {
                                TextDecoration::Underline
                            } else {
                                TextDecoration::None
                            },
                        )
                    }
                }))
                #(description.map(|description| element! {
                    View(
                        width: 100pct,
                        padding_bottom: 1,
                        border_edges: Edges::Bottom,
                        border_style: BorderStyle::Single,
                        border_color: theme.border,
                    ) {
                        Text(content: description, color: theme.text_dimmed)
                    }
                }))

                View(
                    width: 100pct,
                    flex_direction: FlexDirection::Column,
                    padding_top: 1,
                    gap: 1,
                ) {
                    #(std::mem::take(&mut props.children))
                }
            }
        }
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_border_default() {
        assert_eq!(DialogBorder::default(), DialogBorder::Focused);
    }

    #[test]
    fn test_dialog_border_colors() {
        assert!(matches!(DialogBorder::Busy.to_color(), Color::Yellow));
        assert!(matches!(DialogBorder::Error.to_color(), Color::Red));
    }

    #[test]
    fn test_dialog_props_default_closed() {
        let props = DialogProps::default();
        assert!(!props.open);
        assert!(props.title.is_none());
        assert!(props.border.is_none());
    }
}
