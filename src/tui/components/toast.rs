//! Toast notification system
//!
//! Renders form notices at the bottom of the page, drawn above the dialog
//! backdrop.

use iocraft::prelude::*;

use crate::form::{Notice, NoticeLevel};
use crate::tui::theme::theme;

/// A toast notification message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// The message to display
    pub message: String,
    /// The severity level of the toast
    pub level: NoticeLevel,
}

impl Toast {
    /// Get the color associated with this toast's level
    pub fn color(&self) -> Color {
        theme().notice_color(self.level)
    }
}

impl From<Notice> for Toast {
    fn from(notice: Notice) -> Self {
        Self {
            message: notice.message,
            level: notice.level,
        }
    }
}

/// Props for the ToastNotification component
#[derive(Default, Props)]
pub struct ToastNotificationProps {
    /// The toast to display
    pub toast: Option<Toast>,
}

/// Toast bar styled by the toast's level
#[component]
pub fn ToastNotification(props: &ToastNotificationProps) -> impl Into<AnyElement<'static>> {
    element! {
        View() {
            #(props.toast.as_ref().map(|t| {
                element! {
                    View(
                        width: 100pct,
                        height: 3,
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
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_from_notice_keeps_level() {
        let toast = Toast::from(Notice::error("boom"));
        assert_eq!(toast.level, NoticeLevel::Error);
        assert_eq!(toast.message, "boom");
        assert!(matches!(toast.color(), Color::Red));
    }

    #[test]
    fn test_success_toast_color() {
        assert!(matches!(
            Toast::from(Notice::success("ok")).color(),
            Color::Green
        ));
    }
}
