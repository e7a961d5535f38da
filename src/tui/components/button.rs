//! Button primitive

use iocraft::prelude::*;

use crate::tui::components::Clickable;
use crate::tui::theme::theme;

/// Visual style of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

#[derive(Default, Props)]
pub struct ButtonProps {
    pub label: String,
    pub variant: ButtonVariant,
    pub has_focus: bool,
    pub disabled: bool,
    /// Invoked on mouse click; keyboard activation is handled by the owner
    pub on_click: Option<Handler<()>>,
}

/// Bordered, clickable label. Focus shows as a bold border and `▶` marker.
#[component]
pub fn Button(props: &ButtonProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let color = match (props.disabled, props.variant) {
        (true, _) => theme.button_disabled,
        (false, ButtonVariant::Primary) => theme.button_primary,
        (false, ButtonVariant::Outline) => theme.button_outline,
    };
    let border_style = if props.has_focus {
        BorderStyle::Bold
    } else {
        BorderStyle::Round
    };
    let border_color = if props.has_focus && !props.disabled {
        theme.border_focused
    } else {
        color
    };
    let marker = if props.has_focus { "▶ " } else { "  " };

    element! {
        Clickable(on_click: props.on_click.clone(), disabled: props.disabled) {
            View(
                border_style: border_style,
                border_color: border_color,
                padding_left: 1,
                padding_right: 1,
            ) {
                Text(
                    content: format!("{}{}", marker, props.label),
                    color: color,
                    weight: if props.variant == ButtonVariant::Primary {
                        Weight::Bold
                    } else {
                        Weight::Normal
                    },
                )
            }
        }
    }
}
