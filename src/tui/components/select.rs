//! Compact inline selector component
//!
//! Cycles through a list of options with left/right arrows or clicks on
//! the arrow markers. Displays as: ◀ value ▶

use iocraft::prelude::*;

use crate::tui::components::Clickable;
use crate::tui::theme::theme;

/// Props for the Select component
#[derive(Default, Props)]
pub struct SelectProps {
    /// Label shown above the selector
    pub label: String,
    /// List of options to choose from
    pub options: Vec<String>,
    /// Index of the currently selected option
    pub selected_index: usize,
    /// Render the value as a placeholder (nothing chosen yet)
    pub is_placeholder: bool,
    /// Whether the selector has focus
    pub has_focus: bool,
    pub disabled: bool,
    /// Draw the border in the error color
    pub invalid: bool,
    /// Handler invoked when left arrow is clicked (cycle backward)
    pub on_prev: Option<Handler<()>>,
    /// Handler invoked when right arrow is clicked (cycle forward)
    pub on_next: Option<Handler<()>>,
}

#[component]
pub fn Select(props: &SelectProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let arrow_color = if props.disabled {
        theme.button_disabled
    } else {
        theme.focus_label(props.has_focus)
    };
    let value_color = if props.disabled {
        theme.button_disabled
    } else if props.is_placeholder {
        theme.placeholder
    } else {
        theme.text
    };

    let border_color = if props.invalid {
        theme.error
    } else {
        theme.focus_border(props.has_focus)
    };

    let current_value = props
        .options
        .get(props.selected_index)
        .cloned()
        .unwrap_or_default();

    element! {
        View(flex_direction: FlexDirection::Column) {
            Text(
                content: props.label.clone(),
                color: theme.focus_label(props.has_focus),
            )
            View(
                flex_direction: FlexDirection::Row,
                gap: 1,
                border_style: BorderStyle::Round,
                border_color: border_color,
                padding_left: 1,
                padding_right: 1,
                width: 100pct,
            ) {
                Clickable(on_click: props.on_prev.clone(), disabled: props.disabled) {
                    Text(content: "◀", color: arrow_color)
                }
                View(flex_grow: 1.0) {
                    Text(content: current_value, color: value_color)
                }
                Clickable(on_click: props.on_next.clone(), disabled: props.disabled) {
                    Text(content: "▶", color: arrow_color)
                }
            }
        }
    }
}
