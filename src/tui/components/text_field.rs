//! Single-line labelled text field

use iocraft::prelude::*;

use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct TextFieldProps {
    pub label: String,
    pub value: String,
    /// Shown dimmed while `value` is empty
    pub placeholder: String,
    pub has_focus: bool,
    pub disabled: bool,
    /// Draw the border in the error color
    pub invalid: bool,
}

/// Text input drawn as label plus bordered value. Key handling lives in the
/// owning dialog; this only renders.
#[component]
pub fn TextField(props: &TextFieldProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let border_color = if props.invalid {
        theme.error
    } else {
        theme.focus_border(props.has_focus)
    };
    let cursor = if props.has_focus && !props.disabled {
        "_"
    } else {
        ""
    };
    let (content, color) = if props.value.is_empty() && !props.has_focus {
        (props.placeholder.clone(), theme.placeholder)
    } else if props.disabled {
        (props.value.clone(), theme.button_disabled)
    } else {
        (format!("{}{}", props.value, cursor), theme.text)
    };

    element! {
        View(flex_direction: FlexDirection::Column) {
            Text(
                content: props.label.clone(),
                color: theme.focus_label(props.has_focus),
            )
            View(
                border_style: BorderStyle::Round,
                border_color: border_color,
                padding_left: 1,
                padding_right: 1,
                width: 100pct,
            ) {
                Text(content: content, color: color)
            }
        }
    }
}
