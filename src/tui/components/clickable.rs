//! Clickable wrapper component for mouse interaction
//!
//! Events are delivered only when they occur within the component's bounds.

use iocraft::prelude::*;

/// Props for the Clickable component
#[derive(Default, Props)]
pub struct ClickableProps<'a> {
    /// Child element to wrap
    pub children: Vec<AnyElement<'a>>,
    /// Handler invoked when component is clicked
    pub on_click: Option<Handler<()>>,
    /// Ignore clicks, e.g. while the form is submitting
    pub disabled: bool,
}

/// Wraps a child and forwards mouse-down events inside it to `on_click`.
///
/// Uses `use_local_terminal_events`, which hit-tests against the component's
/// rect.
#[component]
pub fn Clickable<'a>(
    props: &mut ClickableProps<'a>,
    mut hooks: Hooks,
) -> impl Into<AnyElement<'a>> {
    let on_click = if props.disabled {
        None
    } else {
        props.on_click.clone()
    };

    hooks.use_local_terminal_events({
        move |event| {
            if let TerminalEvent::FullscreenMouse(mouse_event) = event
                && let MouseEventKind::Down(_) = mouse_event.kind
                && let Some(ref handler) = on_click
            {
                handler(());
            }
        }
    });

    // Return the first child if any, otherwise an empty view
    match props.children.iter_mut().next() {
        Some(child) => child.into(),
        None => element!(View).into_any(),
    }
}
