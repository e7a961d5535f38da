//! Host page for the application form
//!
//! Stores a `PageState`, renders the trigger button and wires the modal's
//! focus return, notices and close callback through a `PageHandle`.

use std::sync::Arc;

use iocraft::prelude::*;

use crate::form::{FocusHandle, FormSubmitter, Notifier};
use crate::locale::Locale;
use crate::tui::components::{Button, ButtonVariant, Footer, ToastNotification, page_shortcuts};
use crate::tui::form_modal::ApplicationFormModal;
use crate::tui::page_model::{PageCell, PageHandle, PageState};
use crate::tui::theme::theme;

impl PageCell for State<PageState> {
    fn with_page<R>(&self, f: impl FnOnce(&mut PageState) -> R) -> R {
        // State handles are Copy; mutate through a local copy
        let mut state = *self;
        let mut page = state.write();
        f(&mut page)
    }
}

#[derive(Default, Props)]
pub struct ModalFormPageProps {
    /// Passed through to the modal
    pub submitter: Option<Arc<dyn FormSubmitter>>,
    pub locale: Locale,
}

#[component]
pub fn ModalFormPage(
    props: &ModalFormPageProps,
    mut hooks: Hooks,
) -> impl Into<AnyElement<'static>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();
    let theme = theme();
    let messages = props.locale.messages();

    let mut page = hooks.use_state(PageState::new);

    let close_handler: Handler<()> = hooks.use_async_handler(move |()| {
        let mut page = page;
        async move { page.write().close() }
    });
    let open_click: Handler<()> = hooks.use_async_handler(move |()| {
        let mut page = page;
        async move { page.write().open() }
    });

    hooks.use_terminal_events(move |event| {
        if let TerminalEvent::Key(KeyEvent {
            code,
            kind,
            modifiers,
            ..
        }) = event
        {
            if kind == KeyEventKind::Release {
                return;
            }
            page.write().on_key(code, modifiers);
        }
    });

    let snapshot = page.read().clone();
    if snapshot.exit_requested() {
        tracing::debug!("quit requested");
        system.exit();
    }

    let open = snapshot.is_open();
    let handle = PageHandle(page);
    let trigger: Arc<dyn FocusHandle> = Arc::new(handle);
    let notifier: Arc<dyn Notifier> = Arc::new(handle);

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            View(
                flex_grow: 1.0,
                width: 100pct,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
            ) {
                Button(
                    label: messages.trigger,
                    variant: ButtonVariant::Primary,
                    has_focus: snapshot.trigger_has_focus(),
                    disabled: open,
                    on_click: Some(open_click),
                )
            }
            #((!open).then(|| element! {
                Footer(shortcuts: page_shortcuts(messages))
            }))
            ApplicationFormModal(
                is_open: open,
                on_close: Some(close_handler),
                trigger: Some(trigger),
                submitter: props.submitter.clone(),
                notifier: Some(notifier),
                locale: props.locale,
            )
            // Drawn after the modal so it stays visible over the backdrop
            View(
                width: 100pct,
                height: 100pct,
                position: Position::Absolute,
                top: 0,
                left: 0,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::End,
                padding_bottom: 1,
            ) {
                ToastNotification(toast: snapshot.toast().cloned())
            }
        }
    }
}
