//! Application form modal
//!
//! Owns the form model, translates key presses into `FormAction`s and runs
//! the async submission flow. Visibility is controlled by the parent through
//! `is_open` and `on_close`.

use std::sync::Arc;

use iocraft::prelude::*;

use crate::form::{
    FocusHandle, FormAction, FormCell, FormEffect, FormModel, FormSubmitter, LogNotifier,
    Notifier, SimulatedSubmitter, run_submission,
};
use crate::locale::Locale;
use crate::tui::components::{Button, ButtonVariant, Dialog, Footer, Select, TextField};
use crate::tui::keymap::dialog_key_to_action;
use crate::tui::theme::theme;
use crate::tui::view_model::compute_dialog_view;

impl FormCell for State<FormModel> {
    fn update<R>(&mut self, f: impl FnOnce(&mut FormModel) -> R) -> R {
        let mut model = self.write();
        f(&mut model)
    }
}

#[derive(Default, Props)]
pub struct ApplicationFormModalProps {
    pub is_open: bool,
    /// Invoked when the dialog asks to be hidden, after a cancel or a
    /// successful submission
    pub on_close: Option<Handler<()>>,
    /// Receives focus whenever the dialog becomes hidden
    pub trigger: Option<Arc<dyn FocusHandle>>,
    /// Defaults to a `SimulatedSubmitter` with the standard delay
    pub submitter: Option<Arc<dyn FormSubmitter>>,
    /// Defaults to logging notices only
    pub notifier: Option<Arc<dyn Notifier>>,
    pub locale: Locale,
}

#[component]
pub fn ApplicationFormModal(
    props: &ApplicationFormModalProps,
    mut hooks: Hooks,
) -> impl Into<AnyElement<'static>> {
    let messages = props.locale.messages();

    let mut model = hooks.use_state(FormModel::new);
    let mut should_submit = hooks.use_state(|| false);
    let mut should_close = hooks.use_state(|| false);

    // Focus follows visibility: title on show, trigger on hide
    // Only write on a change; every write schedules another render
    if model.read().is_visible() != props.is_open {
        tracing::info!(is_open = props.is_open, "application form visibility changed");
        model
            .write()
            .sync_visibility(props.is_open, props.trigger.as_deref());
    }

    let submitter: Arc<dyn FormSubmitter> = props
        .submitter
        .clone()
        .unwrap_or_else(|| Arc::new(SimulatedSubmitter::default()));
    let notifier: Arc<dyn Notifier> = props
        .notifier
        .clone()
        .unwrap_or_else(|| Arc::new(LogNotifier));

    let submit_handler: Handler<()> = hooks.use_async_handler({
        let on_close = props.on_close.clone();

        move |()| {
            let mut model = model;
            let submitter = submitter.clone();
            let notifier = notifier.clone();
            let on_close = on_close.clone();

            async move {
                run_submission(
                    &mut model,
                    submitter.as_ref(),
                    notifier.as_ref(),
                    messages,
                    move || {
                        if let Some(on_close) = on_close {
                            on_close(());
                        }
                    },
                )
                .await;
            }
        }
    });

    // Mouse handlers
    let submit_click: Handler<()> = hooks.use_async_handler(move |()| {
        let mut should_submit = should_submit;
        async move { should_submit.set(true) }
    });
    let cancel_click: Handler<()> = hooks.use_async_handler(move |()| {
        let mut should_close = should_close;
        async move { should_close.set(true) }
    });
    let select_prev: Handler<()> = hooks.use_async_handler(move |()| {
        let mut model = model;
        async move {
            model.write().apply(FormAction::SelectPrev);
        }
    });
    let select_next: Handler<()> = hooks.use_async_handler(move |()| {
        let mut model = model;
        async move {
            model.write().apply(FormAction::SelectNext);
        }
    });

    // Handle submit
    if should_submit.get() {
        should_submit.set(false);
        if !model.read().is_submitting() {
            submit_handler(());
        }
    }

    // Handle close
    if should_close.get() {
        should_close.set(false);
        if model.read().can_close()
            && let Some(on_close) = &props.on_close
        {
            on_close(());
        }
    }

    // Keyboard handling
    hooks.use_terminal_events({
        let is_open = props.is_open;
        move |event| {
            if !is_open {
                return;
            }
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
                let focus = model.read().focus();
                let Some(action) = dialog_key_to_action(code, modifiers, focus) else {
                    return;
                };
                match model.write().apply(action) {
                    FormEffect::Submit => should_submit.set(true),
                    FormEffect::Close => should_close.set(true),
                    FormEffect::None => {}
                }
            }
        }
    });

    let vm = compute_dialog_view(&model.read(), messages);
    let error_color = theme().error;

    element! {
        Dialog(
            open: props.is_open,
            title: Some(vm.title),
            title_focused: vm.title_focused,
            description: Some(vm.description),
            border: Some(vm.border),
        ) {
            TextField(
                label: vm.name.label,
                value: vm.name.value,
                placeholder: vm.name.placeholder,
                has_focus: vm.name.has_focus,
                disabled: vm.disabled,
                invalid: vm.name.invalid,
            )
            TextField(
                label: vm.email.label,
                value: vm.email.value,
                placeholder: vm.email.placeholder,
                has_focus: vm.email.has_focus,
                disabled: vm.disabled,
                invalid: vm.email.invalid,
            )
            Select(
                label: vm.experience.label,
                options: vm.experience.options,
                selected_index: vm.experience.selected_index,
                is_placeholder: vm.experience.is_placeholder,
                has_focus: vm.experience.has_focus,
                disabled: vm.disabled,
                invalid: vm.experience.invalid,
                on_prev: Some(select_prev),
                on_next: Some(select_next),
            )
            TextField(
                label: vm.github.label,
                value: vm.github.value,
                placeholder: vm.github.placeholder,
                has_focus: vm.github.has_focus,
                disabled: vm.disabled,
                invalid: vm.github.invalid,
            )
            #(vm.error_text.map(|text| element! {
                Text(content: text, color: error_color)
            }))
            View(
                width: 100pct,
                flex_direction: FlexDirection::Row,
                justify_content: JustifyContent::End,
                gap: 1,
            ) {
                Button(
                    label: vm.cancel_label,
                    variant: ButtonVariant::Outline,
                    has_focus: vm.cancel_focused,
                    disabled: vm.disabled,
                    on_click: Some(cancel_click),
                )
                Button(
                    label: vm.submit_label,
                    variant: ButtonVariant::Primary,
                    has_focus: vm.submit_focused,
                    disabled: vm.disabled,
                    on_click: Some(submit_click),
                )
            }
            Footer(shortcuts: vm.shortcuts)
        }
    }
}
