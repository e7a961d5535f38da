//! Key event builders and a headless driver for the form dialog.

#![allow(dead_code)]

use iocraft::prelude::*;

use applyform::form::{FormEffect, FormModel};
use applyform::tui::dialog_key_to_action;

/// Build a key press event
pub fn key_press(code: KeyCode) -> TerminalEvent {
    TerminalEvent::Key(KeyEvent::new(KeyEventKind::Press, code))
}

/// Build a key release event
pub fn key_release(code: KeyCode) -> TerminalEvent {
    TerminalEvent::Key(KeyEvent::new(KeyEventKind::Release, code))
}

/// Build a key press event with modifiers
pub fn key_with(code: KeyCode, modifiers: KeyModifiers) -> TerminalEvent {
    let mut event = KeyEvent::new(KeyEventKind::Press, code);
    event.modifiers = modifiers;
    TerminalEvent::Key(event)
}

/// Build a Ctrl+<c> key press event
pub fn ctrl(c: char) -> TerminalEvent {
    key_with(KeyCode::Char(c), KeyModifiers::CONTROL)
}

pub fn escape() -> TerminalEvent {
    key_press(KeyCode::Esc)
}

pub fn enter() -> TerminalEvent {
    key_press(KeyCode::Enter)
}

pub fn tab() -> TerminalEvent {
    key_press(KeyCode::Tab)
}

pub fn back_tab() -> TerminalEvent {
    key_press(KeyCode::BackTab)
}

pub fn arrow_left() -> TerminalEvent {
    key_press(KeyCode::Left)
}

pub fn arrow_right() -> TerminalEvent {
    key_press(KeyCode::Right)
}

pub fn backspace() -> TerminalEvent {
    key_press(KeyCode::Backspace)
}

/// One key press per character
pub fn type_text(text: &str) -> Vec<TerminalEvent> {
    text.chars().map(|c| key_press(KeyCode::Char(c))).collect()
}

/// Feed events to `model` the way the dialog component does and collect
/// every non-trivial effect.
pub fn drive(model: &mut FormModel, events: impl IntoIterator<Item = TerminalEvent>) -> Vec<FormEffect> {
    let mut effects = Vec::new();
    for event in events {
        let TerminalEvent::Key(KeyEvent {
            code,
            kind,
            modifiers,
            ..
        }) = event
        else {
            continue;
        };
        if kind == KeyEventKind::Release {
            continue;
        }
        if let Some(action) = dialog_key_to_action(code, modifiers, model.focus()) {
            let effect = model.apply(action);
            if effect != FormEffect::None {
                effects.push(effect);
            }
        }
    }
    effects
}

// This module is included into every test binary through `mod common`, so
// it carries no tests of its own.
