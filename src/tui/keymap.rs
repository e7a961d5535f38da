//! Key-to-action mapping for the page and the form dialog
//!
//! Converts raw `(KeyCode, KeyModifiers)` pairs into high-level actions so
//! key handling can be tested without a terminal.

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::form::{DialogFocus, FormAction, FormField};

/// Actions available on the host page while the dialog is closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    /// Activate the trigger button
    OpenForm,
    /// Move focus onto the trigger button
    FocusTrigger,
    Quit,
}

/// Map a key press on the page.
///
/// `trigger_focused` gates activation: Enter and Space only press the
/// trigger when it holds focus.
pub fn page_key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    trigger_focused: bool,
) -> Option<PageAction> {
    match code {
        KeyCode::Char('q') if modifiers.contains(KeyModifiers::CONTROL) => Some(PageAction::Quit),
        KeyCode::Char('q') if modifiers.is_empty() => Some(PageAction::Quit),
        KeyCode::Enter | KeyCode::Char(' ') if trigger_focused => Some(PageAction::OpenForm),
        KeyCode::Tab | KeyCode::BackTab if !trigger_focused => Some(PageAction::FocusTrigger),
        _ => None,
    }
}

/// Map a key press inside the dialog, given the focused element.
///
/// Returns `None` for keys the dialog ignores.
pub fn dialog_key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    focus: DialogFocus,
) -> Option<FormAction> {
    // Global shortcuts (work on any element)
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('s') => Some(FormAction::Submit),
            _ => None,
        };
    }

    match code {
        KeyCode::Esc => return Some(FormAction::Close),
        KeyCode::Tab if modifiers.contains(KeyModifiers::SHIFT) => {
            return Some(FormAction::FocusPrev);
        }
        KeyCode::Tab | KeyCode::Down => return Some(FormAction::FocusNext),
        KeyCode::BackTab | KeyCode::Up => return Some(FormAction::FocusPrev),
        _ => {}
    }

    // Element-specific handling
    match focus {
        DialogFocus::Title => None,
        DialogFocus::Submit => match code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(FormAction::Submit),
            _ => None,
        },
        DialogFocus::Cancel => match code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(FormAction::Close),
            _ => None,
        },
        DialogFocus::Field(FormField::Experience) => match code {
            KeyCode::Left | KeyCode::Char('h') => Some(FormAction::SelectPrev),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
                Some(FormAction::SelectNext)
            }
            // Enter in a form control submits the form
            KeyCode::Enter => Some(FormAction::Submit),
            _ => None,
        },
        DialogFocus::Field(_) => match code {
            KeyCode::Enter => Some(FormAction::Submit),
            KeyCode::Backspace => Some(FormAction::DeleteBackward),
            KeyCode::Char(c) => Some(FormAction::Insert(c)),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME: DialogFocus = DialogFocus::Field(FormField::Name);
    const EXPERIENCE: DialogFocus = DialogFocus::Field(FormField::Experience);

    #[test]
    fn test_page_enter_requires_trigger_focus() {
        assert_eq!(
            page_key_to_action(KeyCode::Enter, KeyModifiers::NONE, true),
            Some(PageAction::OpenForm)
        );
        assert_eq!(
            page_key_to_action(KeyCode::Enter, KeyModifiers::NONE, false),
            None
        );
        assert_eq!(
            page_key_to_action(KeyCode::Tab, KeyModifiers::NONE, false),
            Some(PageAction::FocusTrigger)
        );
    }

    #[test]
    fn test_page_quit() {
        assert_eq!(
            page_key_to_action(KeyCode::Char('q'), KeyModifiers::CONTROL, true),
            Some(PageAction::Quit)
        );
        assert_eq!(
            page_key_to_action(KeyCode::Char('q'), KeyModifiers::NONE, false),
            Some(PageAction::Quit)
        );
    }

    #[test]
    fn test_dialog_global_shortcuts() {
        assert_eq!(
            dialog_key_to_action(KeyCode::Char('s'), KeyModifiers::CONTROL, NAME),
            Some(FormAction::Submit)
        );
        assert_eq!(
            dialog_key_to_action(KeyCode::Esc, KeyModifiers::NONE, EXPERIENCE),
            Some(FormAction::Close)
        );
        assert_eq!(
            dialog_key_to_action(KeyCode::Tab, KeyModifiers::SHIFT, NAME),
            Some(FormAction::FocusPrev)
        );
        assert_eq!(
            dialog_key_to_action(KeyCode::Char('x'), KeyModifiers::CONTROL, NAME),
            None
        );
    }

    #[test]
    fn test_text_field_keys() {
        assert_eq!(
            dialog_key_to_action(KeyCode::Char('k'), KeyModifiers::NONE, NAME),
            Some(FormAction::Insert('k'))
        );
        assert_eq!(
            dialog_key_to_action(KeyCode::Char('K'), KeyModifiers::SHIFT, NAME),
            Some(FormAction::Insert('K'))
        );
        assert_eq!(
            dialog_key_to_action(KeyCode::Backspace, KeyModifiers::NONE, NAME),
            Some(FormAction::DeleteBackward)
        );
        assert_eq!(
            dialog_key_to_action(KeyCode::Enter, KeyModifiers::NONE, NAME),
            Some(FormAction::Submit)
        );
    }

    #[test]
    fn test_selector_keys() {
        assert_eq!(
            dialog_key_to_action(KeyCode::Right, KeyModifiers::NONE, EXPERIENCE),
            Some(FormAction::SelectNext)
        );
        assert_eq!(
            dialog_key_to_action(KeyCode::Left, KeyModifiers::NONE, EXPERIENCE),
            Some(FormAction::SelectPrev)
        );
        assert_eq!(
            dialog_key_to_action(KeyCode::Char('x'), KeyModifiers::NONE, EXPERIENCE),
            None
        );
    }

    #[test]
    fn test_buttons() {
        assert_eq!(
            dialog_key_to_action(KeyCode::Enter, KeyModifiers::NONE, DialogFocus::Cancel),
            Some(FormAction::Close)
        );
        assert_eq!(
            dialog_key_to_action(KeyCode::Char(' '), KeyModifiers::NONE, DialogFocus::Submit),
            Some(FormAction::Submit)
        );
        assert_eq!(
            dialog_key_to_action(KeyCode::Enter, KeyModifiers::NONE, DialogFocus::Title),
            None
        );
    }
}
