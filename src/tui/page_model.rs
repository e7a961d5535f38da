//! Host page state and its transitions
//!
//! `PageState` is everything the page renders outside the dialog: the
//! dialog's visibility flag, whether the trigger holds focus, the current
//! toast and a pending quit. The page component only stores it and calls
//! these methods, so open, close and focus return are tested here.

use std::sync::Arc;

use iocraft::prelude::{KeyCode, KeyModifiers};
use parking_lot::Mutex;

use crate::form::{FocusHandle, Notice, Notifier};
use crate::tui::components::Toast;
use crate::tui::keymap::{PageAction, page_key_to_action};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    is_open: bool,
    trigger_focused: bool,
    toast: Option<Toast>,
    exit_requested: bool,
}

impl Default for PageState {
    fn default() -> Self {
        // The trigger starts focused so Enter opens the form right away
        Self {
            is_open: false,
            trigger_focused: true,
            toast: None,
            exit_requested: false,
        }
    }
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// The trigger is only focusable while the dialog is hidden
    pub fn trigger_has_focus(&self) -> bool {
        self.trigger_focused && !self.is_open
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Show the dialog. A toast left over from an earlier submission is
    /// dropped.
    pub fn open(&mut self) {
        self.is_open = true;
        self.trigger_focused = false;
        self.toast = None;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn focus_trigger(&mut self) {
        self.trigger_focused = true;
    }

    pub fn show_notice(&mut self, notice: Notice) {
        self.toast = Some(Toast::from(notice));
    }

    /// Handle a key press on the page.
    ///
    /// Keys are ignored while the dialog is open. Otherwise any key dismisses
    /// the toast before being mapped.
    pub fn on_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Option<PageAction> {
        if self.is_open {
            return None;
        }
        self.toast = None;

        let action = page_key_to_action(code, modifiers, self.trigger_focused)?;
        match action {
            PageAction::OpenForm => self.open(),
            PageAction::FocusTrigger => self.focus_trigger(),
            PageAction::Quit => self.exit_requested = true,
        }
        Some(action)
    }
}

/// Shared storage for a `PageState`
pub trait PageCell: Send + Sync {
    fn with_page<R>(&self, f: impl FnOnce(&mut PageState) -> R) -> R;
}

impl PageCell for Arc<Mutex<PageState>> {
    fn with_page<R>(&self, f: impl FnOnce(&mut PageState) -> R) -> R {
        let mut guard = self.lock();
        f(&mut guard)
    }
}

/// The page as seen by the dialog: the trigger to refocus and the place
/// notices are shown.
#[derive(Clone, Copy)]
pub struct PageHandle<C>(pub C);

impl<C: PageCell> FocusHandle for PageHandle<C> {
    fn focus(&self) {
        self.0.with_page(PageState::focus_trigger);
    }
}

impl<C: PageCell> Notifier for PageHandle<C> {
    fn notify(&self, notice: Notice) {
        self.0.with_page(|page| page.show_notice(notice));
    }
}
