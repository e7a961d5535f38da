//! Declarative builder for TUI shortcuts

use super::Shortcut;
use crate::locale::Messages;

/// Builder for creating shortcut lists with common patterns
#[derive(Default)]
pub struct ShortcutsBuilder {
    shortcuts: Vec<Shortcut>,
}

impl ShortcutsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add Tab/S-Tab for moving between focusable elements
    pub fn with_focus_cycle(mut self, messages: &Messages) -> Self {
        self.shortcuts.push(Shortcut::new("Tab", messages.shortcut_next));
        self.shortcuts.push(Shortcut::new("S-Tab", messages.shortcut_prev));
        self
    }

    /// Add q (or Ctrl+q) for quit
    pub fn with_quit(mut self, messages: &Messages) -> Self {
        self.shortcuts.push(Shortcut::new("q/C-q", messages.shortcut_quit));
        self
    }

    /// Add a single custom shortcut
    pub fn add(mut self, key: &str, description: &str) -> Self {
        self.shortcuts.push(Shortcut::new(key, description));
        self
    }

    /// Build the shortcuts vector
    pub fn build(self) -> Vec<Shortcut> {
        self.shortcuts
    }
}
