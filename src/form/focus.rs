//! Focus capability and the dialog's focus order

use super::types::FormField;

/// Something that can take keyboard focus.
///
/// The host page hands the form a handle to its trigger button instead of a
/// reference into its render tree.
pub trait FocusHandle: Send + Sync {
    fn focus(&self);
}

/// Focusable element inside the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DialogFocus {
    #[default]
    Title,
    Field(FormField),
    Cancel,
    Submit,
}

impl DialogFocus {
    /// Tab order of the dialog
    pub const ORDER: [DialogFocus; 7] = [
        DialogFocus::Title,
        DialogFocus::Field(FormField::Name),
        DialogFocus::Field(FormField::Email),
        DialogFocus::Field(FormField::Experience),
        DialogFocus::Field(FormField::Github),
        DialogFocus::Cancel,
        DialogFocus::Submit,
    ];

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|f| *f == self)
            .unwrap_or_default()
    }

    /// Get the next element (wrapping)
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// Get the previous element (wrapping)
    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    pub fn field(self) -> Option<FormField> {
        match self {
            DialogFocus::Field(field) => Some(field),
            _ => None,
        }
    }
}
