//! Shared TUI components
//!
//! Building blocks for the page and the application form dialog.

pub mod button;
pub mod clickable;
pub mod dialog;
pub mod footer;
pub mod select;
pub mod shortcuts;
pub mod text_field;
pub mod toast;

pub use button::{Button, ButtonProps, ButtonVariant};
pub use clickable::{Clickable, ClickableProps};
pub use dialog::{Dialog, DialogBorder, DialogProps};
pub use footer::{
    Footer, FooterProps, Shortcut, dialog_shortcuts, page_shortcuts, submitting_shortcuts,
};
pub use select::{Select, SelectProps};
pub use shortcuts::ShortcutsBuilder;
pub use text_field::{TextField, TextFieldProps};
pub use toast::{Toast, ToastNotification, ToastNotificationProps};
