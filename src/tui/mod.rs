//! Terminal interface for the application form
//!
//! - `page` - host page with the trigger button, toasts and footer
//! - `form_modal` - the application form dialog
//! - `keymap`, `page_model` and `view_model` - pure key mapping, page
//!   transitions and render data, tested without a terminal

pub mod components;
pub mod form_modal;
pub mod keymap;
pub mod page;
pub mod page_model;
pub mod theme;
pub mod view_model;

pub use form_modal::{ApplicationFormModal, ApplicationFormModalProps};
pub use keymap::{PageAction, dialog_key_to_action, page_key_to_action};
pub use page::{ModalFormPage, ModalFormPageProps};
pub use page_model::{PageCell, PageHandle, PageState};
pub use theme::Theme;
pub use view_model::{DialogViewModel, SelectView, TextFieldView, compute_dialog_view};
