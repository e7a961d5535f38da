//! Application form core
//!
//! Framework-independent pieces of the form modal:
//! - `types` - form values and field edits
//! - `validate` - per-field constraint checks
//! - `model` - the form state machine and its key-driven reducer
//! - `flow` - the async submission flow
//! - `submit`, `notify`, `focus` - injectable collaborators

pub mod flow;
pub mod focus;
pub mod model;
pub mod notify;
pub mod submit;
pub mod types;
pub mod validate;

pub use flow::{FormCell, SubmitOutcome, run_submission};
pub use focus::{DialogFocus, FocusHandle};
pub use model::{
    EXPERIENCE_CHOICES, FormAction, FormEffect, FormModel, SubmitRejection,
    experience_index,
};
pub use notify::{LogNotifier, Notice, NoticeLevel, Notifier};
pub use submit::{
    FormSubmitter, SIMULATED_DELAY, SimulatedOutcome, SimulatedSubmitter, SubmissionError,
};
pub use types::{Experience, FieldEdit, FormData, FormField};
pub use validate::{FormValidator, ValidationError, ValidationResult};
