pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod locale;
pub mod logging;
pub mod tui;

#[cfg(test)]
mod test_guards;

pub use config::Config;
pub use error::{AppError, Result};
pub use form::{
    DialogFocus, Experience, FieldEdit, FocusHandle, FormAction, FormData, FormField, FormModel,
    FormSubmitter, Notice, NoticeLevel, Notifier, SimulatedOutcome, SimulatedSubmitter,
    SubmissionError, SubmitOutcome, ValidationError, run_submission,
};
pub use locale::{Locale, Messages};
