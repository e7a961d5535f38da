//! Async submission flow
//!
//! Drives a `FormModel` through one submission attempt: validate, mark in
//! flight, await the submitter, log, notify, reset on success and close.

use std::sync::Arc;

use parking_lot::Mutex;

use super::model::{FormModel, SubmitRejection};
use super::notify::{Notice, Notifier};
use super::submit::{FormSubmitter, SubmissionError};
use super::types::FormData;
use crate::locale::Messages;

/// Storage that holds the form model between renders.
///
/// The TUI keeps the model in an iocraft `State`; tests and embedders can use
/// a shared mutex.
pub trait FormCell {
    fn update<R>(&mut self, f: impl FnOnce(&mut FormModel) -> R) -> R;
}

impl FormCell for FormModel {
    fn update<R>(&mut self, f: impl FnOnce(&mut FormModel) -> R) -> R {
        f(self)
    }
}

impl FormCell for Arc<Mutex<FormModel>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut FormModel) -> R) -> R {
        let mut guard = self.lock();
        f(&mut guard)
    }
}

/// How a submit request ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Delivered, fields cleared and dialog closed
    Submitted,
    /// The submitter failed; fields are kept
    Failed(SubmissionError),
    /// No submission was started
    Rejected(SubmitRejection),
}

/// Run one submission attempt against `cell`.
///
/// The in-flight flag is cleared on every path that set it.
pub async fn run_submission<C, F>(
    cell: &mut C,
    submitter: &dyn FormSubmitter,
    notifier: &dyn Notifier,
    messages: &Messages,
    on_close: F,
) -> SubmitOutcome
where
    C: FormCell + Send,
    F: FnOnce() + Send,
{
    let data = match cell.update(|model| model.begin_submit()) {
        Ok(data) => data,
        Err(rejection) => {
            tracing::warn!("submit rejected: {rejection}");
            return SubmitOutcome::Rejected(rejection);
        }
    };

    match submitter.submit(&data).await {
        Ok(()) => {
            log_submission(&data);
            notifier.notify(Notice::success(messages.submit_success));
            cell.update(|model| model.finish_submit(true));
            on_close();
            SubmitOutcome::Submitted
        }
        Err(err) => {
            tracing::error!("submission failed: {err}");
            notifier.notify(Notice::error(messages.submit_failure));
            cell.update(|model| model.finish_submit(false));
            SubmitOutcome::Failed(err)
        }
    }
}

fn log_submission(data: &FormData) {
    let payload = serde_json::to_string(data)
        .unwrap_or_else(|e| format!("<unserializable form data: {e}>"));
    let experience = data.experience.map(|e| e.to_string()).unwrap_or_default();
    tracing::info!(
        name = %data.name,
        experience = %experience,
        payload = %payload,
        "application submitted"
    );
}
