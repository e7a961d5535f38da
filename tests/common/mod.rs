//! Shared fixtures for the integration tests

#![allow(dead_code)]

pub mod tui_helpers;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use applyform::form::{Experience, FieldEdit, FocusHandle, FormModel, Notice, Notifier};

/// Notifier that keeps every notice it receives
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().push(notice);
    }
}

/// Focus handle that counts how often it was focused
#[derive(Default)]
pub struct RecordingFocus {
    count: AtomicUsize,
}

impl RecordingFocus {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl FocusHandle for RecordingFocus {
    fn focus(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

/// A model whose required fields pass validation
pub fn filled_model() -> FormModel {
    let mut model = FormModel::new();
    model.edit(FieldEdit::Name("김개발".to_string()));
    model.edit(FieldEdit::Email("dev@example.com".to_string()));
    model.edit(FieldEdit::Experience(Some(Experience::FourToSeven)));
    model
}

pub fn shared(model: FormModel) -> Arc<Mutex<FormModel>> {
    Arc::new(Mutex::new(model))
}
