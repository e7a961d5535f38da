//! Application form state machine
//!
//! `FormModel` owns the field values, the in-flight flag and the dialog's
//! focus. It has no knowledge of iocraft so every transition can be tested
//! directly.

use thiserror::Error;

use super::focus::{DialogFocus, FocusHandle};
use super::types::{Experience, FieldEdit, FormData};
use super::validate::{FormValidator, ValidationError};

/// Intent produced by a key press inside the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    FocusNext,
    FocusPrev,
    Insert(char),
    DeleteBackward,
    SelectNext,
    SelectPrev,
    Submit,
    Close,
}

/// Work the caller must perform after `FormModel::apply`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEffect {
    None,
    /// Run the submission flow
    Submit,
    /// Invoke the close callback
    Close,
}

/// Why a submit request did not start a submission
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejection {
    #[error("a submission is already in flight")]
    AlreadySubmitting,

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Selector values in display order; `None` is the placeholder
pub const EXPERIENCE_CHOICES: [Option<Experience>; 4] = [
    None,
    Some(Experience::ZeroToThree),
    Some(Experience::FourToSeven),
    Some(Experience::EightPlus),
];

pub fn experience_index(value: Option<Experience>) -> usize {
    EXPERIENCE_CHOICES
        .iter()
        .position(|choice| *choice == value)
        .unwrap_or_default()
}

fn cycle_experience(value: Option<Experience>, forward: bool) -> Option<Experience> {
    let len = EXPERIENCE_CHOICES.len();
    let index = experience_index(value);
    let next = if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    };
    EXPERIENCE_CHOICES[next]
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormModel {
    data: FormData,
    submitting: bool,
    focus: DialogFocus,
    error: Option<ValidationError>,
    /// The last submission attempt failed in the submitter
    submit_failed: bool,
    /// Visibility seen by the last `sync_visibility`
    visible: bool,
}

impl FormModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn focus(&self) -> DialogFocus {
        self.focus
    }

    /// Violation reported by the last rejected submit, until its field is edited
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    pub fn submit_failed(&self) -> bool {
        self.submit_failed
    }

    /// Visibility seen by the last `sync_visibility`
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Record the parent's visibility flag and react only when it changed.
    ///
    /// Returns whether a transition happened.
    pub fn sync_visibility(&mut self, is_open: bool, trigger: Option<&dyn FocusHandle>) -> bool {
        if self.visible == is_open {
            return false;
        }
        self.visible = is_open;
        self.on_visibility_change(is_open, trigger);
        true
    }

    /// Move focus when the dialog is shown or hidden.
    ///
    /// Showing focuses the title; hiding hands focus back to the trigger.
    pub fn on_visibility_change(&mut self, is_open: bool, trigger: Option<&dyn FocusHandle>) {
        if is_open {
            self.focus = DialogFocus::Title;
            self.submit_failed = false;
        } else if let Some(trigger) = trigger {
            trigger.focus();
        }
    }

    /// Apply a single field edit. Returns false when inputs are disabled.
    pub fn edit(&mut self, edit: FieldEdit) -> bool {
        if self.submitting {
            return false;
        }
        if self.error.as_ref().is_some_and(|e| e.field() == edit.field()) {
            self.error = None;
        }
        self.submit_failed = false;
        self.data.apply(edit);
        true
    }

    pub fn set_focus(&mut self, focus: DialogFocus) {
        self.focus = focus;
    }

    /// Whether a close request should reach the close callback
    pub fn can_close(&self) -> bool {
        !self.submitting
    }

    /// Reduce a dialog action into state changes plus the effect to run
    pub fn apply(&mut self, action: FormAction) -> FormEffect {
        match action {
            FormAction::FocusNext => {
                self.focus = self.focus.next();
                FormEffect::None
            }
            FormAction::FocusPrev => {
                self.focus = self.focus.prev();
                FormEffect::None
            }
            FormAction::Insert(c) => {
                if let Some(field) = self.focus.field() {
                    let mut value = self.data.text(field).to_string();
                    value.push(c);
                    if let Some(edit) = FieldEdit::text(field, value) {
                        self.edit(edit);
                    }
                }
                FormEffect::None
            }
            FormAction::DeleteBackward => {
                if let Some(field) = self.focus.field() {
                    let mut value = self.data.text(field).to_string();
                    if value.pop().is_some()
                        && let Some(edit) = FieldEdit::text(field, value)
                    {
                        self.edit(edit);
                    }
                }
                FormEffect::None
            }
            FormAction::SelectNext | FormAction::SelectPrev => {
                let forward = action == FormAction::SelectNext;
                let next = cycle_experience(self.data.experience, forward);
                self.edit(FieldEdit::Experience(next));
                FormEffect::None
            }
            FormAction::Submit => {
                if self.submitting {
                    FormEffect::None
                } else {
                    FormEffect::Submit
                }
            }
            FormAction::Close => {
                if self.can_close() {
                    FormEffect::Close
                } else {
                    FormEffect::None
                }
            }
        }
    }

    /// Validate and enter the submitting state.
    ///
    /// On success returns the snapshot to hand to the submitter. A rejected
    /// submit never sets the in-flight flag. Validation failures move focus
    /// to the offending field.
    pub fn begin_submit(&mut self) -> Result<FormData, SubmitRejection> {
        if self.submitting {
            return Err(SubmitRejection::AlreadySubmitting);
        }
        self.submit_failed = false;
        if let Err(err) = FormValidator::validate(&self.data).into_result() {
            self.focus = DialogFocus::Field(err.field());
            self.error = Some(err.clone());
            return Err(err.into());
        }
        self.error = None;
        self.submitting = true;
        Ok(self.data.clone())
    }

    /// Leave the submitting state; clears the fields only on success
    pub fn finish_submit(&mut self, succeeded: bool) {
        if succeeded {
            self.data.clear();
        }
        self.submit_failed = !succeeded;
        self.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::types::FormField;

    fn filled() -> FormModel {
        let mut model = FormModel::new();
        model.edit(FieldEdit::Name("Kim".to_string()));
        model.edit(FieldEdit::Email("kim@example.com".to_string()));
        model.edit(FieldEdit::Experience(Some(Experience::ZeroToThree)));
        model
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut model = FormModel::new();
        model.set_focus(DialogFocus::Field(FormField::Email));
        for c in "kim@".chars() {
            model.apply(FormAction::Insert(c));
        }
        model.apply(FormAction::DeleteBackward);
        assert_eq!(model.data().email, "kim");
        assert!(model.data().name.is_empty());
    }

    #[test]
    fn test_typing_on_title_is_ignored() {
        let mut model = FormModel::new();
        model.apply(FormAction::Insert('x'));
        assert!(model.data().is_empty());
    }

    #[test]
    fn test_delete_on_empty_field_is_noop() {
        let mut model = FormModel::new();
        model.set_focus(DialogFocus::Field(FormField::Name));
        model.apply(FormAction::DeleteBackward);
        assert!(model.data().name.is_empty());
    }

    #[test]
    fn test_experience_selector_cycles_through_placeholder() {
        let mut model = FormModel::new();
        model.apply(FormAction::SelectNext);
        assert_eq!(model.data().experience, Some(Experience::ZeroToThree));
        model.apply(FormAction::SelectPrev);
        assert_eq!(model.data().experience, None);
        model.apply(FormAction::SelectPrev);
        assert_eq!(model.data().experience, Some(Experience::EightPlus));
    }

    #[test]
    fn test_begin_submit_rejects_invalid_form() {
        let mut model = FormModel::new();
        model.edit(FieldEdit::Name("Kim".to_string()));

        let rejection = model.begin_submit().unwrap_err();
        assert_eq!(
            rejection,
            SubmitRejection::Invalid(ValidationError::EmailRequired)
        );
        assert!(!model.is_submitting());
        assert_eq!(model.focus(), DialogFocus::Field(FormField::Email));
        assert_eq!(model.error(), Some(&ValidationError::EmailRequired));
    }

    #[test]
    fn test_editing_invalid_field_clears_error() {
        let mut model = FormModel::new();
        let _ = model.begin_submit();
        assert_eq!(model.error(), Some(&ValidationError::NameRequired));

        model.edit(FieldEdit::Email("x".to_string()));
        assert!(model.error().is_some());
        model.edit(FieldEdit::Name("Kim".to_string()));
        assert!(model.error().is_none());
    }

    #[test]
    fn test_submitting_freezes_edits_and_close() {
        let mut model = filled();
        let snapshot = model.begin_submit().unwrap();
        assert_eq!(snapshot.name, "Kim");
        assert!(model.is_submitting());

        assert!(!model.edit(FieldEdit::Name("Lee".to_string())));
        assert_eq!(model.apply(FormAction::Close), FormEffect::None);
        assert_eq!(model.apply(FormAction::Submit), FormEffect::None);
        assert_eq!(
            model.begin_submit(),
            Err(SubmitRejection::AlreadySubmitting)
        );
        assert_eq!(model.data().name, "Kim");
    }

    #[test]
    fn test_finish_submit_success_clears_data() {
        let mut model = filled();
        model.begin_submit().unwrap();
        model.finish_submit(true);
        assert!(!model.is_submitting());
        assert!(model.data().is_empty());
    }

    #[test]
    fn test_finish_submit_failure_keeps_data() {
        let mut model = filled();
        model.begin_submit().unwrap();
        model.finish_submit(false);
        assert!(!model.is_submitting());
        assert!(model.submit_failed());
        assert_eq!(model.data().email, "kim@example.com");
        assert_eq!(model.apply(FormAction::Submit), FormEffect::Submit);
    }

    #[test]
    fn test_close_allowed_when_idle() {
        let mut model = FormModel::new();
        assert_eq!(model.apply(FormAction::Close), FormEffect::Close);
    }

    #[test]
    fn test_experience_index() {
        assert_eq!(experience_index(None), 0);
        assert_eq!(experience_index(Some(Experience::EightPlus)), 3);
    }

    #[test]
    fn test_submit_failure_clears_on_edit_or_reopen() {
        let mut model = filled();
        model.begin_submit().unwrap();
        model.finish_submit(false);
        model.edit(FieldEdit::Github("https://github.com/kim".to_string()));
        assert!(!model.submit_failed());

        model.begin_submit().unwrap();
        model.finish_submit(false);
        model.on_visibility_change(true, None);
        assert!(!model.submit_failed());
    }

    #[test]
    fn test_sync_visibility_reacts_to_changes_only() {
        struct Count(std::sync::atomic::AtomicUsize);
        impl FocusHandle for Count {
            fn focus(&self) {
                self.0.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            }
        }
        let trigger = Count(Default::default());
        let mut model = FormModel::new();

        assert!(!model.sync_visibility(false, Some(&trigger)));
        assert!(model.sync_visibility(true, Some(&trigger)));
        assert!(model.is_visible());
        model.set_focus(DialogFocus::Cancel);
        assert!(!model.sync_visibility(true, Some(&trigger)));
        assert_eq!(model.focus(), DialogFocus::Cancel);

        assert!(model.sync_visibility(false, Some(&trigger)));
        assert!(!model.sync_visibility(false, Some(&trigger)));
        assert_eq!(trigger.0.load(std::sync::atomic::Ordering::SeqCst), 1);
    }
}
