//! Render-ready view of the application form
//!
//! `compute_dialog_view` turns a `FormModel` plus the active `Messages` into
//! plain values the dialog component draws, so the rendered content can be
//! checked without iocraft.

use crate::form::{DialogFocus, EXPERIENCE_CHOICES, FormField, FormModel, experience_index};
use crate::locale::Messages;
use crate::tui::components::footer::{Shortcut, dialog_shortcuts, submitting_shortcuts};
use crate::tui::components::DialogBorder;

/// One labelled text input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFieldView {
    pub label: String,
    pub value: String,
    pub placeholder: String,
    pub has_focus: bool,
    /// The last rejected submit blamed this field
    pub invalid: bool,
}

/// The experience selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectView {
    pub label: String,
    /// Placeholder first, then each bracket
    pub options: Vec<String>,
    pub selected_index: usize,
    pub is_placeholder: bool,
    pub has_focus: bool,
    pub invalid: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogViewModel {
    pub title: String,
    pub title_focused: bool,
    pub description: String,
    pub name: TextFieldView,
    pub email: TextFieldView,
    pub experience: SelectView,
    pub github: TextFieldView,
    pub cancel_label: String,
    pub cancel_focused: bool,
    pub submit_label: String,
    pub submit_focused: bool,
    /// Inputs and buttons are inert while a submission is in flight
    pub disabled: bool,
    /// Validation message, or the failure notice of the last submission
    pub error_text: Option<String>,
    pub border: DialogBorder,
    pub shortcuts: Vec<Shortcut>,
}

fn text_field(
    model: &FormModel,
    field: FormField,
    label: &str,
    placeholder: &str,
) -> TextFieldView {
    TextFieldView {
        label: label.to_string(),
        value: model.data().text(field).to_string(),
        placeholder: placeholder.to_string(),
        has_focus: model.focus() == DialogFocus::Field(field),
        invalid: model.error().is_some_and(|e| e.field() == field),
    }
}

pub fn compute_dialog_view(model: &FormModel, messages: &Messages) -> DialogViewModel {
    let focus = model.focus();
    let submitting = model.is_submitting();
    let experience = model.data().experience;

    let border = if submitting {
        DialogBorder::Busy
    } else if model.error().is_some() || model.submit_failed() {
        DialogBorder::Error
    } else {
        DialogBorder::Focused
    };

    DialogViewModel {
        title: messages.dialog_title.to_string(),
        title_focused: focus == DialogFocus::Title,
        description: messages.dialog_description.to_string(),
        name: text_field(
            model,
            FormField::Name,
            messages.name_label,
            messages.name_placeholder,
        ),
        email: text_field(
            model,
            FormField::Email,
            messages.email_label,
            messages.email_placeholder,
        ),
        experience: SelectView {
            label: messages.experience_label.to_string(),
            options: EXPERIENCE_CHOICES
                .iter()
                .map(|choice| messages.experience(*choice).to_string())
                .collect(),
            selected_index: experience_index(experience),
            is_placeholder: experience.is_none(),
            has_focus: focus == DialogFocus::Field(FormField::Experience),
            invalid: model
                .error()
                .is_some_and(|e| e.field() == FormField::Experience),
        },
        github: text_field(
            model,
            FormField::Github,
            messages.github_label,
            messages.github_placeholder,
        ),
        cancel_label: messages.cancel.to_string(),
        cancel_focused: focus == DialogFocus::Cancel,
        submit_label: if submitting {
            messages.submitting.to_string()
        } else {
            messages.submit.to_string()
        },
        submit_focused: focus == DialogFocus::Submit,
        disabled: submitting,
        error_text: match model.error() {
            Some(err) => Some(messages.validation(err).to_string()),
            None if model.submit_failed() => Some(messages.submit_failure.to_string()),
            None => None,
        },
        border,
        shortcuts: if submitting {
            submitting_shortcuts(messages)
        } else {
            dialog_shortcuts(messages)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{Experience, FieldEdit};
    use crate::locale::Locale;

    #[test]
    fn test_fresh_dialog_focuses_title() {
        let model = FormModel::new();
        let vm = compute_dialog_view(&model, Locale::En.messages());

        assert!(vm.title_focused);
        assert!(!vm.name.has_focus);
        assert!(vm.experience.is_placeholder);
        assert_eq!(vm.experience.selected_index, 0);
        assert_eq!(vm.experience.options.len(), 4);
        assert_eq!(vm.submit_label, "Submit");
        assert_eq!(vm.border, DialogBorder::Focused);
        assert!(vm.error_text.is_none());
    }

    #[test]
    fn test_submitting_disables_and_relabels() {
        let mut model = FormModel::new();
        model.edit(FieldEdit::Name("Kim".to_string()));
        model.edit(FieldEdit::Email("kim@example.com".to_string()));
        model.edit(FieldEdit::Experience(Some(Experience::EightPlus)));
        model.begin_submit().unwrap();

        let vm = compute_dialog_view(&model, Locale::Ko.messages());
        assert!(vm.disabled);
        assert_eq!(vm.submit_label, "제출 중...");
        assert_eq!(vm.border, DialogBorder::Busy);
        assert_eq!(vm.experience.options[vm.experience.selected_index], "8년 이상");
        assert!(!vm.shortcuts.iter().any(|s| s.key == "Esc"));
    }

    #[test]
    fn test_validation_error_marks_field() {
        let mut model = FormModel::new();
        model.edit(FieldEdit::Name("Kim".to_string()));
        model.edit(FieldEdit::Email("not-an-email".to_string()));
        assert!(model.begin_submit().is_err());

        let vm = compute_dialog_view(&model, Locale::En.messages());
        assert!(vm.email.invalid);
        assert!(vm.email.has_focus);
        assert!(!vm.name.invalid);
        assert_eq!(vm.border, DialogBorder::Error);
        assert_eq!(
            vm.error_text.as_deref(),
            Some("Please enter a valid email address.")
        );
    }

    #[test]
    fn test_failed_submission_is_shown_inline() {
        let mut model = FormModel::new();
        model.edit(FieldEdit::Name("Kim".to_string()));
        model.edit(FieldEdit::Email("kim@example.com".to_string()));
        model.edit(FieldEdit::Experience(Some(Experience::ZeroToThree)));
        model.begin_submit().unwrap();
        model.finish_submit(false);

        let messages = Locale::En.messages();
        let vm = compute_dialog_view(&model, messages);
        assert_eq!(vm.error_text.as_deref(), Some(messages.submit_failure));
        assert_eq!(vm.border, DialogBorder::Error);
        assert!(!vm.disabled);
        assert_eq!(vm.name.value, "Kim");
    }

    #[test]
    fn test_missing_experience_marks_selector() {
        let mut model = FormModel::new();
        model.edit(FieldEdit::Name("Kim".to_string()));
        model.edit(FieldEdit::Email("kim@example.com".to_string()));
        assert!(model.begin_submit().is_err());

        let vm = compute_dialog_view(&model, Locale::En.messages());
        assert!(vm.experience.invalid);
        assert!(vm.experience.has_focus);
    }
}
