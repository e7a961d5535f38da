use serde::{Deserialize, Serialize};
use std::fmt;

/// Years of frontend experience, as offered by the form's selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Experience {
    #[serde(rename = "0-3")]
    ZeroToThree,
    #[serde(rename = "4-7")]
    FourToSeven,
    #[serde(rename = "8+")]
    EightPlus,
}

impl Experience {
    /// Wire value of the bracket ("0-3", "4-7", "8+")
    pub fn as_str(&self) -> &'static str {
        match self {
            Experience::ZeroToThree => "0-3",
            Experience::FourToSeven => "4-7",
            Experience::EightPlus => "8+",
        }
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One input of the application form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Experience,
    Github,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Experience,
        FormField::Github,
    ];
}

/// A single field update. Applying it touches exactly one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Name(String),
    Email(String),
    Experience(Option<Experience>),
    Github(String),
}

impl FieldEdit {
    pub fn field(&self) -> FormField {
        match self {
            FieldEdit::Name(_) => FormField::Name,
            FieldEdit::Email(_) => FormField::Email,
            FieldEdit::Experience(_) => FormField::Experience,
            FieldEdit::Github(_) => FormField::Github,
        }
    }

    /// Build a text edit for `field`.
    ///
    /// Returns `None` for the experience selector, which only takes
    /// enumerated values.
    pub fn text(field: FormField, value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        match field {
            FormField::Name => Some(FieldEdit::Name(value)),
            FormField::Email => Some(FieldEdit::Email(value)),
            FormField::Github => Some(FieldEdit::Github(value)),
            FormField::Experience => None,
        }
    }
}

/// Values entered into the application form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub experience: Option<Experience>,
    pub github: String,
}

impl FormData {
    pub fn apply(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::Name(value) => self.name = value,
            FieldEdit::Email(value) => self.email = value,
            FieldEdit::Experience(value) => self.experience = value,
            FieldEdit::Github(value) => self.github = value,
        }
    }

    /// Text content of a free-text field; empty for the selector
    pub fn text(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Github => &self.github,
            FormField::Experience => "",
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &FormData::default()
    }

    pub fn clear(&mut self) {
        *self = FormData::default();
    }
}
