//! Constraint checks for the application form
//!
//! Name, email and experience are required. The email must have the HTML
//! email shape and the GitHub link, when given, must be an absolute URL.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;
use url::Url;

use super::types::{FormData, FormField};

/// Email shape accepted by an HTML `type="email"` input
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email regex should be valid")
});

/// A violated field constraint
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name is required")]
    NameRequired,

    #[error("email is required")]
    EmailRequired,

    #[error("'{0}' is not a valid email address")]
    EmailMalformed(String),

    #[error("experience must be selected")]
    ExperienceRequired,

    #[error("'{0}' is not a valid http(s) URL")]
    GithubMalformed(String),
}

impl ValidationError {
    /// The field the violation belongs to
    pub fn field(&self) -> FormField {
        match self {
            ValidationError::NameRequired => FormField::Name,
            ValidationError::EmailRequired | ValidationError::EmailMalformed(_) => FormField::Email,
            ValidationError::ExperienceRequired => FormField::Experience,
            ValidationError::GithubMalformed(_) => FormField::Github,
        }
    }
}

/// Result of form validation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    /// Violations in field order; empty when the form is valid
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// First violation in field order, the one shown to the user
    pub fn first_error(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        match self.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Validator for the application form
pub struct FormValidator;

impl FormValidator {
    /// Check every field constraint, collecting all violations.
    pub fn validate(data: &FormData) -> ValidationResult {
        let errors = FormField::ALL
            .iter()
            .filter_map(|field| Self::check_field(data, *field).err())
            .collect();
        ValidationResult { errors }
    }

    /// Check the constraints of a single field.
    pub fn check_field(data: &FormData, field: FormField) -> Result<(), ValidationError> {
        match field {
            FormField::Name => {
                if data.name.trim().is_empty() {
                    return Err(ValidationError::NameRequired);
                }
            }
            FormField::Email => {
                let email = data.email.trim();
                if email.is_empty() {
                    return Err(ValidationError::EmailRequired);
                }
                if !is_valid_email(email) {
                    return Err(ValidationError::EmailMalformed(email.to_string()));
                }
            }
            FormField::Experience => {
                if data.experience.is_none() {
                    return Err(ValidationError::ExperienceRequired);
                }
            }
            FormField::Github => {
                let github = data.github.trim();
                if !github.is_empty() && !is_valid_url(github) {
                    return Err(ValidationError::GithubMalformed(github.to_string()));
                }
            }
        }
        Ok(())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn is_valid_url(value: &str) -> bool {
    Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
        .unwrap_or(false)
}
