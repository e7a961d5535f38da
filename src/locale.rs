//! User-facing copy for each supported language

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;
use crate::form::{Experience, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ko,
    En,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Ko => write!(f, "ko"),
            Locale::En => write!(f, "en"),
        }
    }
}

impl FromStr for Locale {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ko" => Ok(Locale::Ko),
            "en" => Ok(Locale::En),
            _ => Err(AppError::InvalidLocale(s.to_string())),
        }
    }
}

impl Locale {
    pub fn messages(&self) -> &'static Messages {
        match self {
            Locale::Ko => &KO,
            Locale::En => &EN,
        }
    }
}

/// Strings rendered by the page and the dialog
#[derive(Debug)]
pub struct Messages {
    pub trigger: &'static str,
    pub dialog_title: &'static str,
    pub dialog_description: &'static str,
    pub name_label: &'static str,
    pub name_placeholder: &'static str,
    pub email_label: &'static str,
    pub email_placeholder: &'static str,
    pub experience_label: &'static str,
    pub experience_placeholder: &'static str,
    /// Labels for "0-3", "4-7" and "8+"
    pub experience_options: [&'static str; 3],
    pub github_label: &'static str,
    pub github_placeholder: &'static str,
    pub cancel: &'static str,
    pub submit: &'static str,
    pub submitting: &'static str,
    pub submit_success: &'static str,
    pub submit_failure: &'static str,
    pub name_required: &'static str,
    pub email_required: &'static str,
    pub email_malformed: &'static str,
    pub experience_required: &'static str,
    pub github_malformed: &'static str,
    /// Footer shortcut descriptions
    pub shortcut_open: &'static str,
    pub shortcut_quit: &'static str,
    pub shortcut_next: &'static str,
    pub shortcut_prev: &'static str,
    pub shortcut_choose: &'static str,
    pub shortcut_submit: &'static str,
    pub shortcut_cancel: &'static str,
}

pub static KO: Messages = Messages {
    trigger: "신청 폼 작성하기",
    dialog_title: "신청 폼",
    dialog_description: "이메일과 FE 경력 연차 등 간단한 정보를 입력해 주세요.",
    name_label: "이름 / 닉네임",
    name_placeholder: "이름 또는 닉네임을 입력하세요",
    email_label: "이메일",
    email_placeholder: "이메일을 입력하세요",
    experience_label: "FE 경력 연차",
    experience_placeholder: "경력을 선택하세요",
    experience_options: ["0~3년", "4~7년", "8년 이상"],
    github_label: "Github 링크 (선택)",
    github_placeholder: "Github 링크를 입력하세요 (선택사항)",
    cancel: "취소",
    submit: "제출하기",
    submitting: "제출 중...",
    submit_success: "신청서가 성공적으로 제출되었습니다!",
    submit_failure: "제출 중 오류가 발생했습니다. 다시 시도해주세요.",
    name_required: "이름 또는 닉네임을 입력하세요.",
    email_required: "이메일을 입력하세요.",
    email_malformed: "올바른 이메일 주소를 입력하세요.",
    experience_required: "경력을 선택하세요.",
    github_malformed: "올바른 URL을 입력하세요.",
    shortcut_open: "폼 열기",
    shortcut_quit: "종료",
    shortcut_next: "다음",
    shortcut_prev: "이전",
    shortcut_choose: "선택",
    shortcut_submit: "제출",
    shortcut_cancel: "취소",
};

pub static EN: Messages = Messages {
    trigger: "Fill in the application",
    dialog_title: "Application",
    dialog_description: "Tell us your email and years of frontend experience.",
    name_label: "Name / Nickname",
    name_placeholder: "Enter your name or nickname",
    email_label: "Email",
    email_placeholder: "Enter your email",
    experience_label: "Frontend experience",
    experience_placeholder: "Select your experience",
    experience_options: ["0-3 years", "4-7 years", "8+ years"],
    github_label: "GitHub link (optional)",
    github_placeholder: "Enter your GitHub link (optional)",
    cancel: "Cancel",
    submit: "Submit",
    submitting: "Submitting...",
    submit_success: "Your application was submitted!",
    submit_failure: "Something went wrong while submitting. Please try again.",
    name_required: "Please enter your name or nickname.",
    email_required: "Please enter your email.",
    email_malformed: "Please enter a valid email address.",
    experience_required: "Please select your experience.",
    github_malformed: "Please enter a valid URL.",
    shortcut_open: "Open Form",
    shortcut_quit: "Quit",
    shortcut_next: "Next",
    shortcut_prev: "Prev",
    shortcut_choose: "Choose",
    shortcut_submit: "Submit",
    shortcut_cancel: "Cancel",
};

impl Messages {
    /// Label for a selector value; `None` shows the placeholder
    pub fn experience(&self, value: Option<Experience>) -> &'static str {
        match value {
            None => self.experience_placeholder,
            Some(Experience::ZeroToThree) => self.experience_options[0],
            Some(Experience::FourToSeven) => self.experience_options[1],
            Some(Experience::EightPlus) => self.experience_options[2],
        }
    }

    pub fn validation(&self, err: &ValidationError) -> &'static str {
        match err {
            ValidationError::NameRequired => self.name_required,
            ValidationError::EmailRequired => self.email_required,
            ValidationError::EmailMalformed(_) => self.email_malformed,
            ValidationError::ExperienceRequired => self.experience_required,
            ValidationError::GithubMalformed(_) => self.github_malformed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_str() {
        assert_eq!("ko".parse::<Locale>().unwrap(), Locale::Ko);
        assert_eq!(" EN ".parse::<Locale>().unwrap(), Locale::En);
        assert!(matches!(
            "fr".parse::<Locale>(),
            Err(AppError::InvalidLocale(s)) if s == "fr"
        ));
    }

    #[test]
    fn test_default_locale_is_korean() {
        assert_eq!(Locale::default().messages().submit, "제출하기");
    }

    #[test]
    fn test_experience_labels() {
        let messages = Locale::En.messages();
        assert_eq!(messages.experience(None), "Select your experience");
        assert_eq!(messages.experience(Some(Experience::EightPlus)), "8+ years");
    }
}
