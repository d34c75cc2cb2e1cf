//! # Form validation
//!
//! Each HTML form has a `…Form` struct that axum deserializes from the
//! urlencoded body. Every field defaults to the empty string, so a missing
//! field shows up as a validation error rather than a rejected request.
//!
//! `validate` is pure: it either returns the cleaned-up value the services
//! take, or a [`ValidationErrors`] map keyed by field name that the pages
//! render next to the offending input. The anti-forgery token is carried on
//! the form but checked by the caller, which owns the session.
//!
//! | Form | Validated into |
//! |------|----------------|
//! | [`RegisterForm`] | [`Registration`] |
//! | [`LoginForm`] | [`LoginAttempt`] |
//! | [`NoteForm`] | [`NoteDraft`] |
//! | [`CsrfForm`] | (token only) |

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use thiserror::Error;

pub const USERNAME_MAX: usize = 20;
pub const EMAIL_MAX: usize = 50;
pub const NAME_MAX: usize = 30;
pub const TITLE_MAX: usize = 100;

const REQUIRED: &str = "This field is required.";
const INVALID_USERNAME: &str = "Use only letters, digits, '.', '_' and '-'.";

/// Field name → messages. Empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("form has {} invalid field(s)", .errors.len())]
pub struct ValidationErrors {
    errors: BTreeMap<&'static str, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Messages for one field; empty when the field is fine.
    pub fn field(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

fn required(errors: &mut ValidationErrors, field: &'static str, value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        errors.add(field, REQUIRED);
    }
    value.to_string()
}

fn max_length(errors: &mut ValidationErrors, field: &'static str, value: &str, max: usize) {
    if value.chars().count() > max {
        errors.add(field, format!("Field cannot be longer than {max} characters."));
    }
}

/// Usernames end up in URL paths, so they stay within `[A-Za-z0-9_.-]`.
fn url_safe(errors: &mut ValidationErrors, field: &'static str, value: &str) {
    let safe = value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'));
    if !safe {
        errors.add(field, INVALID_USERNAME);
    }
}

fn email(errors: &mut ValidationErrors, field: &'static str, value: &str) {
    if value.is_empty() {
        return;
    }
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if !valid {
        errors.add(field, "Invalid email address.");
    }
}

/// Validated registration input. The password is still plaintext.
#[derive(Clone, PartialEq, Eq)]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .finish()
    }
}

#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegisterForm {
    pub csrf_token: String,
    pub username: String,
    pub password: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<Registration, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let username = required(&mut errors, "username", &self.username);
        max_length(&mut errors, "username", &username, USERNAME_MAX);
        url_safe(&mut errors, "username", &username);

        if self.password.is_empty() {
            errors.add("password", REQUIRED);
        }

        let email_address = required(&mut errors, "email", &self.email);
        max_length(&mut errors, "email", &email_address, EMAIL_MAX);
        email(&mut errors, "email", &email_address);

        let first_name = required(&mut errors, "first_name", &self.first_name);
        max_length(&mut errors, "first_name", &first_name, NAME_MAX);

        let last_name = required(&mut errors, "last_name", &self.last_name);
        max_length(&mut errors, "last_name", &last_name, NAME_MAX);

        errors.into_result(Registration {
            username,
            password: self.password.clone(),
            email: email_address,
            first_name,
            last_name,
        })
    }
}

/// Validated login input.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(test, derive(Debug))]
pub struct LoginAttempt {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub csrf_token: String,
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginAttempt, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let username = required(&mut errors, "username", &self.username);
        if self.password.is_empty() {
            errors.add("password", REQUIRED);
        }
        errors.into_result(LoginAttempt {
            username,
            password: self.password.clone(),
        })
    }
}

/// Validated title and content of a note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NoteForm {
    pub csrf_token: String,
    pub title: String,
    pub content: String,
}

impl NoteForm {
    pub fn validate(&self) -> Result<NoteDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let title = required(&mut errors, "title", &self.title);
        max_length(&mut errors, "title", &title, TITLE_MAX);

        // content keeps its inner formatting, only emptiness is checked
        if self.content.trim().is_empty() {
            errors.add("content", REQUIRED);
        }

        errors.into_result(NoteDraft {
            title,
            content: self.content.clone(),
        })
    }
}

/// Body of the token-only forms (logout, delete).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CsrfForm {
    pub csrf_token: String,
}
