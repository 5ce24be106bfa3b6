//! Field validation rules.
//!
//! Each validator checks its rules in a fixed order and reports only the
//! first failure.

use super::{FieldName, FormState};
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Inline, per-field validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Email is required")]
    EmailRequired,
    #[error("Enter a valid email")]
    EmailInvalid,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Minimum 6 characters")]
    PasswordTooShort,
    #[error("Name is required")]
    NameRequired,
    #[error("Please confirm password")]
    ConfirmRequired,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Minimum password length, in code points
pub const MIN_PASSWORD_CHARS: usize = 6;

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| {
        Regex::new(
            r"^[a-zA-Z0-9+._%\-]{1,256}@[a-zA-Z0-9][a-zA-Z0-9\-]{0,64}(\.[a-zA-Z0-9][a-zA-Z0-9\-]{0,25})+$",
        )
        .expect("valid email regex")
    })
}

pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !email_regex().is_match(trimmed) {
        return Err(ValidationError::EmailInvalid);
    }
    Ok(())
}

pub fn validate_password(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    if value.chars().count() < MIN_PASSWORD_CHARS {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

pub fn validate_full_name(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::NameRequired);
    }
    Ok(())
}

pub fn validate_confirm_password(confirm: &str, password: &str) -> Result<(), ValidationError> {
    if confirm.is_empty() {
        return Err(ValidationError::ConfirmRequired);
    }
    if confirm != password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

/// Run the rules for one field against the form's current values
pub fn validate_field(name: FieldName, form: &FormState) -> Result<(), ValidationError> {
    let value = form.value(name);
    match name {
        FieldName::FullName => validate_full_name(value),
        FieldName::Email => validate_email(value),
        FieldName::Password => validate_password(value),
        FieldName::ConfirmPassword => {
            validate_confirm_password(value, form.value(FieldName::Password))
        }
    }
}
