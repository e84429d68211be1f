//! Free-text input rules shared by every form field in the helpdesk.
//!
//! A value is accepted when it is non-blank, has no run of two or more
//! punctuation characters, no run of two or more whitespace characters and
//! does not start with whitespace. Checks run in that order and only the first
//! failure is reported.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use thiserror::Error;
use validator::{ValidateEmail, ValidationError};

/// Punctuation that may not appear twice in a row.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

static CONSECUTIVE_SPECIALS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("[{}]{{2,}}", regex::escape(SPECIAL_CHARACTERS)))
        .expect("special character class must compile")
});

static CONSECUTIVE_SPACES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s{2,}").expect("whitespace run pattern must compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}", self.message())]
pub enum InputError {
    Required,
    ConsecutiveSpecials,
    ConsecutiveSpaces,
    LeadingSpace,
    InvalidEmail,
}

impl InputError {
    pub fn code(self) -> &'static str {
        match self {
            InputError::Required => "required",
            InputError::ConsecutiveSpecials => "consecutive_specials",
            InputError::ConsecutiveSpaces => "consecutive_spaces",
            InputError::LeadingSpace => "leading_space",
            InputError::InvalidEmail => "email",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            InputError::Required => "This field is required",
            InputError::ConsecutiveSpecials => {
                "Cannot contain multiple continuous special characters"
            }
            InputError::ConsecutiveSpaces => "Cannot contain multiple continuous spaces",
            InputError::LeadingSpace => "Cannot start with a space",
            InputError::InvalidEmail => "Please enter a valid email address",
        }
    }
}

impl From<InputError> for ValidationError {
    fn from(err: InputError) -> Self {
        let mut validation = ValidationError::new(err.code());
        validation.message = Some(Cow::Borrowed(err.message()));
        validation
    }
}

pub fn validate_input(value: &str) -> Result<(), InputError> {
    if value.trim().is_empty() {
        return Err(InputError::Required);
    }
    if CONSECUTIVE_SPECIALS.is_match(value) {
        return Err(InputError::ConsecutiveSpecials);
    }
    if CONSECUTIVE_SPACES.is_match(value) {
        return Err(InputError::ConsecutiveSpaces);
    }
    if value.starts_with(char::is_whitespace) {
        return Err(InputError::LeadingSpace);
    }
    Ok(())
}

/// `validator` custom rule wrapping [`validate_input`].
pub fn validate_text(value: &str) -> Result<(), ValidationError> {
    validate_input(value).map_err(ValidationError::from)
}

/// Text rule first, then a syntactic email check.
pub fn validate_email_address(value: &str) -> Result<(), ValidationError> {
    validate_input(value)?;
    if !value.validate_email() {
        return Err(InputError::InvalidEmail.into());
    }
    Ok(())
}
