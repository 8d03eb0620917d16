use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::Field;

/// Minimum character count for the first name field.
pub const FIRST_NAME_MIN_CHARS: usize = 5;

/// Validation outcomes for contact form fields.
///
/// These are expected, recoverable UI states rather than failures; the
/// `Display` strings are shown verbatim below the offending input and are
/// part of the form's behavioral contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Error: firstname must have at least 5 characters.")]
    TooShort,
    #[error("Error: lastname is a required field.")]
    MissingField,
    #[error("Error: email must be a valid email address.")]
    InvalidFormat,
}

// local@domain.tld shape; intentionally loose rather than full RFC 5322.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s.]+$").expect("valid hardcoded regex"));

/// Validates `value` against `field`'s rule.
///
/// At most one error applies per field. `Message` has no rule and always
/// validates.
pub fn validate(field: Field, value: &str) -> Result<(), ValidationError> {
    match field {
        Field::FirstName => validate_first_name(value),
        Field::LastName => validate_last_name(value),
        Field::Email => validate_email(value),
        Field::Message => Ok(()),
    }
}

/// Validates a first name: at least [`FIRST_NAME_MIN_CHARS`] characters.
pub fn validate_first_name(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() >= FIRST_NAME_MIN_CHARS {
        Ok(())
    } else {
        Err(ValidationError::TooShort)
    }
}

/// Validates a last name: must be non-empty.
pub fn validate_last_name(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::MissingField)
    } else {
        Ok(())
    }
}

/// Validates an email address against the `local@domain.tld` pattern.
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidFormat)
    }
}
