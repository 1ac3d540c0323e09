//! Blur-time validation rules for `.form-control` inputs.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// What the validator needs to know about an input element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec<'a> {
    /// Value of the `type` attribute, e.g. `"email"`
    pub input_type: &'a str,
    pub required: bool,
}

/// First failing rule for a field; `Display` is the inline message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("This field is required")]
    Required,
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Validate a raw input value. The value is trimmed first; the email rule
/// only applies to non-empty values and is checked before required-ness.
pub fn validate_field(spec: FieldSpec<'_>, raw_value: &str) -> Result<(), FieldError> {
    let value = raw_value.trim();

    if spec.input_type.eq_ignore_ascii_case("email") && !value.is_empty() && !is_valid_email(value)
    {
        return Err(FieldError::InvalidEmail);
    }

    if spec.required && value.is_empty() {
        return Err(FieldError::Required);
    }

    Ok(())
}
