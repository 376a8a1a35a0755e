use std::sync::LazyLock;

use regex::Regex;
use validator::{ValidateEmail, ValidateUrl, ValidationError};

/// Mobile numbers are stored as 11 digits starting with `05`, e.g. `05551234567`.
pub static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^05\d{9}$").expect("phone pattern compiles"));

pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    if PHONE_RE.is_match(value) {
        return Ok(());
    }
    let mut err = ValidationError::new("phone");
    err.message = Some("phone number must start with 05 and have 11 digits (e.g. 05551234567)".into());
    Err(err)
}

/// Same as [`validate_phone`] but an empty value is accepted.
pub fn validate_optional_phone(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    validate_phone(value)
}

pub fn validate_blank_or_url(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.validate_url() {
        return Ok(());
    }
    let mut err = ValidationError::new("url");
    err.message = Some("must be a valid URL".into());
    Err(err)
}

pub fn validate_blank_or_email(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || value.validate_email() {
        return Ok(());
    }
    let mut err = ValidationError::new("email");
    err.message = Some("must be a valid email".into());
    Err(err)
}

/// Empty strings coming from forms are stored as NULL.
pub fn blank_to_none(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let v = v.trim();
        if v.is_empty() { None } else { Some(v.to_string()) }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_pattern() {
        assert!(validate_phone("05551234567").is_ok());
        assert!(validate_phone("5551234567").is_err());
        assert!(validate_phone("055512345678").is_err());
        assert!(validate_phone("0555123456a").is_err());
        assert!(validate_phone("").is_err());
    }

    #[test]
    fn optional_phone_allows_blank() {
        assert!(validate_optional_phone("").is_ok());
        assert!(validate_optional_phone("05551234567").is_ok());
        assert!(validate_optional_phone("123").is_err());
    }

    #[test]
    fn blank_or_url() {
        assert!(validate_blank_or_url("").is_ok());
        assert!(validate_blank_or_url("https://instagram.com/acme").is_ok());
        assert!(validate_blank_or_url("not a url").is_err());
    }

    #[test]
    fn blank_or_email() {
        assert!(validate_blank_or_email("").is_ok());
        assert!(validate_blank_or_email("sube@acme.example").is_ok());
        assert!(validate_blank_or_email("sube-at-acme").is_err());
    }

    #[test]
    fn blank_values_become_none() {
        assert_eq!(blank_to_none(Some("  ".into())), None);
        assert_eq!(blank_to_none(None), None);
        assert_eq!(
            blank_to_none(Some(" shop@example.com ".into())),
            Some("shop@example.com".to_string())
        );
    }
}
