use crate::utils::error::{CalcError, Result};
use regex::Regex;
use std::sync::LazyLock;

pub const MIN_PASSWORD_LENGTH: usize = 6;

// ASCII word characters only; `\w` in the regex crate is Unicode-aware.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.\-]+@([A-Za-z0-9_\-]+\.)+[A-Za-z0-9_\-]{2,4}$")
        .expect("email pattern is valid")
});

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Rejects negative and non-finite values.
pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    validate_finite(field_name, value)?;
    if value < 0.0 {
        tracing::warn!(field = field_name, value, "rejected negative input");
        return Err(CalcError::invalid_argument(
            field_name,
            value,
            "Value must be non-negative",
        ));
    }
    Ok(())
}

/// Accepts percentages in the closed interval [0, 100].
pub fn validate_percentage(field_name: &str, value: f64) -> Result<()> {
    validate_range(field_name, value, 0.0, 100.0)
}

pub fn validate_range(field_name: &str, value: f64, min: f64, max: f64) -> Result<()> {
    validate_finite(field_name, value)?;
    if value < min || value > max {
        tracing::warn!(field = field_name, value, min, max, "rejected out-of-range input");
        return Err(CalcError::invalid_argument(
            field_name,
            value,
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

/// Rejects a computed value that overflowed to infinity.
pub fn validate_result(field_name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        tracing::warn!(field = field_name, value, "result out of range");
        return Err(CalcError::invalid_argument(
            field_name,
            value,
            "Result is too large to represent",
        ));
    }
    Ok(value)
}

fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        tracing::warn!(field = field_name, value, "rejected non-finite input");
        return Err(CalcError::invalid_argument(
            field_name,
            value,
            "Value must be a finite number",
        ));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CalcError::invalid_argument(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// Checks an address against the simple `local@domain.tld` shape.
///
/// Absent and blank input is invalid. The pattern is matched against the
/// untrimmed text, so surrounding whitespace makes an address invalid. This
/// is deliberately not RFC 5322.
pub fn is_valid_email(email: Option<&str>) -> bool {
    match email {
        Some(email) if !email.trim().is_empty() => EMAIL_RE.is_match(email),
        _ => false,
    }
}

/// A password is valid when present and at least six UTF-16 code units long.
///
/// Characters outside the Basic Multilingual Plane count twice.
pub fn is_valid_password(password: Option<&str>) -> bool {
    password.is_some_and(|p| p.encode_utf16().count() >= MIN_PASSWORD_LENGTH)
}
