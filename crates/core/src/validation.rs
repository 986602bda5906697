//! Field-level validation helpers shared by all resources.
//!
//! Every helper returns [`CoreError::Validation`] with a message naming the
//! offending field so the API can surface it verbatim.

use validator::ValidateEmail;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Shared field limits
// ---------------------------------------------------------------------------

/// Maximum length of a user email address.
pub const MAX_EMAIL_LEN: usize = 100;
/// User first and last names.
pub const MAX_PERSON_NAME_LEN: usize = 100;
pub const MAX_PHONE_LEN: usize = 20;
/// Shelter and foster home names.
pub const MAX_FACILITY_NAME_LEN: usize = 100;
/// Identity-provider subject stored on users.
pub const MAX_AUTH_UID_LEN: usize = 128;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Reject empty or whitespace-only text.
pub fn validate_required(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Reject text longer than `max` characters.
pub fn validate_max_len(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    let len = value.chars().count();
    if len > max {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max} characters (got {len})"
        )));
    }
    Ok(())
}

/// Required text with an upper length bound.
pub fn validate_text(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    validate_required(field, value)?;
    validate_max_len(field, value, max)
}

/// Validate email syntax and length.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    validate_max_len("email", email, MAX_EMAIL_LEN)?;
    if !email.validate_email() {
        return Err(CoreError::Validation(format!(
            "Invalid email format: '{email}'"
        )));
    }
    Ok(())
}

/// Check that `value` belongs to a fixed vocabulary.
pub fn validate_one_of(field: &str, value: &str, valid: &[&str]) -> Result<(), CoreError> {
    if valid.contains(&value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown {field}: '{value}'. Valid values: {}",
            valid.join(", ")
        )))
    }
}

/// Hard capacity fields must be strictly positive.
pub fn validate_capacity(field: &str, value: i32) -> Result<(), CoreError> {
    if value <= 0 {
        return Err(CoreError::Validation(format!(
            "{field} must be greater than zero"
        )));
    }
    Ok(())
}

/// Counters (current capacity, occupancy, age) cannot go negative.
pub fn validate_non_negative(field: &str, value: i32) -> Result<(), CoreError> {
    if value < 0 {
        return Err(CoreError::Validation(format!("{field} cannot be negative")));
    }
    Ok(())
}

pub fn validate_latitude(value: f64) -> Result<(), CoreError> {
    if !(-90.0..=90.0).contains(&value) {
        return Err(CoreError::Validation(format!(
            "latitude must be between -90 and 90 (got {value})"
        )));
    }
    Ok(())
}

pub fn validate_longitude(value: f64) -> Result<(), CoreError> {
    if !(-180.0..=180.0).contains(&value) {
        return Err(CoreError::Validation(format!(
            "longitude must be between -180 and 180 (got {value})"
        )));
    }
    Ok(())
}
