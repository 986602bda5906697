//! Adoption request status vocabulary.

use crate::error::CoreError;
use crate::validation::validate_one_of;

pub const REQUEST_PENDING: &str = "pending";
pub const REQUEST_APPROVED: &str = "approved";
pub const REQUEST_REJECTED: &str = "rejected";

/// All valid adoption request statuses.
pub const VALID_REQUEST_STATUSES: &[&str] = &[REQUEST_PENDING, REQUEST_APPROVED, REQUEST_REJECTED];

/// Validate that a request status string is one of the known statuses.
pub fn validate_request_status(status: &str) -> Result<(), CoreError> {
    validate_one_of("adoption request status", status, VALID_REQUEST_STATUSES)
}
