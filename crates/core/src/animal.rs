//! Animal listing vocabulary and field limits.

use crate::error::CoreError;
use crate::validation::validate_one_of;

// ---------------------------------------------------------------------------
// Gender
// ---------------------------------------------------------------------------

pub const GENDER_MALE: &str = "male";
pub const GENDER_FEMALE: &str = "female";
pub const GENDER_NOT_SPECIFIED: &str = "not_specified";

/// All valid animal genders.
pub const VALID_GENDERS: &[&str] = &[GENDER_MALE, GENDER_FEMALE, GENDER_NOT_SPECIFIED];

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Listed but not open for adoption yet.
pub const STATUS_NOT_AVAILABLE: &str = "not_available";
/// Open for adoption requests.
pub const STATUS_AVAILABLE: &str = "available";
pub const STATUS_ADOPTED: &str = "adopted";
/// Currently placed with a foster home.
pub const STATUS_FOSTERED: &str = "fostered";
/// Currently housed by a shelter.
pub const STATUS_IN_SHELTER: &str = "in_shelter";

/// All valid animal statuses.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_NOT_AVAILABLE,
    STATUS_AVAILABLE,
    STATUS_ADOPTED,
    STATUS_FOSTERED,
    STATUS_IN_SHELTER,
];

// ---------------------------------------------------------------------------
// Field limits
// ---------------------------------------------------------------------------

pub const MAX_NAME_LEN: usize = 75;
pub const MAX_BREED_LEN: usize = 75;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate that a gender string is one of the known genders.
pub fn validate_gender(gender: &str) -> Result<(), CoreError> {
    validate_one_of("animal gender", gender, VALID_GENDERS)
}

/// Validate that a status string is one of the known statuses.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    validate_one_of("animal status", status, VALID_STATUSES)
}
