//! Lost/found report vocabulary and field limits.

use crate::error::CoreError;
use crate::validation::validate_one_of;

// ---------------------------------------------------------------------------
// Report type
// ---------------------------------------------------------------------------

pub const TYPE_LOST: &str = "lost";
pub const TYPE_FOUND: &str = "found";
pub const TYPE_ABUSE: &str = "abuse";
pub const TYPE_OTHER: &str = "other";

/// All valid report types.
pub const VALID_REPORT_TYPES: &[&str] = &[TYPE_LOST, TYPE_FOUND, TYPE_ABUSE, TYPE_OTHER];

// ---------------------------------------------------------------------------
// Report status
// ---------------------------------------------------------------------------

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_IN_PROGRESS: &str = "in_progress";
pub const STATUS_RESOLVED: &str = "resolved";
pub const STATUS_CLOSED: &str = "closed";

/// All valid report statuses.
pub const VALID_REPORT_STATUSES: &[&str] =
    &[STATUS_PENDING, STATUS_IN_PROGRESS, STATUS_RESOLVED, STATUS_CLOSED];

/// Status assigned when a report is created without one.
pub const DEFAULT_REPORT_STATUS: &str = STATUS_PENDING;

// ---------------------------------------------------------------------------
// Reported animal gender
// ---------------------------------------------------------------------------

/// Reporters often cannot tell, so reports use `unknown` where listings use
/// `not_specified`.
pub const VALID_REPORTED_GENDERS: &[&str] = &["male", "female", "unknown"];

// ---------------------------------------------------------------------------
// Field limits
// ---------------------------------------------------------------------------

pub const MAX_TITLE_LEN: usize = 100;
pub const MAX_CITY_LEN: usize = 100;
pub const MAX_PROVINCE_LEN: usize = 100;
pub const MAX_POSTAL_CODE_LEN: usize = 15;
pub const MAX_COUNTRY_LEN: usize = 100;
pub const MAX_ANIMAL_NAME_LEN: usize = 75;
pub const MAX_ANIMAL_BREED_LEN: usize = 75;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

pub fn validate_report_type(report_type: &str) -> Result<(), CoreError> {
    validate_one_of("report type", report_type, VALID_REPORT_TYPES)
}

pub fn validate_report_status(status: &str) -> Result<(), CoreError> {
    validate_one_of("report status", status, VALID_REPORT_STATUSES)
}

pub fn validate_reported_gender(gender: &str) -> Result<(), CoreError> {
    validate_one_of("reported animal gender", gender, VALID_REPORTED_GENDERS)
}
