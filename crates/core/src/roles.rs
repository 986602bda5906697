//! User role vocabulary.
//!
//! Must match the `ck_users_role` constraint in the users migration.

use crate::error::CoreError;
use crate::validation::validate_one_of;

pub const ROLE_STANDARD: &str = "standard";
pub const ROLE_FOSTER_HOME: &str = "foster_home";
pub const ROLE_SHELTER: &str = "shelter";
pub const ROLE_ADMIN: &str = "admin";

/// All valid user roles.
pub const VALID_ROLES: &[&str] = &[ROLE_STANDARD, ROLE_FOSTER_HOME, ROLE_SHELTER, ROLE_ADMIN];

/// Validate that a role string is one of the known roles.
pub fn validate_role(role: &str) -> Result<(), CoreError> {
    validate_one_of("role", role, VALID_ROLES)
}
