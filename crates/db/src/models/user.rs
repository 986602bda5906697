//! User entity model and DTOs.

use chrono::NaiveDate;
use petadopt_core::patch::{Merge, Patch};
use petadopt_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the identity-provider subject -- NEVER serialize this to API
/// responses directly. Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub role: String,
    pub is_role_verified: bool,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub address: Option<String>,
    pub birth_date: NaiveDate,
    pub profile_picture: Option<String>,
    pub is_verified: bool,
    pub external_auth_uid: Option<String>,
    pub created_at: Timestamp,
}

/// Safe user representation for API responses (no identity-provider subject).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub email: String,
    pub role: String,
    pub is_role_verified: bool,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub address: Option<String>,
    pub birth_date: NaiveDate,
    pub profile_picture: Option<String>,
    pub is_verified: bool,
    pub created_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            role: user.role,
            is_role_verified: user.is_role_verified,
            first_name: user.first_name,
            last_name: user.last_name,
            phone_number: user.phone_number,
            address: user.address,
            birth_date: user.birth_date,
            profile_picture: user.profile_picture,
            is_verified: user.is_verified,
            created_at: user.created_at,
        }
    }
}

/// DTO for registering a new user. Verification flags always start `false`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub role: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub address: Option<String>,
    pub birth_date: NaiveDate,
    pub profile_picture: Option<String>,
    pub external_auth_uid: Option<String>,
}

/// DTO for updating a user. Email and identity-provider subject are fixed
/// at registration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PatchUser {
    pub first_name: Patch<String>,
    pub last_name: Patch<String>,
    pub phone_number: Patch<String>,
    pub address: Patch<String>,
    pub birth_date: Patch<NaiveDate>,
    pub profile_picture: Patch<String>,
    pub role: Patch<String>,
    pub is_role_verified: Patch<bool>,
    pub is_verified: Patch<bool>,
}

/// Users carry no update timestamp, so `now` is unused.
impl Merge<PatchUser> for User {
    fn merge(&mut self, patch: &PatchUser, _now: Timestamp) {
        patch.first_name.apply(&mut self.first_name);
        patch.last_name.apply(&mut self.last_name);
        patch.phone_number.apply(&mut self.phone_number);
        patch.address.apply_nullable(&mut self.address);
        patch.birth_date.apply(&mut self.birth_date);
        patch.profile_picture.apply_nullable(&mut self.profile_picture);
        patch.role.apply(&mut self.role);
        patch.is_role_verified.apply(&mut self.is_role_verified);
        patch.is_verified.apply(&mut self.is_verified);
    }
}
