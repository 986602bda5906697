//! Shelter and foster home model and DTOs.
//!
//! Both tables have an identical shape, so one row type serves both; the
//! repository picks the table.

use petadopt_core::patch::{Merge, Patch};
use petadopt_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `shelters` or `foster_homes` table.
///
/// `current_capacity` and `current_occupancy` are tracked independently and
/// are not derived from the animals referencing the facility.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Facility {
    pub id: DbId,
    pub name: String,
    pub address: String,
    pub description: String,
    pub capacity: i32,
    pub current_capacity: i32,
    pub current_occupancy: i32,
    pub website: Option<String>,
    pub phone_number: String,
    pub is_verified: bool,
    pub user_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

pub type Shelter = Facility;
pub type FosterHome = Facility;

/// DTO for creating a shelter or foster home. Counters start at zero.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFacility {
    pub name: String,
    pub address: String,
    pub description: String,
    pub capacity: i32,
    pub website: Option<String>,
    pub phone_number: String,
    pub user_id: Option<DbId>,
}

/// DTO for updating a shelter or foster home.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PatchFacility {
    pub name: Patch<String>,
    pub address: Patch<String>,
    pub description: Patch<String>,
    pub capacity: Patch<i32>,
    pub website: Patch<String>,
    pub phone_number: Patch<String>,
    pub user_id: Patch<DbId>,
    pub is_verified: Patch<bool>,
}

impl Merge<PatchFacility> for Facility {
    fn merge(&mut self, patch: &PatchFacility, now: Timestamp) {
        patch.name.apply(&mut self.name);
        patch.address.apply(&mut self.address);
        patch.description.apply(&mut self.description);
        patch.capacity.apply(&mut self.capacity);
        patch.website.apply_nullable(&mut self.website);
        patch.phone_number.apply(&mut self.phone_number);
        patch.user_id.apply_nullable(&mut self.user_id);
        patch.is_verified.apply(&mut self.is_verified);
        self.updated_at = now;
    }
}
