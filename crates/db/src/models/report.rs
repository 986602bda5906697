//! Lost/found report model and DTOs.

use petadopt_core::patch::{Merge, Patch};
use petadopt_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `reports` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Report {
    pub id: DbId,
    pub title: String,
    pub report_type: String,
    pub description: String,
    pub image_url: Option<String>,
    pub status: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub is_verified: bool,
    pub animal_name: Option<String>,
    pub animal_gender: Option<String>,
    pub animal_breed: Option<String>,
    pub last_seen_at: Option<Timestamp>,
    pub user_id: Option<DbId>,
    pub type_key: Option<String>,
    pub size_key: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for filing a report.
///
/// If `status` is `None`, defaults to `pending`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReport {
    pub title: String,
    pub report_type: String,
    pub description: String,
    pub image_url: Option<String>,
    pub status: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub animal_name: Option<String>,
    pub animal_gender: Option<String>,
    pub animal_breed: Option<String>,
    pub last_seen_at: Option<Timestamp>,
    pub user_id: Option<DbId>,
    pub type_key: Option<String>,
    pub size_key: Option<String>,
}

/// DTO for updating a report. The reporter cannot change.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PatchReport {
    pub title: Patch<String>,
    pub report_type: Patch<String>,
    pub description: Patch<String>,
    pub image_url: Patch<String>,
    pub status: Patch<String>,
    pub address: Patch<String>,
    pub city: Patch<String>,
    pub province: Patch<String>,
    pub postal_code: Patch<String>,
    pub country: Patch<String>,
    pub latitude: Patch<f64>,
    pub longitude: Patch<f64>,
    pub animal_name: Patch<String>,
    pub animal_gender: Patch<String>,
    pub animal_breed: Patch<String>,
    pub last_seen_at: Patch<Timestamp>,
    pub type_key: Patch<String>,
    pub size_key: Patch<String>,
    pub is_verified: Patch<bool>,
}

impl Merge<PatchReport> for Report {
    fn merge(&mut self, patch: &PatchReport, now: Timestamp) {
        patch.title.apply(&mut self.title);
        patch.report_type.apply(&mut self.report_type);
        patch.description.apply(&mut self.description);
        patch.image_url.apply_nullable(&mut self.image_url);
        patch.status.apply(&mut self.status);
        patch.address.apply_nullable(&mut self.address);
        patch.city.apply_nullable(&mut self.city);
        patch.province.apply_nullable(&mut self.province);
        patch.postal_code.apply_nullable(&mut self.postal_code);
        patch.country.apply_nullable(&mut self.country);
        patch.latitude.apply_nullable(&mut self.latitude);
        patch.longitude.apply_nullable(&mut self.longitude);
        patch.animal_name.apply_nullable(&mut self.animal_name);
        patch.animal_gender.apply_nullable(&mut self.animal_gender);
        patch.animal_breed.apply_nullable(&mut self.animal_breed);
        patch.last_seen_at.apply_nullable(&mut self.last_seen_at);
        patch.type_key.apply_nullable(&mut self.type_key);
        patch.size_key.apply_nullable(&mut self.size_key);
        patch.is_verified.apply(&mut self.is_verified);
        self.updated_at = now;
    }
}
