//! Adoption request model and DTOs.

use petadopt_core::patch::{Merge, Patch};
use petadopt_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `adoption_requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AdoptionRequest {
    pub id: DbId,
    pub user_id: DbId,
    pub animal_id: DbId,
    pub status: String,
    pub message: Option<String>,
    pub response: Option<String>,
    pub responded_at: Option<Timestamp>,
    pub is_verified: bool,
    pub is_completed: bool,
    pub requested_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for submitting a request. Status starts as `pending`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAdoptionRequest {
    pub user_id: DbId,
    pub animal_id: DbId,
    pub message: Option<String>,
}

/// DTO for answering or progressing a request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PatchAdoptionRequest {
    pub status: Patch<String>,
    pub response: Patch<String>,
    pub responded_at: Patch<Timestamp>,
    pub is_verified: Patch<bool>,
    pub is_completed: Patch<bool>,
}

impl Merge<PatchAdoptionRequest> for AdoptionRequest {
    fn merge(&mut self, patch: &PatchAdoptionRequest, now: Timestamp) {
        patch.status.apply(&mut self.status);
        patch.response.apply_nullable(&mut self.response);
        patch.responded_at.apply_nullable(&mut self.responded_at);
        patch.is_verified.apply(&mut self.is_verified);
        patch.is_completed.apply(&mut self.is_completed);
        self.updated_at = now;
    }
}
