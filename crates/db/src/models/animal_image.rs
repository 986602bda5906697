//! Animal image model and DTOs. Image URLs are opaque strings.

use petadopt_core::patch::{Merge, Patch};
use petadopt_core::types::{DbId, ImageId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `animal_images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AnimalImage {
    pub id: ImageId,
    pub animal_id: DbId,
    pub url: String,
    pub alt_text: Option<String>,
    pub description: Option<String>,
    pub is_main: bool,
    pub is_verified: bool,
    pub uploaded_at: Timestamp,
}

/// DTO for attaching an image to an animal.
///
/// If `is_main` is `None`, defaults to `false`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAnimalImage {
    pub animal_id: DbId,
    pub url: String,
    pub alt_text: Option<String>,
    pub description: Option<String>,
    pub is_main: Option<bool>,
}

/// DTO for updating an image. The owning animal cannot change.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PatchAnimalImage {
    pub url: Patch<String>,
    pub alt_text: Patch<String>,
    pub description: Patch<String>,
    pub is_main: Patch<bool>,
    pub is_verified: Patch<bool>,
}

/// Images only carry an upload timestamp, which a patch never touches.
impl Merge<PatchAnimalImage> for AnimalImage {
    fn merge(&mut self, patch: &PatchAnimalImage, _now: Timestamp) {
        patch.url.apply(&mut self.url);
        patch.alt_text.apply_nullable(&mut self.alt_text);
        patch.description.apply_nullable(&mut self.description);
        patch.is_main.apply(&mut self.is_main);
        patch.is_verified.apply(&mut self.is_verified);
    }
}
