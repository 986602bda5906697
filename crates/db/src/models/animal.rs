//! Animal listing model and DTOs.

use petadopt_core::patch::{Merge, Patch};
use petadopt_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::animal_image::AnimalImage;

/// A row from the `animals` table.
///
/// `user_id`, `shelter_id` and `foster_home_id` are the possible custodians.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Animal {
    pub id: DbId,
    pub name: String,
    pub age: Option<i32>,
    pub gender: String,
    pub breed: String,
    pub description: String,
    pub status: String,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub type_key: String,
    pub size_key: String,
    pub user_id: Option<DbId>,
    pub shelter_id: Option<DbId>,
    pub foster_home_id: Option<DbId>,
    pub is_verified: bool,
    pub posted_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An animal together with its images, returned by the single-animal lookup.
#[derive(Debug, Clone, Serialize)]
pub struct AnimalWithImages {
    #[serde(flatten)]
    pub animal: Animal,
    pub images: Vec<AnimalImage>,
}

/// DTO for posting a new animal.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAnimal {
    pub name: String,
    pub age: Option<i32>,
    pub gender: String,
    pub breed: String,
    pub description: String,
    pub status: String,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub type_key: String,
    pub size_key: String,
    pub user_id: Option<DbId>,
    pub shelter_id: Option<DbId>,
    pub foster_home_id: Option<DbId>,
}

/// DTO for updating an animal.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PatchAnimal {
    pub name: Patch<String>,
    pub age: Patch<i32>,
    pub gender: Patch<String>,
    pub breed: Patch<String>,
    pub description: Patch<String>,
    pub status: Patch<String>,
    pub location: Patch<String>,
    pub latitude: Patch<f64>,
    pub longitude: Patch<f64>,
    pub type_key: Patch<String>,
    pub size_key: Patch<String>,
    pub user_id: Patch<DbId>,
    pub shelter_id: Patch<DbId>,
    pub foster_home_id: Patch<DbId>,
    pub is_verified: Patch<bool>,
}

impl Merge<PatchAnimal> for Animal {
    fn merge(&mut self, patch: &PatchAnimal, now: Timestamp) {
        patch.name.apply(&mut self.name);
        patch.age.apply_nullable(&mut self.age);
        patch.gender.apply(&mut self.gender);
        patch.breed.apply(&mut self.breed);
        patch.description.apply(&mut self.description);
        patch.status.apply(&mut self.status);
        patch.location.apply(&mut self.location);
        patch.latitude.apply_nullable(&mut self.latitude);
        patch.longitude.apply_nullable(&mut self.longitude);
        patch.type_key.apply(&mut self.type_key);
        patch.size_key.apply(&mut self.size_key);
        patch.user_id.apply_nullable(&mut self.user_id);
        patch.shelter_id.apply_nullable(&mut self.shelter_id);
        patch.foster_home_id.apply_nullable(&mut self.foster_home_id);
        patch.is_verified.apply(&mut self.is_verified);
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    use super::*;

    fn sample() -> Animal {
        let posted = Utc::now() - Duration::hours(6);
        Animal {
            id: Uuid::new_v4(),
            name: "Luna".to_string(),
            age: Some(3),
            gender: "female".to_string(),
            breed: "Mixed".to_string(),
            description: "Calm and friendly".to_string(),
            status: "available".to_string(),
            location: "Madrid".to_string(),
            latitude: Some(40.4168),
            longitude: Some(-3.7038),
            type_key: "dog".to_string(),
            size_key: "small".to_string(),
            user_id: None,
            shelter_id: Some(Uuid::new_v4()),
            foster_home_id: None,
            is_verified: false,
            posted_at: posted,
            updated_at: posted,
        }
    }

    #[test]
    fn status_only_patch_leaves_everything_else() {
        let mut animal = sample();
        let before = animal.clone();
        let now = Utc::now();
        let patch = PatchAnimal {
            status: Patch::Value("adopted".to_string()),
            ..Default::default()
        };

        animal.merge(&patch, now);

        assert_eq!(animal.status, "adopted");
        assert_eq!(animal.updated_at, now);
        assert_eq!(animal.name, before.name);
        assert_eq!(animal.breed, before.breed);
        assert_eq!(animal.location, before.location);
        assert_eq!(animal.shelter_id, before.shelter_id);
        assert_eq!(animal.posted_at, before.posted_at);
        assert_eq!(animal.id, before.id);
    }

    #[test]
    fn zero_age_is_applied() {
        let mut animal = sample();
        let patch: PatchAnimal = serde_json::from_str(r#"{"age": 0}"#).unwrap();
        animal.merge(&patch, Utc::now());
        assert_eq!(animal.age, Some(0));
    }

    #[test]
    fn custodian_can_be_moved_and_cleared() {
        let mut animal = sample();
        let foster = Uuid::new_v4();
        let patch: PatchAnimal = serde_json::from_value(serde_json::json!({
            "shelter_id": null,
            "foster_home_id": foster,
            "status": "fostered",
        }))
        .unwrap();

        animal.merge(&patch, Utc::now());

        assert_eq!(animal.shelter_id, None);
        assert_eq!(animal.foster_home_id, Some(foster));
        assert_eq!(animal.status, "fostered");
    }

    #[test]
    fn null_on_required_field_is_ignored() {
        let mut animal = sample();
        let patch: PatchAnimal =
            serde_json::from_str(r#"{"name": null, "latitude": null}"#).unwrap();
        animal.merge(&patch, Utc::now());
        assert_eq!(animal.name, "Luna");
        assert_eq!(animal.latitude, None);
    }

    #[test]
    fn detail_flattens_animal_fields() {
        let detail = AnimalWithImages {
            animal: sample(),
            images: vec![],
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["name"], "Luna");
        assert!(json["images"].as_array().unwrap().is_empty());
    }
}
