//! Fixture builders shared by the repository integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use petadopt_core::types::DbId;
use petadopt_db::models::adoption_request::CreateAdoptionRequest;
use petadopt_db::models::animal::CreateAnimal;
use petadopt_db::models::animal_image::CreateAnimalImage;
use petadopt_db::models::facility::CreateFacility;
use petadopt_db::models::report::CreateReport;
use petadopt_db::models::user::CreateUser;

pub fn new_user(email: &str) -> CreateUser {
    CreateUser {
        email: email.to_string(),
        role: "standard".to_string(),
        first_name: "Ana".to_string(),
        last_name: "García".to_string(),
        phone_number: "555-0100".to_string(),
        address: None,
        birth_date: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
        profile_picture: None,
        external_auth_uid: None,
    }
}

pub fn new_facility(name: &str, user_id: Option<DbId>) -> CreateFacility {
    CreateFacility {
        name: name.to_string(),
        address: "Calle Mayor 1".to_string(),
        description: "Rescue centre".to_string(),
        capacity: 25,
        website: None,
        phone_number: "555-0199".to_string(),
        user_id,
    }
}

pub fn new_animal(name: &str) -> CreateAnimal {
    CreateAnimal {
        name: name.to_string(),
        age: Some(2),
        gender: "female".to_string(),
        breed: "Mixed".to_string(),
        description: "Playful".to_string(),
        status: "available".to_string(),
        location: "Madrid".to_string(),
        latitude: None,
        longitude: None,
        type_key: "dog".to_string(),
        size_key: "medium".to_string(),
        user_id: None,
        shelter_id: None,
        foster_home_id: None,
    }
}

pub fn new_image(animal_id: DbId, url: &str) -> CreateAnimalImage {
    CreateAnimalImage {
        animal_id,
        url: url.to_string(),
        alt_text: None,
        description: None,
        is_main: None,
    }
}

pub fn new_request(user_id: DbId, animal_id: DbId) -> CreateAdoptionRequest {
    CreateAdoptionRequest {
        user_id,
        animal_id,
        message: Some("We have a garden".to_string()),
    }
}

pub fn new_report(title: &str, user_id: Option<DbId>) -> CreateReport {
    CreateReport {
        title: title.to_string(),
        report_type: "lost".to_string(),
        description: "Went missing near the river".to_string(),
        image_url: None,
        status: None,
        address: None,
        city: Some("Sevilla".to_string()),
        province: None,
        postal_code: None,
        country: None,
        latitude: None,
        longitude: None,
        animal_name: Some("Toby".to_string()),
        animal_gender: Some("male".to_string()),
        animal_breed: None,
        last_seen_at: None,
        user_id,
        type_key: Some("dog".to_string()),
        size_key: None,
    }
}
