//! Handlers for the `/animals` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use petadopt_core::animal::{validate_gender, validate_status, MAX_BREED_LEN, MAX_NAME_LEN};
use petadopt_core::types::DbId;
use petadopt_core::validation::{
    validate_latitude, validate_longitude, validate_non_negative, validate_required, validate_text,
};
use petadopt_db::models::adoption_request::AdoptionRequest;
use petadopt_db::models::animal::{Animal, AnimalWithImages, CreateAnimal, PatchAnimal};
use petadopt_db::models::animal_image::AnimalImage;
use petadopt_db::repositories::{AdoptionRequestRepo, AnimalImageRepo, AnimalRepo};

use crate::error::{AppError, AppResult};
use crate::query::StatusFilterParams;
use crate::state::AppState;

fn validate_create_input(input: &CreateAnimal) -> AppResult<()> {
    validate_text("name", &input.name, MAX_NAME_LEN)?;
    validate_text("breed", &input.breed, MAX_BREED_LEN)?;
    validate_required("description", &input.description)?;
    validate_required("location", &input.location)?;
    validate_gender(&input.gender)?;
    validate_status(&input.status)?;
    if let Some(age) = input.age {
        validate_non_negative("age", age)?;
    }
    if let Some(lat) = input.latitude {
        validate_latitude(lat)?;
    }
    if let Some(lon) = input.longitude {
        validate_longitude(lon)?;
    }
    Ok(())
}

fn validate_patch_input(patch: &PatchAnimal) -> AppResult<()> {
    if let Some(name) = patch.name.as_value() {
        validate_text("name", name, MAX_NAME_LEN)?;
    }
    if let Some(breed) = patch.breed.as_value() {
        validate_text("breed", breed, MAX_BREED_LEN)?;
    }
    if let Some(description) = patch.description.as_value() {
        validate_required("description", description)?;
    }
    if let Some(location) = patch.location.as_value() {
        validate_required("location", location)?;
    }
    if let Some(gender) = patch.gender.as_value() {
        validate_gender(gender)?;
    }
    if let Some(status) = patch.status.as_value() {
        validate_status(status)?;
    }
    if let Some(age) = patch.age.as_value() {
        validate_non_negative("age", *age)?;
    }
    if let Some(lat) = patch.latitude.as_value() {
        validate_latitude(*lat)?;
    }
    if let Some(lon) = patch.longitude.as_value() {
        validate_longitude(*lon)?;
    }
    Ok(())
}

/// POST /api/v1/animals
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAnimal>,
) -> AppResult<(StatusCode, Json<Animal>)> {
    validate_create_input(&input)?;
    let animal = AnimalRepo::create(&state.pool, &input).await?;
    tracing::info!(animal_id = %animal.id, status = %animal.status, "Animal listed");
    Ok((StatusCode::CREATED, Json(animal)))
}

/// GET /api/v1/animals[?status=]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<StatusFilterParams>,
) -> AppResult<Json<Vec<Animal>>> {
    let animals = match params.status {
        Some(status) => {
            validate_status(&status)?;
            AnimalRepo::list_by_status(&state.pool, &status).await?
        }
        None => AnimalRepo::list(&state.pool).await?,
    };
    Ok(Json(animals))
}

/// GET /api/v1/animals/{id}
///
/// Returns the listing together with its images.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<AnimalWithImages>> {
    let animal = AnimalRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Animal", id))?;
    let images = AnimalImageRepo::list_by_animal(&state.pool, id).await?;
    Ok(Json(AnimalWithImages { animal, images }))
}

/// PUT|PATCH /api/v1/animals/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(patch): Json<PatchAnimal>,
) -> AppResult<Json<Animal>> {
    validate_patch_input(&patch)?;
    let animal = AnimalRepo::update(&state.pool, id, &patch)
        .await?
        .ok_or_else(|| AppError::not_found("Animal", id))?;
    tracing::info!(animal_id = %id, status = %animal.status, "Animal updated");
    Ok(Json(animal))
}

/// DELETE /api/v1/animals/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if AnimalRepo::delete(&state.pool, id).await? {
        tracing::info!(animal_id = %id, "Animal deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Animal", id))
    }
}

async fn ensure_exists(state: &AppState, id: DbId) -> AppResult<()> {
    AnimalRepo::find_by_id(&state.pool, id)
        .await?
        .map(|_| ())
        .ok_or_else(|| AppError::not_found("Animal", id))
}

/// GET /api/v1/animals/{id}/images
pub async fn list_images(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<AnimalImage>>> {
    ensure_exists(&state, id).await?;
    Ok(Json(AnimalImageRepo::list_by_animal(&state.pool, id).await?))
}

/// GET /api/v1/animals/{id}/adoption-requests
pub async fn list_adoption_requests(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<AdoptionRequest>>> {
    ensure_exists(&state, id).await?;
    Ok(Json(AdoptionRequestRepo::list_by_animal(&state.pool, id).await?))
}
