//! Handlers for the `/animal-images` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use petadopt_core::types::ImageId;
use petadopt_core::validation::validate_required;
use petadopt_db::models::animal_image::{AnimalImage, CreateAnimalImage, PatchAnimalImage};
use petadopt_db::repositories::AnimalImageRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/animal-images
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAnimalImage>,
) -> AppResult<(StatusCode, Json<AnimalImage>)> {
    validate_required("url", &input.url)?;
    let image = AnimalImageRepo::create(&state.pool, &input).await?;
    tracing::info!(image_id = image.id, animal_id = %image.animal_id, "Animal image added");
    Ok((StatusCode::CREATED, Json(image)))
}

/// GET /api/v1/animal-images
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<AnimalImage>>> {
    Ok(Json(AnimalImageRepo::list(&state.pool).await?))
}

/// GET /api/v1/animal-images/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<ImageId>,
) -> AppResult<Json<AnimalImage>> {
    let image = AnimalImageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("AnimalImage", id))?;
    Ok(Json(image))
}

/// PUT|PATCH /api/v1/animal-images/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ImageId>,
    Json(patch): Json<PatchAnimalImage>,
) -> AppResult<Json<AnimalImage>> {
    if let Some(url) = patch.url.as_value() {
        validate_required("url", url)?;
    }
    let image = AnimalImageRepo::update(&state.pool, id, &patch)
        .await?
        .ok_or_else(|| AppError::not_found("AnimalImage", id))?;
    tracing::info!(image_id = id, "Animal image updated");
    Ok(Json(image))
}

/// DELETE /api/v1/animal-images/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<ImageId>,
) -> AppResult<StatusCode> {
    if AnimalImageRepo::delete(&state.pool, id).await? {
        tracing::info!(image_id = id, "Animal image deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("AnimalImage", id))
    }
}
