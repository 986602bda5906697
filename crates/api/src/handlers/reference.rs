//! Read-only handlers for `/animal-types` and `/animal-sizes`.

use axum::extract::{Path, State};
use axum::Json;
use petadopt_db::models::reference::{AnimalSize, AnimalType};
use petadopt_db::repositories::{AnimalSizeRepo, AnimalTypeRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/animal-types
pub async fn list_types(State(state): State<AppState>) -> AppResult<Json<Vec<AnimalType>>> {
    Ok(Json(AnimalTypeRepo::list(&state.pool).await?))
}

/// GET /api/v1/animal-types/{key}
pub async fn get_type(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<AnimalType>> {
    let animal_type = AnimalTypeRepo::find_by_key(&state.pool, &key)
        .await?
        .ok_or_else(|| AppError::not_found("AnimalType", &key))?;
    Ok(Json(animal_type))
}

/// GET /api/v1/animal-sizes
pub async fn list_sizes(State(state): State<AppState>) -> AppResult<Json<Vec<AnimalSize>>> {
    Ok(Json(AnimalSizeRepo::list(&state.pool).await?))
}

/// GET /api/v1/animal-sizes/{key}
pub async fn get_size(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<AnimalSize>> {
    let size = AnimalSizeRepo::find_by_key(&state.pool, &key)
        .await?
        .ok_or_else(|| AppError::not_found("AnimalSize", &key))?;
    Ok(Json(size))
}
