//! Handlers for the `/adoption-requests` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use petadopt_core::adoption::validate_request_status;
use petadopt_core::types::DbId;
use petadopt_db::models::adoption_request::{
    AdoptionRequest, CreateAdoptionRequest, PatchAdoptionRequest,
};
use petadopt_db::repositories::AdoptionRequestRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/adoption-requests
///
/// New requests are always `pending`; unknown user or animal ids surface as
/// a foreign key violation.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAdoptionRequest>,
) -> AppResult<(StatusCode, Json<AdoptionRequest>)> {
    let request = AdoptionRequestRepo::create(&state.pool, &input).await?;
    tracing::info!(
        request_id = %request.id,
        user_id = %request.user_id,
        animal_id = %request.animal_id,
        "Adoption request filed",
    );
    Ok((StatusCode::CREATED, Json(request)))
}

/// GET /api/v1/adoption-requests
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<AdoptionRequest>>> {
    Ok(Json(AdoptionRequestRepo::list(&state.pool).await?))
}

/// GET /api/v1/adoption-requests/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<AdoptionRequest>> {
    let request = AdoptionRequestRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("AdoptionRequest", id))?;
    Ok(Json(request))
}

/// PUT|PATCH /api/v1/adoption-requests/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(patch): Json<PatchAdoptionRequest>,
) -> AppResult<Json<AdoptionRequest>> {
    if let Some(status) = patch.status.as_value() {
        validate_request_status(status)?;
    }
    let request = AdoptionRequestRepo::update(&state.pool, id, &patch)
        .await?
        .ok_or_else(|| AppError::not_found("AdoptionRequest", id))?;
    tracing::info!(request_id = %id, status = %request.status, "Adoption request updated");
    Ok(Json(request))
}

/// DELETE /api/v1/adoption-requests/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if AdoptionRequestRepo::delete(&state.pool, id).await? {
        tracing::info!(request_id = %id, "Adoption request deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("AdoptionRequest", id))
    }
}
