//! Handlers for the `/users` resource and its relationship listings.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use petadopt_core::roles::validate_role;
use petadopt_core::types::DbId;
use petadopt_core::validation::{
    validate_email, validate_text, MAX_AUTH_UID_LEN, MAX_PERSON_NAME_LEN,
    MAX_PHONE_LEN,
};
use petadopt_db::models::adoption_request::AdoptionRequest;
use petadopt_db::models::animal::Animal;
use petadopt_db::models::facility::Facility;
use petadopt_db::models::report::Report;
use petadopt_db::models::user::{CreateUser, PatchUser, UserResponse};
use petadopt_db::repositories::{
    AdoptionRequestRepo, AnimalRepo, FacilityRepo, ReportRepo, UserRepo,
};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn validate_create_input(input: &CreateUser) -> AppResult<()> {
    validate_email(&input.email)?;
    validate_role(&input.role)?;
    validate_text("first_name", &input.first_name, MAX_PERSON_NAME_LEN)?;
    validate_text("last_name", &input.last_name, MAX_PERSON_NAME_LEN)?;
    validate_text("phone_number", &input.phone_number, MAX_PHONE_LEN)?;
    if let Some(uid) = &input.external_auth_uid {
        validate_text("external_auth_uid", uid, MAX_AUTH_UID_LEN)?;
    }
    Ok(())
}

fn validate_patch_input(patch: &PatchUser) -> AppResult<()> {
    if let Some(role) = patch.role.as_value() {
        validate_role(role)?;
    }
    if let Some(name) = patch.first_name.as_value() {
        validate_text("first_name", name, MAX_PERSON_NAME_LEN)?;
    }
    if let Some(name) = patch.last_name.as_value() {
        validate_text("last_name", name, MAX_PERSON_NAME_LEN)?;
    }
    if let Some(phone) = patch.phone_number.as_value() {
        validate_text("phone_number", phone, MAX_PHONE_LEN)?;
    }
    Ok(())
}

/// POST /api/v1/users
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    validate_create_input(&input)?;
    let user = UserRepo::create(&state.pool, &input).await?;
    tracing::info!(user_id = %user.id, role = %user.role, "User created");
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /api/v1/users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("User", id))?;
    Ok(Json(user.into()))
}

/// GET /api/v1/users/by-auth-uid/{uid}
///
/// Resolves the local account for an identity-provider subject.
pub async fn get_by_auth_uid(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_external_auth_uid(&state.pool, &uid)
        .await?
        .ok_or_else(|| AppError::not_found("User", &uid))?;
    Ok(Json(user.into()))
}

/// PUT|PATCH /api/v1/users/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(patch): Json<PatchUser>,
) -> AppResult<Json<UserResponse>> {
    validate_patch_input(&patch)?;
    let user = UserRepo::update(&state.pool, id, &patch)
        .await?
        .ok_or_else(|| AppError::not_found("User", id))?;
    tracing::info!(user_id = %id, "User updated");
    Ok(Json(user.into()))
}

/// DELETE /api/v1/users/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if UserRepo::delete(&state.pool, id).await? {
        tracing::info!(user_id = %id, "User deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("User", id))
    }
}

// ---------------------------------------------------------------------------
// Relationship listings
// ---------------------------------------------------------------------------

async fn ensure_exists(state: &AppState, id: DbId) -> AppResult<()> {
    UserRepo::find_by_id(&state.pool, id)
        .await?
        .map(|_| ())
        .ok_or_else(|| AppError::not_found("User", id))
}

/// GET /api/v1/users/{id}/animals
pub async fn list_animals(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Animal>>> {
    ensure_exists(&state, id).await?;
    Ok(Json(AnimalRepo::list_by_user(&state.pool, id).await?))
}

/// GET /api/v1/users/{id}/shelters
pub async fn list_shelters(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Facility>>> {
    ensure_exists(&state, id).await?;
    Ok(Json(FacilityRepo::SHELTERS.list_by_user(&state.pool, id).await?))
}

/// GET /api/v1/users/{id}/foster-homes
pub async fn list_foster_homes(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Facility>>> {
    ensure_exists(&state, id).await?;
    Ok(Json(
        FacilityRepo::FOSTER_HOMES.list_by_user(&state.pool, id).await?,
    ))
}

/// GET /api/v1/users/{id}/adoption-requests
pub async fn list_adoption_requests(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<AdoptionRequest>>> {
    ensure_exists(&state, id).await?;
    Ok(Json(AdoptionRequestRepo::list_by_user(&state.pool, id).await?))
}

/// GET /api/v1/users/{id}/reports
pub async fn list_reports(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Report>>> {
    ensure_exists(&state, id).await?;
    Ok(Json(ReportRepo::list_by_user(&state.pool, id).await?))
}
