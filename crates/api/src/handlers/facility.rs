//! Handlers shared by `/shelters` and `/foster-homes`.
//!
//! The two resources have the same shape and rules; [`FacilityKind`] picks
//! the table, the entity name used in errors and logs, and the animal lookup.

use std::future::Future;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use petadopt_core::types::DbId;
use petadopt_core::validation::{
    validate_capacity, validate_required, validate_text, MAX_FACILITY_NAME_LEN, MAX_PHONE_LEN,
};
use petadopt_db::models::animal::Animal;
use petadopt_db::models::facility::{CreateFacility, Facility, PatchFacility};
use petadopt_db::repositories::{AnimalRepo, FacilityRepo};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::query::NameSearchParams;
use crate::state::AppState;

/// Selects which facility table a handler operates on.
pub trait FacilityKind: Send + Sync + 'static {
    const REPO: FacilityRepo;
    const ENTITY: &'static str;

    /// Animals currently housed by the facility.
    fn list_animals(
        pool: &PgPool,
        id: DbId,
    ) -> impl Future<Output = Result<Vec<Animal>, sqlx::Error>> + Send;
}

pub struct Shelters;

impl FacilityKind for Shelters {
    const REPO: FacilityRepo = FacilityRepo::SHELTERS;
    const ENTITY: &'static str = "Shelter";

    fn list_animals(
        pool: &PgPool,
        id: DbId,
    ) -> impl Future<Output = Result<Vec<Animal>, sqlx::Error>> + Send {
        AnimalRepo::list_by_shelter(pool, id)
    }
}

pub struct FosterHomes;

impl FacilityKind for FosterHomes {
    const REPO: FacilityRepo = FacilityRepo::FOSTER_HOMES;
    const ENTITY: &'static str = "FosterHome";

    fn list_animals(
        pool: &PgPool,
        id: DbId,
    ) -> impl Future<Output = Result<Vec<Animal>, sqlx::Error>> + Send {
        AnimalRepo::list_by_foster_home(pool, id)
    }
}

fn validate_create_input(input: &CreateFacility) -> AppResult<()> {
    validate_text("name", &input.name, MAX_FACILITY_NAME_LEN)?;
    validate_required("address", &input.address)?;
    validate_required("description", &input.description)?;
    validate_capacity("capacity", input.capacity)?;
    validate_text("phone_number", &input.phone_number, MAX_PHONE_LEN)?;
    Ok(())
}

fn validate_patch_input(patch: &PatchFacility) -> AppResult<()> {
    if let Some(name) = patch.name.as_value() {
        validate_text("name", name, MAX_FACILITY_NAME_LEN)?;
    }
    if let Some(address) = patch.address.as_value() {
        validate_required("address", address)?;
    }
    if let Some(description) = patch.description.as_value() {
        validate_required("description", description)?;
    }
    if let Some(capacity) = patch.capacity.as_value() {
        validate_capacity("capacity", *capacity)?;
    }
    if let Some(phone) = patch.phone_number.as_value() {
        validate_text("phone_number", phone, MAX_PHONE_LEN)?;
    }
    Ok(())
}

/// POST /api/v1/{shelters|foster-homes}
pub async fn create<K: FacilityKind>(
    State(state): State<AppState>,
    Json(input): Json<CreateFacility>,
) -> AppResult<(StatusCode, Json<Facility>)> {
    validate_create_input(&input)?;
    let facility = K::REPO.create(&state.pool, &input).await?;
    tracing::info!(entity = K::ENTITY, id = %facility.id, "Facility created");
    Ok((StatusCode::CREATED, Json(facility)))
}

/// GET /api/v1/{shelters|foster-homes}
pub async fn list<K: FacilityKind>(State(state): State<AppState>) -> AppResult<Json<Vec<Facility>>> {
    Ok(Json(K::REPO.list(&state.pool).await?))
}

/// GET /api/v1/{shelters|foster-homes}/search?name=
pub async fn search<K: FacilityKind>(
    State(state): State<AppState>,
    Query(params): Query<NameSearchParams>,
) -> AppResult<Json<Vec<Facility>>> {
    let term = params.name.trim();
    if term.is_empty() {
        return Err(AppError::BadRequest("name must not be empty".to_string()));
    }
    Ok(Json(K::REPO.search_by_name(&state.pool, term).await?))
}

/// GET /api/v1/{shelters|foster-homes}/{id}
pub async fn get_by_id<K: FacilityKind>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Facility>> {
    let facility = K::REPO
        .find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(K::ENTITY, id))?;
    Ok(Json(facility))
}

/// PUT|PATCH /api/v1/{shelters|foster-homes}/{id}
pub async fn update<K: FacilityKind>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(patch): Json<PatchFacility>,
) -> AppResult<Json<Facility>> {
    validate_patch_input(&patch)?;
    let facility = K::REPO
        .update(&state.pool, id, &patch)
        .await?
        .ok_or_else(|| AppError::not_found(K::ENTITY, id))?;
    tracing::info!(entity = K::ENTITY, %id, "Facility updated");
    Ok(Json(facility))
}

/// DELETE /api/v1/{shelters|foster-homes}/{id}
pub async fn delete<K: FacilityKind>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if K::REPO.delete(&state.pool, id).await? {
        tracing::info!(entity = K::ENTITY, %id, "Facility deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(K::ENTITY, id))
    }
}

/// GET /api/v1/{shelters|foster-homes}/{id}/animals
pub async fn list_animals<K: FacilityKind>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Animal>>> {
    K::REPO
        .find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(K::ENTITY, id))?;
    Ok(Json(K::list_animals(&state.pool, id).await?))
}
