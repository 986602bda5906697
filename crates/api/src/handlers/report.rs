//! Handlers for the `/reports` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use petadopt_core::report::{
    validate_report_status, validate_report_type, validate_reported_gender, MAX_ANIMAL_BREED_LEN,
    MAX_ANIMAL_NAME_LEN, MAX_CITY_LEN, MAX_COUNTRY_LEN, MAX_POSTAL_CODE_LEN, MAX_PROVINCE_LEN,
    MAX_TITLE_LEN,
};
use petadopt_core::types::DbId;
use petadopt_core::validation::{
    validate_latitude, validate_longitude, validate_max_len, validate_required, validate_text,
};
use petadopt_db::models::report::{CreateReport, PatchReport, Report};
use petadopt_db::repositories::ReportRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Length-bounded optional text fields shared by create and patch.
const BOUNDED_FIELDS: &[(&str, usize)] = &[
    ("city", MAX_CITY_LEN),
    ("province", MAX_PROVINCE_LEN),
    ("postal_code", MAX_POSTAL_CODE_LEN),
    ("country", MAX_COUNTRY_LEN),
    ("animal_name", MAX_ANIMAL_NAME_LEN),
    ("animal_breed", MAX_ANIMAL_BREED_LEN),
];

fn validate_bounded(values: [Option<&String>; 6]) -> AppResult<()> {
    for ((field, max), value) in BOUNDED_FIELDS.iter().zip(values) {
        if let Some(value) = value {
            validate_max_len(field, value, *max)?;
        }
    }
    Ok(())
}

fn validate_create_input(input: &CreateReport) -> AppResult<()> {
    validate_text("title", &input.title, MAX_TITLE_LEN)?;
    validate_required("description", &input.description)?;
    validate_report_type(&input.report_type)?;
    if let Some(status) = &input.status {
        validate_report_status(status)?;
    }
    if let Some(gender) = &input.animal_gender {
        validate_reported_gender(gender)?;
    }
    if let Some(lat) = input.latitude {
        validate_latitude(lat)?;
    }
    if let Some(lon) = input.longitude {
        validate_longitude(lon)?;
    }
    validate_bounded([
        input.city.as_ref(),
        input.province.as_ref(),
        input.postal_code.as_ref(),
        input.country.as_ref(),
        input.animal_name.as_ref(),
        input.animal_breed.as_ref(),
    ])
}

fn validate_patch_input(patch: &PatchReport) -> AppResult<()> {
    if let Some(title) = patch.title.as_value() {
        validate_text("title", title, MAX_TITLE_LEN)?;
    }
    if let Some(description) = patch.description.as_value() {
        validate_required("description", description)?;
    }
    if let Some(report_type) = patch.report_type.as_value() {
        validate_report_type(report_type)?;
    }
    if let Some(status) = patch.status.as_value() {
        validate_report_status(status)?;
    }
    if let Some(gender) = patch.animal_gender.as_value() {
        validate_reported_gender(gender)?;
    }
    if let Some(lat) = patch.latitude.as_value() {
        validate_latitude(*lat)?;
    }
    if let Some(lon) = patch.longitude.as_value() {
        validate_longitude(*lon)?;
    }
    validate_bounded([
        patch.city.as_value(),
        patch.province.as_value(),
        patch.postal_code.as_value(),
        patch.country.as_value(),
        patch.animal_name.as_value(),
        patch.animal_breed.as_value(),
    ])
}

/// POST /api/v1/reports
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateReport>,
) -> AppResult<(StatusCode, Json<Report>)> {
    validate_create_input(&input)?;
    let report = ReportRepo::create(&state.pool, &input).await?;
    tracing::info!(report_id = %report.id, report_type = %report.report_type, "Report filed");
    Ok((StatusCode::CREATED, Json(report)))
}

/// GET /api/v1/reports
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Report>>> {
    Ok(Json(ReportRepo::list(&state.pool).await?))
}

/// GET /api/v1/reports/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Report>> {
    let report = ReportRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Report", id))?;
    Ok(Json(report))
}

/// PUT|PATCH /api/v1/reports/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(patch): Json<PatchReport>,
) -> AppResult<Json<Report>> {
    validate_patch_input(&patch)?;
    let report = ReportRepo::update(&state.pool, id, &patch)
        .await?
        .ok_or_else(|| AppError::not_found("Report", id))?;
    tracing::info!(report_id = %id, status = %report.status, "Report updated");
    Ok(Json(report))
}

/// DELETE /api/v1/reports/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if ReportRepo::delete(&state.pool, id).await? {
        tracing::info!(report_id = %id, "Report deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Report", id))
    }
}
