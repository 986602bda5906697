pub mod adoption_request;
pub mod animal;
pub mod animal_image;
pub mod facility;
pub mod health;
pub mod reference;
pub mod report;
pub mod user;

use axum::Router;

use crate::handlers::facility::{FosterHomes, Shelters};
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /users                 users and their listings, requests, reports
/// /shelters              shelters, name search, housed animals
/// /foster-homes          foster homes, name search, housed animals
/// /animals               listings (?status=), images, adoption requests
/// /animal-images         images
/// /adoption-requests     adoption requests
/// /reports               lost/found/abuse reports
/// /animal-types          read-only lookup
/// /animal-sizes          read-only lookup
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", user::router())
        .nest("/shelters", facility::router::<Shelters>())
        .nest("/foster-homes", facility::router::<FosterHomes>())
        .nest("/animals", animal::router())
        .nest("/animal-images", animal_image::router())
        .nest("/adoption-requests", adoption_request::router())
        .nest("/reports", report::router())
        .nest("/animal-types", reference::types_router())
        .nest("/animal-sizes", reference::sizes_router())
}
