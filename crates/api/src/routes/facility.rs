//! Route definitions shared by `/shelters` and `/foster-homes`.

use axum::routing::get;
use axum::Router;

use crate::handlers::facility::{self, FacilityKind};
use crate::state::AppState;

/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /search?name=      -> search
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// PATCH  /{id}              -> update
/// DELETE /{id}              -> delete
/// GET    /{id}/animals      -> list_animals
/// ```
pub fn router<K: FacilityKind>() -> Router<AppState> {
    Router::new()
        .route("/", get(facility::list::<K>).post(facility::create::<K>))
        .route("/search", get(facility::search::<K>))
        .route(
            "/{id}",
            get(facility::get_by_id::<K>)
                .put(facility::update::<K>)
                .patch(facility::update::<K>)
                .delete(facility::delete::<K>),
        )
        .route("/{id}/animals", get(facility::list_animals::<K>))
}
