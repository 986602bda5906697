//! Route definitions for the `/animals` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::animal;
use crate::state::AppState;

/// Routes mounted at `/animals`.
///
/// ```text
/// GET    /                          -> list (optional ?status=)
/// POST   /                          -> create
/// GET    /{id}                      -> get_by_id (with images)
/// PUT    /{id}                      -> update
/// PATCH  /{id}                      -> update
/// DELETE /{id}                      -> delete
/// GET    /{id}/images               -> list_images
/// GET    /{id}/adoption-requests    -> list_adoption_requests
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(animal::list).post(animal::create))
        .route(
            "/{id}",
            get(animal::get_by_id)
                .put(animal::update)
                .patch(animal::update)
                .delete(animal::delete),
        )
        .route("/{id}/images", get(animal::list_images))
        .route(
            "/{id}/adoption-requests",
            get(animal::list_adoption_requests),
        )
}
