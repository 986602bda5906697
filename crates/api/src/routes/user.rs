//! Route definitions for the `/users` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /                          -> list
/// POST   /                          -> create
/// GET    /by-auth-uid/{uid}         -> get_by_auth_uid
/// GET    /{id}                      -> get_by_id
/// PUT    /{id}                      -> update
/// PATCH  /{id}                      -> update
/// DELETE /{id}                      -> delete
/// GET    /{id}/animals              -> list_animals
/// GET    /{id}/shelters             -> list_shelters
/// GET    /{id}/foster-homes         -> list_foster_homes
/// GET    /{id}/adoption-requests    -> list_adoption_requests
/// GET    /{id}/reports              -> list_reports
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(user::list).post(user::create))
        .route("/by-auth-uid/{uid}", get(user::get_by_auth_uid))
        .route(
            "/{id}",
            get(user::get_by_id)
                .put(user::update)
                .patch(user::update)
                .delete(user::delete),
        )
        .route("/{id}/animals", get(user::list_animals))
        .route("/{id}/shelters", get(user::list_shelters))
        .route("/{id}/foster-homes", get(user::list_foster_homes))
        .route("/{id}/adoption-requests", get(user::list_adoption_requests))
        .route("/{id}/reports", get(user::list_reports))
}
