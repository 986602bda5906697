use axum::routing::get;
use axum::Router;

use crate::handlers::adoption_request;
use crate::state::AppState;

/// Routes mounted at `/adoption-requests`: list/create at the root, get/update/delete by id.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(adoption_request::list).post(adoption_request::create))
        .route(
            "/{id}",
            get(adoption_request::get_by_id)
                .put(adoption_request::update)
                .patch(adoption_request::update)
                .delete(adoption_request::delete),
        )
}
