use axum::routing::get;
use axum::Router;

use crate::handlers::report;
use crate::state::AppState;

/// Routes mounted at `/reports`: list/create at the root, get/update/delete by id.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(report::list).post(report::create))
        .route(
            "/{id}",
            get(report::get_by_id)
                .put(report::update)
                .patch(report::update)
                .delete(report::delete),
        )
}
