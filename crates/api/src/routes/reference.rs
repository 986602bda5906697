use axum::routing::get;
use axum::Router;

use crate::handlers::reference;
use crate::state::AppState;

/// Routes mounted at `/animal-types`.
pub fn types_router() -> Router<AppState> {
    Router::new()
        .route("/", get(reference::list_types))
        .route("/{key}", get(reference::get_type))
}

/// Routes mounted at `/animal-sizes`.
pub fn sizes_router() -> Router<AppState> {
    Router::new()
        .route("/", get(reference::list_sizes))
        .route("/{key}", get(reference::get_size))
}
