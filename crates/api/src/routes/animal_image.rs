use axum::routing::get;
use axum::Router;

use crate::handlers::animal_image;
use crate::state::AppState;

/// Routes mounted at `/animal-images`: list/create at the root, get/update/delete by id.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(animal_image::list).post(animal_image::create))
        .route(
            "/{id}",
            get(animal_image::get_by_id)
                .put(animal_image::update)
                .patch(animal_image::update)
                .delete(animal_image::delete),
        )
}
