//! Route definitions for the `/businesses` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{business, validation};
use crate::state::AppState;

/// Routes mounted at `/businesses`.
///
/// ```text
/// GET    /              -> list
/// GET    /top-rated     -> list_top_rated
/// POST   /validate      -> validate
/// GET    /{id}          -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(business::list))
        .route("/top-rated", get(business::list_top_rated))
        .route("/validate", post(validation::validate))
        .route("/{id}", get(business::get_by_id))
}
