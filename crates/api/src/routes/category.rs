//! Route definitions for the `/categories` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{business, category};
use crate::state::AppState;

/// Routes mounted at `/categories`.
///
/// ```text
/// GET    /                     -> list
/// GET    /{slug}/businesses    -> business::list_by_category
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(category::list))
        .route("/{slug}/businesses", get(business::list_by_category))
}
