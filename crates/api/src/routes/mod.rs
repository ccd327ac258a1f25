pub mod business;
pub mod category;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /businesses                           list, newest first (GET)
/// /businesses/top-rated                 twelve highest rated (GET)
/// /businesses/validate                  dry-run record validation (POST)
/// /businesses/{id}                      single business with images (GET)
///
/// /categories                           list, alphabetical (GET)
/// /categories/{slug}/businesses         businesses in category (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/businesses", business::router())
        .nest("/categories", category::router())
}
