#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use bizdir_api::config::ServerConfig;
use bizdir_api::router::build_app_router;
use bizdir_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router, with all middleware layers, over the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub async fn insert_category(pool: &PgPool, name: &str, slug: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO categories (name, slug) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(slug)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn insert_business(
    pool: &PgPool,
    name: &str,
    category_id: Option<i64>,
    rating: f64,
    image_url: Option<&str>,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO businesses \
            (name, category_id, business_type, city, rating, latitude, longitude, image_url) \
         VALUES ($1, $2, 'service', 'Braga', $3, 41.55, -8.42, $4) \
         RETURNING id",
    )
    .bind(name)
    .bind(category_id)
    .bind(rating)
    .bind(image_url)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_image(pool: &PgPool, business_id: i64, url: &str) {
    sqlx::query("INSERT INTO business_images (business_id, image_url) VALUES ($1, $2)")
        .bind(business_id)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}
