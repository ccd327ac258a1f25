//! Handlers for the `/businesses` resource.

use axum::extract::{Path, State};
use axum::Json;
use bizdir_core::error::CoreError;
use bizdir_core::types::DbId;
use bizdir_db::models::business::{BusinessDetail, BusinessWithCategory};
use bizdir_db::repositories::business_repo::TOP_RATED_LIMIT;
use bizdir_db::repositories::{BusinessImageRepo, BusinessRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/businesses
///
/// Every business with its category name and slug, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<BusinessWithCategory>>> {
    let businesses = BusinessRepo::list(&state.pool).await?;
    Ok(Json(businesses))
}

/// GET /api/businesses/top-rated
pub async fn list_top_rated(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<BusinessWithCategory>>> {
    let businesses = BusinessRepo::list_top_rated(&state.pool, TOP_RATED_LIMIT).await?;
    Ok(Json(businesses))
}

/// GET /api/categories/{slug}/businesses
///
/// Businesses in a category, highest rating first. An unknown slug is not
/// an error; it returns an empty list.
pub async fn list_by_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Vec<BusinessWithCategory>>> {
    let businesses = BusinessRepo::list_by_category_slug(&state.pool, &slug).await?;
    Ok(Json(businesses))
}

/// GET /api/businesses/{id}
///
/// A single business with `images` = primary image followed by the gallery.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BusinessDetail>> {
    let business = BusinessRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Business",
            id,
        }))?;
    let gallery = BusinessImageRepo::list_urls_by_business(&state.pool, id).await?;
    Ok(Json(BusinessDetail::new(business, gallery)))
}
