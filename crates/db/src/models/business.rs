//! Business row models.

use bizdir_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A `businesses` row joined with its (optional) category.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BusinessWithCategory {
    pub id: DbId,
    pub name: String,
    pub category_id: Option<DbId>,
    #[serde(rename = "type")]
    pub business_type: String,
    pub city: String,
    pub address: Option<String>,
    pub description: Option<String>,
    pub rating: f64,
    pub latitude: f64,
    pub longitude: f64,
    /// Primary image.
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub category_name: Option<String>,
    pub category_slug: Option<String>,
}

/// A single business with its primary image followed by its gallery.
#[derive(Debug, Clone, Serialize)]
pub struct BusinessDetail {
    #[serde(flatten)]
    pub business: BusinessWithCategory,
    /// `images[0]` is always the primary image, even when it is null.
    pub images: Vec<Option<String>>,
}

impl BusinessDetail {
    pub fn new(business: BusinessWithCategory, gallery: Vec<String>) -> Self {
        let images = std::iter::once(business.image_url.clone())
            .chain(gallery.into_iter().map(Some))
            .collect();
        Self { business, images }
    }
}
