//! Repository for the `businesses` table.

use bizdir_core::types::DbId;
use sqlx::PgPool;

use crate::models::business::BusinessWithCategory;

/// How many rows the top-rated listing returns.
pub const TOP_RATED_LIMIT: i64 = 12;

/// Business columns joined with the category name and slug.
const SELECT_WITH_CATEGORY: &str = "SELECT \
        b.id, b.name, b.category_id, b.business_type, b.city, \
        b.address, b.description, b.rating, b.latitude, b.longitude, \
        b.image_url, b.created_at, \
        c.name AS category_name, \
        c.slug AS category_slug \
     FROM businesses b \
     LEFT JOIN categories c ON c.id = b.category_id";

/// Read queries over businesses.
pub struct BusinessRepo;

impl BusinessRepo {
    /// List every business, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<BusinessWithCategory>, sqlx::Error> {
        let query = format!("{SELECT_WITH_CATEGORY} ORDER BY b.created_at DESC, b.id DESC");
        sqlx::query_as::<_, BusinessWithCategory>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the businesses filed under the category with `slug`, highest
    /// rating first. An unknown slug yields an empty list.
    pub async fn list_by_category_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Vec<BusinessWithCategory>, sqlx::Error> {
        let query =
            format!("{SELECT_WITH_CATEGORY} WHERE c.slug = $1 ORDER BY b.rating DESC, b.id");
        sqlx::query_as::<_, BusinessWithCategory>(&query)
            .bind(slug)
            .fetch_all(pool)
            .await
    }

    /// List the highest-rated businesses, at most `limit` rows.
    pub async fn list_top_rated(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<BusinessWithCategory>, sqlx::Error> {
        let query = format!("{SELECT_WITH_CATEGORY} ORDER BY b.rating DESC, b.id LIMIT $1");
        sqlx::query_as::<_, BusinessWithCategory>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Find a business by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<BusinessWithCategory>, sqlx::Error> {
        let query = format!("{SELECT_WITH_CATEGORY} WHERE b.id = $1");
        sqlx::query_as::<_, BusinessWithCategory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
