//! Repository for the `business_images` gallery table.

use bizdir_core::types::DbId;
use sqlx::PgPool;

pub struct BusinessImageRepo;

impl BusinessImageRepo {
    /// Gallery image URLs for a business, in insertion order.
    pub async fn list_urls_by_business(
        pool: &PgPool,
        business_id: DbId,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT image_url FROM business_images WHERE business_id = $1 ORDER BY id",
        )
        .bind(business_id)
        .fetch_all(pool)
        .await
    }
}
