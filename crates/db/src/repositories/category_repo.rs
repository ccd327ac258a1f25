//! Repository for the `categories` table.

use sqlx::PgPool;

use crate::models::category::Category;

/// Read queries over categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List every category alphabetically, with its business count.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>(
            "SELECT c.id, c.name, c.slug, COUNT(b.id) AS business_count \
             FROM categories c \
             LEFT JOIN businesses b ON b.category_id = c.id \
             GROUP BY c.id \
             ORDER BY c.name",
        )
        .fetch_all(pool)
        .await
    }
}
