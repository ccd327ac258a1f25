use bizdir_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `categories` table with the number of businesses filed
/// under it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub business_count: i64,
}
