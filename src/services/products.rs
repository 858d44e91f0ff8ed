//! Product collection reads.

use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::product::Product;

/// Fetch every product.
pub async fn find_all(pool: &PgPool) -> Result<Vec<Product>, AppError> {
    let rows = sqlx::query_as::<_, Product>(
        "SELECT id, store_id, name, price_cents, created_at FROM products ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
