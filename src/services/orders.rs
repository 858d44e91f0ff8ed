//! Order collection reads.

use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::order::Order;

/// Fetch every order with its embedded line items.
pub async fn find_all(pool: &PgPool) -> Result<Vec<Order>, AppError> {
    let rows = sqlx::query_as::<_, Order>(
        "SELECT id, user_id, status, items, created_at FROM orders ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
