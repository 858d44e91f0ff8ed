//! Store collection reads.

use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::store::Store;

/// Fetch every store.
pub async fn find_all(pool: &PgPool) -> Result<Vec<Store>, AppError> {
    let rows = sqlx::query_as::<_, Store>(
        "SELECT id, name, location, created_at FROM stores ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
