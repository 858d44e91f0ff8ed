//! User collection reads.

use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::user::User;

/// Fetch every user account.
pub async fn find_all(pool: &PgPool) -> Result<Vec<User>, AppError> {
    let rows = sqlx::query_as::<_, User>(
        "SELECT id, email, display_name, created_at FROM users ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
