//! Product catalog model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub store_id: i64,
    pub name: String,
    pub price_cents: i64,
    pub created_at: DateTime<Utc>,
}
