//! Order model with embedded line items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// Distinguished order status values. Statuses are stored as free text
/// (the set is owned by the order pipeline, not this service), so these
/// constants only name the two values the dashboard treats specially.
pub const STATUS_COMPLETED: &str = "COMPLETED";
pub const STATUS_PENDING: &str = "PENDING";

/// A single line item embedded in an order's `items` JSONB column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub product_id: i64,
    pub quantity: i32,
    pub unit_price_cents: i64,
}

/// Order row. `status` and `items` are nullable: legacy rows predate both
/// columns and must still render.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: i64,
    pub user_id: Option<i64>,
    pub status: Option<String>,
    pub items: Option<Json<Vec<OrderItem>>>,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Number of line items, counting a missing `items` column as zero.
    pub fn item_count(&self) -> usize {
        self.items.as_ref().map(|items| items.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn order(items: Option<Vec<OrderItem>>) -> Order {
        Order {
            id: 1,
            user_id: None,
            status: Some(STATUS_PENDING.to_string()),
            items: items.map(Json),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn item_count_of_missing_items_is_zero() {
        assert_eq!(order(None).item_count(), 0);
    }

    #[test]
    fn item_count_counts_line_items() {
        let items = vec![
            OrderItem {
                product_id: 10,
                quantity: 2,
                unit_price_cents: 1999,
            },
            OrderItem {
                product_id: 11,
                quantity: 1,
                unit_price_cents: 499,
            },
        ];
        assert_eq!(order(Some(items)).item_count(), 2);
    }

    #[test]
    fn items_serialize_as_plain_array() {
        let json = serde_json::to_value(order(Some(vec![OrderItem {
            product_id: 10,
            quantity: 1,
            unit_price_cents: 100,
        }])))
        .unwrap();
        assert!(json["items"].is_array());
        assert_eq!(json["items"][0]["product_id"], 10);
    }
}
