//! Overview aggregation across the four collections.
//!
//! One pass issues the four reads concurrently and waits for all of them
//! to settle. Each source resolves independently: a failed read is logged,
//! contributes its zero value, and is reported in the returned state so
//! the client can say which subsystem is missing. The pass runs inside the
//! request future, so dropping the request drops the in-flight queries.

use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::dashboard::{CountSummary, DashboardState, DataSource, SourceFailure};
use crate::models::order::Order;
use crate::models::product::Product;
use crate::models::store::Store;
use crate::models::user::User;
use crate::services::{orders, products, stores, users};

/// Maximum entries in the recent-activity feed.
const RECENT_ORDERS_LIMIT: usize = 5;

/// Run one aggregation pass. Infallible: degraded sources end up in
/// `DashboardState::failures` rather than an error.
pub async fn load(pool: &PgPool) -> DashboardState {
    let (store_rows, product_rows, order_rows, user_rows) = tokio::join!(
        stores::find_all(pool),
        products::find_all(pool),
        orders::find_all(pool),
        users::find_all(pool),
    );
    aggregate(store_rows, product_rows, order_rows, user_rows)
}

/// Fold the four settled read results into a dashboard state.
pub fn aggregate(
    stores: Result<Vec<Store>, AppError>,
    products: Result<Vec<Product>, AppError>,
    orders: Result<Vec<Order>, AppError>,
    users: Result<Vec<User>, AppError>,
) -> DashboardState {
    let mut failures = Vec::new();

    let stores = settle(stores, DataSource::Stores, &mut failures);
    let products = settle(products, DataSource::Products, &mut failures);
    let orders = settle(orders, DataSource::Orders, &mut failures);
    let users = settle(users, DataSource::Users, &mut failures);

    let counts = CountSummary {
        stores: stores.len() as u64,
        products: products.len() as u64,
        orders: orders.len() as u64,
        users: users.len() as u64,
    };

    DashboardState {
        loading: false,
        counts,
        recent_orders: recent(orders),
        failures,
    }
}

/// Resolve one source, degrading a failure to the empty collection.
fn settle<T>(
    result: Result<Vec<T>, AppError>,
    kind: DataSource,
    failures: &mut Vec<SourceFailure>,
) -> Vec<T> {
    match result {
        Ok(rows) => rows,
        Err(err) => {
            tracing::error!(source = %kind, error = %err, "Dashboard source failed to load");
            failures.push(SourceFailure {
                kind,
                message: err.to_string(),
            });
            Vec::new()
        }
    }
}

/// Newest orders first, bounded to the feed size. Ties on `created_at`
/// stay in whatever order the read returned them.
fn recent(mut orders: Vec<Order>) -> Vec<Order> {
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    orders.truncate(RECENT_ORDERS_LIMIT);
    orders
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use sqlx::types::Json;

    use crate::models::order::OrderItem;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, d, 0, 0, 0).unwrap()
    }

    fn store(id: i64) -> Store {
        Store {
            id,
            name: format!("Store {id}"),
            location: None,
            created_at: day(1),
        }
    }

    fn product(id: i64) -> Product {
        Product {
            id,
            store_id: 1,
            name: format!("Product {id}"),
            price_cents: 999,
            created_at: day(1),
        }
    }

    fn user(id: i64) -> User {
        User {
            id,
            email: format!("user{id}@example.com"),
            display_name: format!("User {id}"),
            created_at: day(1),
        }
    }

    fn order(id: i64, created: DateTime<Utc>) -> Order {
        Order {
            id,
            user_id: Some(1),
            status: Some("PENDING".to_string()),
            items: Some(Json(vec![OrderItem {
                product_id: 1,
                quantity: 1,
                unit_price_cents: 999,
            }])),
            created_at: created,
        }
    }

    fn many<T>(n: i64, f: impl Fn(i64) -> T) -> Result<Vec<T>, AppError> {
        Ok((1..=n).map(f).collect())
    }

    fn db_error() -> AppError {
        AppError::Database(sqlx::Error::PoolClosed)
    }

    #[test]
    fn counts_match_collection_sizes() {
        let state = aggregate(
            many(3, store),
            many(10, product),
            Ok(vec![order(1, day(1)), order(2, day(2))]),
            many(7, user),
        );
        assert!(!state.loading);
        assert_eq!(
            state.counts,
            CountSummary {
                stores: 3,
                products: 10,
                orders: 2,
                users: 7,
            }
        );
        assert!(state.failures.is_empty());
    }

    #[test]
    fn recent_orders_newest_first() {
        let state = aggregate(
            Ok(Vec::new()),
            Ok(Vec::new()),
            Ok(vec![order(1, day(1)), order(2, day(2))]),
            Ok(Vec::new()),
        );
        let ids: Vec<i64> = state.recent_orders.iter().map(|o| o.id).collect();
        assert_eq!(ids, [2, 1]);
    }

    #[test]
    fn recent_orders_truncated_to_five() {
        let rows: Vec<Order> = [3, 7, 1, 6, 2, 5, 4]
            .into_iter()
            .map(|d| order(d as i64, day(d)))
            .collect();
        let state = aggregate(Ok(Vec::new()), Ok(Vec::new()), Ok(rows), Ok(Vec::new()));
        assert_eq!(state.counts.orders, 7);
        let ids: Vec<i64> = state.recent_orders.iter().map(|o| o.id).collect();
        assert_eq!(ids, [7, 6, 5, 4, 3]);
    }

    #[test]
    fn failed_source_degrades_alone() {
        let state = aggregate(
            many(3, store),
            Err(db_error()),
            Ok(vec![order(1, day(1))]),
            many(7, user),
        );
        assert_eq!(state.counts.stores, 3);
        assert_eq!(state.counts.products, 0);
        assert_eq!(state.counts.orders, 1);
        assert_eq!(state.counts.users, 7);
        assert_eq!(state.recent_orders.len(), 1);
        assert_eq!(state.failures.len(), 1);
        assert_eq!(state.failures[0].kind, DataSource::Products);
    }

    #[test]
    fn failed_orders_source_empties_the_feed() {
        let state = aggregate(many(1, store), many(1, product), Err(db_error()), many(1, user));
        assert_eq!(state.counts.orders, 0);
        assert!(state.recent_orders.is_empty());
        assert_eq!(state.failures.len(), 1);
        assert_eq!(state.failures[0].kind, DataSource::Orders);
    }

    #[test]
    fn all_sources_failing_zeroes_everything() {
        let state = aggregate(
            Err(db_error()),
            Err(db_error()),
            Err(db_error()),
            Err(db_error()),
        );
        assert_eq!(state.counts, CountSummary::default());
        assert!(state.recent_orders.is_empty());
        let kinds: Vec<DataSource> = state.failures.iter().map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            [
                DataSource::Stores,
                DataSource::Products,
                DataSource::Orders,
                DataSource::Users,
            ]
        );
    }
}
