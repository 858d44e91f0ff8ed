//! Seed script for development — populates a fresh database with sample data.
//!
//! Usage: `cargo run --bin seed`
//!
//! Requires the `DATABASE_URL` environment variable (reads .env).

use chrono::{Duration, Utc};
use serde_json::json;
use sqlx::PgPool;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let db_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await?;

    // Run migrations first
    sqlx::migrate!("./migrations").run(&pool).await?;

    println!("=== Nexus Admin Seed Script ===");

    let already_seeded: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM stores)")
        .fetch_one(&pool)
        .await?;
    if already_seeded {
        println!("[skip] Database already contains stores, nothing to do");
        return Ok(());
    }

    seed_stores(&pool).await?;
    seed_products(&pool).await?;
    seed_users(&pool).await?;
    seed_orders(&pool).await?;

    println!("\n=== Seed complete! ===");

    Ok(())
}

async fn seed_stores(pool: &PgPool) -> anyhow::Result<()> {
    for (name, location) in [
        ("Downtown Flagship", Some("12 Market St")),
        ("Harbor Outlet", Some("3 Pier Rd")),
        ("Online", None),
    ] {
        sqlx::query("INSERT INTO stores (name, location) VALUES ($1, $2)")
            .bind(name)
            .bind(location)
            .execute(pool)
            .await?;
    }
    println!("[done] Seeded 3 stores");
    Ok(())
}

async fn seed_products(pool: &PgPool) -> anyhow::Result<()> {
    for (store_id, name, price_cents) in [
        (1i64, "Espresso Beans 1kg", 1899i64),
        (1, "Ceramic Mug", 1250),
        (2, "Cold Brew Bottle", 650),
        (2, "Gift Card", 2500),
        (3, "Subscription Box", 3999),
    ] {
        sqlx::query("INSERT INTO products (store_id, name, price_cents) VALUES ($1, $2, $3)")
            .bind(store_id)
            .bind(name)
            .bind(price_cents)
            .execute(pool)
            .await?;
    }
    println!("[done] Seeded 5 products");
    Ok(())
}

async fn seed_users(pool: &PgPool) -> anyhow::Result<()> {
    for (email, display_name) in [
        ("ada@example.com", "Ada Lovelace"),
        ("grace@example.com", "Grace Hopper"),
        ("alan@example.com", "Alan Turing"),
    ] {
        sqlx::query("INSERT INTO users (email, display_name) VALUES ($1, $2)")
            .bind(email)
            .bind(display_name)
            .execute(pool)
            .await?;
    }
    println!("[done] Seeded 3 users");
    Ok(())
}

async fn seed_orders(pool: &PgPool) -> anyhow::Result<()> {
    let now = Utc::now();
    let items = json!([
        {"product_id": 1, "quantity": 2, "unit_price_cents": 1899},
        {"product_id": 2, "quantity": 1, "unit_price_cents": 1250}
    ]);
    let single_item = json!([
        {"product_id": 3, "quantity": 1, "unit_price_cents": 650}
    ]);

    let rows: [(i64, Option<&str>, Option<&serde_json::Value>, i64); 6] = [
        (1, Some("COMPLETED"), Some(&items), 1),
        (2, Some("PENDING"), Some(&single_item), 2),
        (1, Some("COMPLETED"), Some(&single_item), 3),
        (3, Some("CANCELLED"), Some(&items), 5),
        (2, Some("PENDING"), None, 8),
        // Legacy import: no status, no items
        (3, None, None, 13),
    ];
    for (user_id, status, items, days_ago) in rows {
        sqlx::query(
            "INSERT INTO orders (user_id, status, items, created_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(user_id)
        .bind(status)
        .bind(items)
        .bind(now - Duration::days(days_ago))
        .execute(pool)
        .await?;
    }
    println!("[done] Seeded 6 orders");
    Ok(())
}
