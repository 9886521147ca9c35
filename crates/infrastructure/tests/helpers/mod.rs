#![allow(dead_code)]

pub mod dns_server_mock;

use cascade_dns_infrastructure::database::run_migrations;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

pub use dns_server_mock::{MockBehavior, MockDnsServer};

/// In-memory store with the production schema. One connection, since every
/// `sqlite::memory:` connection is its own database.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    run_migrations(&pool).await.unwrap();
    pool
}
