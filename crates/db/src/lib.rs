use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{Sqlite, SqliteConnectOptions, SqlitePoolOptions};
use sqlx::Transaction;

pub mod models;
pub mod repositories;
pub mod schema;
pub mod seeder;

pub type DbPool = sqlx::SqlitePool;

/// How long a connection waits on another writer's lock before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors raised while opening the store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),
}

/// Create a connection pool from a database URL.
///
/// Every connection has foreign key enforcement switched on, and the
/// database file is created when it does not exist yet. Connections wait up
/// to [`BUSY_TIMEOUT`] for a competing writer.
pub async fn create_pool(database_url: &str) -> Result<DbPool, StoreError> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(StoreError::Unavailable)?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(BUSY_TIMEOUT);

    SqlitePoolOptions::new()
        .max_connections(8)
        .connect_with(options)
        .await
        .map_err(StoreError::Unavailable)
}

/// Round-trip a trivial query to prove the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Begin a transaction that takes the database write lock up front.
///
/// A deferred transaction that reads before it writes cannot be upgraded
/// while another connection writes; SQLite fails it with `SQLITE_BUSY`
/// instead of waiting. `BEGIN IMMEDIATE` queues on the busy timeout.
pub async fn begin_write(pool: &DbPool) -> Result<Transaction<'static, Sqlite>, sqlx::Error> {
    pool.begin_with("BEGIN IMMEDIATE").await
}
