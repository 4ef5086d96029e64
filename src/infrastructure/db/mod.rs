use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

pub type DbPool = Pool<Sqlite>;

/// Opens the SQLite pool. Foreign keys are enabled on every connection
/// so dangling relation ids fail creates instead of leaving orphan rows.
pub async fn connect_pool(database_url: &str) -> anyhow::Result<DbPool> {
    connect_pool_with(database_url, 10).await
}

pub async fn connect_pool_with(database_url: &str, max_connections: u32) -> anyhow::Result<DbPool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;
    Ok(pool)
}

pub async fn migrate(pool: &DbPool) -> anyhow::Result<()> {
    // Uses compile-time embedded migrations under ./migrations
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

pub mod repositories;
