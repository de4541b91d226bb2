pub mod errors;
pub mod models;
pub mod repo;

use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Open the pool and make sure the `users` table exists.
///
/// Each in-memory SQLite connection is its own database, so such URLs get a
/// single connection that is never recycled.
pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<SqlitePool> {
    let options = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections)
    };

    let pool = options.connect(database_url).await?;
    repo::create_user_table(&pool).await?;

    tracing::debug!(database_url, "Database ready");
    Ok(pool)
}

#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    connect("sqlite::memory:", 1).await.expect("in-memory database")
}
