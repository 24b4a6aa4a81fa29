use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::env;

/// Pool against `DATABASE_URL`, e.g. `sqlite://hotel_reservations.db?mode=rwc`.
pub async fn get_db_pool() -> Result<SqlitePool, sqlx::Error> {
    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://hotel_reservations.db?mode=rwc".to_string());

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
}
