use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    tracing::debug!("Database responded to health check");
    Ok(())
}

/// Confirm the `product_category` table can be read.
///
/// Fails in the same situations as the category page's listing query, so a
/// reachable database without the table is reported as unhealthy.
pub async fn schema_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1 FROM product_category LIMIT 1")
        .fetch_optional(pool)
        .await?;
    Ok(())
}
