pub mod schema;

use anyhow::Result;
use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;

use crate::config::AppConfig;

/// Creates the database on demand, then hands back the main pool.
/// Two-phase connect: a short-lived serverwide connection for CREATE DATABASE,
/// then the pooled connection bound to the application schema.
pub async fn initialize_database(config: &AppConfig) -> Result<MySqlPool> {
    let bootstrap = MySqlPoolOptions::new()
        .max_connections(1)
        .connect(&config.server_url())
        .await?;

    // Identifiers cannot be bound as parameters; the name comes from our own
    // configuration, not from a request.
    sqlx::query(&format!(
        "CREATE DATABASE IF NOT EXISTS {}",
        config.database
    ))
    .execute(&bootstrap)
    .await?;
    bootstrap.close().await;
    tracing::info!(database = %config.database, "database created or already exists");

    let pool = MySqlPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url())
        .await?;
    tracing::info!("connected to MySQL");

    Ok(pool)
}
