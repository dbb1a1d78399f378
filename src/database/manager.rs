use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;

/// Errors from DatabaseManager
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Invalid sslmode: {0}")]
    InvalidSslMode(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Opens, checks and closes the PostgreSQL pool backing the book store.
pub struct DatabaseManager;

impl DatabaseManager {
    /// Connect using the configured credentials and verify the connection.
    pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
        let options = Self::connect_options(config)?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
            .connect_with(options)
            .await?;

        Self::health_check(&pool).await?;

        info!(
            "Connected to database {} on {}:{}",
            config.name, config.host, config.port
        );
        Ok(pool)
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check(pool: &PgPool) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(pool).await?;
        Ok(())
    }

    pub async fn close(pool: PgPool) {
        pool.close().await;
        info!("Closed database pool");
    }

    fn connect_options(config: &DatabaseConfig) -> Result<PgConnectOptions, DatabaseError> {
        let ssl_mode = PgSslMode::from_str(&config.ssl_mode)
            .map_err(|_| DatabaseError::InvalidSslMode(config.ssl_mode.clone()))?;

        Ok(PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.name)
            .ssl_mode(ssl_mode))
    }
}
