use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;

use crate::config::DatabaseConfig;

#[derive(Debug, Error)]
pub enum DatabaseHealthError {
    #[error("Database ping timed out after {0:?}")]
    Timeout(Duration),

    #[error("Database ping failed: {0}")]
    Database(#[from] sqlx::Error),
}

/// Pings the database for the health endpoint. Nothing on the event path
/// touches it.
#[derive(Clone)]
pub struct HealthRepository {
    pool: PgPool,
    timeout: Duration,
}

impl HealthRepository {
    pub fn new(pool: PgPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }

    /// Creates the pool without connecting, so the service starts even when
    /// the database is down.
    pub fn connect_lazy(config: &DatabaseConfig) -> Self {
        let pool = PgPoolOptions::new()
            .max_connections(config.pool_size)
            .acquire_timeout(config.health_timeout)
            .idle_timeout(Duration::from_secs(30))
            .connect_lazy_with(config.connect_options());

        Self::new(pool, config.health_timeout)
    }

    pub async fn ping(&self) -> Result<(), DatabaseHealthError> {
        let query = sqlx::query("SELECT 1").execute(&self.pool);

        match tokio::time::timeout(self.timeout, query).await {
            Ok(result) => {
                result?;
                Ok(())
            }
            Err(_) => Err(DatabaseHealthError::Timeout(self.timeout)),
        }
    }
}
