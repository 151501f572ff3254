use std::time::Duration;

use sqlx::{mysql::MySqlPoolOptions, MySqlPool};
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;

/// Errors from the data-access layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Procedure {procedure} returned no rows")]
    EmptyResult { procedure: &'static str },

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

pub struct DatabaseManager;

impl DatabaseManager {
    /// Build the shared pool. Connections open on first use, are acquired per
    /// call and go back to the pool when the call (or its transaction) ends.
    pub fn connect_lazy(config: &DatabaseConfig) -> Result<MySqlPool, DatabaseError> {
        if config.url.is_empty() {
            return Err(DatabaseError::ConfigMissing("DATABASE_URL"));
        }

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
            .connect_lazy(&config.url)?;

        info!("Created database pool ({} max connections)", config.max_connections);
        Ok(pool)
    }
}
