use async_trait::async_trait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::config::DatabaseConfig;

/// Opens a database handle for a single call and takes it back afterwards.
///
/// Every handle returned by `connect` must be passed to `release`, whatever
/// the outcome of the work done with it.
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self) -> Result<DatabaseConnection, DbErr>;

    async fn release(&self, db: DatabaseConnection) -> Result<(), DbErr>;
}

/// Connector that dials MySQL with a single-connection handle per call
#[derive(Clone)]
pub struct MySqlConnector {
    options: ConnectOptions,
}

impl MySqlConnector {
    pub fn new(config: &DatabaseConfig) -> Self {
        let mut options = ConnectOptions::new(config.url.clone());
        options
            .max_connections(1)
            .min_connections(0)
            .connect_timeout(config.connect_timeout)
            .acquire_timeout(config.connect_timeout)
            .sqlx_logging(config.logging);

        Self { options }
    }
}

#[async_trait]
impl Connector for MySqlConnector {
    async fn connect(&self) -> Result<DatabaseConnection, DbErr> {
        Database::connect(self.options.clone()).await
    }

    async fn release(&self, db: DatabaseConnection) -> Result<(), DbErr> {
        db.close().await
    }
}
