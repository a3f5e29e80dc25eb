use crate::errors::ServiceError;
use async_trait::async_trait;
use sea_orm::DatabaseConnection;

pub mod warehouse_queries;

/// Read-only counterpart of [`crate::commands::Command`]
#[async_trait]
pub trait Query: Send + Sync {
    type Result: Send + Sync;

    /// Executes the query using the provided database pool.
    async fn execute(&self, db_pool: &DatabaseConnection) -> Result<Self::Result, ServiceError>;
}
