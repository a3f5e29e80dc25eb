use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    commands::Command,
    db::DbPool,
    errors::ServiceError,
    repositories::WarehouseRepository,
    services::warehouse_status::soft_delete_target,
};

/// Soft delete: moves a listing to `in_active`. Rows are never removed.
#[derive(Debug, Clone)]
pub struct DeleteWarehouseCommand {
    pub id: Uuid,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteWarehouseResult {
    pub id: Uuid,
    /// `false` when the listing was already inactive and nothing was written
    pub changed: bool,
}

impl DeleteWarehouseCommand {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[async_trait]
impl Command for DeleteWarehouseCommand {
    type Result = DeleteWarehouseResult;

    #[instrument(skip(self, db_pool), fields(id = %self.id))]
    async fn execute(&self, db_pool: Arc<DbPool>) -> Result<Self::Result, ServiceError> {
        let repo = WarehouseRepository::new(db_pool);
        let current = repo.get(self.id).await?;

        let Some(target) = soft_delete_target(current.status) else {
            info!("Warehouse already inactive");
            return Ok(DeleteWarehouseResult {
                id: self.id,
                changed: false,
            });
        };

        repo.set_status(self.id, target, Utc::now()).await?;
        info!(from = %current.status, "Warehouse inactivated");

        Ok(DeleteWarehouseResult {
            id: self.id,
            changed: true,
        })
    }
}
