use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    commands::Command,
    db::DbPool,
    errors::ServiceError,
    models::warehouse::Model,
    repositories::WarehouseRepository,
    services::warehouse_status::{check_transition, parse_requested_status},
};

/// Publishes or unpublishes a listing.
#[derive(Debug, Clone)]
pub struct UpdateWarehouseStatusCommand {
    pub id: Uuid,
    pub status: String,
}

impl UpdateWarehouseStatusCommand {
    pub fn new(id: Uuid, status: impl Into<String>) -> Self {
        Self {
            id,
            status: status.into(),
        }
    }
}

#[async_trait]
impl Command for UpdateWarehouseStatusCommand {
    type Result = Model;

    #[instrument(skip(self, db_pool), fields(id = %self.id, requested = %self.status))]
    async fn execute(&self, db_pool: Arc<DbPool>) -> Result<Self::Result, ServiceError> {
        let requested = parse_requested_status(&self.status)?;
        let repo = WarehouseRepository::new(db_pool);
        let current = repo.get(self.id).await?;

        if let Err(e) = check_transition(current.status, requested) {
            warn!(from = %current.status, to = %requested, "Rejected warehouse status change");
            return Err(e);
        }

        let updated = repo.set_status(self.id, requested, Utc::now()).await?;
        info!(from = %current.status, to = %updated.status, "Warehouse status changed");
        Ok(updated)
    }
}
