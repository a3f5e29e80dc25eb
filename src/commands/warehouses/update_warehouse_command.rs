use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    commands::Command,
    db::DbPool,
    dto::{WarehousePatch, WarehousePayload},
    errors::ServiceError,
    models::warehouse::Model,
    repositories::WarehouseRepository,
};

/// Partial update of a listing's fields. New images are appended.
///
/// Status is never touched here, and neither are the id, public code or
/// creation time. Inactive listings may still be edited.
#[derive(Debug, Clone)]
pub struct UpdateWarehouseCommand {
    pub id: Uuid,
    pub payload: WarehousePayload,
}

fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

impl UpdateWarehouseCommand {
    pub fn new(id: Uuid, payload: WarehousePayload) -> Self {
        Self { id, payload }
    }

    /// Computes the updated record from the current one without touching storage.
    pub fn apply(&self, current: &Model, now: DateTime<Utc>) -> Result<Model, ServiceError> {
        let patch: WarehousePatch = self.payload.validate_for_update()?;
        let mut next = current.clone();

        merge(&mut next.warehouse_name, patch.warehouse_name);
        merge(&mut next.address1, patch.address1);
        merge(&mut next.address2, patch.address2);
        merge(&mut next.area_locality, patch.area_locality);
        merge(&mut next.state, patch.state);
        merge(&mut next.city, patch.city);
        merge(&mut next.pincode, patch.pincode);
        merge(&mut next.gstno, patch.gstno);
        merge(&mut next.total_lot_area, patch.total_lot_area);
        merge(&mut next.covered_area, patch.covered_area);
        merge(&mut next.no_of_docs, patch.no_of_docs);
        merge(&mut next.no_of_gate, patch.no_of_gate);
        merge(&mut next.storage_height, patch.storage_height);
        merge(&mut next.parking_area, patch.parking_area);

        next.warehouse_images = current.warehouse_images.appended(patch.new_images);
        next.updated_at = now;
        Ok(next)
    }
}

#[async_trait]
impl Command for UpdateWarehouseCommand {
    type Result = Model;

    #[instrument(skip(self, db_pool), fields(id = %self.id))]
    async fn execute(&self, db_pool: Arc<DbPool>) -> Result<Self::Result, ServiceError> {
        let repo = WarehouseRepository::new(db_pool);
        let current = repo.get(self.id).await?;
        let next = self.apply(&current, Utc::now())?;
        let saved = repo.save(next).await?;

        info!(
            id = %saved.id,
            images = saved.warehouse_images.as_slice().len(),
            "Warehouse updated"
        );
        Ok(saved)
    }
}
