use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    commands::Command,
    db::DbPool,
    dto::WarehousePayload,
    errors::ServiceError,
    models::{
        warehouse::{generate_warehouse_id, Model},
        WarehouseImages, WarehouseStatus,
    },
    repositories::WarehouseRepository,
};

#[derive(Debug, Clone)]
pub struct CreateWarehouseCommand {
    pub payload: WarehousePayload,
}

impl CreateWarehouseCommand {
    pub fn new(payload: WarehousePayload) -> Self {
        Self { payload }
    }

    /// Validates the payload and builds the record to insert.
    pub fn build(&self, now: DateTime<Utc>) -> Result<Model, ServiceError> {
        let new = self.payload.validate_for_create()?;
        let warehouse_images = WarehouseImages::for_create(new.warehouse_images)?;

        Ok(Model {
            id: Uuid::new_v4(),
            warehouse_id: generate_warehouse_id(now),
            warehouse_name: new.warehouse_name,
            address1: new.address1,
            address2: new.address2,
            area_locality: new.area_locality,
            state: new.state,
            city: new.city,
            pincode: new.pincode,
            gstno: new.gstno,
            total_lot_area: new.total_lot_area,
            covered_area: new.covered_area,
            no_of_docs: new.no_of_docs,
            no_of_gate: new.no_of_gate,
            storage_height: new.storage_height,
            parking_area: new.parking_area,
            status: WarehouseStatus::Unpublish,
            warehouse_images,
            created_at: now,
            updated_at: now,
        })
    }
}

#[async_trait]
impl Command for CreateWarehouseCommand {
    type Result = Model;

    #[instrument(skip(self, db_pool))]
    async fn execute(&self, db_pool: Arc<DbPool>) -> Result<Self::Result, ServiceError> {
        let warehouse = self.build(Utc::now())?;
        let created = WarehouseRepository::new(db_pool).insert(warehouse).await?;

        info!(
            id = %created.id,
            warehouse_id = %created.warehouse_id,
            images = created.warehouse_images.as_slice().len(),
            "Warehouse created"
        );
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn payload() -> WarehousePayload {
        WarehousePayload {
            warehouse_name: Some("North Hub".into()),
            address1: Some("12 Dock Road".into()),
            area_locality: Some("Peenya".into()),
            state: Some("Karnataka".into()),
            city: Some("Bengaluru".into()),
            total_lot_area: Some(1200.0.into()),
            covered_area: Some(800.0.into()),
            warehouse_images: Some(vec!["/uploads/a.jpg".into(), "/uploads/b.jpg".into()]),
            ..Default::default()
        }
    }

    #[test]
    fn new_records_start_unpublished() {
        let now = Utc::now();
        let model = CreateWarehouseCommand::new(payload()).build(now).unwrap();
        assert_eq!(model.status, WarehouseStatus::Unpublish);
        assert_eq!(model.warehouse_images.as_slice().len(), 2);
        assert_eq!(model.created_at, now);
        assert_eq!(model.updated_at, now);
        assert!(model.warehouse_id.starts_with("WH-"));
    }

    #[test]
    fn five_images_are_rejected() {
        let mut p = payload();
        p.warehouse_images = Some((0..5).map(|i| format!("/uploads/{i}.jpg")).collect());
        assert_matches!(
            CreateWarehouseCommand::new(p).build(Utc::now()),
            Err(ServiceError::ValidationError(v)) if v.invalid[0].field == "warehouseImages"
        );
    }
}
