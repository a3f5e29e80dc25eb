use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    DatabaseConnection, DbErr, EntityTrait,
};
use std::sync::Arc;
use tracing::{debug, error};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::models::warehouse::{ActiveModel, Entity as Warehouse, Model};
use crate::models::WarehouseStatus;
use crate::repositories::Repository;

use super::BaseRepository;

pub(crate) fn not_found(id: Uuid) -> ServiceError {
    ServiceError::NotFound(format!("Warehouse {} not found", id))
}

fn storage_error(op: &str, id: Option<Uuid>, e: DbErr) -> ServiceError {
    match (e, id) {
        (DbErr::RecordNotUpdated, Some(id)) => not_found(id),
        (e, _) => {
            error!(operation = op, error = %e, "warehouse storage operation failed");
            ServiceError::DatabaseError(e)
        }
    }
}

/// Row access for the `warehouses` table
#[derive(Debug, Clone)]
pub struct WarehouseRepository {
    base: BaseRepository,
}

impl WarehouseRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find a warehouse by primary key, whatever its status
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Model>, ServiceError> {
        Warehouse::find_by_id(id)
            .one(self.base.get_db())
            .await
            .map_err(|e| storage_error("find_by_id", None, e))
    }

    /// Like [`WarehouseRepository::find_by_id`] but a missing row is an error
    pub async fn get(&self, id: Uuid) -> Result<Model, ServiceError> {
        self.find_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    pub async fn insert(&self, warehouse: Model) -> Result<Model, ServiceError> {
        let id = warehouse.id;
        debug!(%id, warehouse_id = %warehouse.warehouse_id, "inserting warehouse");
        ActiveModel::from(warehouse)
            .reset_all()
            .insert(self.base.get_db())
            .await
            .map_err(|e| storage_error("insert", None, e))
    }

    /// Writes every column of `warehouse` over the stored row except
    /// `status`, which only [`WarehouseRepository::set_status`] changes.
    ///
    /// The returned model carries the stored status.
    pub async fn save(&self, warehouse: Model) -> Result<Model, ServiceError> {
        let id = warehouse.id;
        debug!(%id, "saving warehouse");
        let mut active = ActiveModel::from(warehouse).reset_all();
        active.status = NotSet;
        active
            .update(self.base.get_db())
            .await
            .map_err(|e| storage_error("save", Some(id), e))
    }

    /// Updates only the status and `updated_at` columns
    pub async fn set_status(
        &self,
        id: Uuid,
        status: WarehouseStatus,
        now: DateTime<Utc>,
    ) -> Result<Model, ServiceError> {
        let active = ActiveModel {
            id: Set(id),
            status: Set(status),
            updated_at: Set(now),
            ..Default::default()
        };
        active
            .update(self.base.get_db())
            .await
            .map_err(|e| storage_error("set_status", Some(id), e))
    }
}
