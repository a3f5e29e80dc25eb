use std::sync::Arc;

use tracing::instrument;
use uuid::Uuid;

use crate::{
    commands::{
        warehouses::{
            CreateWarehouseCommand, DeleteWarehouseCommand, DeleteWarehouseResult,
            UpdateWarehouseCommand, UpdateWarehouseStatusCommand,
        },
        Command,
    },
    db::{DbPool, Page, PageRequest, WarehouseFilter},
    dto::WarehousePayload,
    errors::ServiceError,
    models::Warehouse,
    queries::{
        warehouse_queries::{GetWarehouseQuery, ListWarehousesQuery, SearchWarehousesQuery},
        Query,
    },
};

/// Entry point for every warehouse listing operation
#[derive(Clone)]
pub struct WarehouseService {
    db_pool: Arc<DbPool>,
}

impl WarehouseService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, page: PageRequest) -> Result<Page<Warehouse>, ServiceError> {
        ListWarehousesQuery { page }.execute(&self.db_pool).await
    }

    #[instrument(skip(self))]
    pub async fn search(
        &self,
        filter: WarehouseFilter,
        page: PageRequest,
    ) -> Result<Page<Warehouse>, ServiceError> {
        SearchWarehousesQuery { filter, page }
            .execute(&self.db_pool)
            .await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<Warehouse, ServiceError> {
        GetWarehouseQuery { id }.execute(&self.db_pool).await
    }

    #[instrument(skip(self, payload))]
    pub async fn create(&self, payload: WarehousePayload) -> Result<Warehouse, ServiceError> {
        CreateWarehouseCommand::new(payload)
            .execute(self.db_pool.clone())
            .await
    }

    #[instrument(skip(self, payload))]
    pub async fn update(
        &self,
        id: Uuid,
        payload: WarehousePayload,
    ) -> Result<Warehouse, ServiceError> {
        UpdateWarehouseCommand::new(id, payload)
            .execute(self.db_pool.clone())
            .await
    }

    #[instrument(skip(self))]
    pub async fn soft_delete(&self, id: Uuid) -> Result<DeleteWarehouseResult, ServiceError> {
        DeleteWarehouseCommand::new(id)
            .execute(self.db_pool.clone())
            .await
    }

    #[instrument(skip(self))]
    pub async fn change_status(&self, id: Uuid, status: &str) -> Result<Warehouse, ServiceError> {
        UpdateWarehouseStatusCommand::new(id, status)
            .execute(self.db_pool.clone())
            .await
    }
}
