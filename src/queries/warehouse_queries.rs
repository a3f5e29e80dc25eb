use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QuerySelect};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::{
    db::{Page, PageRequest, WarehouseFilter},
    errors::ServiceError,
    models::warehouse::{Entity as WarehouseEntity, Model},
    queries::Query,
};

/// Fetches one listing by id, including inactive ones.
#[derive(Debug, Clone)]
pub struct GetWarehouseQuery {
    pub id: Uuid,
}

#[async_trait]
impl Query for GetWarehouseQuery {
    type Result = Model;

    async fn execute(&self, db_pool: &DatabaseConnection) -> Result<Self::Result, ServiceError> {
        WarehouseEntity::find_by_id(self.id)
            .one(db_pool)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Warehouse {} not found", self.id)))
    }
}

/// Visible listings, newest first.
#[derive(Debug, Clone, Default)]
pub struct ListWarehousesQuery {
    pub page: PageRequest,
}

#[async_trait]
impl Query for ListWarehousesQuery {
    type Result = Page<Model>;

    async fn execute(&self, db_pool: &DatabaseConnection) -> Result<Self::Result, ServiceError> {
        SearchWarehousesQuery {
            filter: WarehouseFilter::visible(),
            page: self.page,
        }
        .execute(db_pool)
        .await
    }
}

/// Visible listings matching a search term, state and/or city.
#[derive(Debug, Clone, Default)]
pub struct SearchWarehousesQuery {
    pub filter: WarehouseFilter,
    pub page: PageRequest,
}

#[async_trait]
impl Query for SearchWarehousesQuery {
    type Result = Page<Model>;

    #[instrument(skip(self, db_pool), fields(page = self.page.page(), limit = self.page.limit()))]
    async fn execute(&self, db_pool: &DatabaseConnection) -> Result<Self::Result, ServiceError> {
        let total = self.filter.select().count(db_pool).await?;
        if self.page.is_past_end(total) {
            debug!(total, "requested page is past the last warehouse");
            return Ok(Page::new(Vec::new(), total, self.page));
        }

        let items = self
            .filter
            .select()
            .offset(self.page.offset())
            .limit(self.page.limit())
            .all(db_pool)
            .await?;

        debug!(total, returned = items.len(), "warehouse page fetched");
        Ok(Page::new(items, total, self.page))
    }
}
