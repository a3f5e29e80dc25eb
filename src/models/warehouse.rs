use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use super::warehouse_images::{WarehouseImages, MAX_WAREHOUSE_IMAGES};

/// Publication state of a warehouse listing.
///
/// `InActive` is the soft-deleted state: it is only reachable through a
/// soft delete and nothing transitions out of it.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Default,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum WarehouseStatus {
    #[default]
    #[sea_orm(string_value = "unpublish")]
    #[serde(rename = "unpublish")]
    #[strum(serialize = "unpublish")]
    Unpublish,
    #[sea_orm(string_value = "publish")]
    #[serde(rename = "publish")]
    #[strum(serialize = "publish")]
    Publish,
    #[sea_orm(string_value = "in_active")]
    #[serde(rename = "in_active")]
    #[strum(serialize = "in_active")]
    InActive,
}

impl WarehouseStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, WarehouseStatus::InActive)
    }
}

/// The `warehouses` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "warehouses")]
pub struct Model {
    /// Primary key, assigned on insert.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Public listing code, generated once at creation.
    #[sea_orm(unique)]
    #[serde(rename = "warehouseId")]
    pub warehouse_id: String,

    pub warehouse_name: String,

    pub address1: String,

    pub address2: Option<String>,

    #[serde(rename = "areaLocality")]
    pub area_locality: String,

    pub state: String,

    pub city: String,

    pub pincode: String,

    pub gstno: Option<String>,

    #[serde(rename = "totalLotArea")]
    pub total_lot_area: f64,

    #[serde(rename = "coveredArea")]
    pub covered_area: f64,

    #[serde(rename = "noOfDocs")]
    pub no_of_docs: Option<f64>,

    #[serde(rename = "noOfGate")]
    pub no_of_gate: Option<f64>,

    #[serde(rename = "storageHeight")]
    pub storage_height: Option<f64>,

    #[serde(rename = "parkingArea")]
    pub parking_area: Option<f64>,

    pub status: WarehouseStatus,

    /// Ordered image paths, oldest first. Never longer than four entries.
    #[sea_orm(column_type = "Json")]
    #[serde(rename = "warehouseImages")]
    pub warehouse_images: WarehouseImages,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Generates a new public listing code of the form `WH-<millis>-<6 hex>`.
pub fn generate_warehouse_id(now: DateTime<Utc>) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("WH-{}-{}", now.timestamp_millis(), &suffix[..6])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn status_round_trips_through_its_wire_name() {
        for (status, name) in [
            (WarehouseStatus::Unpublish, "unpublish"),
            (WarehouseStatus::Publish, "publish"),
            (WarehouseStatus::InActive, "in_active"),
        ] {
            assert_eq!(status.to_string(), name);
            assert_eq!(WarehouseStatus::from_str(name).unwrap(), status);
            assert_eq!(serde_json::to_value(status).unwrap(), name);
        }
        assert!(WarehouseStatus::from_str("archived").is_err());
        assert_eq!(WarehouseStatus::default(), WarehouseStatus::Unpublish);
    }

    #[test]
    fn only_in_active_is_terminal() {
        assert!(WarehouseStatus::InActive.is_terminal());
        assert!(!WarehouseStatus::Publish.is_terminal());
        assert!(!WarehouseStatus::Unpublish.is_terminal());
    }

    #[test]
    fn generated_ids_are_prefixed_and_distinct() {
        let now = Utc::now();
        let a = generate_warehouse_id(now);
        let b = generate_warehouse_id(now);
        assert!(a.starts_with(&format!("WH-{}-", now.timestamp_millis())));
        assert_ne!(a, b);
    }
}
