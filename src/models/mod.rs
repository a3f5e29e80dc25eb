pub mod warehouse;
pub mod warehouse_images;

pub use warehouse::{
    ActiveModel as WarehouseActiveModel, Column as WarehouseColumn, Entity as WarehouseEntity,
    Model as Warehouse, WarehouseStatus,
};
pub use warehouse_images::{WarehouseImages, MAX_WAREHOUSE_IMAGES};
