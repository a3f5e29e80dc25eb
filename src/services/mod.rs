// Warehouse listings
pub mod warehouses;

// Status transition rules shared by the status and delete commands
pub mod warehouse_status;

pub use warehouses::WarehouseService;
