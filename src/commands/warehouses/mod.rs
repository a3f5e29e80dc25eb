pub mod create_warehouse_command;
pub mod delete_warehouse_command;
pub mod update_warehouse_command;
pub mod update_warehouse_status_command;

pub use create_warehouse_command::CreateWarehouseCommand;
pub use delete_warehouse_command::{DeleteWarehouseCommand, DeleteWarehouseResult};
pub use update_warehouse_command::UpdateWarehouseCommand;
pub use update_warehouse_status_command::UpdateWarehouseStatusCommand;
