//! Request bodies accepted by the HTTP layer.

pub mod warehouse;

pub use warehouse::{NewWarehouse, NumericInput, TextInput, WarehousePatch, WarehousePayload};
