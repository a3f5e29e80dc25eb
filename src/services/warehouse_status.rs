//! Status transitions for warehouse listings.
//!
//! `unpublish` is the entry state, `publish` and `unpublish` may be toggled
//! freely, and `in_active` is terminal and reachable only through a soft delete.

use std::str::FromStr;

use tracing::warn;

use crate::{errors::ServiceError, models::WarehouseStatus};

/// Statuses a caller may request through a status change.
pub const REQUESTABLE_STATUSES: &[WarehouseStatus] =
    &[WarehouseStatus::Publish, WarehouseStatus::Unpublish];

/// Parses a requested status, accepting only `publish` and `unpublish`.
pub fn parse_requested_status(raw: &str) -> Result<WarehouseStatus, ServiceError> {
    match WarehouseStatus::from_str(raw.trim()) {
        Ok(status) if REQUESTABLE_STATUSES.contains(&status) => Ok(status),
        _ => {
            warn!(requested = raw, "rejected warehouse status");
            Err(ServiceError::InvalidStatus(format!(
                "'{}' is not a valid status; expected one of: publish, unpublish",
                raw
            )))
        }
    }
}

/// Whether a status change from `from` to `to` is allowed.
pub fn is_valid_transition(from: WarehouseStatus, to: WarehouseStatus) -> bool {
    use WarehouseStatus::*;
    match (from, to) {
        (InActive, _) => false,
        (_, InActive) => false,
        (Unpublish, Publish) | (Publish, Unpublish) => true,
        // same-state requests are accepted as no-ops
        (a, b) => a == b,
    }
}

/// Checks a status change, failing with `InvalidStatus` when it is not allowed.
pub fn check_transition(from: WarehouseStatus, to: WarehouseStatus) -> Result<(), ServiceError> {
    if is_valid_transition(from, to) {
        Ok(())
    } else {
        Err(ServiceError::InvalidStatus(format!(
            "Cannot transition warehouse from '{}' to '{}'",
            from, to
        )))
    }
}

/// Target status of a soft delete, or `None` when the listing is already inactive.
pub fn soft_delete_target(current: WarehouseStatus) -> Option<WarehouseStatus> {
    (!current.is_terminal()).then_some(WarehouseStatus::InActive)
}
