//! Image references attached to a warehouse listing.
//!
//! References are opaque paths produced by whatever stored the upload; this
//! module only bounds and orders them.

use crate::errors::ServiceError;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// Maximum number of images a listing may carry.
pub const MAX_WAREHOUSE_IMAGES: usize = 4;

/// Ordered image paths, earliest-added first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct WarehouseImages(Vec<String>);

impl WarehouseImages {
    /// Images for a brand new listing, kept verbatim.
    ///
    /// More than [`MAX_WAREHOUSE_IMAGES`] references is rejected rather than
    /// silently truncated.
    pub fn for_create<I, S>(refs: I) -> Result<Self, ServiceError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let refs = clean(refs);
        if refs.len() > MAX_WAREHOUSE_IMAGES {
            return Err(ServiceError::invalid_field(
                "warehouseImages",
                format!("warehouseImages exceeds the limit of {}", MAX_WAREHOUSE_IMAGES),
            ));
        }
        Ok(Self(refs))
    }

    /// Appends `new_refs` after the existing images and keeps the first four.
    ///
    /// Existing images always win: a new reference only lands if a slot is
    /// still free after everything already attached.
    pub fn appended<I, S>(&self, new_refs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let new_refs = clean(new_refs);
        if new_refs.is_empty() {
            return self.clone();
        }
        Self(
            self.0
                .iter()
                .cloned()
                .chain(new_refs)
                .take(MAX_WAREHOUSE_IMAGES)
                .collect(),
        )
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

}

fn clean<I, S>(refs: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    refs.into_iter()
        .map(Into::into)
        .filter(|r| !r.trim().is_empty())
        .collect()
}
