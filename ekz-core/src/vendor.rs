use std::collections::BTreeSet;

use serde::Deserialize;

use crate::{CoreError, CoreResult};

/// Vendor ids the vendor-scoped endpoints will answer for.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<i64>")]
pub struct VendorAllowList {
    ids: BTreeSet<i64>,
}

impl VendorAllowList {
    pub fn new(ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    pub fn contains(&self, vendor_id: i64) -> bool {
        self.ids.contains(&vendor_id)
    }

    /// Rejects ids outside the allow-list with `VendorNotFound`.
    pub fn check(&self, vendor_id: i64) -> CoreResult<()> {
        if self.contains(vendor_id) {
            return Ok(());
        }
        tracing::error!(vendor_id, "Vendor ID doesn't exist.");
        Err(CoreError::VendorNotFound(vendor_id))
    }

    pub fn ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.ids.iter().copied()
    }
}

impl Default for VendorAllowList {
    fn default() -> Self {
        Self::new(1..=6)
    }
}

impl From<Vec<i64>> for VendorAllowList {
    fn from(ids: Vec<i64>) -> Self {
        Self::new(ids)
    }
}
