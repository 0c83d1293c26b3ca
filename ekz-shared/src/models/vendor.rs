use serde::{Deserialize, Serialize};

use super::{coerce, Entity};

/// Unique vendor id and the vendor's display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    #[serde(deserialize_with = "coerce::int")]
    pub vendor_id: i64,
    pub name: String,
}

impl Entity for Vendor {
    const NAME: &'static str = "vendor";
    const PLURAL: &'static str = "vendors";
}
