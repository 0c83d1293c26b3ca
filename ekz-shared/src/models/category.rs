use serde::{Deserialize, Serialize};

use super::{coerce, Entity};

/// A product category owned by a vendor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(deserialize_with = "coerce::int")]
    pub category_id: i64,
    #[serde(deserialize_with = "coerce::int")]
    pub vendor_id: i64,
}

impl Entity for Category {
    const NAME: &'static str = "category";
    const PLURAL: &'static str = "categories";
}
