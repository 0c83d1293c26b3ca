use serde::{Deserialize, Serialize};

use super::{coerce, Entity};

/// A product sold by a vendor.
///
/// Linked to a category and a brand of the same vendor, and optionally to
/// one of the vendor's shipping tiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub sku: String,
    /// Cost price.
    #[serde(deserialize_with = "coerce::float")]
    pub cost: f64,
    #[serde(default, deserialize_with = "coerce::opt_int")]
    pub shipping_tier_id: Option<i64>,
    #[serde(deserialize_with = "coerce::int")]
    pub category_id: i64,
    #[serde(deserialize_with = "coerce::int")]
    pub vendor_id: i64,
    #[serde(deserialize_with = "coerce::int")]
    pub brand_id: i64,
}

impl Entity for Product {
    const NAME: &'static str = "product";
    const PLURAL: &'static str = "products";
}
