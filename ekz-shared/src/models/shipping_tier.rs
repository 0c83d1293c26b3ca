use serde::{Deserialize, Serialize};

use super::{coerce, Entity};

/// A shipping level offered by a vendor, with its flat cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingTier {
    /// Level name, e.g. "Standard" or "Express".
    pub shipping_tier: String,
    #[serde(deserialize_with = "coerce::int")]
    pub shipping_tier_id: i64,
    #[serde(deserialize_with = "coerce::int")]
    pub vendor_id: i64,
    #[serde(deserialize_with = "coerce::int")]
    pub shipping_cost: i64,
}

impl Entity for ShippingTier {
    const NAME: &'static str = "shipping tier";
    const PLURAL: &'static str = "shipping tier data";
}
