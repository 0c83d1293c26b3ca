use serde::{Deserialize, Serialize};

use super::{coerce, Entity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    #[serde(deserialize_with = "coerce::int")]
    pub brand_id: i64,
    #[serde(deserialize_with = "coerce::int")]
    pub vendor_id: i64,
}

impl Entity for Brand {
    const NAME: &'static str = "brand";
    const PLURAL: &'static str = "brands";
}
