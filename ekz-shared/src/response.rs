use serde::{Deserialize, Serialize};

use crate::models::Entity;

pub const STATUS_SUCCESS: &str = "success";

/// Uniform wrapper returned by every successful endpoint.
///
/// Errors never use this shape; they are rendered by the API layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: String,
    pub code: u16,
    pub message: String,
    pub data: Vec<T>,
}

impl<T: Entity> Envelope<T> {
    /// Envelope for an unfiltered listing: "Queried {N} vendors."
    pub fn listing(data: Vec<T>) -> Self {
        let message = format!("Queried {} {}.", data.len(), T::PLURAL);
        Self::success(message, data)
    }

    /// Envelope for records filtered by vendor: "Queried {N} products for vendor {id}."
    pub fn for_vendor(vendor_id: i64, data: Vec<T>) -> Self {
        let message = format!(
            "Queried {} {} for vendor {}.",
            data.len(),
            T::PLURAL,
            vendor_id
        );
        Self::success(message, data)
    }
}

impl<T> Envelope<T> {
    pub fn success(message: String, data: Vec<T>) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            code: 200,
            message,
            data,
        }
    }
}
