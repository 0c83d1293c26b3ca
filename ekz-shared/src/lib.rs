pub mod models;
pub mod response;

pub use models::{Brand, Category, Entity, Product, ShippingTier, Vendor};
pub use response::Envelope;
