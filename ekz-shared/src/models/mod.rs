pub mod brand;
pub mod category;
pub mod coerce;
pub mod product;
pub mod shipping_tier;
pub mod vendor;

pub use brand::Brand;
pub use category::Category;
pub use product::Product;
pub use shipping_tier::ShippingTier;
pub use vendor::Vendor;

/// Naming used when a record type appears in messages.
pub trait Entity {
    const NAME: &'static str;
    /// Plural noun used in envelope messages, e.g. "products".
    const PLURAL: &'static str;
}
