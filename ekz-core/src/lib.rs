pub mod validation;
pub mod vendor;

pub use validation::{validate_records, Record};
pub use vendor::VendorAllowList;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Vendor {0} not found.")]
    VendorNotFound(i64),
    #[error("Stored {entity} record {index} failed validation: {reason}")]
    Validation {
        entity: &'static str,
        index: usize,
        reason: String,
    },
}

pub type CoreResult<T> = Result<T, CoreError>;
