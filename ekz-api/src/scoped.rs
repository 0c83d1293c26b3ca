use axum::Json;
use ekz_core::{validate_records, Record};
use ekz_shared::{Entity, Envelope};
use ekz_store::CatalogState;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::{error::AppError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct VendorQuery {
    pub vendor_id: i64,
}

/// Shared flow of every vendor-scoped endpoint: allow-list check, lookup,
/// whole-batch validation, envelope.
pub(crate) fn vendor_records<T>(
    state: &AppState,
    vendor_id: i64,
    lookup: fn(&CatalogState, i64) -> &[Record],
) -> Result<Json<Envelope<T>>, AppError>
where
    T: DeserializeOwned + Entity,
{
    state.allowed_vendors.check(vendor_id)?;

    let raw = lookup(&state.catalog, vendor_id);
    let data = validate_records::<T>(raw)?;

    Ok(Json(Envelope::for_vendor(vendor_id, data)))
}
