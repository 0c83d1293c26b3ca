use axum::{
    extract::{rejection::PathRejection, Path, State},
    routing::get,
    Json, Router,
};
use ekz_core::validate_records;
use ekz_shared::{Envelope, ShippingTier, Vendor};
use ekz_store::CatalogState;

use crate::{error::AppError, scoped::vendor_records, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/vendors/", get(get_vendors))
        .route("/api/v1/vendors", get(get_vendors))
        .route(
            "/api/v1/vendors/{vendor_id}/shipping-tiers",
            get(get_vendor_shipping_tiers),
        )
}

/// GET /api/v1/vendors/
///
/// Every vendor, regardless of the allow-list.
async fn get_vendors(State(state): State<AppState>) -> Result<Json<Envelope<Vendor>>, AppError> {
    let data = validate_records::<Vendor>(state.catalog.vendors())?;
    Ok(Json(Envelope::listing(data)))
}

/// GET /api/v1/vendors/{vendor_id}/shipping-tiers
async fn get_vendor_shipping_tiers(
    State(state): State<AppState>,
    vendor_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Envelope<ShippingTier>>, AppError> {
    let Path(vendor_id) = vendor_id?;
    vendor_records(&state, vendor_id, CatalogState::shipping_tiers)
}
