use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use ekz_shared::{Brand, Envelope};
use ekz_store::CatalogState;

use crate::{
    error::AppError,
    scoped::{vendor_records, VendorQuery},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/brands/", get(get_brands_by_vendor))
        .route("/api/v1/brands", get(get_brands_by_vendor))
}

/// GET /api/v1/brands/?vendor_id={id}
async fn get_brands_by_vendor(
    State(state): State<AppState>,
    query: Result<Query<VendorQuery>, QueryRejection>,
) -> Result<Json<Envelope<Brand>>, AppError> {
    let Query(VendorQuery { vendor_id }) = query?;
    vendor_records(&state, vendor_id, CatalogState::brands)
}
