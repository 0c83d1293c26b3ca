use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use ekz_shared::{Category, Envelope};
use ekz_store::CatalogState;

use crate::{
    error::AppError,
    scoped::{vendor_records, VendorQuery},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/categories/", get(get_categories_by_vendor))
        .route("/api/v1/categories", get(get_categories_by_vendor))
}

async fn get_categories_by_vendor(
    State(state): State<AppState>,
    query: Result<Query<VendorQuery>, QueryRejection>,
) -> Result<Json<Envelope<Category>>, AppError> {
    let Query(VendorQuery { vendor_id }) = query?;
    vendor_records(&state, vendor_id, CatalogState::categories)
}
