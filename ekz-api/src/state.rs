use std::sync::Arc;

use ekz_core::VendorAllowList;
use ekz_store::{ApiKey, CatalogState};

#[derive(Clone)]
pub struct AuthConfig {
    pub api_key: ApiKey,
}

/// Shared by every handler. Everything behind it is immutable once built.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogState>,
    pub allowed_vendors: Arc<VendorAllowList>,
    pub auth: AuthConfig,
}

impl AppState {
    pub fn new(catalog: CatalogState, allowed_vendors: VendorAllowList, api_key: ApiKey) -> Self {
        Self {
            catalog: Arc::new(catalog),
            allowed_vendors: Arc::new(allowed_vendors),
            auth: AuthConfig { api_key },
        }
    }
}
