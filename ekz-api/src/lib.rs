use axum::{http::Method, Router};
use tower_http::cors::CorsLayer;

pub mod brands;
pub mod categories;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod products;
mod scoped;
pub mod state;
pub mod vendors;

pub use error::AppError;
pub use state::AppState;

/// Builds the full router. Every route requires a valid `X-API-Key`.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::HeaderName::from_static(middleware::API_KEY_HEADER),
        ]);

    Router::new()
        .merge(vendors::routes())
        .merge(products::routes())
        .merge(categories::routes())
        .merge(brands::routes())
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::api_key_middleware,
        ))
        .layer(cors)
        .layer(middleware::trace_layer())
        .with_state(state)
}
