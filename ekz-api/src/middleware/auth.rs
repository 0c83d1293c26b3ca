use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, state::AppState};

pub const API_KEY_HEADER: &str = "x-api-key";

/// Rejects any request whose `X-API-Key` header is missing or differs from
/// the configured key.
pub async fn api_key_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let authorized = req
        .headers()
        .get(API_KEY_HEADER)
        .is_some_and(|key| state.auth.api_key.matches(key.as_bytes()));

    if !authorized {
        tracing::warn!("Rejected request with missing or invalid API key");
        return Err(AppError::Unauthorized("Invalid API Key.".to_string()));
    }

    Ok(next.run(req).await)
}
