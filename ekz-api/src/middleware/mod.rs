pub mod auth;
pub mod request_log;

pub use auth::{api_key_middleware, API_KEY_HEADER};
pub use request_log::trace_layer;
