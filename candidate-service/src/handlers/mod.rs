pub mod candidates;
pub mod health;
pub mod history;
pub mod legacy;

pub use health::health_check;

use axum::{http::Method, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Bare 200 for OPTIONS requests that reach the router (the CORS layer
/// answers real preflights before they get here).
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed(method: Method) -> impl IntoResponse {
    tracing::warn!(%method, "Method not allowed");
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "success": false, "error": "Method not allowed" })),
    )
}
