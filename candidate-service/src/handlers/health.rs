use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde_json::json;

use crate::startup::AppState;

/// /api/test — liveness plus whether a connection string is configured.
/// Never attempts a connection, so it answers the same way no matter what
/// state the database is in.
pub async fn health_check(State(state): State<AppState>, method: Method) -> impl IntoResponse {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    Json(json!({
        "message": "API is working!",
        "timestamp": Utc::now().to_rfc3339(),
        "environment": state.config.common.environment,
        "mongoConnected": state.db.is_configured(),
    }))
    .into_response()
}
