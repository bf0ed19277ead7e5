//! The original bulk candidates route: GET returns every document, POST
//! replaces the whole collection with the posted array.

use anyhow::anyhow;
use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::IntoResponse,
    Json,
};
use futures::stream::TryStreamExt;
use mongodb::bson::{self, doc, Document};
use serde_json::{json, Value};
use service_core::error::AppError;

use crate::dtos::document_to_json;
use crate::startup::AppState;

/// GET /api/candidates — every stored candidate document, unshaped.
pub async fn list_candidates(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("GET request - fetching candidates");
    let collection = state.db.legacy_candidates().await?;

    let mut cursor = collection.find(doc! {}, None).await?;
    let mut candidates = Vec::new();
    while let Some(document) = cursor.try_next().await? {
        candidates.push(document_to_json(document));
    }

    tracing::info!(count = candidates.len(), "Found candidates");
    Ok(Json(Value::Array(candidates)))
}

/// POST /api/candidates — replace the entire collection with the posted
/// array. Delete-then-insert, deliberately not atomic: a failure between the
/// two steps leaves the collection empty.
pub async fn replace_candidates(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let Some(items) = body.as_array() else {
        return Err(AppError::BadRequest(anyhow!("Expected array of candidates")));
    };

    let documents = items
        .iter()
        .map(bson::to_document)
        .collect::<Result<Vec<Document>, _>>()
        .map_err(|e| AppError::BadRequest(anyhow!("Expected array of candidate objects: {}", e)))?;

    let collection = state.db.legacy_candidates().await?;
    collection.delete_many(doc! {}, None).await?;
    tracing::info!("Cleared existing candidates");

    if !documents.is_empty() {
        collection.insert_many(&documents, None).await?;
        tracing::info!(count = documents.len(), "Inserted candidates");
    }

    Ok(Json(json!({
        "message": "Candidates saved successfully",
        "count": documents.len(),
    })))
}

/// The legacy route predates the `{success: false}` error envelope.
pub async fn method_not_allowed(method: Method) -> impl IntoResponse {
    tracing::warn!(%method, "Method not allowed");
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
}
