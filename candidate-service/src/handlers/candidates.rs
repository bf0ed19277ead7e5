use anyhow::anyhow;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use futures::stream::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{self, doc, DateTime};
use serde_json::{json, Value};
use service_core::error::AppError;

use crate::dtos::{candidate_response, CandidatePayload, DeleteParams};
use crate::models::Candidate;
use crate::startup::AppState;

/// GET /api/v2/candidates — every candidate, identifier exposed as a plain
/// string `id` alongside the document's own fields.
pub async fn list_candidates(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let collection = state.db.candidates().await?;

    let mut cursor = collection.find(doc! {}, None).await?;
    let mut candidates = Vec::new();
    while let Some(candidate) = cursor.try_next().await? {
        candidates.push(candidate_response(candidate));
    }

    Ok(Json(json!({ "success": true, "candidates": candidates })))
}

/// POST /api/v2/candidates — insert a single candidate, stamping both
/// timestamps. Identifiers and timestamps are server-assigned, so any the
/// client sent are discarded.
pub async fn create_candidate(
    State(state): State<AppState>,
    Json(payload): Json<CandidatePayload>,
) -> Result<impl IntoResponse, AppError> {
    let Some(data) = payload.candidate else {
        return Err(AppError::BadRequest(anyhow!("Candidate data is required")));
    };

    let mut fields = bson::to_document(&data)
        .map_err(|e| AppError::BadRequest(anyhow!("Invalid candidate data: {}", e)))?;
    for key in ["id", "_id", "createdAt", "updatedAt"] {
        fields.remove(key);
    }

    let candidate = Candidate::new(fields);
    let collection = state.db.candidates().await?;
    let result = collection.insert_one(&candidate, None).await?;

    let id = result
        .inserted_id
        .as_object_id()
        .map(|oid| oid.to_hex())
        .unwrap_or_default();
    tracing::info!(candidate_id = %id, "Candidate created");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "id": id })),
    ))
}

/// PUT /api/v2/candidates — partial merge of the supplied fields into the
/// matching document. Only `updatedAt` advances; `_id` and `createdAt` never
/// change.
pub async fn update_candidate(
    State(state): State<AppState>,
    Json(payload): Json<CandidatePayload>,
) -> Result<impl IntoResponse, AppError> {
    let Some(data) = payload.candidate else {
        return Err(AppError::BadRequest(anyhow!("Candidate data is required")));
    };

    let id = data
        .get("id")
        .and_then(Value::as_str)
        .or_else(|| data.get("_id").and_then(Value::as_str))
        .ok_or_else(|| AppError::BadRequest(anyhow!("Candidate ID is required")))?;
    let oid = parse_object_id(id)?;

    let mut update = bson::to_document(&data)
        .map_err(|e| AppError::BadRequest(anyhow!("Invalid candidate data: {}", e)))?;
    for key in ["id", "_id", "createdAt"] {
        update.remove(key);
    }
    update.insert("updatedAt", DateTime::now());

    let collection = state.db.candidates().await?;
    let result = collection
        .update_one(doc! { "_id": oid }, doc! { "$set": update }, None)
        .await?;

    if result.matched_count == 0 {
        return Err(AppError::NotFound(anyhow!("Candidate not found")));
    }

    tracing::info!(candidate_id = %oid, "Candidate updated");
    Ok(Json(json!({ "success": true })))
}

/// DELETE /api/v2/candidates?id=... — remove the single matching document.
pub async fn delete_candidate(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<impl IntoResponse, AppError> {
    let id = params
        .id
        .ok_or_else(|| AppError::BadRequest(anyhow!("Candidate ID is required")))?;
    let oid = parse_object_id(&id)?;

    let collection = state.db.candidates().await?;
    let result = collection.delete_one(doc! { "_id": oid }, None).await?;

    if result.deleted_count == 0 {
        return Err(AppError::NotFound(anyhow!("Candidate not found")));
    }

    tracing::info!(candidate_id = %oid, "Candidate deleted");
    Ok(Json(json!({ "success": true })))
}

fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::BadRequest(anyhow!("Invalid candidate ID: {}", id)))
}
