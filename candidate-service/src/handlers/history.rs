use anyhow::anyhow;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::FindOptions;
use serde_json::json;
use service_core::error::AppError;

use crate::dtos::{history_response, AppendHistoryRequest};
use crate::models::HistoryEntry;
use crate::startup::AppState;

const HISTORY_LIMIT: i64 = 100;

/// GET /api/history — the most recent entries, newest first.
pub async fn list_history(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let collection = state.db.history().await?;

    let find_options = FindOptions::builder()
        .sort(doc! { "timestamp": -1 })
        .limit(HISTORY_LIMIT)
        .build();

    let mut cursor = collection.find(doc! {}, find_options).await?;
    let mut history = Vec::new();
    while let Some(entry) = cursor.try_next().await? {
        history.push(history_response(entry));
    }

    Ok(Json(json!({ "success": true, "history": history })))
}

/// POST /api/history — append one audit entry. The entry is acknowledged,
/// not echoed back.
pub async fn append_history(
    State(state): State<AppState>,
    Json(payload): Json<AppendHistoryRequest>,
) -> Result<impl IntoResponse, AppError> {
    let action = payload.action.filter(|a| !a.is_empty());
    let candidate_name = payload.candidate_name.filter(|n| !n.is_empty());
    let (Some(action), Some(candidate_name)) = (action, candidate_name) else {
        return Err(AppError::BadRequest(anyhow!(
            "Action and candidate name are required"
        )));
    };

    let entry = HistoryEntry::new(action, candidate_name, payload.details);
    let collection = state.db.history().await?;
    collection.insert_one(&entry, None).await?;

    tracing::info!(
        action = %entry.action,
        candidate = %entry.candidate_name,
        "History entry added"
    );

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "History entry added successfully"
        })),
    ))
}
