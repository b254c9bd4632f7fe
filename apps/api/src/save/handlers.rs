//! Axum route handlers for the Save API.

use axum::{
    extract::{Path, State},
    Json,
};
use bytes::Bytes;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::save::store::{history_key, HISTORY_PREFIX, SLOT_KEY};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResponse {
    pub success: bool,
    pub message: String,
    pub resume_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedResumeResponse {
    pub success: bool,
    pub resume: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeListResponse {
    pub success: bool,
    /// Saved resume ids, oldest first.
    pub resumes: Vec<String>,
    pub count: usize,
}

/// Parses a save body into a JSON object, checking the known resume fields
/// for type. The object itself is returned untouched so unknown fields
/// survive the round trip.
pub fn parse_resume_object(body: &[u8]) -> Result<Map<String, Value>, AppError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| AppError::MalformedBody(format!("Failed to save resume: {e}")))?;

    let Value::Object(object) = value else {
        return Err(AppError::Validation(
            "Failed to save resume: body must be a JSON object".to_string(),
        ));
    };

    ResumeData::deserialize(&Value::Object(object.clone()))
        .map_err(|e| AppError::Validation(format!("Failed to save resume: {e}")))?;

    Ok(object)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/save-resume
///
/// Stamps the submitted resume with `id` and `savedAt`, replaces the stored
/// slot and records the snapshot under its id.
pub async fn handle_save_resume(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SaveResponse>, AppError> {
    let mut resume = parse_resume_object(&body)?;

    let resume_id = state.ids.next_id();
    resume.insert(
        "savedAt".to_string(),
        Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
    );
    resume.insert("id".to_string(), Value::String(resume_id.clone()));

    let resume = Value::Object(resume);
    state
        .store
        .put(&history_key(&resume_id), resume.clone())
        .await?;
    state.store.put(SLOT_KEY, resume).await?;

    info!(resume_id = %resume_id, "Resume saved");

    Ok(Json(SaveResponse {
        success: true,
        message: "Resume saved successfully".to_string(),
        resume_id,
    }))
}

/// GET /api/save-resume
///
/// Returns the last saved resume, or `null` if nothing has been saved since
/// startup.
pub async fn handle_get_saved_resume(
    State(state): State<AppState>,
) -> Result<Json<SavedResumeResponse>, AppError> {
    let resume = state.store.get(SLOT_KEY).await?;
    Ok(Json(SavedResumeResponse {
        success: true,
        resume,
    }))
}

/// GET /api/resumes
///
/// Lists the ids of every resume saved since startup.
pub async fn handle_list_resumes(
    State(state): State<AppState>,
) -> Result<Json<ResumeListResponse>, AppError> {
    let mut resumes: Vec<String> = state
        .store
        .keys(HISTORY_PREFIX)
        .await?
        .into_iter()
        .filter_map(|key| key.strip_prefix(HISTORY_PREFIX).map(str::to_string))
        .collect();
    // Ids are decimal digits; shorter means older.
    resumes.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

    Ok(Json(ResumeListResponse {
        success: true,
        count: resumes.len(),
        resumes,
    }))
}

/// GET /api/resumes/:id
///
/// Returns the snapshot saved under `id`, or `null` for an unknown id.
pub async fn handle_get_resume_by_id(
    State(state): State<AppState>,
    Path(resume_id): Path<String>,
) -> Result<Json<SavedResumeResponse>, AppError> {
    let resume = state.store.get(&history_key(&resume_id)).await?;
    Ok(Json(SavedResumeResponse {
        success: true,
        resume,
    }))
}
