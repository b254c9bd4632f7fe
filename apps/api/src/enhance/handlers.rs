//! Axum route handlers for the Enhance API.

use axum::{extract::State, Json};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::enhance::enhancer::Section;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhanceRequest {
    pub section: Section,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhanceResponse {
    pub success: bool,
    pub enhanced_content: String,
}

impl EnhanceRequest {
    /// Parses a raw request body. Any string is acceptable content,
    /// including the empty string.
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        serde_json::from_slice(body)
            .map_err(|e| AppError::MalformedBody(format!("Failed to enhance content: {e}")))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/ai-enhance
///
/// Rewrites `content` for the given section through the configured enhancer.
/// The body is taken raw so that malformed JSON gets the same failure shape
/// as every other error.
pub async fn handle_enhance(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<EnhanceResponse>, AppError> {
    let request = EnhanceRequest::from_body(&body)?;

    let enhanced_content = state
        .enhancer
        .enhance(&request.section, &request.content)
        .await?;

    debug!(
        section = %request.section,
        input_len = request.content.len(),
        output_len = enhanced_content.len(),
        "Content enhanced"
    );

    Ok(Json(EnhanceResponse {
        success: true,
        enhanced_content,
    }))
}
