//! Axum route handlers for the Enhancement API.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::enhance::{enhance_field, enhance_text, EnhanceRequest, EnhanceResponse, FieldTarget};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/enhance
///
/// Rephrases free text. Nothing is stored.
pub async fn handle_enhance_text(
    State(state): State<AppState>,
    Json(request): Json<EnhanceRequest>,
) -> Result<Json<EnhanceResponse>, AppError> {
    let response = enhance_text(state.enhancer.as_ref(), &request).await?;
    Ok(Json(response))
}

/// POST /api/v1/sessions/:id/enhance
///
/// Rephrases one field of the session's resume and stores the result.
pub async fn handle_enhance_field(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(target): Json<FieldTarget>,
) -> Result<Json<EnhanceResponse>, AppError> {
    let response = enhance_field(
        &state.sessions,
        &state.pending_fields,
        state.enhancer.as_ref(),
        id,
        &target,
    )
    .await?;
    Ok(Json(response))
}
