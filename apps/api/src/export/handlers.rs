//! Axum route handler for the PDF export.

use anyhow::Context;
use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::export::{build_pdf, derive_filename};
use crate::render::render_session;
use crate::state::AppState;

/// GET /api/v1/sessions/:id/export
///
/// Downloads the laid-out resume as `application/pdf`.
pub async fn handle_export(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let session = state.sessions.get(id).await?;
    let filename = derive_filename(&session.data.profile.name);
    let rendered = render_session(&session, &state.page_config, state.measurer.as_ref());
    let page_config = state.page_config.clone();
    let page_count = rendered.document.pages.len().max(1);

    let bytes = tokio::task::spawn_blocking(move || build_pdf(&rendered, &page_config))
        .await
        .context("PDF export task did not complete")??;

    info!(
        "Session {id}: exported {filename} ({} bytes, {page_count} layout pages)",
        bytes.len()
    );

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    ))
}
