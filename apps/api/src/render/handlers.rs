//! Axum route handlers for the preview API.

use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::layout::pagination::Page;
use crate::models::{AccentColor, Template};
use crate::render::html::{render_preview, PreviewInput};
use crate::render::render_session;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagesResponse {
    pub template: Template,
    pub accent_color: AccentColor,
    pub paginated: bool,
    pub page_budget: f32,
    pub pages: Vec<Page>,
}

/// GET /api/v1/sessions/:id/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let session = state.sessions.get(id).await?;
    let rendered = render_session(&session, &state.page_config, state.measurer.as_ref());
    Ok(Html(render_preview(&PreviewInput {
        blocks: &rendered.blocks,
        document: &rendered.document,
        policy: &rendered.policy,
        photo_url: &session.data.profile.photo_url,
    })))
}

/// GET /api/v1/sessions/:id/pages
///
/// The pagination result: ordered pages of section fragments with fill ratios.
pub async fn handle_pages(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PagesResponse>, AppError> {
    let session = state.sessions.get(id).await?;
    let rendered = render_session(&session, &state.page_config, state.measurer.as_ref());
    Ok(Json(PagesResponse {
        template: session.template,
        accent_color: session.accent_color,
        paginated: rendered.document.paginated,
        page_budget: rendered.document.page_budget,
        pages: rendered.document.pages,
    }))
}
