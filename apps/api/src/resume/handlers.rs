//! Axum route handlers for the Session and Resume Mutation API.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{AccentColor, Language, ResumeData, SectionId, SectionOrder, Template};
use crate::resume::photo::to_data_uri;
use crate::session::Session;
use crate::state::AppState;

/// Multipart field carrying the uploaded photo.
pub const PHOTO_FIELD: &str = "photo";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    pub language: Option<Language>,
    pub template: Option<Template>,
    pub accent_color: Option<AccentColor>,
}

#[derive(Debug, Deserialize)]
pub struct SetLanguageRequest {
    pub language: Language,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetTemplateRequest {
    pub template: Template,
    pub accent_color: Option<AccentColor>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateFieldRequest {
    pub section: SectionId,
    #[serde(default)]
    pub id: Option<String>,
    pub field: String,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Serialize)]
pub struct EntryCreatedResponse {
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct EntryRemovedResponse {
    pub removed: bool,
}

#[derive(Debug, Serialize)]
pub struct VisibilityResponse {
    pub section: SectionId,
    pub visible: bool,
}

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub sections: SectionOrder,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoResponse {
    pub photo_url: String,
}

fn parse_section(raw: &str) -> Result<SectionId, AppError> {
    Ok(raw.parse::<SectionId>()?)
}

// ────────────────────────────────────────────────────────────────────────────
// Session lifecycle
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<Session>), AppError> {
    let session = state
        .sessions
        .create(
            req.language.unwrap_or(state.config.default_language),
            req.template.unwrap_or(state.config.default_template),
            req.accent_color.unwrap_or_default(),
        )
        .await;
    Ok((StatusCode::CREATED, Json(session)))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Session>, AppError> {
    Ok(Json(state.sessions.get(id).await?))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/sessions/:id/reset
pub async fn handle_reset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Session>, AppError> {
    let session = state
        .sessions
        .update(id, |s| {
            s.reset();
            Ok(s.clone())
        })
        .await?;
    info!("Session {id} reset to the {} seed", session.language.code());
    Ok(Json(session))
}

/// PUT /api/v1/sessions/:id/language
///
/// Switching language reseeds the resume from that language's starter data.
pub async fn handle_set_language(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SetLanguageRequest>,
) -> Result<Json<Session>, AppError> {
    let session = state
        .sessions
        .update(id, |s| {
            s.set_language(req.language);
            Ok(s.clone())
        })
        .await?;
    Ok(Json(session))
}

/// PUT /api/v1/sessions/:id/template
pub async fn handle_set_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SetTemplateRequest>,
) -> Result<Json<Session>, AppError> {
    let session = state
        .sessions
        .update(id, |s| {
            s.template = req.template;
            if let Some(color) = req.accent_color {
                s.accent_color = color;
            }
            Ok(s.clone())
        })
        .await?;
    Ok(Json(session))
}

// ────────────────────────────────────────────────────────────────────────────
// Mutations
// ────────────────────────────────────────────────────────────────────────────

/// PATCH /api/v1/sessions/:id/fields
pub async fn handle_update_field(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateFieldRequest>,
) -> Result<Json<ResumeData>, AppError> {
    let data = state
        .sessions
        .update(id, |s| {
            s.data
                .update_field(req.section, req.id.as_deref(), &req.field, req.value)?;
            Ok(s.data.clone())
        })
        .await?;
    Ok(Json(data))
}

/// POST /api/v1/sessions/:id/sections/:section/entries
pub async fn handle_add_entry(
    State(state): State<AppState>,
    Path((id, section)): Path<(Uuid, String)>,
) -> Result<(StatusCode, Json<EntryCreatedResponse>), AppError> {
    let section = parse_section(&section)?;
    let entry_id = state
        .sessions
        .update(id, |s| Ok(s.data.add_entry(section)?))
        .await?;
    Ok((StatusCode::CREATED, Json(EntryCreatedResponse { id: entry_id })))
}

/// DELETE /api/v1/sessions/:id/sections/:section/entries
pub async fn handle_clear_entries(
    State(state): State<AppState>,
    Path((id, section)): Path<(Uuid, String)>,
) -> Result<Json<ResumeData>, AppError> {
    let section = parse_section(&section)?;
    let data = state
        .sessions
        .update(id, |s| {
            s.data.clear_all(section)?;
            Ok(s.data.clone())
        })
        .await?;
    Ok(Json(data))
}

/// DELETE /api/v1/sessions/:id/sections/:section/entries/:entry_id
///
/// Removing an id that does not exist is a no-op reported as `removed: false`.
pub async fn handle_remove_entry(
    State(state): State<AppState>,
    Path((id, section, entry_id)): Path<(Uuid, String, String)>,
) -> Result<Json<EntryRemovedResponse>, AppError> {
    let section = parse_section(&section)?;
    let removed = state
        .sessions
        .update(id, |s| Ok(s.data.remove_entry(section, &entry_id)?))
        .await?;
    Ok(Json(EntryRemovedResponse { removed }))
}

/// POST /api/v1/sessions/:id/sections/:section/visibility
pub async fn handle_toggle_visibility(
    State(state): State<AppState>,
    Path((id, section)): Path<(Uuid, String)>,
) -> Result<Json<VisibilityResponse>, AppError> {
    let section = parse_section(&section)?;
    let visible = state
        .sessions
        .update(id, |s| Ok(s.data.toggle_visibility(section)))
        .await?;
    Ok(Json(VisibilityResponse { section, visible }))
}

/// POST /api/v1/sessions/:id/order
pub async fn handle_reorder(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ReorderRequest>,
) -> Result<Json<OrderResponse>, AppError> {
    let sections = state
        .sessions
        .update(id, |s| {
            s.data.reorder_sections(req.from, req.to)?;
            Ok(s.data.sections.clone())
        })
        .await?;
    Ok(Json(OrderResponse { sections }))
}

/// POST /api/v1/sessions/:id/photo
///
/// Accepts a multipart upload in the `photo` field and stores it as a data URI.
pub async fn handle_upload_photo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<PhotoResponse>, AppError> {
    // Fail fast on an unknown session before reading the body.
    state.sessions.get(id).await?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(PHOTO_FIELD) {
            continue;
        }
        let content_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read photo: {e}")))?;
        let data_uri = to_data_uri(&content_type, &bytes, state.config.max_photo_bytes)?;

        let photo_url = state
            .sessions
            .update(id, |s| {
                s.data.profile.photo_url = data_uri;
                Ok(s.data.profile.photo_url.clone())
            })
            .await?;
        info!("Session {id}: photo updated ({} bytes)", bytes.len());
        return Ok(Json(PhotoResponse { photo_url }));
    }

    Err(AppError::Validation(format!(
        "Multipart field '{PHOTO_FIELD}' is required"
    )))
}
