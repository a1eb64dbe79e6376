pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::enhance::handlers as enhance;
use crate::export::handlers as export;
use crate::render::handlers as render;
use crate::resume::handlers as resume;
use crate::state::AppState;

/// Room for multipart framing around the photo bytes.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let photo_limit = state.config.max_photo_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        // Sessions
        .route("/api/v1/sessions", post(resume::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(resume::handle_get_session).delete(resume::handle_delete_session),
        )
        .route("/api/v1/sessions/:id/reset", post(resume::handle_reset))
        .route("/api/v1/sessions/:id/language", put(resume::handle_set_language))
        .route("/api/v1/sessions/:id/template", put(resume::handle_set_template))
        // Mutations
        .route("/api/v1/sessions/:id/fields", patch(resume::handle_update_field))
        .route(
            "/api/v1/sessions/:id/sections/:section/entries",
            post(resume::handle_add_entry).delete(resume::handle_clear_entries),
        )
        .route(
            "/api/v1/sessions/:id/sections/:section/entries/:entry_id",
            delete(resume::handle_remove_entry),
        )
        .route(
            "/api/v1/sessions/:id/sections/:section/visibility",
            post(resume::handle_toggle_visibility),
        )
        .route("/api/v1/sessions/:id/order", post(resume::handle_reorder))
        .route(
            "/api/v1/sessions/:id/photo",
            post(resume::handle_upload_photo).layer(DefaultBodyLimit::max(photo_limit)),
        )
        // Preview
        .route("/api/v1/sessions/:id/preview", get(render::handle_preview))
        .route("/api/v1/sessions/:id/pages", get(render::handle_pages))
        // Enhancement
        .route(
            "/api/v1/sessions/:id/enhance",
            post(enhance::handle_enhance_field),
        )
        .route("/api/v1/enhance", post(enhance::handle_enhance_text))
        // Export
        .route("/api/v1/sessions/:id/export", get(export::handle_export))
        .with_state(state)
}
