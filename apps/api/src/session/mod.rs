//! Editing sessions: one in-memory resume per session, discarded when the session ends.
//!
//! Nothing is persisted. Every mutation runs as a synchronous closure under the
//! store's write lock, so editors never observe a half-applied change.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{AccentColor, Language, ResumeData, Template};
use crate::resume::seed::seed_resume;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: Uuid,
    pub language: Language,
    pub template: Template,
    pub accent_color: AccentColor,
    pub data: ResumeData,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Bumped whenever the resume is replaced by a seed; seeded entries reuse
    /// their ids, so an id alone cannot tell the old document from the new one.
    #[serde(skip)]
    pub seed_generation: u64,
}

impl Session {
    pub fn new(language: Language, template: Template, accent_color: AccentColor) -> Self {
        let now = Utc::now();
        Session {
            id: Uuid::new_v4(),
            language,
            template,
            accent_color,
            data: seed_resume(language),
            created_at: now,
            updated_at: now,
            seed_generation: 0,
        }
    }

    /// Reinitializes the resume from the seed of the current language.
    pub fn reset(&mut self) {
        self.data = seed_resume(self.language);
        self.seed_generation += 1;
    }

    /// Switches language; the resume is reseeded from that language's template.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.reset();
    }
}

#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(
        &self,
        language: Language,
        template: Template,
        accent_color: AccentColor,
    ) -> Session {
        let session = Session::new(language, template, accent_color);
        self.inner.write().await.insert(session.id, session.clone());
        info!(
            "Session {} created (language={}, template={})",
            session.id,
            language.code(),
            template.as_str()
        );
        session
    }

    /// Snapshot of a session.
    pub async fn get(&self, id: Uuid) -> Result<Session, AppError> {
        self.inner
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        self.inner
            .write()
            .await
            .remove(&id)
            .map(|_| info!("Session {id} ended"))
            .ok_or_else(|| not_found(id))
    }

    /// Runs `f` against the session under the write lock and bumps `updated_at`
    /// when `f` succeeds. A failing `f` must leave the session untouched.
    pub async fn update<T, F>(&self, id: Uuid, f: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut Session) -> Result<T, AppError>,
    {
        let mut sessions = self.inner.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        let value = f(session)?;
        session.updated_at = Utc::now();
        Ok(value)
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}
