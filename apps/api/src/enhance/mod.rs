//! Text Enhancement Gateway: rephrases one piece of resume text through a
//! pluggable backend.
//!
//! Default: `LlmEnhancer` (the shared `LlmClient`).
//! Without an API key: `UnavailableEnhancer`, which refuses every call.
//!
//! `AppState` holds an `Arc<dyn TextEnhancer>`, chosen at startup from config.
//! Empty input is rejected before any backend is called, and the backend is
//! called exactly once per request.

pub mod guard;
pub mod handlers;
pub mod prompts;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};
use uuid::Uuid;

use crate::enhance::guard::{FieldKey, PendingFields};
use crate::enhance::prompts::{enhance_prompt, enhance_system_prompt};
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::{Language, SectionId};
use crate::session::SessionStore;

#[derive(Debug, Error, PartialEq)]
pub enum EnhanceError {
    #[error("Content is empty.")]
    EmptyContent,

    #[error("enhancement backend is not configured")]
    Unavailable,

    #[error("enhancement backend failed: {0}")]
    Backend(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct EnhanceRequest {
    pub text: String,
    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceResponse {
    pub enhanced_content: String,
}

/// Addresses the field to enhance inside a session, the same way `update_field` does.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldTarget {
    pub section: SectionId,
    #[serde(default)]
    pub id: Option<String>,
    pub field: String,
}

#[derive(Debug, Deserialize)]
struct LlmEnhanceOutput {
    enhanced_content: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Backends
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait TextEnhancer: Send + Sync {
    async fn enhance(&self, text: &str, language: Language) -> Result<String, EnhanceError>;
}

pub struct LlmEnhancer(pub LlmClient);

#[async_trait]
impl TextEnhancer for LlmEnhancer {
    async fn enhance(&self, text: &str, language: Language) -> Result<String, EnhanceError> {
        let output: LlmEnhanceOutput = self
            .0
            .call_json(&enhance_prompt(text, language), &enhance_system_prompt())
            .await
            .map_err(|e| EnhanceError::Backend(e.to_string()))?;
        if output.enhanced_content.trim().is_empty() {
            return Err(EnhanceError::Backend(
                "model returned empty enhanced_content".to_string(),
            ));
        }
        Ok(output.enhanced_content)
    }
}

/// Used when no API key is configured.
pub struct UnavailableEnhancer;

#[async_trait]
impl TextEnhancer for UnavailableEnhancer {
    async fn enhance(&self, _text: &str, _language: Language) -> Result<String, EnhanceError> {
        Err(EnhanceError::Unavailable)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Gateway
// ────────────────────────────────────────────────────────────────────────────

/// Validates the input and makes a single backend call.
pub async fn enhance_text(
    enhancer: &dyn TextEnhancer,
    request: &EnhanceRequest,
) -> Result<EnhanceResponse, EnhanceError> {
    if request.text.trim().is_empty() {
        return Err(EnhanceError::EmptyContent);
    }
    match enhancer.enhance(&request.text, request.language).await {
        Ok(enhanced_content) => Ok(EnhanceResponse { enhanced_content }),
        Err(e) => {
            error!("AI enhancement failed: {e}");
            Err(e)
        }
    }
}

/// Enhances one field of a session in place.
///
/// The session lock is held only to read the field and to write the result, never
/// across the backend call. While the call is in flight the field is marked pending
/// and a second request for it is refused with a conflict. The result is written
/// only if the field still holds the text that was enhanced; otherwise the caller
/// gets a conflict. On failure the field is left as it was.
pub async fn enhance_field(
    sessions: &SessionStore,
    pending: &PendingFields,
    enhancer: &dyn TextEnhancer,
    session_id: Uuid,
    target: &FieldTarget,
) -> Result<EnhanceResponse, AppError> {
    let session = sessions.get(session_id).await?;
    let generation = session.seed_generation;
    let text = session
        .data
        .read_field(target.section, target.id.as_deref(), &target.field)?
        .to_string();
    let request = EnhanceRequest {
        text,
        language: session.language,
    };
    if request.text.trim().is_empty() {
        return Err(EnhanceError::EmptyContent.into());
    }

    let key = FieldKey {
        session: session_id,
        section: target.section,
        entry: target.id.clone(),
        field: target.field.clone(),
    };
    let _guard = pending.try_acquire(key).ok_or_else(|| {
        AppError::Conflict(format!(
            "Field '{}' of section '{}' is already being enhanced",
            target.field, target.section
        ))
    })?;

    let response = enhance_text(enhancer, &request).await?;

    // Write back only onto the text that was sent; the field may have been
    // edited, shifted to another position, or reseeded while the call ran.
    let value = response.enhanced_content.clone();
    sessions
        .update(session_id, |s| {
            let current = s
                .data
                .read_field(target.section, target.id.as_deref(), &target.field);
            let unchanged = s.seed_generation == generation
                && matches!(current, Ok(text) if text == request.text);
            if !unchanged {
                return Err(AppError::Conflict(format!(
                    "Field '{}' of section '{}' changed while it was being enhanced",
                    target.field, target.section
                )));
            }
            s.data
                .update_field(target.section, target.id.as_deref(), &target.field, value)?;
            Ok(())
        })
        .await?;
    info!(
        "Session {session_id}: enhanced {}/{}",
        target.section, target.field
    );
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use tokio::sync::Notify;

    use crate::models::{AccentColor, Template};
    use crate::resume::mutation::SKILL_FIELD;
    use crate::resume::seed::seed_resume;
    use crate::session::Session;

    struct MockEnhancer {
        calls: AtomicUsize,
        fail: bool,
    }

    impl MockEnhancer {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail,
            }
        }
    }

    #[async_trait]
    impl TextEnhancer for MockEnhancer {
        async fn enhance(&self, text: &str, _language: Language) -> Result<String, EnhanceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(EnhanceError::Backend("boom".to_string()))
            } else {
                Ok(format!("Enhanced: {text}"))
            }
        }
    }

    /// Blocks inside the backend until released, to hold a field pending.
    struct GateEnhancer {
        entered: Arc<Notify>,
        release: Arc<Notify>,
    }

    #[async_trait]
    impl TextEnhancer for GateEnhancer {
        async fn enhance(&self, text: &str, _language: Language) -> Result<String, EnhanceError> {
            self.entered.notify_one();
            self.release.notified().await;
            Ok(text.to_uppercase())
        }
    }

    /// Runs a gated enhancement of `target`, applies `edit` while the backend
    /// call is still pending, then lets the call finish.
    async fn enhance_while<F>(
        store: &SessionStore,
        session_id: Uuid,
        target: FieldTarget,
        edit: F,
    ) -> Result<EnhanceResponse, AppError>
    where
        F: FnOnce(&mut Session) -> Result<(), AppError>,
    {
        let entered = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let gate = Arc::new(GateEnhancer {
            entered: entered.clone(),
            release: release.clone(),
        });
        let task = {
            let (store, gate) = (store.clone(), gate.clone());
            tokio::spawn(async move {
                enhance_field(&store, &PendingFields::new(), gate.as_ref(), session_id, &target)
                    .await
            })
        };
        entered.notified().await;
        store.update(session_id, edit).await.unwrap();
        release.notify_one();
        task.await.unwrap()
    }

    fn summary_target() -> FieldTarget {
        FieldTarget {
            section: SectionId::Summary,
            id: None,
            field: "summary".to_string(),
        }
    }

    #[tokio::test]
    async fn test_empty_text_never_calls_backend() {
        let mock = MockEnhancer::new(false);
        let request = EnhanceRequest {
            text: "  \n ".to_string(),
            language: Language::En,
        };
        assert_eq!(
            enhance_text(&mock, &request).await,
            Err(EnhanceError::EmptyContent)
        );
        assert_eq!(mock.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_backend_is_called_once() {
        let mock = MockEnhancer::new(true);
        let request = EnhanceRequest {
            text: "did stuff".to_string(),
            language: Language::Tr,
        };
        assert!(enhance_text(&mock, &request).await.is_err());
        assert_eq!(mock.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unavailable_backend() {
        let request = EnhanceRequest {
            text: "did stuff".to_string(),
            language: Language::En,
        };
        assert_eq!(
            enhance_text(&UnavailableEnhancer, &request).await,
            Err(EnhanceError::Unavailable)
        );
    }

    #[tokio::test]
    async fn test_field_is_replaced_on_success() {
        let store = SessionStore::new();
        let session = store.create(Language::En, Template::Modern, AccentColor::Green).await;
        let target = FieldTarget {
            section: SectionId::Summary,
            id: None,
            field: "summary".to_string(),
        };
        let mock = MockEnhancer::new(false);
        let response = enhance_field(&store, &PendingFields::new(), &mock, session.id, &target)
            .await
            .unwrap();
        let updated = store.get(session.id).await.unwrap();
        assert_eq!(updated.data.summary, response.enhanced_content);
        assert!(updated.data.summary.starts_with("Enhanced: "));
    }

    #[tokio::test]
    async fn test_failure_leaves_field_unchanged() {
        let store = SessionStore::new();
        let session = store.create(Language::En, Template::Modern, AccentColor::Green).await;
        let exp_id = session.data.experience[0].id.clone();
        let target = FieldTarget {
            section: SectionId::Experience,
            id: Some(exp_id.clone()),
            field: "description".to_string(),
        };
        let pending = PendingFields::new();
        let err = enhance_field(&store, &pending, &MockEnhancer::new(true), session.id, &target)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Enhancement(_)));
        let after = store.get(session.id).await.unwrap();
        assert_eq!(after.data.experience, session.data.experience);
        // The flag is cleared even though the call failed.
        let key = FieldKey {
            session: session.id,
            section: SectionId::Experience,
            entry: Some(exp_id),
            field: "description".to_string(),
        };
        assert!(!pending.is_pending(&key));
    }

    #[tokio::test]
    async fn test_blank_field_is_rejected_without_backend_call() {
        let store = SessionStore::new();
        let session = store.create(Language::En, Template::Modern, AccentColor::Green).await;
        let id = store
            .update(session.id, |s| Ok(s.data.add_entry(SectionId::Projects)?))
            .await
            .unwrap();
        let target = FieldTarget {
            section: SectionId::Projects,
            id: Some(id),
            field: "description".to_string(),
        };
        let mock = MockEnhancer::new(false);
        let err = enhance_field(&store, &PendingFields::new(), &mock, session.id, &target)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(mock.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_concurrent_enhancement_of_same_field_conflicts() {
        let store = SessionStore::new();
        let session_id = store
            .create(Language::En, Template::Modern, AccentColor::Green)
            .await
            .id;
        let pending = PendingFields::new();
        let entered = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let gate = Arc::new(GateEnhancer {
            entered: entered.clone(),
            release: release.clone(),
        });
        let target = FieldTarget {
            section: SectionId::Summary,
            id: None,
            field: "summary".to_string(),
        };

        let first = {
            let (store, pending, gate, target) =
                (store.clone(), pending.clone(), gate.clone(), target.clone());
            tokio::spawn(async move {
                enhance_field(&store, &pending, gate.as_ref(), session_id, &target).await
            })
        };
        entered.notified().await;

        let second = enhance_field(&store, &pending, gate.as_ref(), session_id, &target).await;
        assert!(matches!(second, Err(AppError::Conflict(_))));

        // Other fields remain editable while the summary is pending.
        store
            .update(session_id, |s| {
                s.data.update_field(SectionId::Profile, None, "name", "Jane".to_string())?;
                Ok(())
            })
            .await
            .unwrap();

        release.notify_one();
        let response = first.await.unwrap().unwrap();
        let after = store.get(session_id).await.unwrap();
        assert_eq!(after.data.summary, response.enhanced_content);
        assert_eq!(after.data.profile.name, "Jane");
    }

    #[tokio::test]
    async fn test_removing_an_earlier_skill_does_not_redirect_the_result() {
        let store = SessionStore::new();
        let session = store.create(Language::En, Template::Modern, AccentColor::Green).await;
        let before = session.data.skills.clone();
        assert_eq!(before[2], "React");
        let target = FieldTarget {
            section: SectionId::Skills,
            id: Some("2".to_string()),
            field: SKILL_FIELD.to_string(),
        };

        let result = enhance_while(&store, session.id, target, |s| {
            s.data.remove_entry(SectionId::Skills, "0")?;
            Ok(())
        })
        .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
        let after = store.get(session.id).await.unwrap();
        assert_eq!(after.data.skills, before[1..].to_vec());
        assert!(after.data.skills.iter().all(|skill| skill != "REACT"));
    }

    #[tokio::test]
    async fn test_reset_during_enhancement_discards_the_result() {
        let store = SessionStore::new();
        let session = store.create(Language::En, Template::Modern, AccentColor::Green).await;

        let result = enhance_while(&store, session.id, summary_target(), |s| {
            s.reset();
            Ok(())
        })
        .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
        let after = store.get(session.id).await.unwrap();
        assert_eq!(after.data.summary, seed_resume(Language::En).summary);
    }

    #[tokio::test]
    async fn test_language_switch_during_enhancement_discards_the_result() {
        let store = SessionStore::new();
        let session = store.create(Language::En, Template::Modern, AccentColor::Green).await;

        let result = enhance_while(&store, session.id, summary_target(), |s| {
            s.set_language(Language::Tr);
            Ok(())
        })
        .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
        let after = store.get(session.id).await.unwrap();
        assert_eq!(after.data.summary, seed_resume(Language::Tr).summary);
    }

    #[tokio::test]
    async fn test_user_edit_during_enhancement_wins() {
        let store = SessionStore::new();
        let session = store.create(Language::En, Template::Modern, AccentColor::Green).await;

        let result = enhance_while(&store, session.id, summary_target(), |s| {
            s.data
                .update_field(SectionId::Summary, None, "summary", "Mine".to_string())?;
            Ok(())
        })
        .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
        let after = store.get(session.id).await.unwrap();
        assert_eq!(after.data.summary, "Mine");
    }
}
