//! Per-field pending flags for in-flight enhancements.
//!
//! A flag is held by a `PendingGuard` and cleared when the guard drops, so an
//! early return or a failed backend call can never leave a field stuck.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::models::SectionId;

/// Identifies one enhanceable text field of one session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldKey {
    pub session: Uuid,
    pub section: SectionId,
    pub entry: Option<String>,
    pub field: String,
}

#[derive(Clone, Default)]
pub struct PendingFields {
    inner: Arc<Mutex<HashSet<FieldKey>>>,
}

impl PendingFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `key` as pending. Returns `None` when it already is.
    pub fn try_acquire(&self, key: FieldKey) -> Option<PendingGuard> {
        let mut pending = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if !pending.insert(key.clone()) {
            return None;
        }
        Some(PendingGuard {
            fields: self.clone(),
            key,
        })
    }

    #[cfg(test)]
    pub fn is_pending(&self, key: &FieldKey) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(key)
    }
}

pub struct PendingGuard {
    fields: PendingFields,
    key: FieldKey,
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.fields
            .inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(field: &str) -> FieldKey {
        FieldKey {
            session: Uuid::nil(),
            section: SectionId::Experience,
            entry: Some("exp-1".to_string()),
            field: field.to_string(),
        }
    }

    #[test]
    fn test_second_acquire_is_refused_until_drop() {
        let pending = PendingFields::new();
        let guard = pending.try_acquire(key("description")).unwrap();
        assert!(pending.try_acquire(key("description")).is_none());
        assert!(pending.is_pending(&key("description")));
        drop(guard);
        assert!(!pending.is_pending(&key("description")));
        assert!(pending.try_acquire(key("description")).is_some());
    }

    #[test]
    fn test_other_fields_stay_available() {
        let pending = PendingFields::new();
        let _guard = pending.try_acquire(key("description")).unwrap();
        assert!(pending.try_acquire(key("title")).is_some());
    }
}
