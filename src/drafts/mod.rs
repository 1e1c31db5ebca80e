//! Scoped autosave storage for in-progress forms.
//!
//! A draft is keyed by the form it belongs to and, when editing, the entity
//! being edited. Hosts load the draft when the form mounts and clear it once the
//! form is submitted.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{Result, ScheduleError};
use crate::utils::persistence::{canonical_name, ensure_dir, load_json, save_json};

/// Identifies one draft slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct DraftScope {
    pub form: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
}

impl DraftScope {
    /// Scope for a form creating a new entity.
    pub fn new_entity(form: impl Into<String>) -> Self {
        Self {
            form: form.into(),
            entity_id: None,
        }
    }

    /// Scope for a form editing an existing entity.
    pub fn editing(form: impl Into<String>, entity_id: impl Into<String>) -> Self {
        Self {
            form: form.into(),
            entity_id: Some(entity_id.into()),
        }
    }

    /// Readable label for logs; sanitized, so distinct scopes may share it.
    pub fn label(&self) -> String {
        let form = canonical_name(&self.form, "form");
        match &self.entity_id {
            Some(id) => format!("{}__{}", form, canonical_name(id, "entity")),
            None => format!("{}__new", form),
        }
    }

    /// Stable key used for file names: the label plus a fingerprint of the raw scope.
    pub fn key(&self) -> String {
        format!("{}-{:016x}", self.label(), self.fingerprint())
    }

    // 64-bit FNV-1a over the unsanitized fields; the tag byte keeps
    // `new_entity(f)` apart from `editing(f, "new")`.
    fn fingerprint(&self) -> u64 {
        const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
        const PRIME: u64 = 0x0000_0100_0000_01b3;
        let mut bytes = self.form.as_bytes().to_vec();
        match &self.entity_id {
            Some(id) => {
                bytes.push(1);
                bytes.extend_from_slice(id.as_bytes());
            }
            None => bytes.push(0),
        }
        bytes
            .iter()
            .fold(OFFSET, |hash, byte| (hash ^ u64::from(*byte)).wrapping_mul(PRIME))
    }
}

/// A saved snapshot of form fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Draft {
    pub scope: DraftScope,
    pub payload: Value,
    pub saved_at: DateTime<Utc>,
}

impl Draft {
    pub fn new(scope: DraftScope, payload: Value) -> Self {
        Self {
            scope,
            payload,
            saved_at: Utc::now(),
        }
    }
}

pub trait DraftStore {
    fn load(&self, scope: &DraftScope) -> Result<Option<Draft>>;
    fn save(&self, draft: &Draft) -> Result<()>;
    /// Removes the draft; clearing a missing draft is not an error.
    fn clear(&self, scope: &DraftScope) -> Result<()>;
}

/// Process-local store, suitable for tests and short-lived sessions.
#[derive(Debug, Default)]
pub struct MemoryDraftStore {
    drafts: RwLock<HashMap<DraftScope, Draft>>,
}

impl MemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> ScheduleError {
        ScheduleError::Storage("draft store lock poisoned".into())
    }
}

impl DraftStore for MemoryDraftStore {
    fn load(&self, scope: &DraftScope) -> Result<Option<Draft>> {
        let drafts = self.drafts.read().map_err(|_| Self::poisoned())?;
        Ok(drafts.get(scope).cloned())
    }

    fn save(&self, draft: &Draft) -> Result<()> {
        let mut drafts = self.drafts.write().map_err(|_| Self::poisoned())?;
        drafts.insert(draft.scope.clone(), draft.clone());
        Ok(())
    }

    fn clear(&self, scope: &DraftScope) -> Result<()> {
        let mut drafts = self.drafts.write().map_err(|_| Self::poisoned())?;
        drafts.remove(scope);
        Ok(())
    }
}

/// Stores one pretty-printed JSON file per scope under a directory.
#[derive(Debug, Clone)]
pub struct JsonDraftStore {
    dir: PathBuf,
}

impl JsonDraftStore {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        ensure_dir(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn draft_path(&self, scope: &DraftScope) -> PathBuf {
        self.dir.join(format!("{}.json", scope.key()))
    }
}

impl DraftStore for JsonDraftStore {
    fn load(&self, scope: &DraftScope) -> Result<Option<Draft>> {
        let draft: Option<Draft> = load_json(&self.draft_path(scope))?;
        Ok(draft.filter(|draft| &draft.scope == scope))
    }

    /// Refuses to replace a file that holds a different scope's draft.
    fn save(&self, draft: &Draft) -> Result<()> {
        let path = self.draft_path(&draft.scope);
        if let Some(existing) = load_json::<Draft>(&path)? {
            if existing.scope != draft.scope {
                return Err(ScheduleError::Storage(format!(
                    "draft file `{}` belongs to another scope",
                    path.display()
                )));
            }
        }
        save_json(draft, &path)?;
        tracing::debug!(scope = %draft.scope.label(), "saved draft");
        Ok(())
    }

    /// Leaves a file alone unless it holds this exact scope.
    fn clear(&self, scope: &DraftScope) -> Result<()> {
        let path = self.draft_path(scope);
        match load_json::<Draft>(&path)? {
            Some(existing) if &existing.scope == scope => {
                fs::remove_file(&path)?;
                tracing::debug!(scope = %scope.label(), "cleared draft");
            }
            Some(_) => {
                tracing::warn!(
                    scope = %scope.label(),
                    "draft file belongs to another scope; not clearing"
                );
            }
            None => {}
        }
        Ok(())
    }
}
