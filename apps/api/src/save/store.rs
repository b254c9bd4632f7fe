use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::RwLock;

/// Key under which the save endpoint keeps the most recent resume.
pub const SLOT_KEY: &str = "current";

/// Prefix of the per-save history keys (`resume:<id>`).
pub const HISTORY_PREFIX: &str = "resume:";

pub fn history_key(resume_id: &str) -> String {
    format!("{HISTORY_PREFIX}{resume_id}")
}

#[derive(Debug, Error)]
pub enum StoreError {
    // Only raised by backends with an external dependency; the in-memory
    // store cannot fail.
    #[allow(dead_code)]
    #[error("store backend unavailable: {0}")]
    Unavailable(String),
}

/// Key-value storage for saved resumes.
///
/// Carried in `AppState` as `Arc<dyn ResumeStore>`. `put` replaces whatever
/// was stored under the key; there is no versioning.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;
    async fn put(&self, key: &str, value: Value) -> Result<(), StoreError>;
    /// Keys starting with `prefix`, in ascending key order.
    async fn keys(&self, prefix: &str) -> Result<Vec<String>, StoreError>;
}

/// Process-local store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: RwLock<BTreeMap<String, Value>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResumeStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn keys(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        let entries = self.entries.read().await;
        Ok(entries
            .range(prefix.to_string()..)
            .map(|(key, _)| key)
            .take_while(|key| key.starts_with(prefix))
            .cloned()
            .collect())
    }
}
