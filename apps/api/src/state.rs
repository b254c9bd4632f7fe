use std::sync::Arc;

use crate::config::Config;
use crate::enhance::enhancer::{TemplateEnhancer, TextEnhancer};
use crate::ids::IdClock;
use crate::save::store::{InMemoryStore, ResumeStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable enhancer. Default: TemplateEnhancer, seeded from ENHANCER_SEED when set.
    pub enhancer: Arc<dyn TextEnhancer>,
    /// Pluggable store. Default: InMemoryStore (lost on restart).
    pub store: Arc<dyn ResumeStore>,
    /// Source of saved-resume ids.
    pub ids: Arc<IdClock>,
}

impl AppState {
    /// Default wiring: template enhancer and in-memory store.
    pub fn from_config(config: &Config) -> Self {
        let enhancer = Arc::new(TemplateEnhancer::new(config.enhancer_seed));
        Self {
            enhancer,
            store: Arc::new(InMemoryStore::new()),
            ids: Arc::new(IdClock::new()),
        }
    }
}
