//! Text enhancer: pluggable, trait-based rewriter for resume sections.
//!
//! Default: `TemplateEnhancer` (canned phrases, seedable randomness, no network).
//!
//! `AppState` holds an `Arc<dyn TextEnhancer>`, chosen at startup.

use std::fmt;
use std::sync::Mutex;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::enhance::templates::{
    EXPERIENCE_TEMPLATES, FALLBACK_PREFIX, SUMMARY_CLOSING, SUMMARY_TEMPLATES,
};
use crate::errors::AppError;

/// The resume block an enhancement request addresses.
///
/// Only `summary` and `experience` get template treatment; any other string
/// is carried through as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Section {
    Summary,
    Experience,
    Other(String),
}

impl Section {
    pub fn as_str(&self) -> &str {
        match self {
            Section::Summary => "summary",
            Section::Experience => "experience",
            Section::Other(name) => name.as_str(),
        }
    }
}

impl From<String> for Section {
    fn from(value: String) -> Self {
        match value.as_str() {
            "summary" => Section::Summary,
            "experience" => Section::Experience,
            _ => Section::Other(value),
        }
    }
}

impl From<Section> for String {
    fn from(section: Section) -> Self {
        match section {
            Section::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The enhancer trait. Implement this to swap backends without touching
/// the endpoint or handler code.
#[async_trait]
pub trait TextEnhancer: Send + Sync {
    async fn enhance(&self, section: &Section, content: &str) -> Result<String, AppError>;
}

/// Canned-phrase enhancer. The random source is injected so that a fixed
/// seed yields a fixed sequence of template picks.
pub struct TemplateEnhancer {
    rng: Mutex<StdRng>,
}

impl TemplateEnhancer {
    /// Seeded from OS entropy when `seed` is `None`.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

#[async_trait]
impl TextEnhancer for TemplateEnhancer {
    async fn enhance(&self, section: &Section, content: &str) -> Result<String, AppError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| AppError::Enhancement("template source is poisoned".to_string()))?;
        Ok(enhance_with(&mut *rng, section, content))
    }
}

/// Picks one template uniformly at random.
pub fn pick_template<R: Rng + ?Sized>(rng: &mut R, templates: &[&'static str]) -> &'static str {
    templates[rng.random_range(0..templates.len())]
}

/// Applies the canned enhancement for `section` to `content`.
pub fn enhance_with<R: Rng + ?Sized>(rng: &mut R, section: &Section, content: &str) -> String {
    match section {
        Section::Summary => {
            let opener = pick_template(rng, &SUMMARY_TEMPLATES);
            format!("{opener} {}. {SUMMARY_CLOSING}", content.to_lowercase())
        }
        Section::Experience => {
            let sentence = pick_template(rng, &EXPERIENCE_TEMPLATES);
            format!("{content} {sentence}")
        }
        Section::Other(_) => format!("{FALLBACK_PREFIX}{content}"),
    }
}
