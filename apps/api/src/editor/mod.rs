#![allow(dead_code)]

//! Editor: the resume form's state and the transitions the UI drives.
//!
//! Field edits are synchronous. Enhance and save go through a `ResumeApi`
//! and hold the loading flag for the duration of the call; upload goes
//! through a `DocumentParser`. Every user-facing outcome is a `Notice`.

pub mod notice;
pub mod parser;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::client::ResumeApi;
use crate::editor::notice::Notice;
use crate::editor::parser::{DocumentParser, UploadedFile};
use crate::enhance::enhancer::Section;
use crate::ids::IdClock;
use crate::models::resume::{
    Education, EducationField, Experience, ExperienceField, PersonalField, ResumeData,
};

/// File name used by `download_to`.
pub const EXPORT_FILE_NAME: &str = "resume.json";

/// Why an action was not started. These are the cases where the UI keeps
/// the button disabled; no request is made.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Unavailable {
    #[error("another request is in flight")]
    Busy,

    #[error("nothing to enhance")]
    EmptyContent,

    #[error("no entry with id {0}")]
    UnknownEntry(String),
}

#[derive(Debug, Default)]
pub struct Editor {
    resume: ResumeData,
    loading: bool,
    ids: IdClock,
}

/// Holds the loading flag up until dropped, so a cancelled call does not
/// leave the editor stuck in the loading state.
struct Loading<'a>(&'a mut bool);

impl<'a> Loading<'a> {
    fn start(flag: &'a mut bool) -> Self {
        *flag = true;
        Loading(flag)
    }
}

impl Drop for Loading<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resume(resume: ResumeData) -> Self {
        Self {
            resume,
            ..Self::default()
        }
    }

    pub fn resume(&self) -> &ResumeData {
        &self.resume
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    // ── Field edits ─────────────────────────────────────────────────────────

    pub fn set_summary(&mut self, value: impl Into<String>) {
        self.resume.summary = value.into();
    }

    pub fn update_personal_info(&mut self, field: PersonalField, value: impl Into<String>) {
        *self.resume.personal_info.field_mut(field) = value.into();
    }

    /// Appends a blank entry and returns its id.
    pub fn add_experience(&mut self) -> String {
        let id = self.ids.next_id();
        self.resume.experience.push(Experience::blank(id.clone()));
        id
    }

    /// Returns false when no entry has `id`.
    pub fn remove_experience(&mut self, id: &str) -> bool {
        let before = self.resume.experience.len();
        self.resume.experience.retain(|exp| exp.id != id);
        self.resume.experience.len() != before
    }

    /// Unknown ids are a no-op; returns whether an entry was updated.
    pub fn update_experience(
        &mut self,
        id: &str,
        field: ExperienceField,
        value: impl Into<String>,
    ) -> bool {
        match self.resume.experience.iter_mut().find(|exp| exp.id == id) {
            Some(exp) => {
                *exp.field_mut(field) = value.into();
                true
            }
            None => false,
        }
    }

    pub fn add_education(&mut self) -> String {
        let id = self.ids.next_id();
        self.resume.education.push(Education::blank(id.clone()));
        id
    }

    pub fn remove_education(&mut self, id: &str) -> bool {
        let before = self.resume.education.len();
        self.resume.education.retain(|edu| edu.id != id);
        self.resume.education.len() != before
    }

    pub fn update_education(
        &mut self,
        id: &str,
        field: EducationField,
        value: impl Into<String>,
    ) -> bool {
        match self.resume.education.iter_mut().find(|edu| edu.id == id) {
            Some(edu) => {
                *edu.field_mut(field) = value.into();
                true
            }
            None => false,
        }
    }

    /// Adds the trimmed skill unless it is blank or already listed.
    pub fn add_skill(&mut self, raw: &str) -> bool {
        let skill = raw.trim();
        if skill.is_empty() || self.resume.skills.iter().any(|s| s == skill) {
            return false;
        }
        self.resume.skills.push(skill.to_string());
        true
    }

    pub fn remove_skill(&mut self, skill: &str) -> bool {
        let before = self.resume.skills.len();
        self.resume.skills.retain(|s| s != skill);
        self.resume.skills.len() != before
    }

    // ── Upload / download ───────────────────────────────────────────────────

    /// Replaces the whole resume with whatever the parser produces.
    pub async fn load_document(
        &mut self,
        parser: &dyn DocumentParser,
        file: &UploadedFile,
    ) -> Notice {
        match parser.parse(file).await {
            Ok(resume) => {
                debug!(file = %file.name, bytes = file.bytes.len(), "Document loaded");
                self.resume = resume;
                notice::UPLOADED
            }
            Err(e) => {
                warn!(file = %file.name, "Document rejected: {e}");
                notice::UPLOAD_FAILED
            }
        }
    }

    /// Pretty-printed JSON of the current resume.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.resume)
    }

    /// Writes `resume.json` into `dir`, returning the path on success.
    pub fn download_to(&self, dir: &Path) -> (Notice, Option<PathBuf>) {
        let path = dir.join(EXPORT_FILE_NAME);
        let written = self
            .export_json()
            .map_err(std::io::Error::from)
            .and_then(|json| std::fs::write(&path, json));

        match written {
            Ok(()) => (notice::DOWNLOADED, Some(path)),
            Err(e) => {
                warn!(path = %path.display(), "Resume download failed: {e}");
                (notice::DOWNLOAD_FAILED, None)
            }
        }
    }

    // ── Network actions ─────────────────────────────────────────────────────

    pub async fn enhance_summary(&mut self, api: &dyn ResumeApi) -> Result<Notice, Unavailable> {
        if self.loading {
            return Err(Unavailable::Busy);
        }
        if self.resume.summary.is_empty() {
            return Err(Unavailable::EmptyContent);
        }

        let _loading = Loading::start(&mut self.loading);
        match api.enhance(&Section::Summary, &self.resume.summary).await {
            Ok(enhanced) => {
                self.resume.summary = enhanced;
                Ok(notice::ENHANCED)
            }
            Err(e) => {
                warn!("Summary enhancement failed: {e}");
                Ok(notice::ENHANCE_FAILED)
            }
        }
    }

    /// Enhances the description of the experience entry with `id`.
    pub async fn enhance_experience(
        &mut self,
        api: &dyn ResumeApi,
        id: &str,
    ) -> Result<Notice, Unavailable> {
        if self.loading {
            return Err(Unavailable::Busy);
        }
        let description = self
            .resume
            .experience
            .iter()
            .find(|exp| exp.id == id)
            .map(|exp| exp.description.clone())
            .ok_or_else(|| Unavailable::UnknownEntry(id.to_string()))?;
        if description.is_empty() {
            return Err(Unavailable::EmptyContent);
        }

        let _loading = Loading::start(&mut self.loading);
        match api.enhance(&Section::Experience, &description).await {
            Ok(enhanced) => {
                if let Some(exp) = self.resume.experience.iter_mut().find(|exp| exp.id == id) {
                    exp.description = enhanced;
                }
                Ok(notice::ENHANCED)
            }
            Err(e) => {
                warn!(entry = id, "Experience enhancement failed: {e}");
                Ok(notice::ENHANCE_FAILED)
            }
        }
    }

    pub async fn save(&mut self, api: &dyn ResumeApi) -> Result<Notice, Unavailable> {
        if self.loading {
            return Err(Unavailable::Busy);
        }

        let _loading = Loading::start(&mut self.loading);
        match api.save(&self.resume).await {
            Ok(response) => {
                debug!(resume_id = %response.resume_id, "Resume saved");
                Ok(notice::SAVED)
            }
            Err(e) => {
                warn!("Resume save failed: {e}");
                Ok(notice::SAVE_FAILED)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::Value;

    use crate::client::ClientError;
    use crate::editor::parser::{sample_resume, SampleDocumentParser};
    use crate::enhance::enhancer::enhance_with;
    use crate::save::handlers::SaveResponse;

    /// In-process `ResumeApi`: deterministic enhancement, records saves.
    #[derive(Default)]
    struct FakeApi {
        fail: bool,
        enhanced: Mutex<Vec<(String, String)>>,
        saved: Mutex<Vec<ResumeData>>,
    }

    impl FakeApi {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl ResumeApi for FakeApi {
        async fn enhance(&self, section: &Section, content: &str) -> Result<String, ClientError> {
            if self.fail {
                return Err(ClientError::Failed("boom".to_string()));
            }
            self.enhanced
                .lock()
                .unwrap()
                .push((section.to_string(), content.to_string()));
            let mut rng = StdRng::seed_from_u64(0);
            Ok(enhance_with(&mut rng, section, content))
        }

        async fn save(&self, resume: &ResumeData) -> Result<SaveResponse, ClientError> {
            if self.fail {
                return Err(ClientError::Api {
                    status: 500,
                    message: "Failed to save resume".to_string(),
                });
            }
            self.saved.lock().unwrap().push(resume.clone());
            Ok(SaveResponse {
                success: true,
                message: "Resume saved successfully".to_string(),
                resume_id: "1700000000000".to_string(),
            })
        }

        async fn fetch_saved(&self) -> Result<Option<Value>, ClientError> {
            Ok(None)
        }
    }

    fn ids(entries: &[Experience]) -> Vec<&str> {
        entries.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_new_editor_is_empty_and_idle() {
        let editor = Editor::new();
        assert_eq!(editor.resume(), &ResumeData::default());
        assert!(!editor.is_loading());
    }

    #[test]
    fn test_added_entries_get_unique_ids() {
        let mut editor = Editor::new();
        let a = editor.add_experience();
        let b = editor.add_experience();
        let c = editor.add_experience();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_eq!(ids(&editor.resume().experience), vec![a.as_str(), b.as_str(), c.as_str()]);
        assert!(editor.resume().experience.iter().all(|e| e.company.is_empty()));
    }

    #[test]
    fn test_remove_experience_keeps_order_of_others() {
        let mut editor = Editor::new();
        let a = editor.add_experience();
        let b = editor.add_experience();
        let c = editor.add_experience();

        assert!(editor.remove_experience(&b));
        assert_eq!(ids(&editor.resume().experience), vec![a.as_str(), c.as_str()]);

        assert!(!editor.remove_experience("missing"));
        assert_eq!(editor.resume().experience.len(), 2);
    }

    #[test]
    fn test_remove_education_removes_exactly_one() {
        let mut editor = Editor::new();
        let a = editor.add_education();
        let b = editor.add_education();
        editor.update_education(&a, EducationField::Institution, "MIT");
        editor.update_education(&b, EducationField::Institution, "CMU");

        assert!(editor.remove_education(&a));
        let remaining = &editor.resume().education;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, b);
        assert_eq!(remaining[0].institution, "CMU");
    }

    #[test]
    fn test_update_touches_only_target_entry() {
        let mut editor = Editor::new();
        let a = editor.add_experience();
        let b = editor.add_experience();

        assert!(editor.update_experience(&b, ExperienceField::Position, "Staff Engineer"));
        assert!(!editor.update_experience("nope", ExperienceField::Position, "x"));

        let exps = &editor.resume().experience;
        assert_eq!(exps[0].id, a);
        assert!(exps[0].position.is_empty());
        assert_eq!(exps[1].position, "Staff Engineer");
    }

    #[test]
    fn test_personal_info_and_summary() {
        let mut editor = Editor::new();
        editor.update_personal_info(PersonalField::Email, "ada@example.com");
        editor.set_summary("Engineer");

        assert_eq!(editor.resume().personal_info.email, "ada@example.com");
        assert!(editor.resume().personal_info.name.is_empty());
        assert_eq!(editor.resume().summary, "Engineer");
    }

    #[test]
    fn test_add_skill_is_idempotent() {
        let mut editor = Editor::new();
        assert!(editor.add_skill("Rust"));
        assert!(editor.add_skill("  Go "));
        let before = editor.resume().skills.clone();

        assert!(!editor.add_skill("Rust"));
        assert!(!editor.add_skill(" Rust  "));
        assert!(!editor.add_skill("   "));
        assert_eq!(editor.resume().skills, before);
        assert_eq!(before, vec!["Rust", "Go"]);
    }

    #[test]
    fn test_remove_skill() {
        let mut editor = Editor::new();
        editor.add_skill("Rust");
        editor.add_skill("Go");
        assert!(editor.remove_skill("Rust"));
        assert!(!editor.remove_skill("Rust"));
        assert_eq!(editor.resume().skills, vec!["Go"]);
    }

    #[tokio::test]
    async fn test_upload_replaces_everything() {
        let mut editor = Editor::new();
        editor.set_summary("draft");
        editor.add_skill("Haskell");

        let file = UploadedFile {
            name: "resume.pdf".to_string(),
            bytes: bytes::Bytes::from_static(b"ignored"),
        };
        let notice = editor.load_document(&SampleDocumentParser, &file).await;

        assert_eq!(notice, notice::UPLOADED);
        assert_eq!(editor.resume(), &sample_resume());
    }

    #[test]
    fn test_export_is_pretty_camel_case_json() {
        let mut editor = Editor::new();
        editor.update_personal_info(PersonalField::Name, "Ada");
        let json = editor.export_json().unwrap();

        assert!(json.contains('\n'));
        assert!(json.contains("\"personalInfo\""));
        let parsed: ResumeData = serde_json::from_str(&json).unwrap();
        assert_eq!(&parsed, editor.resume());
    }

    #[test]
    fn test_download_writes_resume_json() {
        let dir = tempfile::tempdir().unwrap();
        let editor = Editor::with_resume(sample_resume());

        let (notice, path) = editor.download_to(dir.path());
        assert_eq!(notice, notice::DOWNLOADED);

        let path = path.unwrap();
        assert_eq!(path.file_name().unwrap(), EXPORT_FILE_NAME);
        let written = std::fs::read_to_string(path).unwrap();
        assert_eq!(written, editor.export_json().unwrap());
    }

    #[test]
    fn test_download_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let editor = Editor::new();

        let (notice, path) = editor.download_to(&dir.path().join("missing"));
        assert!(notice.is_failure());
        assert!(path.is_none());
    }

    #[tokio::test]
    async fn test_enhance_summary_updates_text() {
        let api = FakeApi::default();
        let mut editor = Editor::new();
        editor.set_summary("Rust Developer");

        let notice = editor.enhance_summary(&api).await.unwrap();
        assert_eq!(notice, notice::ENHANCED);
        assert!(editor.resume().summary.contains("rust developer"));
        assert!(!editor.is_loading());
        assert_eq!(
            api.enhanced.lock().unwrap().as_slice(),
            &[("summary".to_string(), "Rust Developer".to_string())]
        );
    }

    #[tokio::test]
    async fn test_enhance_summary_refuses_empty() {
        let api = FakeApi::default();
        let mut editor = Editor::new();

        assert_eq!(
            editor.enhance_summary(&api).await,
            Err(Unavailable::EmptyContent)
        );
        assert!(api.enhanced.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_enhance_summary_sends_whitespace_only_text() {
        let api = FakeApi::default();
        let mut editor = Editor::new();
        editor.set_summary("   ");

        let notice = editor.enhance_summary(&api).await.unwrap();
        assert_eq!(notice, notice::ENHANCED);
        assert_eq!(
            api.enhanced.lock().unwrap().as_slice(),
            &[("summary".to_string(), "   ".to_string())]
        );
    }

    #[tokio::test]
    async fn test_enhance_experience_targets_entry_by_id() {
        let api = FakeApi::default();
        let mut editor = Editor::new();
        let first = editor.add_experience();
        let second = editor.add_experience();
        editor.update_experience(&first, ExperienceField::Description, "First job.");
        editor.update_experience(&second, ExperienceField::Description, "Second job.");

        let notice = editor.enhance_experience(&api, &second).await.unwrap();
        assert_eq!(notice, notice::ENHANCED);

        let exps = &editor.resume().experience;
        assert_eq!(exps[0].description, "First job.");
        assert!(exps[1].description.starts_with("Second job. "));
    }

    #[tokio::test]
    async fn test_enhance_experience_unknown_or_blank() {
        let api = FakeApi::default();
        let mut editor = Editor::new();
        let id = editor.add_experience();

        assert_eq!(
            editor.enhance_experience(&api, &id).await,
            Err(Unavailable::EmptyContent)
        );
        assert_eq!(
            editor.enhance_experience(&api, "ghost").await,
            Err(Unavailable::UnknownEntry("ghost".to_string()))
        );
    }

    #[tokio::test]
    async fn test_enhance_failure_keeps_text_and_clears_loading() {
        let api = FakeApi::failing();
        let mut editor = Editor::new();
        editor.set_summary("Original");

        let notice = editor.enhance_summary(&api).await.unwrap();
        assert_eq!(notice, notice::ENHANCE_FAILED);
        assert_eq!(editor.resume().summary, "Original");
        assert!(!editor.is_loading());
    }

    #[tokio::test]
    async fn test_save_sends_current_state() {
        let api = FakeApi::default();
        let mut editor = Editor::new();
        editor.add_skill("Rust");

        let notice = editor.save(&api).await.unwrap();
        assert_eq!(notice, notice::SAVED);
        assert_eq!(api.saved.lock().unwrap().as_slice(), &[editor.resume().clone()]);
        assert!(!editor.is_loading());
    }

    #[tokio::test]
    async fn test_save_failure_is_generic() {
        let api = FakeApi::failing();
        let mut editor = Editor::new();

        let notice = editor.save(&api).await.unwrap();
        assert_eq!(notice, notice::SAVE_FAILED);
        assert!(notice.is_failure());
    }

    #[tokio::test]
    async fn test_busy_editor_refuses_network_actions() {
        let api = FakeApi::default();
        let mut editor = Editor::new();
        editor.set_summary("Something");
        editor.loading = true;

        assert_eq!(editor.save(&api).await, Err(Unavailable::Busy));
        assert_eq!(editor.enhance_summary(&api).await, Err(Unavailable::Busy));
        assert!(api.saved.lock().unwrap().is_empty());
    }
}
