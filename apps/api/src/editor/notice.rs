use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeVariant {
    Default,
    Destructive,
}

/// Toast-style outcome of an editor action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: &'static str,
    pub description: &'static str,
    pub variant: NoticeVariant,
}

impl Notice {
    const fn info(title: &'static str, description: &'static str) -> Self {
        Self {
            title,
            description,
            variant: NoticeVariant::Default,
        }
    }

    const fn failure(title: &'static str, description: &'static str) -> Self {
        Self {
            title,
            description,
            variant: NoticeVariant::Destructive,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.variant == NoticeVariant::Destructive
    }
}

pub const UPLOADED: Notice = Notice::info(
    "File uploaded successfully",
    "Resume content has been parsed and loaded.",
);
pub const UPLOAD_FAILED: Notice = Notice::failure(
    "Upload failed",
    "Could not read the uploaded file. Please try again.",
);
pub const ENHANCED: Notice = Notice::info("Content enhanced!", "AI has improved your content.");
pub const ENHANCE_FAILED: Notice = Notice::failure(
    "Enhancement failed",
    "Could not enhance content. Please try again.",
);
pub const SAVED: Notice = Notice::info("Resume saved!", "Your resume has been saved successfully.");
pub const SAVE_FAILED: Notice = Notice::failure(
    "Save failed",
    "Could not save resume. Please try again.",
);
pub const DOWNLOADED: Notice = Notice::info(
    "Resume downloaded!",
    "Your resume has been downloaded as JSON.",
);
pub const DOWNLOAD_FAILED: Notice = Notice::failure(
    "Download failed",
    "Could not write resume.json. Please try again.",
);
