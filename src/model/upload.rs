//! Upload form data and simulated upload progress
//!
//! Nothing is transferred anywhere: an upload is a progress counter driven by
//! a background ticker (see `services::upload_runner`).

use crate::error::CoreError;
use regex::Regex;
use std::sync::atomic::AtomicBool;
use std::sync::mpsc::Receiver;
use std::sync::{Arc, LazyLock};
use std::time::Instant;

/// Commas with any surrounding whitespace
static TAG_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*,\s*").expect("tag separator regex is valid"));

/// Video visibility chosen on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Privacy {
    #[default]
    Public,
    Private,
}

impl Privacy {
    pub fn toggle(self) -> Self {
        match self {
            Privacy::Public => Privacy::Private,
            Privacy::Private => Privacy::Public,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Privacy::Public => "Public",
            Privacy::Private => "Private",
        }
    }
}

/// What the user has typed into the upload form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadDraft {
    pub title: String,
    pub description: String,
    pub tags: String,
    pub privacy: Privacy,
    pub thumbnail: Option<String>,
}

impl UploadDraft {
    /// The title is the only required field
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.title.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "Please enter a video title".to_string(),
            ));
        }
        Ok(())
    }

    /// Split the comma separated tag field, dropping empty entries
    pub fn parsed_tags(&self) -> Vec<String> {
        TAG_SEPARATOR
            .split(self.tags.trim())
            .filter(|t| !t.is_empty())
            .map(|t| t.to_string())
            .collect()
    }

    pub fn clear(&mut self) {
        *self = UploadDraft::default();
    }
}

/// Upload lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadStatus {
    #[default]
    Idle,
    Uploading,
    Completed,
}

/// Progress as seen by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UploadProgress {
    pub status: UploadStatus,
    /// 0..=100
    pub percent: u8,
}

impl UploadProgress {
    pub fn is_uploading(&self) -> bool {
        self.status == UploadStatus::Uploading
    }
}

/// Messages from the upload ticker thread
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadMessage {
    Progress(u8),
    Completed,
}

/// A running simulated upload
pub struct UploadJob {
    pub receiver: Receiver<UploadMessage>,
    pub cancelled: Arc<AtomicBool>,
    pub start_instant: Instant,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_title() {
        let mut draft = UploadDraft::default();
        assert!(matches!(draft.validate(), Err(CoreError::InvalidInput(_))));

        draft.title = "   ".to_string();
        assert!(draft.validate().is_err());

        draft.title = "My first video".to_string();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_parsed_tags() {
        let mut draft = UploadDraft {
            tags: " React,TypeScript ,  Tutorial,, ".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.parsed_tags(), vec!["React", "TypeScript", "Tutorial"]);

        draft.tags = String::new();
        assert!(draft.parsed_tags().is_empty());
    }

    #[test]
    fn test_privacy_toggle() {
        assert_eq!(Privacy::Public.toggle(), Privacy::Private);
        assert_eq!(Privacy::Private.toggle(), Privacy::Public);
    }

    #[test]
    fn test_clear_resets_draft() {
        let mut draft = UploadDraft {
            title: "t".to_string(),
            description: "d".to_string(),
            tags: "a, b".to_string(),
            privacy: Privacy::Private,
            thumbnail: Some("thumb.png".to_string()),
        };
        draft.clear();
        assert_eq!(draft, UploadDraft::default());
    }
}
