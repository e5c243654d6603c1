//! Read-only sample catalog
//!
//! The catalog is loaded once at startup and never changes afterwards. The
//! built-in data is embedded in the binary; `Config::catalog_path` can point at
//! an alternate JSON file with the same shape.

use super::comment::Comment;
use super::video::{User, Video};
use crate::error::CoreError;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.json");

/// Static videos plus the single demo user
#[derive(Debug, Clone)]
pub struct Catalog {
    videos: Vec<Video>,
    user: User,
}

impl Catalog {
    pub fn new(videos: Vec<Video>, user: User) -> Self {
        Self { videos, user }
    }

    /// Look up a video by id. Linear scan; the dataset is tiny and fixed.
    pub fn find_video_by_id(&self, id: &str) -> Option<&Video> {
        self.videos.iter().find(|v| v.id == id)
    }

    /// Like `find_video_by_id`, but as a typed error
    pub fn require_video(&self, id: &str) -> Result<&Video, CoreError> {
        self.find_video_by_id(id)
            .ok_or_else(|| CoreError::NotFound(id.to_string()))
    }

    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    pub fn user(&self) -> &User {
        &self.user
    }
}

/// On-disk shape of the catalog file
#[derive(Debug, Deserialize)]
struct CatalogFile {
    user: User,
    videos: Vec<Video>,
    #[serde(default)]
    comments: Vec<Comment>,
}

/// Everything loaded at startup: the catalog and the comments to seed the
/// comment store with (newest first).
#[derive(Debug, Clone)]
pub struct SampleData {
    pub catalog: Catalog,
    pub comments: Vec<Comment>,
}

impl SampleData {
    /// The catalog compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG).context("built-in catalog is invalid")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        Self::from_json(&contents)
            .with_context(|| format!("Failed to load catalog {}", path.display()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;

        let mut seen = HashSet::new();
        for video in &file.videos {
            if !seen.insert(video.id.as_str()) {
                bail!("duplicate video id '{}'", video.id);
            }
        }

        Ok(Self {
            catalog: Catalog::new(file.videos, file.user),
            comments: file.comments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loads() {
        let data = SampleData::builtin().unwrap();
        assert!(!data.catalog.videos().is_empty());
        assert_eq!(data.catalog.user().name, "John Creator");
        assert!(!data.comments.is_empty());
    }

    #[test]
    fn test_find_video_by_id() {
        let data = SampleData::builtin().unwrap();
        let video = data.catalog.find_video_by_id("v2").unwrap();
        assert_eq!(video.id, "v2");
    }

    #[test]
    fn test_find_video_missing() {
        let data = SampleData::builtin().unwrap();
        assert!(data.catalog.find_video_by_id("does-not-exist").is_none());
        assert_eq!(
            data.catalog.require_video("does-not-exist").unwrap_err(),
            CoreError::NotFound("does-not-exist".to_string())
        );
    }

    #[test]
    fn test_lookup_is_idempotent() {
        let data = SampleData::builtin().unwrap();
        for id in ["v1", "v5", "nope"] {
            let first = data.catalog.find_video_by_id(id).cloned();
            let second = data.catalog.find_video_by_id(id).cloned();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"{
            "user": {"id": "u1", "name": "A", "email": "a@example.com"},
            "videos": [
                {"id": "v1", "title": "One", "channel_name": "C", "upload_date": "2024-01-01T00:00:00Z", "duration": "1:00"},
                {"id": "v1", "title": "Two", "channel_name": "C", "upload_date": "2024-01-01T00:00:00Z", "duration": "2:00"}
            ]
        }"#;

        let err = SampleData::from_json(json).unwrap_err();
        assert!(err.to_string().contains("duplicate video id"));
    }

    #[test]
    fn test_comments_are_optional() {
        let json = r#"{
            "user": {"id": "u1", "name": "A", "email": "a@example.com"},
            "videos": []
        }"#;

        let data = SampleData::from_json(json).unwrap();
        assert!(data.comments.is_empty());
        assert!(data.catalog.videos().is_empty());
    }
}
