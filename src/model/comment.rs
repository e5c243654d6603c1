//! Comments and the newest-first comment store

use super::video::User;
use crate::error::CoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single comment under a video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    #[serde(default)]
    pub user_avatar: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub likes: u64,
}

/// Ordered comment collection, newest first.
///
/// Only `add_comment` mutates it. Ids come from a counter that never goes
/// backwards, so they stay unique for the life of the store.
#[derive(Debug)]
pub struct CommentStore {
    comments: Vec<Comment>,
    next_id: u64,
}

impl Default for CommentStore {
    fn default() -> Self {
        Self::with_comments(Vec::new())
    }
}

impl CommentStore {
    /// Seed the store. `seed` is expected newest first, as it will be shown.
    pub fn with_comments(seed: Vec<Comment>) -> Self {
        let highest_seeded = seed
            .iter()
            .filter_map(|c| c.id.strip_prefix('c'))
            .filter_map(|n| n.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        let next_id = highest_seeded.max(seed.len() as u64) + 1;

        Self {
            comments: seed,
            next_id,
        }
    }

    /// Prepend a comment by `author`.
    ///
    /// Empty or whitespace-only text is rejected with `InvalidInput` and the
    /// store is left untouched. The text itself is stored as given.
    pub fn add_comment(&mut self, content: &str, author: &User) -> Result<&Comment, CoreError> {
        if content.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "comment text must not be empty".to_string(),
            ));
        }

        let comment = Comment {
            id: format!("c{}", self.next_id),
            user_id: author.id.clone(),
            user_name: author.name.clone(),
            user_avatar: author.avatar.clone(),
            content: content.to_string(),
            timestamp: Utc::now(),
            likes: 0,
        };
        self.next_id += 1;

        self.comments.insert(0, comment);
        Ok(&self.comments[0])
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }
}
