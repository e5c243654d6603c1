//! Video and user records from the catalog

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single video in the feed. Never mutated after the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub thumbnail: String,
    pub channel_name: String,
    #[serde(default)]
    pub channel_avatar: String,
    #[serde(default)]
    pub views: u64,
    pub upload_date: DateTime<Utc>,
    pub duration: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub dislikes: u64,
    #[serde(default)]
    pub video_url: String,
}

impl Video {
    /// Case-insensitive match against title, channel and tags
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.channel_name.to_lowercase().contains(&query)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&query))
    }
}

/// The demo user. Doubles as the session identity and comment author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub subscriber_count: u64,
}

impl User {
    /// Up to two initials, used where the avatar image would go
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}
