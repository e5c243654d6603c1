//! Settings page data
//!
//! Edits live only as long as the settings page is open; nothing is written
//! to disk.

use super::video::User;

/// Account fields, pre-filled from the demo user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountDraft {
    pub name: String,
    pub email: String,
    pub bio: String,
}

impl AccountDraft {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            bio: user.bio.clone(),
        }
    }
}

/// Notification and playback toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub autoplay: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            email_notifications: true,
            push_notifications: true,
            autoplay: false,
        }
    }
}
