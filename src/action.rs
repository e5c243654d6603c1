//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::Page;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for animations/updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force quit without confirmation
    ForceQuit,
    /// Transition from splash to main app
    SplashComplete,

    // ─────────────────────────────────────────────────────────────────────────
    // Routing
    // ─────────────────────────────────────────────────────────────────────────
    /// Go to a page, clearing any selected video
    Navigate(Page),
    /// Open the detail page for a video id
    SelectVideo(String),
    /// Return to the home feed
    Back,

    // ─────────────────────────────────────────────────────────────────────────
    // Comments
    // ─────────────────────────────────────────────────────────────────────────
    /// Add a comment as the current user
    AddComment(String),

    // ─────────────────────────────────────────────────────────────────────────
    // List Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move to next item in list
    NextItem,
    /// Move to previous item in list
    PrevItem,
    /// Jump to first item
    FirstItem,
    /// Jump to last item
    LastItem,
    /// Open the video highlighted in the feed
    OpenSelectedVideo,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────
    /// Enter search mode
    EnterSearchMode,
    /// Exit search mode
    ExitSearchMode,
    /// Add character to search query
    SearchInput(char),
    /// Remove last character from search query
    SearchBackspace,

    // ─────────────────────────────────────────────────────────────────────────
    // Player
    // ─────────────────────────────────────────────────────────────────────────
    /// Play/pause the simulated player
    TogglePlayback,
    /// Mute/unmute the simulated player
    ToggleMute,
    /// Move the progress bar forward
    SeekForward,
    /// Move the progress bar back
    SeekBackward,

    // ─────────────────────────────────────────────────────────────────────────
    // Forms
    // ─────────────────────────────────────────────────────────────────────────
    /// Submit the upload form
    SubmitUpload,
    /// Save the settings form
    SaveSettings,
    /// Show an informational toast
    Notify(String),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::SplashComplete => write!(f, "SplashComplete"),
            Action::Navigate(page) => write!(f, "Navigate({})", page.name()),
            Action::SelectVideo(id) => write!(f, "SelectVideo({})", id),
            Action::Back => write!(f, "Back"),
            Action::AddComment(content) => write!(f, "AddComment({} chars)", content.chars().count()),
            Action::NextItem => write!(f, "NextItem"),
            Action::PrevItem => write!(f, "PrevItem"),
            Action::FirstItem => write!(f, "FirstItem"),
            Action::LastItem => write!(f, "LastItem"),
            Action::OpenSelectedVideo => write!(f, "OpenSelectedVideo"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::EnterSearchMode => write!(f, "EnterSearchMode"),
            Action::ExitSearchMode => write!(f, "ExitSearchMode"),
            Action::SearchInput(c) => write!(f, "SearchInput('{}')", c),
            Action::SearchBackspace => write!(f, "SearchBackspace"),
            Action::TogglePlayback => write!(f, "TogglePlayback"),
            Action::ToggleMute => write!(f, "ToggleMute"),
            Action::SeekForward => write!(f, "SeekForward"),
            Action::SeekBackward => write!(f, "SeekBackward"),
            Action::SubmitUpload => write!(f, "SubmitUpload"),
            Action::SaveSettings => write!(f, "SaveSettings"),
            Action::Notify(msg) => write!(f, "Notify({})", msg),
        }
    }
}
