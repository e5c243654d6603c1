//! View state and routing
//!
//! `ViewState` is the single record of which page is showing and which video
//! is selected. `resolve_route` turns it into something drawable by looking the
//! selection up in the catalog; it is recomputed on every draw and never cached.

use super::catalog::Catalog;
use super::video::{User, Video};

/// The closed set of pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    VideoDetail,
    Upload,
    Profile,
    Settings,
}

impl Page {
    pub fn name(&self) -> &str {
        match self {
            Page::Home => "Home",
            Page::VideoDetail => "Watch",
            Page::Upload => "Upload",
            Page::Profile => "Profile",
            Page::Settings => "Settings",
        }
    }
}

/// Current page plus the selected video id.
///
/// Both fields are private so the only way to change them is through the
/// transitions below, each of which replaces the whole value at once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    page: Page,
    selected_video: Option<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn selected_video(&self) -> Option<&str> {
        self.selected_video.as_deref()
    }

    /// Go to `page`. Always clears the selection, even for `VideoDetail`.
    pub fn navigate(&mut self, page: Page) {
        *self = ViewState {
            page,
            selected_video: None,
        };
    }

    /// Select a video and show the detail page. Unknown ids are accepted here
    /// and only fail at resolution time.
    pub fn select_video(&mut self, id: impl Into<String>) {
        *self = ViewState {
            page: Page::VideoDetail,
            selected_video: Some(id.into()),
        };
    }

    pub fn back(&mut self) {
        self.navigate(Page::Home);
    }
}

/// A fully resolved page, ready to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Route<'a> {
    Home,
    VideoDetail(&'a Video),
    Upload,
    Profile(&'a User),
    Settings,
    /// The detail page was requested but the selection did not resolve.
    /// Drawn as an empty content area.
    NotFound,
}

/// Resolve the view state against the catalog
pub fn resolve_route<'a>(view: &ViewState, catalog: &'a Catalog) -> Route<'a> {
    match view.page() {
        Page::Home => Route::Home,
        Page::VideoDetail => match view.selected_video() {
            Some(id) => match catalog.require_video(id) {
                Ok(video) => Route::VideoDetail(video),
                Err(_) => Route::NotFound,
            },
            None => Route::NotFound,
        },
        Page::Upload => Route::Upload,
        Page::Profile => Route::Profile(catalog.user()),
        Page::Settings => Route::Settings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::SampleData;

    #[test]
    fn test_initial_state() {
        let view = ViewState::new();
        assert_eq!(view.page(), Page::Home);
        assert_eq!(view.selected_video(), None);
    }

    #[test]
    fn test_navigate_always_clears_selection() {
        let pages = [
            Page::Home,
            Page::VideoDetail,
            Page::Upload,
            Page::Profile,
            Page::Settings,
        ];
        for page in pages {
            let mut view = ViewState::new();
            view.select_video("v3");
            view.navigate(page);
            assert_eq!(view.page(), page);
            assert_eq!(view.selected_video(), None);
        }
    }

    #[test]
    fn test_navigate_sequence_never_leaves_selection() {
        let mut view = ViewState::new();
        let pages = [Page::Upload, Page::VideoDetail, Page::Profile, Page::Home];
        for page in pages {
            view.navigate(page);
            assert!(view.selected_video().is_none());
        }
    }

    #[test]
    fn test_select_video_sets_both_fields() {
        let mut view = ViewState::new();
        view.navigate(Page::Settings);
        view.select_video("v2");
        assert_eq!(view.page(), Page::VideoDetail);
        assert_eq!(view.selected_video(), Some("v2"));
    }

    #[test]
    fn test_back_goes_home() {
        let mut view = ViewState::new();
        view.select_video("v2");
        assert_eq!(view.page(), Page::VideoDetail);
        assert_eq!(view.selected_video(), Some("v2"));

        view.back();
        assert_eq!(view.page(), Page::Home);
        assert_eq!(view.selected_video(), None);
    }

    #[test]
    fn test_resolve_selected_video() {
        let data = SampleData::builtin().unwrap();
        let mut view = ViewState::new();
        view.select_video("v2");

        match resolve_route(&view, &data.catalog) {
            Route::VideoDetail(video) => assert_eq!(video.id, "v2"),
            other => panic!("unexpected route: {:?}", other),
        }
    }

    #[test]
    fn test_resolve_unknown_video_is_not_found() {
        let data = SampleData::builtin().unwrap();
        let mut view = ViewState::new();
        view.select_video("does-not-exist");
        assert_eq!(resolve_route(&view, &data.catalog), Route::NotFound);
    }

    #[test]
    fn test_resolve_detail_without_selection_is_not_found() {
        let data = SampleData::builtin().unwrap();
        let mut view = ViewState::new();
        view.navigate(Page::VideoDetail);
        assert_eq!(resolve_route(&view, &data.catalog), Route::NotFound);
    }

    #[test]
    fn test_resolve_other_pages() {
        let data = SampleData::builtin().unwrap();
        let mut view = ViewState::new();

        assert_eq!(resolve_route(&view, &data.catalog), Route::Home);
        view.navigate(Page::Upload);
        assert_eq!(resolve_route(&view, &data.catalog), Route::Upload);
        view.navigate(Page::Settings);
        assert_eq!(resolve_route(&view, &data.catalog), Route::Settings);
        view.navigate(Page::Profile);
        assert_eq!(
            resolve_route(&view, &data.catalog),
            Route::Profile(data.catalog.user())
        );
    }
}
