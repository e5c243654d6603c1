//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! It owns the view state, the domain data and the upload runner, and is the
//! only place that turns domain results into toasts and log lines.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    calculate_main_layout, draw_navigation, HelpDialog, HomeComponent, NavRenderContext,
    PlayerRenderContext, ProfileComponent, QuitDialog, SettingsComponent, SplashComponent,
    UploadComponent, VideoPlayerComponent, BRAND,
};
use crate::config::Config;
use crate::model::domain::DomainState;
use crate::model::modal::{Modal, ModalStack};
use crate::model::ui::{AppMode, Toast, ToastKind};
use crate::model::upload::UploadStatus;
use crate::model::{resolve_route, Page, Route, SampleData, ViewState};
use crate::services::UploadRunner;
use anyhow::Result;
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use log::{debug, info, warn};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

const UPLOAD_SUCCESS: &str = "Video uploaded successfully!";
const SETTINGS_SAVED: &str = "Settings saved successfully!";

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Current application mode
    pub mode: AppMode,

    /// Which page is showing and which video is selected
    pub view: ViewState,

    /// Domain state (catalog and comments)
    pub domain: DomainState,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Drives the simulated upload in the background
    pub upload_runner: UploadRunner,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Status or error message shown above the help bar
    pub toast: Option<Toast>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub splash: SplashComponent,
    pub home: HomeComponent,
    pub player: VideoPlayerComponent,
    pub upload: UploadComponent,
    pub profile: ProfileComponent,
    pub settings: SettingsComponent,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    pub fn new(config: &Config, data: SampleData) -> App {
        let domain = DomainState::new(data);
        let settings = SettingsComponent::new(domain.catalog.user());
        let mut home = HomeComponent::new();
        home.select_first(domain.catalog.videos());

        App {
            mode: AppMode::Splash,
            view: ViewState::new(),
            domain,
            modals: ModalStack::new(),
            upload_runner: UploadRunner::new(config.upload_step()),
            should_quit: false,
            toast: None,
            splash: SplashComponent::new(config.splash_duration()),
            home,
            player: VideoPlayerComponent::new(),
            upload: UploadComponent::new(),
            profile: ProfileComponent::new(),
            settings,
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Routing
    // ─────────────────────────────────────────────────────────────────────────

    fn navigate(&mut self, page: Page) {
        let from = self.view.page();
        self.view.navigate(page);
        info!("navigate: {} -> {}", from.name(), page.name());
        self.on_page_change(from);
    }

    fn select_video(&mut self, id: String) {
        let from = self.view.page();
        if self.domain.catalog.find_video_by_id(&id).is_none() {
            warn!("selected video {} is not in the catalog", id);
        }
        info!("select video: {}", id);
        self.view.select_video(id);
        self.player = VideoPlayerComponent::new();
        self.on_page_change(from);
    }

    fn back(&mut self) {
        let from = self.view.page();
        self.view.back();
        info!("back: {} -> Home", from.name());
        self.on_page_change(from);
    }

    /// Per-page state lives only while its page is showing
    fn on_page_change(&mut self, from: Page) {
        let to = self.view.page();

        if from == Page::Upload && to != Page::Upload {
            if self.upload_runner.cancel() {
                info!("upload cancelled by navigation");
            }
            self.upload.finish();
        }

        if from != to {
            match to {
                Page::Profile => self.profile = ProfileComponent::new(),
                Page::Settings => {
                    self.settings = SettingsComponent::new(self.domain.catalog.user());
                }
                Page::Home | Page::VideoDetail | Page::Upload => {}
            }
        }

        if to != Page::Home {
            self.home.exit_search_mode();
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Domain operations
    // ─────────────────────────────────────────────────────────────────────────

    fn add_comment(&mut self, content: &str) {
        match self.domain.add_comment(content) {
            Ok(comment) => {
                let id = comment.id.clone();
                info!("comment {} added, {} in total", id, self.domain.comments.len());
            }
            Err(err) => {
                debug!("comment rejected: {}", err);
                self.toast = Some(Toast::error(err.detail()));
            }
        }
    }

    fn submit_upload(&mut self) {
        if self.upload_runner.is_active() {
            return;
        }
        if let Err(err) = self.upload.draft.validate() {
            self.toast = Some(Toast::error(err.detail()));
            return;
        }

        let draft = &self.upload.draft;
        info!(
            "upload started: \"{}\" ({} tags, {})",
            draft.title,
            draft.parsed_tags().len(),
            draft.privacy.name()
        );
        self.upload_runner.start(&mut self.upload.progress);
    }

    fn poll_upload(&mut self) {
        let elapsed = self.upload_runner.elapsed().unwrap_or_default();
        if !self.upload_runner.poll(&mut self.upload.progress) {
            return;
        }
        if self.upload.progress.status == UploadStatus::Completed {
            info!("upload finished after {:?}", elapsed);
            self.upload.finish();
            self.toast = Some(Toast::success(UPLOAD_SUCCESS));
        }
    }

    /// Whether the current page has a text field taking every key
    fn page_captures_input(&self) -> bool {
        match self.view.page() {
            Page::VideoDetail => self.player.composing,
            Page::Upload => self.upload.is_editing(),
            Page::Settings => self.settings.is_editing(),
            Page::Home | Page::Profile => false,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.splash.init()?;
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        match self.mode {
            AppMode::Splash => self.splash.handle_key_event(key),
            AppMode::Running => {
                if let Some(modal) = self.modals.top().cloned() {
                    self.handle_modal_key_event(&modal, key)
                } else if self.home.search_mode {
                    self.handle_search_key_event(key)
                } else if self.page_captures_input() {
                    self.handle_page_key_event(key)
                } else if let Some(action) = global_key_action(key) {
                    Ok(Some(action))
                } else {
                    self.handle_page_key_event(key)
                }
            }
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if self.mode != AppMode::Running || !self.modals.is_empty() {
            return Ok(None);
        }
        let action = match mouse.kind {
            MouseEventKind::ScrollDown => Some(Action::NextItem),
            MouseEventKind::ScrollUp => Some(Action::PrevItem),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action != Action::Tick {
            debug!("action: {}", action);
        }

        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                if self.mode == AppMode::Splash {
                    return self.splash.update(Action::Tick);
                }
                self.poll_upload();
                if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
                    self.toast = None;
                }
            }
            Action::SplashComplete => {
                self.mode = AppMode::Running;
            }
            Action::ForceQuit => {
                if self.upload_runner.cancel() {
                    info!("upload abandoned on quit");
                }
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Routing
            // ─────────────────────────────────────────────────────────────────
            Action::Navigate(page) => self.navigate(page),
            Action::SelectVideo(id) => self.select_video(id),
            Action::Back => self.back(),

            // ─────────────────────────────────────────────────────────────────
            // Comments
            // ─────────────────────────────────────────────────────────────────
            Action::AddComment(content) => self.add_comment(&content),

            // ─────────────────────────────────────────────────────────────────
            // List Navigation (delegate by page)
            // ─────────────────────────────────────────────────────────────────
            Action::NextItem | Action::PrevItem | Action::FirstItem | Action::LastItem => {
                match self.view.page() {
                    Page::Home => {
                        let videos = self.domain.catalog.videos();
                        match action {
                            Action::NextItem => self.home.next(videos),
                            Action::PrevItem => self.home.previous(videos),
                            Action::FirstItem => self.home.select_first(videos),
                            _ => self.home.select_last(videos),
                        }
                    }
                    Page::VideoDetail => {
                        self.player.update(action)?;
                    }
                    Page::Upload | Page::Profile | Page::Settings => {}
                }
            }
            Action::OpenSelectedVideo => {
                let selected = self.home.get_selected_video(self.domain.catalog.videos());
                return Ok(selected.map(|video| Action::SelectVideo(video.id.clone())));
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.toggle(Modal::Help);
            }
            Action::CloseModal => {
                self.modals.pop();
            }

            // ─────────────────────────────────────────────────────────────────
            // Search (always on the home feed)
            // ─────────────────────────────────────────────────────────────────
            Action::EnterSearchMode => {
                if self.view.page() != Page::Home {
                    self.navigate(Page::Home);
                }
                self.home.enter_search_mode();
            }
            Action::ExitSearchMode => self.home.exit_search_mode(),
            Action::SearchInput(c) => self.home.search_input(c, self.domain.catalog.videos()),
            Action::SearchBackspace => self.home.search_backspace(self.domain.catalog.videos()),

            // ─────────────────────────────────────────────────────────────────
            // Player
            // ─────────────────────────────────────────────────────────────────
            Action::TogglePlayback
            | Action::ToggleMute
            | Action::SeekForward
            | Action::SeekBackward => {
                self.player.update(action)?;
            }

            // ─────────────────────────────────────────────────────────────────
            // Forms
            // ─────────────────────────────────────────────────────────────────
            Action::SubmitUpload => self.submit_upload(),
            Action::SaveSettings => {
                info!(
                    "settings saved (not persisted): autoplay={} email={} push={}",
                    self.settings.preferences.autoplay,
                    self.settings.preferences.email_notifications,
                    self.settings.preferences.push_notifications
                );
                self.toast = Some(Toast::success(SETTINGS_SAVED));
            }
            Action::Notify(message) => {
                self.toast = Some(Toast::info(message));
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.mode {
            AppMode::Splash => self.splash.draw(frame, area)?,
            AppMode::Running => {
                let layout = calculate_main_layout(area);

                let initials = self.domain.catalog.user().initials();
                let nav = NavRenderContext {
                    current_page: self.view.page(),
                    search_query: &self.home.search_query,
                    search_mode: self.home.search_mode,
                    user_initials: &initials,
                };
                draw_navigation(frame, layout.nav, &nav);

                self.draw_content(frame, layout.content)?;
                self.draw_toast(frame, layout.toast);
                self.draw_help_bar(frame, layout.help);

                if let Some(modal) = self.modals.top().cloned() {
                    self.draw_modal(frame, area, &modal)?;
                }
            }
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

/// Keys that work on every page unless a text field has focus
fn global_key_action(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') => Some(Action::OpenQuitDialog),
        KeyCode::Char('?') => Some(Action::OpenHelp),
        KeyCode::Char('/') => Some(Action::EnterSearchMode),
        KeyCode::Char('H') => Some(Action::Navigate(Page::Home)),
        KeyCode::Char('u') => Some(Action::Navigate(Page::Upload)),
        KeyCode::Char('p') => Some(Action::Navigate(Page::Profile)),
        KeyCode::Char('s') => Some(Action::Navigate(Page::Settings)),
        KeyCode::Esc | KeyCode::Char('b') => Some(Action::Back),
        _ => None,
    }
}

impl App {
    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    fn handle_search_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::ExitSearchMode),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char(c) => Some(Action::SearchInput(c)),
            _ => None,
        };
        Ok(action)
    }

    fn handle_page_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match self.view.page() {
            Page::Home => self.home.handle_key_event(key),
            Page::VideoDetail => self.player.handle_key_event(key),
            Page::Upload => self.upload.handle_key_event(key),
            Page::Profile => self.profile.handle_key_event(key),
            Page::Settings => self.settings.handle_key_event(key),
        }
    }

    fn draw_content(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let now = Utc::now();

        match resolve_route(&self.view, &self.domain.catalog) {
            Route::Home => {
                self.home
                    .draw_with_videos(frame, area, self.domain.catalog.videos(), now)?;
            }
            Route::VideoDetail(video) => {
                let ctx = PlayerRenderContext {
                    video,
                    comments: self.domain.comments.comments(),
                    user: self.domain.catalog.user(),
                    now,
                };
                self.player.draw_with_context(frame, area, &ctx)?;
            }
            Route::Upload => self.upload.draw(frame, area)?,
            Route::Profile(user) => self.profile.draw_with_user(frame, area, user)?,
            Route::Settings => self.settings.draw(frame, area)?,
            Route::NotFound => frame.render_widget(Block::default(), area),
        }
        Ok(())
    }

    fn draw_toast(&self, frame: &mut Frame, area: Rect) {
        let Some(toast) = &self.toast else {
            return;
        };
        let (icon, color) = match toast.kind {
            ToastKind::Success => ("✓", Color::Green),
            ToastKind::Error => ("✗", Color::Red),
            ToastKind::Info => ("ℹ", Color::Cyan),
        };
        let line = Line::from(Span::styled(
            format!(" {} {} ", icon, toast.message),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(
            Paragraph::new(line).alignment(ratatui::layout::Alignment::Center),
            area,
        );
    }

    fn draw_help_bar(&self, frame: &mut Frame, area: Rect) {
        let hints: &[(&str, &str)] = if self.home.search_mode {
            &[("type", "filter"), ("Enter/Esc", "done")]
        } else {
            match self.view.page() {
                Page::Home => &[("j/k", "move"), ("Enter", "watch"), ("/", "search")],
                Page::VideoDetail if self.player.composing => {
                    &[("Enter", "post"), ("Esc", "cancel")]
                }
                Page::VideoDetail => &[
                    ("Space", "play"),
                    ("m", "mute"),
                    ("←/→", "seek"),
                    ("c", "comment"),
                    ("Esc", "back"),
                ],
                Page::Upload | Page::Settings if self.page_captures_input() => {
                    &[("Enter/Esc", "done editing")]
                }
                Page::Upload | Page::Settings => {
                    &[("j/k", "move"), ("Enter", "edit/select"), ("Esc", "back")]
                }
                Page::Profile => &[("Tab", "switch tab"), ("Esc", "back")],
            }
        };

        let mut spans = Vec::new();
        for (key, label) in hints.iter().chain([("?", "help"), ("q", "quit")].iter()) {
            spans.push(Span::styled(
                format!(" {} ", key),
                Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!("{} ", label),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
            Modal::Help => self.help_dialog.draw(frame, area)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::upload::UploadProgress;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::{Duration, Instant};

    fn running_app() -> App {
        let mut app = App::new(&Config::default(), SampleData::builtin().unwrap());
        app.mode = AppMode::Running;
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        let mut action = app.handle_key_event(key).unwrap();
        while let Some(a) = action {
            action = app.update(a).unwrap();
        }
    }

    fn screen_text(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal
            .draw(|f| {
                app.draw(f, f.area()).unwrap();
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_select_then_back() {
        let mut app = running_app();
        app.update(Action::SelectVideo("v2".to_string())).unwrap();
        assert_eq!(app.view.page(), Page::VideoDetail);
        assert_eq!(app.view.selected_video(), Some("v2"));

        app.update(Action::Back).unwrap();
        assert_eq!(app.view.page(), Page::Home);
        assert_eq!(app.view.selected_video(), None);
    }

    #[test]
    fn test_enter_on_feed_opens_video() {
        let mut app = running_app();
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);

        let expected = app.domain.catalog.videos()[1].id.clone();
        assert_eq!(app.view.page(), Page::VideoDetail);
        assert_eq!(app.view.selected_video(), Some(expected.as_str()));
    }

    #[test]
    fn test_unknown_video_draws_blank_content() {
        let mut app = running_app();
        app.update(Action::SelectVideo("does-not-exist".to_string()))
            .unwrap();

        let text = screen_text(&mut app);
        assert!(text.contains("TubeTUI"));
        assert!(!text.contains("Comments"));
    }

    #[test]
    fn test_detail_page_renders_video() {
        let mut app = running_app();
        app.update(Action::SelectVideo("v2".to_string())).unwrap();

        let text = screen_text(&mut app);
        assert!(text.contains("Sunrise Timelapse"));
        assert!(text.contains("Related videos would appear here"));
    }

    #[test]
    fn test_add_comment_prepends() {
        let mut app = running_app();
        let before = app.domain.comments.len();

        app.update(Action::AddComment("First!".to_string())).unwrap();

        assert_eq!(app.domain.comments.len(), before + 1);
        assert_eq!(app.domain.comments.comments()[0].content, "First!");
        assert!(app.toast.is_none());
    }

    #[test]
    fn test_empty_comment_shows_error() {
        let mut app = running_app();
        let before = app.domain.comments.len();

        app.update(Action::AddComment("   ".to_string())).unwrap();

        assert_eq!(app.domain.comments.len(), before);
        assert_eq!(app.toast.as_ref().map(|t| t.kind), Some(ToastKind::Error));
    }

    #[test]
    fn test_composing_captures_global_keys() {
        let mut app = running_app();
        app.update(Action::SelectVideo("v1".to_string())).unwrap();
        press(&mut app, KeyCode::Char('c'));
        for c in "quite good".chars() {
            press(&mut app, KeyCode::Char(c));
        }

        assert!(app.modals.is_empty());
        assert_eq!(app.view.page(), Page::VideoDetail);

        let before = app.domain.comments.len();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.domain.comments.len(), before + 1);
        assert_eq!(app.domain.comments.comments()[0].content, "quite good");
    }

    #[test]
    fn test_upload_requires_title() {
        let mut app = running_app();
        app.update(Action::Navigate(Page::Upload)).unwrap();
        app.update(Action::SubmitUpload).unwrap();

        assert!(!app.upload_runner.is_active());
        let toast = app.toast.as_ref().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, "Please enter a video title");
    }

    #[test]
    fn test_navigating_away_cancels_upload() {
        let mut app = running_app();
        app.update(Action::Navigate(Page::Upload)).unwrap();
        app.upload.draft.title = "Holiday".to_string();
        app.update(Action::SubmitUpload).unwrap();
        assert!(app.upload_runner.is_active());
        assert!(app.upload.is_uploading());

        app.update(Action::Navigate(Page::Home)).unwrap();

        assert!(!app.upload_runner.is_active());
        assert_eq!(app.upload.progress, UploadProgress::default());
        assert!(app.upload.draft.title.is_empty());
    }

    #[test]
    fn test_upload_completes_and_resets() {
        let config = Config {
            upload_step_ms: 1,
            ..Config::default()
        };
        let mut app = App::new(&config, SampleData::builtin().unwrap());
        app.mode = AppMode::Running;
        app.update(Action::Navigate(Page::Upload)).unwrap();
        app.upload.draft.title = "Quick one".to_string();
        app.update(Action::SubmitUpload).unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        while app.upload_runner.is_active() && Instant::now() < deadline {
            app.update(Action::Tick).unwrap();
            std::thread::sleep(Duration::from_millis(5));
        }

        assert!(!app.upload_runner.is_active());
        assert!(app.upload.draft.title.is_empty());
        assert_eq!(app.upload.progress.percent, 0);
        assert_eq!(
            app.toast.as_ref().map(|t| t.message.as_str()),
            Some(UPLOAD_SUCCESS)
        );
    }

    #[test]
    fn test_search_from_other_page_goes_home() {
        let mut app = running_app();
        app.update(Action::Navigate(Page::Profile)).unwrap();
        press(&mut app, KeyCode::Char('/'));
        for c in "sourdough".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.view.page(), Page::Home);
        assert!(!app.home.search_mode);
        assert_eq!(app.home.search_query, "sourdough");
        let filtered = app.home.get_filtered_videos(app.domain.catalog.videos());
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_quit_dialog_flow() {
        let mut app = running_app();
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));

        press(&mut app, KeyCode::Char('n'));
        assert!(app.modals.is_empty());
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_settings_save_and_reset() {
        let mut app = running_app();
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.view.page(), Page::Settings);

        app.settings.preferences.autoplay = true;
        app.update(Action::SaveSettings).unwrap();
        assert_eq!(
            app.toast.as_ref().map(|t| t.message.as_str()),
            Some(SETTINGS_SAVED)
        );

        press(&mut app, KeyCode::Char('H'));
        press(&mut app, KeyCode::Char('s'));
        assert!(!app.settings.preferences.autoplay);
    }

    #[test]
    fn test_splash_key_moves_to_running() {
        let mut app = App::new(&Config::default(), SampleData::builtin().unwrap());
        assert_eq!(app.mode, AppMode::Splash);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, AppMode::Running);
    }
}
