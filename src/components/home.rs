//! Home component - the video feed
//!
//! Owns the list selection and the search filter. The videos themselves come
//! from the catalog and are passed in on every call.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::truncate_to_width;
use crate::components::navigation::BRAND;
use crate::model::format::{format_views, time_ago};
use crate::model::Video;
use anyhow::Result;
use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Home component for the video feed
pub struct HomeComponent {
    /// List selection state
    pub list_state: ListState,

    /// Search query string
    pub search_query: String,

    /// Whether search mode is active
    pub search_mode: bool,
}

impl Default for HomeComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeComponent {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
            search_query: String::new(),
            search_mode: false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Filtering
    // ─────────────────────────────────────────────────────────────────────────

    /// Videos matching the current search query, in catalog order
    pub fn get_filtered_videos<'a>(&self, videos: &'a [Video]) -> Vec<&'a Video> {
        videos
            .iter()
            .filter(|v| v.matches_query(&self.search_query))
            .collect()
    }

    pub fn get_selected_video<'a>(&self, videos: &'a [Video]) -> Option<&'a Video> {
        let idx = self.list_state.selected()?;
        self.get_filtered_videos(videos).get(idx).copied()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Select next video, wrapping to the first
    pub fn next(&mut self, videos: &[Video]) {
        let len = self.get_filtered_videos(videos).len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(next));
    }

    /// Select previous video, wrapping to the last
    pub fn previous(&mut self, videos: &[Video]) {
        let len = self.get_filtered_videos(videos).len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let prev = match self.list_state.selected() {
            Some(i) if i > 0 && i < len => i - 1,
            _ => len - 1,
        };
        self.list_state.select(Some(prev));
    }

    pub fn select_first(&mut self, videos: &[Video]) {
        if self.get_filtered_videos(videos).is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self, videos: &[Video]) {
        let len = self.get_filtered_videos(videos).len();
        self.list_state.select(len.checked_sub(1));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────

    pub fn enter_search_mode(&mut self) {
        self.search_mode = true;
    }

    pub fn exit_search_mode(&mut self) {
        self.search_mode = false;
    }

    pub fn search_input(&mut self, c: char, videos: &[Video]) {
        self.search_query.push(c);
        self.select_first(videos);
    }

    pub fn search_backspace(&mut self, videos: &[Video]) {
        self.search_query.pop();
        self.select_first(videos);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstItem),
            KeyCode::Char('G') | KeyCode::End => Some(Action::LastItem),
            KeyCode::Enter => Some(Action::OpenSelectedVideo),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing goes through draw_with_videos, which has the catalog
        Ok(())
    }
}

impl HomeComponent {
    pub fn draw_with_videos(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        videos: &[Video],
        now: DateTime<Utc>,
    ) -> Result<()> {
        let filtered = self.get_filtered_videos(videos);

        if filtered.is_empty() {
            let message = if self.search_query.is_empty() {
                "No videos yet".to_string()
            } else {
                format!("No videos match \"{}\"", self.search_query)
            };
            let paragraph = Paragraph::new(Line::from(Span::styled(
                message,
                Style::default().fg(Color::DarkGray),
            )))
            .alignment(ratatui::layout::Alignment::Center)
            .block(feed_block(0, &self.search_query));
            frame.render_widget(paragraph, area);
            return Ok(());
        }

        let title_width = area.width.saturating_sub(16) as usize;
        let items: Vec<ListItem> = filtered
            .iter()
            .map(|video| video_card(video, title_width, now))
            .collect();

        let list = List::new(items)
            .block(feed_block(filtered.len(), &self.search_query))
            .highlight_style(
                Style::default()
                    .bg(Color::Rgb(40, 40, 48))
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(list, area, &mut self.list_state);
        Ok(())
    }
}

fn feed_block(count: usize, query: &str) -> Block<'static> {
    let title = if query.is_empty() {
        format!(" Recommended ({}) ", count)
    } else {
        format!(" Results for \"{}\" ({}) ", query, count)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title)
        .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
}

/// Two-line card: title and duration, then channel, views and age
fn video_card(video: &Video, title_width: usize, now: DateTime<Utc>) -> ListItem<'static> {
    let title = Line::from(vec![
        Span::styled(
            truncate_to_width(&video.title, title_width),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!(" {} ", video.duration),
            Style::default().fg(Color::White).bg(Color::Rgb(30, 30, 30)),
        ),
    ]);

    let meta = Line::from(vec![
        Span::styled(video.channel_name.clone(), Style::default().fg(BRAND)),
        Span::styled(
            format!(
                " · {} views · {}",
                format_views(video.views),
                time_ago(video.upload_date, now)
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    ListItem::new(vec![title, meta, Line::from("")])
}
