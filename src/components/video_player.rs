//! Video player component - the watch page
//!
//! The "player" is a placeholder frame with simulated play, mute and progress
//! state. Below it sit the video info, the comment composer and the comment
//! list; a side column shows description, tags and related videos.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::split_columns;
use crate::components::navigation::BRAND;
use crate::components::text_input::apply_text_key;
use crate::model::format::{format_count, format_views, time_ago};
use crate::model::{Comment, User, Video};
use anyhow::Result;
use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

const SEEK_STEP: u8 = 5;

/// Context needed for rendering the watch page
pub struct PlayerRenderContext<'a> {
    pub video: &'a Video,
    pub comments: &'a [Comment],
    pub user: &'a User,
    pub now: DateTime<Utc>,
}

/// Watch page state. Reset whenever a video is selected.
#[derive(Default)]
pub struct VideoPlayerComponent {
    pub is_playing: bool,
    pub is_muted: bool,
    /// 0..=100
    pub progress: u8,
    /// Text in the comment box
    pub comment_input: String,
    /// Whether the comment box has focus
    pub composing: bool,
    pub comment_scroll: u16,
}

impl VideoPlayerComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_playback(&mut self) {
        self.is_playing = !self.is_playing;
    }

    pub fn toggle_mute(&mut self) {
        self.is_muted = !self.is_muted;
    }

    pub fn seek_forward(&mut self) {
        self.progress = self.progress.saturating_add(SEEK_STEP).min(100);
    }

    pub fn seek_backward(&mut self) {
        self.progress = self.progress.saturating_sub(SEEK_STEP);
    }

    fn cancel_comment(&mut self) {
        self.comment_input.clear();
        self.composing = false;
    }

    /// Take the composed comment if it has any visible text
    fn take_comment(&mut self) -> Option<String> {
        if self.comment_input.trim().is_empty() {
            return None;
        }
        let content = std::mem::take(&mut self.comment_input);
        self.composing = false;
        Some(content)
    }

    fn handle_compose_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => {
                self.cancel_comment();
                None
            }
            KeyCode::Enter => self.take_comment().map(Action::AddComment),
            _ => {
                apply_text_key(&mut self.comment_input, key);
                None
            }
        }
    }
}

impl Component for VideoPlayerComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.composing {
            return Ok(self.handle_compose_key(key));
        }

        let action = match key.code {
            KeyCode::Char(' ') => Some(Action::TogglePlayback),
            KeyCode::Char('m') => Some(Action::ToggleMute),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::SeekForward),
            KeyCode::Left => Some(Action::SeekBackward),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('g') => Some(Action::FirstItem),
            KeyCode::Char('c') | KeyCode::Char('i') => {
                self.composing = true;
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::TogglePlayback => self.toggle_playback(),
            Action::ToggleMute => self.toggle_mute(),
            Action::SeekForward => self.seek_forward(),
            Action::SeekBackward => self.seek_backward(),
            Action::NextItem => self.comment_scroll = self.comment_scroll.saturating_add(1),
            Action::PrevItem => self.comment_scroll = self.comment_scroll.saturating_sub(1),
            Action::FirstItem => self.comment_scroll = 0,
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing goes through draw_with_context, which has the video
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering
// ═══════════════════════════════════════════════════════════════════════════════

impl VideoPlayerComponent {
    pub fn draw_with_context(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        ctx: &PlayerRenderContext,
    ) -> Result<()> {
        let (main, side) = split_columns(area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(9),
                Constraint::Length(4),
                Constraint::Min(6),
            ])
            .split(main);

        self.render_player(frame, chunks[0], ctx.video);
        render_info(frame, chunks[1], ctx.video);
        self.render_comments(frame, chunks[2], ctx);

        let side_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(6), Constraint::Length(5)])
            .split(side);
        render_description(frame, side_chunks[0], ctx.video);
        render_related(frame, side_chunks[1]);

        Ok(())
    }

    fn render_player(&self, frame: &mut Frame, area: Rect, video: &Video) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .style(Style::default().bg(Color::Black));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        let overlay = if self.is_playing {
            Line::from(Span::styled(
                format!("▶ Playing: {}", video.title),
                Style::default().fg(Color::White),
            ))
        } else {
            Line::from(vec![
                Span::styled(
                    "  ▶  ",
                    Style::default()
                        .fg(Color::White)
                        .bg(BRAND)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("  Space to play", Style::default().fg(Color::Gray)),
            ])
        };
        let placeholder_height = rows[0].height;
        let mut lines = vec![Line::from(""); (placeholder_height / 2) as usize];
        lines.push(overlay);
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            rows[0],
        );

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(BRAND).bg(Color::Rgb(60, 60, 60)))
            .percent(u16::from(self.progress))
            .label("");
        frame.render_widget(gauge, rows[1]);

        let play_icon = if self.is_playing { "❚❚" } else { "▶" };
        let volume_icon = if self.is_muted { "🔇" } else { "🔊" };
        let controls = Line::from(vec![
            Span::styled(format!(" {} ", play_icon), Style::default().fg(Color::White)),
            Span::styled(format!(" {} ", volume_icon), Style::default().fg(Color::White)),
            Span::styled(
                format!(" {}  {}% ", video.duration, self.progress),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(" ←/→ seek  m mute ", Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(controls), rows[2]);
    }

    fn render_comments(&self, frame: &mut Frame, area: Rect, ctx: &PlayerRenderContext) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} Comments ", ctx.comments.len()))
            .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(inner);

        frame.render_widget(self.composer(ctx.user), chunks[0]);

        let mut lines = Vec::new();
        for comment in ctx.comments {
            lines.push(Line::from(vec![
                Span::styled(
                    comment.user_name.clone(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", time_ago(comment.timestamp, ctx.now)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                comment.content.clone(),
                Style::default().fg(Color::Gray),
            )));
            lines.push(Line::from(Span::styled(
                format!("👍 {}", comment.likes),
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::from(""));
        }

        let list = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.comment_scroll, 0));
        frame.render_widget(list, chunks[1]);
    }

    fn composer(&self, user: &User) -> Paragraph<'static> {
        let (text, style, hint) = if self.composing {
            (
                format!("{}_", self.comment_input),
                Style::default().fg(Color::White),
                " Enter comment · Esc cancel ",
            )
        } else if self.comment_input.is_empty() {
            (
                "Add a comment...".to_string(),
                Style::default().fg(Color::DarkGray),
                " c to write ",
            )
        } else {
            (self.comment_input.clone(), Style::default().fg(Color::Gray), " c to edit ")
        };

        let border = if self.composing { Color::Cyan } else { Color::DarkGray };
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("({}) ", user.initials()),
                Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
            ),
            Span::styled(text, style),
        ]))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(border))
                .title_bottom(Line::from(hint).right_aligned()),
        )
    }
}

fn render_info(frame: &mut Frame, area: Rect, video: &Video) {
    let button = Style::default().fg(Color::White).bg(Color::Rgb(45, 45, 55));
    let lines = vec![
        Line::from(Span::styled(
            video.title.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                video.channel_name.clone(),
                Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} views", format_views(video.views)),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::styled(format!(" 👍 {} ", format_count(video.likes)), button),
            Span::raw(" "),
            Span::styled(format!(" 👎 {} ", format_count(video.dislikes)), button),
            Span::raw(" "),
            Span::styled(" ↗ Share ", button),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_description(frame: &mut Frame, area: Rect, video: &Video) {
    let mut lines = vec![
        Line::from(Span::styled(
            video.description.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];

    let mut tags = Vec::new();
    for tag in &video.tags {
        tags.push(Span::styled(
            format!(" {} ", tag),
            Style::default().fg(Color::White).bg(Color::Rgb(80, 60, 160)),
        ));
        tags.push(Span::raw(" "));
    }
    lines.push(Line::from(tags));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Description "),
    );
    frame.render_widget(paragraph, area);
}

fn render_related(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        "Related videos would appear here",
        Style::default().fg(Color::DarkGray),
    )))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Related Videos "),
    );
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(player: &mut VideoPlayerComponent, text: &str) {
        for c in text.chars() {
            player.handle_key_event(key(KeyCode::Char(c))).unwrap();
        }
    }

    #[test]
    fn test_seek_is_clamped() {
        let mut player = VideoPlayerComponent::new();
        player.seek_backward();
        assert_eq!(player.progress, 0);

        for _ in 0..30 {
            player.seek_forward();
        }
        assert_eq!(player.progress, 100);
    }

    #[test]
    fn test_playback_and_mute_toggle() {
        let mut player = VideoPlayerComponent::new();
        player.update(Action::TogglePlayback).unwrap();
        player.update(Action::ToggleMute).unwrap();
        assert!(player.is_playing);
        assert!(player.is_muted);

        player.update(Action::TogglePlayback).unwrap();
        assert!(!player.is_playing);
    }

    #[test]
    fn test_submit_comment() {
        let mut player = VideoPlayerComponent::new();
        player.handle_key_event(key(KeyCode::Char('c'))).unwrap();
        assert!(player.composing);

        type_text(&mut player, "Great video!");
        let action = player.handle_key_event(key(KeyCode::Enter)).unwrap();

        assert_eq!(action, Some(Action::AddComment("Great video!".to_string())));
        assert!(player.comment_input.is_empty());
        assert!(!player.composing);
    }

    #[test]
    fn test_blank_comment_is_not_submitted() {
        let mut player = VideoPlayerComponent::new();
        player.handle_key_event(key(KeyCode::Char('c'))).unwrap();
        type_text(&mut player, "   ");

        let action = player.handle_key_event(key(KeyCode::Enter)).unwrap();

        assert_eq!(action, None);
        assert!(player.composing);
        assert_eq!(player.comment_input, "   ");
    }

    #[test]
    fn test_escape_cancels_comment() {
        let mut player = VideoPlayerComponent::new();
        player.handle_key_event(key(KeyCode::Char('c'))).unwrap();
        type_text(&mut player, "draft");

        player.handle_key_event(key(KeyCode::Esc)).unwrap();

        assert!(!player.composing);
        assert!(player.comment_input.is_empty());
    }

    #[test]
    fn test_keys_while_composing_are_text() {
        let mut player = VideoPlayerComponent::new();
        player.handle_key_event(key(KeyCode::Char('c'))).unwrap();

        let action = player.handle_key_event(key(KeyCode::Char('m'))).unwrap();

        assert_eq!(action, None);
        assert!(!player.is_muted);
        assert_eq!(player.comment_input, "m");
    }
}
