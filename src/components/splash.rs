//! Splash screen component
//!
//! Displays the TubeTUI logo briefly before transitioning to the main app.

use crate::action::Action;
use crate::component::Component;
use crate::components::navigation::BRAND;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

/// Splash screen component
pub struct SplashComponent {
    /// When the splash screen was shown
    start_time: Option<Instant>,
    /// Duration to show splash before auto-advancing
    duration: Duration,
}

impl Default for SplashComponent {
    fn default() -> Self {
        Self::new(Duration::from_millis(1200))
    }
}

impl SplashComponent {
    pub fn new(duration: Duration) -> Self {
        Self {
            start_time: None,
            duration,
        }
    }

    /// Check if splash duration has elapsed
    pub fn is_complete(&self) -> bool {
        self.start_time
            .map(|t| t.elapsed() >= self.duration)
            .unwrap_or(false)
    }

    /// Play button mark; `#` cells are filled
    fn get_logo() -> Vec<&'static str> {
        vec![
            "  ##################  ",
            " #######  ########### ",
            "########    ##########",
            "########      ########",
            "########    ##########",
            " #######  ########### ",
            "  ##################  ",
        ]
    }
}

impl Component for SplashComponent {
    fn init(&mut self) -> Result<()> {
        self.start_time = Some(Instant::now());
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Any key press skips the splash screen
        match key.code {
            KeyCode::Char('q') => Ok(Some(Action::ForceQuit)),
            _ => Ok(Some(Action::SplashComplete)),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::Tick && self.is_complete() {
            return Ok(Some(Action::SplashComplete));
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let bg_black = Color::Rgb(0, 0, 0);

        frame.render_widget(Clear, area);
        frame.render_widget(
            Block::default().style(Style::default().bg(bg_black)),
            area,
        );

        let logo_lines = Self::get_logo();
        let logo_height = logo_lines.len() as u16;
        let logo_width = logo_lines.first().map(|l| l.len()).unwrap_or(0) as u16;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length((area.height.saturating_sub(logo_height + 5)) / 2),
                Constraint::Length(logo_height),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let logo: Vec<Line> = logo_lines
            .iter()
            .map(|line| {
                let spans: Vec<Span> = line
                    .chars()
                    .map(|c| {
                        let style = match c {
                            '#' => Style::default().fg(BRAND).bg(BRAND),
                            _ => Style::default().fg(Color::White).bg(bg_black),
                        };
                        Span::styled(" ", style)
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        let logo_x = area.x + area.width.saturating_sub(logo_width) / 2;
        let logo_rect = Rect::new(
            logo_x,
            chunks[1].y,
            logo_width.min(area.width),
            chunks[1].height,
        );
        frame.render_widget(Paragraph::new(logo), logo_rect);

        let title = Line::from(vec![
            Span::styled(
                "Tube",
                Style::default()
                    .fg(Color::White)
                    .bg(bg_black)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "TUI",
                Style::default()
                    .fg(BRAND)
                    .bg(bg_black)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(title).alignment(ratatui::layout::Alignment::Center),
            chunks[3],
        );

        let subtitle = Line::from(Span::styled(
            "Watch, share and comment from your terminal",
            Style::default().fg(Color::DarkGray).bg(bg_black),
        ));
        frame.render_widget(
            Paragraph::new(subtitle).alignment(ratatui::layout::Alignment::Center),
            chunks[4],
        );

        Ok(())
    }
}
