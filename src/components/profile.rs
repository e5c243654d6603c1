//! Profile component - channel header, stats and content tabs

use crate::action::Action;
use crate::component::Component;
use crate::components::navigation::BRAND;
use crate::model::format::format_views;
use crate::model::User;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    Videos,
    Liked,
    Playlists,
}

impl ProfileTab {
    pub fn all() -> [ProfileTab; 3] {
        [ProfileTab::Videos, ProfileTab::Liked, ProfileTab::Playlists]
    }

    pub fn name(&self) -> &str {
        match self {
            ProfileTab::Videos => "Videos",
            ProfileTab::Liked => "Liked",
            ProfileTab::Playlists => "Playlists",
        }
    }

    fn empty_message(&self) -> &str {
        match self {
            ProfileTab::Videos => "No videos uploaded yet",
            ProfileTab::Liked => "No liked videos yet",
            ProfileTab::Playlists => "No playlists yet",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ProfileTab::Videos => ProfileTab::Liked,
            ProfileTab::Liked => ProfileTab::Playlists,
            ProfileTab::Playlists => ProfileTab::Videos,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ProfileTab::Videos => ProfileTab::Playlists,
            ProfileTab::Liked => ProfileTab::Videos,
            ProfileTab::Playlists => ProfileTab::Liked,
        }
    }

    fn index(&self) -> usize {
        match self {
            ProfileTab::Videos => 0,
            ProfileTab::Liked => 1,
            ProfileTab::Playlists => 2,
        }
    }
}

#[derive(Default)]
pub struct ProfileComponent {
    pub active_tab: ProfileTab,
}

impl ProfileComponent {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for ProfileComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Tab | KeyCode::Char('l') | KeyCode::Right => {
                self.active_tab = self.active_tab.next();
            }
            KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Left => {
                self.active_tab = self.active_tab.prev();
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing goes through draw_with_user
        Ok(())
    }
}

impl ProfileComponent {
    pub fn draw_with_user(&mut self, frame: &mut Frame, area: Rect, user: &User) -> Result<()> {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7),
                Constraint::Length(3),
                Constraint::Min(3),
            ])
            .split(area);

        render_header(frame, chunks[0], user);

        let titles: Vec<Line> = ProfileTab::all()
            .iter()
            .map(|t| Line::from(t.name().to_string()))
            .collect();
        let tabs = Tabs::new(titles)
            .select(self.active_tab.index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(Style::default().fg(BRAND).add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title_bottom(Line::from(" Tab to switch ").right_aligned()),
            );
        frame.render_widget(tabs, chunks[1]);

        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                self.active_tab.empty_message().to_string(),
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(empty, chunks[2]);

        Ok(())
    }
}

fn render_header(frame: &mut Frame, area: Rect, user: &User) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(10),
            Constraint::Min(20),
            Constraint::Length(36),
        ])
        .split(inner);

    let avatar = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(" {} ", user.initials()),
            Style::default()
                .fg(Color::White)
                .bg(BRAND)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(avatar, columns[0]);

    let details = Paragraph::new(vec![
        Line::from(Span::styled(
            user.name.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(user.email.clone(), Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled(
            format!("{} subscribers", format_views(user.subscriber_count)),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(user.bio.clone(), Style::default().fg(Color::Gray))),
        Line::from(vec![
            Span::styled(" s ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled("Settings", Style::default().fg(Color::Gray)),
        ]),
    ]);
    frame.render_widget(details, columns[1]);

    let stat = |value: String, label: &str| -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("{:>7} ", value),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(label.to_string(), Style::default().fg(Color::DarkGray)),
        ])
    };
    let stats = Paragraph::new(vec![
        Line::from(""),
        stat("0".to_string(), "Videos"),
        stat(format_views(user.subscriber_count), "Subscribers"),
        stat("0".to_string(), "Views"),
    ]);
    frame.render_widget(stats, columns[2]);
}
