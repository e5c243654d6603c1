//! Settings component
//!
//! Account fields and toggles are held here for as long as the page is open.
//! Saving only reports success; nothing is written anywhere.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::centered_column;
use crate::components::navigation::BRAND;
use crate::components::text_input::apply_text_key;
use crate::model::settings::{AccountDraft, Preferences};
use crate::model::User;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    Name,
    Email,
    Bio,
    EmailNotifications,
    PushNotifications,
    Autoplay,
    Privacy,
    Help,
    Save,
}

impl SettingsRow {
    pub fn all() -> [SettingsRow; 9] {
        [
            SettingsRow::Name,
            SettingsRow::Email,
            SettingsRow::Bio,
            SettingsRow::EmailNotifications,
            SettingsRow::PushNotifications,
            SettingsRow::Autoplay,
            SettingsRow::Privacy,
            SettingsRow::Help,
            SettingsRow::Save,
        ]
    }

    pub fn label(&self) -> &str {
        match self {
            SettingsRow::Name => "Name",
            SettingsRow::Email => "Email",
            SettingsRow::Bio => "Bio",
            SettingsRow::EmailNotifications => "Email notifications",
            SettingsRow::PushNotifications => "Push notifications",
            SettingsRow::Autoplay => "Autoplay",
            SettingsRow::Privacy => "Privacy & Security",
            SettingsRow::Help => "Help & Support",
            SettingsRow::Save => "Save Changes",
        }
    }

    /// Heading printed above the first row of each section
    fn section(&self) -> Option<&str> {
        match self {
            SettingsRow::Name => Some("Account"),
            SettingsRow::EmailNotifications => Some("Notifications"),
            SettingsRow::Autoplay => Some("Playback"),
            SettingsRow::Privacy => Some("More"),
            _ => None,
        }
    }
}

pub struct SettingsComponent {
    pub account: AccountDraft,
    pub preferences: Preferences,
    pub selected: usize,
    pub editing: bool,
}

impl SettingsComponent {
    /// Fresh form pre-filled from `user`
    pub fn new(user: &User) -> Self {
        Self {
            account: AccountDraft::from_user(user),
            preferences: Preferences::default(),
            selected: 0,
            editing: false,
        }
    }

    pub fn selected_row(&self) -> SettingsRow {
        let rows = SettingsRow::all();
        rows[self.selected.min(rows.len() - 1)]
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    fn account_field(&mut self, row: SettingsRow) -> Option<&mut String> {
        match row {
            SettingsRow::Name => Some(&mut self.account.name),
            SettingsRow::Email => Some(&mut self.account.email),
            SettingsRow::Bio => Some(&mut self.account.bio),
            _ => None,
        }
    }

    fn activate(&mut self) -> Option<Action> {
        let row = self.selected_row();
        let prefs = &mut self.preferences;
        match row {
            SettingsRow::Name | SettingsRow::Email | SettingsRow::Bio => {
                self.editing = true;
                None
            }
            SettingsRow::EmailNotifications => {
                prefs.email_notifications = !prefs.email_notifications;
                None
            }
            SettingsRow::PushNotifications => {
                prefs.push_notifications = !prefs.push_notifications;
                None
            }
            SettingsRow::Autoplay => {
                prefs.autoplay = !prefs.autoplay;
                None
            }
            SettingsRow::Privacy => Some(Action::Notify(
                "Privacy & Security settings are not available in this demo".to_string(),
            )),
            SettingsRow::Help => Some(Action::Notify(
                "Help & Support: press ? for keyboard shortcuts".to_string(),
            )),
            SettingsRow::Save => Some(Action::SaveSettings),
        }
    }
}

impl Component for SettingsComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.editing {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.editing = false,
                _ => {
                    let row = self.selected_row();
                    if let Some(field) = self.account_field(row) {
                        apply_text_key(field, key);
                    }
                }
            }
            return Ok(None);
        }

        let len = SettingsRow::all().len();
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => {
                self.selected = (self.selected + 1) % len;
                None
            }
            KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => {
                self.selected = (self.selected + len - 1) % len;
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let area = centered_column(area, 72);

        let mut lines = Vec::new();
        for (i, row) in SettingsRow::all().iter().enumerate() {
            if let Some(section) = row.section() {
                if !lines.is_empty() {
                    lines.push(Line::from(""));
                }
                lines.push(Line::from(Span::styled(
                    section.to_string(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )));
            }
            if *row == SettingsRow::Save {
                lines.push(Line::from(""));
            }
            lines.push(self.row_line(*row, i == self.selected));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Settings ")
                .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        );
        frame.render_widget(paragraph, area);
        Ok(())
    }
}

impl SettingsComponent {
    fn row_line(&self, row: SettingsRow, selected: bool) -> Line<'static> {
        let marker = if selected { "▶ " } else { "  " };
        let label_style = if selected {
            Style::default().fg(BRAND).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let value = match row {
            SettingsRow::Name => Some(self.account.name.clone()),
            SettingsRow::Email => Some(self.account.email.clone()),
            SettingsRow::Bio => Some(self.account.bio.clone()),
            _ => None,
        };

        let mut spans = vec![
            Span::styled(marker, Style::default().fg(BRAND)),
            Span::styled(format!("{:<22}", row.label()), label_style),
        ];

        if let Some(value) = value {
            let text = if selected && self.editing {
                format!("{}_", value)
            } else {
                value
            };
            let style = if selected && self.editing {
                Style::default().fg(Color::White).bg(Color::Rgb(40, 40, 48))
            } else {
                Style::default().fg(Color::White)
            };
            spans.push(Span::styled(text, style));
            return Line::from(spans);
        }

        let toggle = match row {
            SettingsRow::EmailNotifications => Some(self.preferences.email_notifications),
            SettingsRow::PushNotifications => Some(self.preferences.push_notifications),
            SettingsRow::Autoplay => Some(self.preferences.autoplay),
            _ => None,
        };
        if let Some(on) = toggle {
            let (text, color) = if on {
                ("[ ON  ]", Color::Green)
            } else {
                ("[ OFF ]", Color::DarkGray)
            };
            spans.push(Span::styled(text, Style::default().fg(color)));
        } else if row != SettingsRow::Save {
            spans.push(Span::styled("›", Style::default().fg(Color::DarkGray)));
        }
        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SampleData;
    use crossterm::event::KeyModifiers;

    fn settings() -> SettingsComponent {
        let data = SampleData::builtin().unwrap();
        SettingsComponent::new(data.catalog.user())
    }

    fn press(settings: &mut SettingsComponent, code: KeyCode) -> Option<Action> {
        settings
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
    }

    fn select(settings: &mut SettingsComponent, row: SettingsRow) {
        settings.selected = SettingsRow::all()
            .iter()
            .position(|r| *r == row)
            .unwrap();
    }

    #[test]
    fn test_prefilled_from_user() {
        let settings = settings();
        assert_eq!(settings.account.name, "John Creator");
        assert_eq!(settings.account.email, "john@example.com");
        assert!(settings.preferences.email_notifications);
        assert!(!settings.preferences.autoplay);
    }

    #[test]
    fn test_edit_name() {
        let mut settings = settings();
        press(&mut settings, KeyCode::Enter);
        assert!(settings.is_editing());

        for _ in 0.."Creator".len() {
            press(&mut settings, KeyCode::Backspace);
        }
        for c in "Doe".chars() {
            press(&mut settings, KeyCode::Char(c));
        }
        press(&mut settings, KeyCode::Enter);

        assert!(!settings.is_editing());
        assert_eq!(settings.account.name, "John Doe");
    }

    #[test]
    fn test_toggle_autoplay() {
        let mut settings = settings();
        select(&mut settings, SettingsRow::Autoplay);
        press(&mut settings, KeyCode::Char(' '));
        assert!(settings.preferences.autoplay);
        press(&mut settings, KeyCode::Enter);
        assert!(!settings.preferences.autoplay);
    }

    #[test]
    fn test_info_rows_notify() {
        let mut settings = settings();
        select(&mut settings, SettingsRow::Privacy);
        assert!(matches!(press(&mut settings, KeyCode::Enter), Some(Action::Notify(_))));
        select(&mut settings, SettingsRow::Help);
        assert!(matches!(press(&mut settings, KeyCode::Enter), Some(Action::Notify(_))));
    }

    #[test]
    fn test_save_emits_action() {
        let mut settings = settings();
        select(&mut settings, SettingsRow::Save);
        assert_eq!(press(&mut settings, KeyCode::Enter), Some(Action::SaveSettings));
    }

    #[test]
    fn test_selection_wraps() {
        let mut settings = settings();
        press(&mut settings, KeyCode::Char('k'));
        assert_eq!(settings.selected_row(), SettingsRow::Save);
        press(&mut settings, KeyCode::Char('j'));
        assert_eq!(settings.selected_row(), SettingsRow::Name);
    }
}
