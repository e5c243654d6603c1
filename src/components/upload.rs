//! Upload component - the upload form
//!
//! Fields are edited in place; the form becomes read-only while an upload is
//! in progress. Starting and polling the upload is the App's job, this
//! component only holds the draft and the progress it is shown.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::centered_column;
use crate::components::navigation::BRAND;
use crate::components::text_input::apply_text_key;
use crate::model::upload::{Privacy, UploadDraft, UploadProgress, UploadStatus};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

/// Focusable rows of the form, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadField {
    Thumbnail,
    Title,
    Description,
    Tags,
    Privacy,
    Submit,
}

impl UploadField {
    pub fn all() -> [UploadField; 6] {
        [
            UploadField::Thumbnail,
            UploadField::Title,
            UploadField::Description,
            UploadField::Tags,
            UploadField::Privacy,
            UploadField::Submit,
        ]
    }

    pub fn label(&self) -> &str {
        match self {
            UploadField::Thumbnail => "Thumbnail",
            UploadField::Title => "Title *",
            UploadField::Description => "Description",
            UploadField::Tags => "Tags",
            UploadField::Privacy => "Privacy",
            UploadField::Submit => "Upload Video",
        }
    }

    fn is_text(&self) -> bool {
        matches!(
            self,
            UploadField::Thumbnail
                | UploadField::Title
                | UploadField::Description
                | UploadField::Tags
        )
    }
}

pub struct UploadComponent {
    pub draft: UploadDraft,
    pub progress: UploadProgress,
    /// Index into `UploadField::all()`
    pub focus: usize,
    /// Whether the focused text field is capturing keys
    pub editing: bool,
}

impl Default for UploadComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadComponent {
    pub fn new() -> Self {
        Self {
            draft: UploadDraft::default(),
            progress: UploadProgress::default(),
            focus: 1,
            editing: false,
        }
    }

    pub fn focused_field(&self) -> UploadField {
        let fields = UploadField::all();
        fields[self.focus.min(fields.len() - 1)]
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn is_uploading(&self) -> bool {
        self.progress.is_uploading()
    }

    /// Back to an empty form after a finished upload
    pub fn finish(&mut self) {
        *self = Self::new();
    }

    fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % UploadField::all().len();
    }

    fn focus_prev(&mut self) {
        let len = UploadField::all().len();
        self.focus = (self.focus + len - 1) % len;
    }

    fn field_buffer(&mut self, field: UploadField) -> Option<&mut String> {
        match field {
            UploadField::Title => Some(&mut self.draft.title),
            UploadField::Description => Some(&mut self.draft.description),
            UploadField::Tags => Some(&mut self.draft.tags),
            UploadField::Thumbnail => Some(self.draft.thumbnail.get_or_insert_with(String::new)),
            UploadField::Privacy | UploadField::Submit => None,
        }
    }

    fn stop_editing(&mut self) {
        self.editing = false;
        if self.draft.thumbnail.as_deref().is_some_and(|t| t.trim().is_empty()) {
            self.draft.thumbnail = None;
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.stop_editing(),
            KeyCode::Tab => {
                self.stop_editing();
                self.focus_next();
            }
            _ => {
                let field = self.focused_field();
                if let Some(buffer) = self.field_buffer(field) {
                    apply_text_key(buffer, key);
                }
            }
        }
    }

    fn activate(&mut self) -> Option<Action> {
        match self.focused_field() {
            UploadField::Privacy => {
                self.draft.privacy = self.draft.privacy.toggle();
                None
            }
            UploadField::Submit => Some(Action::SubmitUpload),
            field if field.is_text() => {
                self.editing = true;
                None
            }
            _ => None,
        }
    }
}

impl Component for UploadComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.is_uploading() {
            return Ok(None);
        }

        if self.editing {
            self.handle_edit_key(key);
            return Ok(None);
        }

        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => {
                self.focus_next();
                None
            }
            KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => {
                self.focus_prev();
                None
            }
            KeyCode::Enter => self.activate(),
            KeyCode::Char(' ') if self.focused_field() == UploadField::Privacy => self.activate(),
            KeyCode::Char('x') if self.focused_field() == UploadField::Thumbnail => {
                self.draft.thumbnail = None;
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let area = centered_column(area, 90);

        let outer = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Upload Video ")
            .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let show_progress = self.progress.status != UploadStatus::Idle;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Length(if show_progress { 3 } else { 0 }),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(inner);

        self.render_thumbnail(frame, chunks[0]);
        self.render_text_field(frame, chunks[1], UploadField::Title, "Enter video title");
        self.render_text_field(
            frame,
            chunks[2],
            UploadField::Description,
            "Tell viewers about your video",
        );
        self.render_tags(frame, chunks[3]);
        self.render_privacy(frame, chunks[4]);
        if show_progress {
            self.render_progress(frame, chunks[5]);
        }
        self.render_submit(frame, chunks[6]);

        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering
// ═══════════════════════════════════════════════════════════════════════════════

impl UploadComponent {
    fn field_block(&self, field: UploadField) -> Block<'static> {
        let focused = self.focused_field() == field;
        let border = if focused && self.editing {
            Color::Cyan
        } else if focused {
            BRAND
        } else {
            Color::DarkGray
        };
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(format!(" {} ", field.label()))
    }

    fn field_text(&self, field: UploadField, value: &str, placeholder: &str) -> Span<'static> {
        let editing = self.editing && self.focused_field() == field;
        if editing {
            Span::styled(format!("{}_", value), Style::default().fg(Color::White))
        } else if value.is_empty() {
            Span::styled(placeholder.to_string(), Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(value.to_string(), Style::default().fg(Color::Gray))
        }
    }

    fn render_text_field(
        &self,
        frame: &mut Frame,
        area: Rect,
        field: UploadField,
        placeholder: &str,
    ) {
        let value = match field {
            UploadField::Title => self.draft.title.as_str(),
            UploadField::Description => self.draft.description.as_str(),
            _ => "",
        };
        let paragraph = Paragraph::new(Line::from(self.field_text(field, value, placeholder)))
            .wrap(Wrap { trim: false })
            .block(self.field_block(field));
        frame.render_widget(paragraph, area);
    }

    fn render_thumbnail(&self, frame: &mut Frame, area: Rect) {
        let value = self.draft.thumbnail.as_deref().unwrap_or("");
        let mut spans = vec![self.field_text(
            UploadField::Thumbnail,
            value,
            "Enter a thumbnail image path",
        )];
        if !value.is_empty() && !self.editing {
            spans.push(Span::styled("  x to remove", Style::default().fg(Color::DarkGray)));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)).block(self.field_block(UploadField::Thumbnail)),
            area,
        );
    }

    fn render_tags(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![Line::from(self.field_text(
            UploadField::Tags,
            &self.draft.tags,
            "Separate tags with commas (e.g., React, TypeScript, Tutorial)",
        ))];

        let chips: Vec<Span> = self
            .draft
            .parsed_tags()
            .into_iter()
            .flat_map(|tag| {
                [
                    Span::styled(
                        format!(" {} ", tag),
                        Style::default().fg(Color::White).bg(Color::Rgb(80, 60, 160)),
                    ),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(chips));

        frame.render_widget(
            Paragraph::new(lines).block(self.field_block(UploadField::Tags)),
            area,
        );
    }

    fn render_privacy(&self, frame: &mut Frame, area: Rect) {
        let option = |privacy: Privacy, hint: &str| -> Vec<Span<'static>> {
            let selected = self.draft.privacy == privacy;
            let marker = if selected { "(•)" } else { "( )" };
            let style = if selected {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            vec![
                Span::styled(format!("{} {}", marker, privacy.name()), style),
                Span::styled(format!(" {}   ", hint), Style::default().fg(Color::DarkGray)),
            ]
        };

        let mut spans = option(Privacy::Public, "Everyone can watch");
        spans.extend(option(Privacy::Private, "Only you can watch"));
        frame.render_widget(
            Paragraph::new(Line::from(spans)).block(self.field_block(UploadField::Privacy)),
            area,
        );
    }

    fn render_progress(&self, frame: &mut Frame, area: Rect) {
        let label = match self.progress.status {
            UploadStatus::Completed => "Upload complete".to_string(),
            _ => format!("Uploading... {}%", self.progress.percent),
        };
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .gauge_style(Style::default().fg(BRAND).bg(Color::Rgb(40, 40, 40)))
            .percent(u16::from(self.progress.percent))
            .label(label);
        frame.render_widget(gauge, area);
    }

    fn render_submit(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focused_field() == UploadField::Submit;
        let (text, style) = if self.is_uploading() {
            (
                " Uploading... ",
                Style::default().fg(Color::Gray).bg(Color::Rgb(60, 60, 60)),
            )
        } else if focused {
            (
                " Upload Video ",
                Style::default()
                    .fg(Color::White)
                    .bg(BRAND)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (" Upload Video ", Style::default().fg(BRAND))
        };

        let paragraph = Paragraph::new(Line::from(Span::styled(text, style)))
            .alignment(ratatui::layout::Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(if focused { BRAND } else { Color::DarkGray })),
            );
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(upload: &mut UploadComponent, code: KeyCode) -> Option<Action> {
        upload.handle_key_event(key(code)).unwrap()
    }

    fn type_text(upload: &mut UploadComponent, text: &str) {
        for c in text.chars() {
            press(upload, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_starts_on_title() {
        let upload = UploadComponent::new();
        assert_eq!(upload.focused_field(), UploadField::Title);
        assert!(!upload.is_editing());
    }

    #[test]
    fn test_edit_title() {
        let mut upload = UploadComponent::new();
        press(&mut upload, KeyCode::Enter);
        assert!(upload.is_editing());

        type_text(&mut upload, "My video");
        press(&mut upload, KeyCode::Enter);

        assert!(!upload.is_editing());
        assert_eq!(upload.draft.title, "My video");
    }

    #[test]
    fn test_focus_wraps() {
        let mut upload = UploadComponent::new();
        press(&mut upload, KeyCode::Char('k'));
        assert_eq!(upload.focused_field(), UploadField::Thumbnail);
        press(&mut upload, KeyCode::Char('k'));
        assert_eq!(upload.focused_field(), UploadField::Submit);
        press(&mut upload, KeyCode::Char('j'));
        assert_eq!(upload.focused_field(), UploadField::Thumbnail);
    }

    #[test]
    fn test_privacy_toggles() {
        let mut upload = UploadComponent::new();
        for _ in 0..3 {
            press(&mut upload, KeyCode::Char('j'));
        }
        assert_eq!(upload.focused_field(), UploadField::Privacy);

        press(&mut upload, KeyCode::Enter);
        assert_eq!(upload.draft.privacy, Privacy::Private);
        press(&mut upload, KeyCode::Char(' '));
        assert_eq!(upload.draft.privacy, Privacy::Public);
    }

    #[test]
    fn test_submit_emits_action() {
        let mut upload = UploadComponent::new();
        upload.focus = 5;
        assert_eq!(press(&mut upload, KeyCode::Enter), Some(Action::SubmitUpload));
    }

    #[test]
    fn test_thumbnail_edit_and_remove() {
        let mut upload = UploadComponent::new();
        upload.focus = 0;
        press(&mut upload, KeyCode::Enter);
        type_text(&mut upload, "cover.png");
        press(&mut upload, KeyCode::Esc);
        assert_eq!(upload.draft.thumbnail.as_deref(), Some("cover.png"));

        press(&mut upload, KeyCode::Char('x'));
        assert_eq!(upload.draft.thumbnail, None);
    }

    #[test]
    fn test_empty_thumbnail_becomes_none() {
        let mut upload = UploadComponent::new();
        upload.focus = 0;
        press(&mut upload, KeyCode::Enter);
        press(&mut upload, KeyCode::Esc);
        assert_eq!(upload.draft.thumbnail, None);
    }

    #[test]
    fn test_read_only_while_uploading() {
        let mut upload = UploadComponent::new();
        upload.draft.title = "Keep me".to_string();
        upload.progress = UploadProgress {
            status: UploadStatus::Uploading,
            percent: 30,
        };

        press(&mut upload, KeyCode::Enter);
        type_text(&mut upload, "zzz");

        assert!(!upload.is_editing());
        assert_eq!(upload.draft.title, "Keep me");
    }

    #[test]
    fn test_finish_resets_form() {
        let mut upload = UploadComponent::new();
        upload.draft.title = "Done".to_string();
        upload.focus = 5;
        upload.progress = UploadProgress {
            status: UploadStatus::Completed,
            percent: 100,
        };

        upload.finish();

        assert_eq!(upload.draft, UploadDraft::default());
        assert_eq!(upload.progress, UploadProgress::default());
        assert_eq!(upload.focused_field(), UploadField::Title);
    }
}
