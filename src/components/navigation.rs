//! Navigation bar drawn above every page

use crate::model::Page;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Brand red used for the logo and active items
pub const BRAND: Color = Color::Rgb(255, 0, 51);

/// What the navigation bar needs to know
pub struct NavRenderContext<'a> {
    pub current_page: Page,
    pub search_query: &'a str,
    pub search_mode: bool,
    pub user_initials: &'a str,
}

pub fn draw_navigation(frame: &mut Frame, area: Rect, ctx: &NavRenderContext) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14),
            Constraint::Min(10),
            Constraint::Length(38),
        ])
        .split(inner);

    let logo = Line::from(vec![
        Span::styled(
            " ▶ ",
            Style::default()
                .fg(Color::White)
                .bg(BRAND)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " TubeTUI",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(vec![Line::from(""), logo]), chunks[0]);

    frame.render_widget(search_box(ctx), chunks[1]);
    frame.render_widget(Paragraph::new(vec![Line::from(""), actions(ctx)]), chunks[2]);
}

fn search_box<'a>(ctx: &NavRenderContext<'a>) -> Paragraph<'a> {
    let text = if ctx.search_mode {
        Span::styled(
            format!(" 🔍 {}_", ctx.search_query),
            Style::default().fg(Color::White),
        )
    } else if ctx.search_query.is_empty() {
        Span::styled(" 🔍 Search videos... (/)", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(
            format!(" 🔍 {}", ctx.search_query),
            Style::default().fg(Color::Gray),
        )
    };

    let border = if ctx.search_mode { Color::Cyan } else { Color::DarkGray };
    Paragraph::new(Line::from(text)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    )
}

fn actions(ctx: &NavRenderContext) -> Line<'static> {
    let item = |key: &str, label: &str, active: bool| -> Vec<Span<'static>> {
        let label_style = if active {
            Style::default().fg(BRAND).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        vec![
            Span::styled(
                format!(" {} ", key),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(label.to_string(), label_style),
        ]
    };

    let mut spans = Vec::new();
    spans.extend(item("H", "Home", ctx.current_page == Page::Home));
    spans.extend(item("u", "Upload", ctx.current_page == Page::Upload));
    spans.push(Span::styled(" 🔔 ", Style::default().fg(Color::DarkGray)));
    spans.extend(item("p", "", ctx.current_page == Page::Profile));
    spans.push(Span::styled(
        format!("({})", ctx.user_initials),
        if ctx.current_page == Page::Profile {
            Style::default().fg(BRAND).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        },
    ));
    Line::from(spans)
}
