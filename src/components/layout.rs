//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Screen areas shared by every page
pub struct MainLayout {
    pub nav: Rect,
    pub content: Rect,
    pub toast: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Navigation bar on top, page content, then a toast line and the help bar
pub fn calculate_main_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    MainLayout {
        nav: chunks[0],
        content: chunks[1],
        toast: chunks[2],
        help: chunks[3],
    }
}

/// Split page content into a main column (2/3) and a side column (1/3)
pub fn split_columns(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(67), Constraint::Percentage(33)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Narrow centered column for form pages
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = max_width.min(area.width);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y,
        width,
        area.height,
    )
}

/// Cut `text` to at most `max_width` terminal columns, adding `…` if cut
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_popup(area, 40, 10);
        assert_eq!(popup, Rect::new(30, 15, 40, 10));

        let small = centered_popup(Rect::new(0, 0, 20, 5), 40, 10);
        assert_eq!(small.width, 20);
        assert_eq!(small.height, 5);
    }

    #[test]
    fn test_main_layout_heights() {
        let layout = calculate_main_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.nav.height, 3);
        assert_eq!(layout.content.height, 19);
        assert_eq!(layout.toast.y, 22);
        assert_eq!(layout.help.y, 23);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_to_width("a longer title", 8), "a longe…");
        assert_eq!(truncate_to_width("anything", 0), "");
        assert_eq!(truncate_to_width("日本語のタイトル", 7), "日本語…");
    }
}
