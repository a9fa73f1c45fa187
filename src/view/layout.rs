//! Layout helpers shared by the screens.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::{AppState, StatusKind};
use crate::view::styles::UiStyles;

/// A centered rectangle of at most `width` x `height` cells inside `area`.
///
/// Used for modal overlays (forms, confirmation prompts, help).
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Split the screen into header, body, and a one-line footer.
pub fn screen_chunks(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Render the footer: the status message when one is set, otherwise key
/// hints for the current screen.
pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState, styles: &UiStyles, hints: &str) {
    let line = match &state.status {
        Some(status) => {
            let style = match status.kind {
                StatusKind::Info => styles.info,
                StatusKind::Error => styles.error,
            };
            Line::from(Span::styled(status.text.clone(), style))
        }
        None if state.modal_open() => {
            Line::from(Span::styled("tab next field  enter submit  esc close", styles.dim))
        }
        None => Line::from(Span::styled(hints.to_owned(), styles.dim)),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Truncate `text` to at most `max_width` display cells, appending `...`
/// when anything was cut. Width is measured in terminal cells, so wide
/// characters count double.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

    if text.width() <= max_width {
        return text.to_owned();
    }

    let budget = max_width.saturating_sub(3);
    let mut width = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(ch);
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::{centered_rect, truncate_to_width};
    use ratatui::layout::Rect;

    #[test]
    fn centered_rect_is_clamped_to_the_area() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered_rect(area, 60, 20);
        assert_eq!(rect, area);
    }

    #[test]
    fn centered_rect_is_centered() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(area, 40, 10);
        assert_eq!(rect, Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
    }

    #[test]
    fn long_text_is_cut_with_an_ellipsis() {
        assert_eq!(truncate_to_width("hello world", 8), "hello...");
    }

    #[test]
    fn wide_characters_count_double() {
        // Each CJK character occupies two cells.
        let truncated = truncate_to_width("日本語のテキスト", 9);
        assert_eq!(truncated, "日本語...");
    }
}
