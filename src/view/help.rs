//! Help overlay listing the default key bindings.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::view::layout::centered_rect;
use crate::view::styles::UiStyles;

const BINDINGS: &[(&str, &str)] = &[
    ("j/k, down/up", "move selection"),
    ("enter", "expand/collapse entry"),
    ("]/[, right/left", "next/previous page"),
    ("g/G", "first/last page"),
    ("L", "cycle items per page"),
    ("/", "search"),
    ("tab", "switch list/filter focus"),
    ("space", "toggle facet under cursor"),
    ("x", "clear all filters"),
    ("1/2/3", "dashboard tabs (Q&A, notes, accounts)"),
    ("n", "new entry/note/account"),
    ("e", "edit selected entry"),
    ("d", "delete selected"),
    ("r", "refresh"),
    ("a", "sign in"),
    ("Q", "sign out"),
    ("?", "toggle this help"),
    ("q, ctrl+c", "quit"),
];

/// Render the overlay.
pub fn render(frame: &mut Frame, area: Rect, styles: &UiStyles) {
    let height = (BINDINGS.len() + 2) as u16;
    let rect = centered_rect(area, 52, height);
    frame.render_widget(Clear, rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled("Keys", styles.title));

    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(keys, what)| {
            Line::from(vec![
                Span::styled(format!("{keys:<18}"), styles.facet),
                Span::raw(*what),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), rect);
}
