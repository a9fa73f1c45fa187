//! Delete confirmation overlay.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::state::ConfirmState;
use crate::view::layout::centered_rect;
use crate::view::styles::UiStyles;

/// Render the confirmation prompt for the current flow state.
pub fn render(frame: &mut Frame, area: Rect, confirm: &ConfirmState, styles: &UiStyles) {
    let Some(target) = confirm.target() else {
        return;
    };

    let rect = centered_rect(area, 56, 7);
    frame.render_widget(Clear, rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled("Confirm delete", styles.error));

    let mut lines = vec![
        Line::from(vec![
            Span::raw(format!("Delete this {}? ", target.kind())),
        ]),
        Line::from(Span::styled(format!("\"{}\"", target.preview()), styles.question)),
        Line::default(),
    ];
    if confirm.is_deleting() {
        // Both buttons are disabled while the request is on the wire.
        lines.push(Line::from(Span::styled("deleting...", styles.dim)));
    } else {
        lines.push(Line::from(vec![
            Span::styled("y: delete", styles.error),
            Span::raw("   "),
            Span::styled("esc: cancel", styles.dim),
        ]));
    }

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        rect,
    );
}
