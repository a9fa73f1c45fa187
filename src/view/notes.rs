//! Notes tab: list rendering and the add-note overlay.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::state::{AppState, NoteField, NoteForm};
use crate::view::layout::centered_rect;
use crate::view::styles::UiStyles;

/// Render the notes list.
pub fn render_list(frame: &mut Frame, area: Rect, state: &AppState, styles: &UiStyles) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled("Notes", styles.title));

    let mut lines: Vec<Line> = Vec::new();
    if !state.notes_loaded {
        lines.push(Line::from(Span::styled("loading...", styles.dim)));
    } else if state.notes.is_empty() {
        lines.push(Line::from(Span::styled("no notes yet, press n to add one", styles.dim)));
    }

    for (i, note) in state.notes.iter().enumerate() {
        let cursor = i == state.qna.selected;
        let title_style = if cursor {
            styles.question.patch(styles.selected)
        } else {
            styles.question
        };
        lines.push(Line::from(vec![
            Span::styled(note.title.clone(), title_style),
            Span::raw("  "),
            Span::styled(note.created_at.clone(), styles.dim),
        ]));
        for body_line in note.content.lines() {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(body_line.to_owned(), styles.answer),
            ]));
        }
        lines.push(Line::default());
    }

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

/// Render the add-note overlay.
pub fn render_form(frame: &mut Frame, area: Rect, form: &NoteForm, styles: &UiStyles) {
    let rect = centered_rect(area, 60, 10);
    frame.render_widget(Clear, rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled("New note", styles.title));

    let mut lines = Vec::new();
    for (label, value, field) in [
        ("Title", &form.title, NoteField::Title),
        ("Content", &form.content, NoteField::Content),
    ] {
        let focused = form.focus == field;
        let mut spans = vec![
            Span::styled(format!("{label}: "), if focused { styles.title } else { styles.dim }),
            Span::raw(value.clone()),
        ];
        if focused {
            spans.push(Span::styled("_", styles.selected));
        }
        lines.push(Line::from(spans));
    }
    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(error.clone(), styles.error)));
    }
    lines.push(Line::default());
    let hint = if form.submitting {
        Span::styled("saving...", styles.info)
    } else {
        Span::styled("tab: switch field  enter: save  esc: cancel", styles.dim)
    };
    lines.push(Line::from(hint));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        rect,
    );
}
