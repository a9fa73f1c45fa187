//! Create/edit form overlay for Q&A records.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::state::{FormField, QnaForm};
use crate::view::layout::centered_rect;
use crate::view::styles::UiStyles;

/// Render the form as a centered overlay.
pub fn render(frame: &mut Frame, area: Rect, form: &QnaForm, styles: &UiStyles) {
    let rect = centered_rect(area, 70, 18);
    frame.render_widget(Clear, rect);

    let title = if form.editing_id.is_some() { "Edit entry" } else { "New entry" };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(title, styles.title));

    let mut lines = Vec::new();
    push_field(&mut lines, "Question", &form.question, form.focus == FormField::Question, styles);
    if let Some(error) = &form.errors.question {
        lines.push(Line::from(Span::styled(format!("  {error}"), styles.error)));
    }
    push_field(&mut lines, "Answer", &form.answer, form.focus == FormField::Answer, styles);
    if let Some(error) = &form.errors.answer {
        lines.push(Line::from(Span::styled(format!("  {error}"), styles.error)));
    }
    push_field(&mut lines, "Category", form.category(), form.focus == FormField::Category, styles);

    push_field(&mut lines, "Add tag", &form.tag_input, form.focus == FormField::TagInput, styles);
    let mut tag_spans = vec![Span::styled("Tags: ", styles.dim)];
    if form.tags.is_empty() {
        tag_spans.push(Span::styled("(none)", styles.dim));
    }
    for tag in &form.tags {
        tag_spans.push(Span::styled(format!("#{tag} "), styles.facet));
    }
    lines.push(Line::from(tag_spans));

    lines.push(Line::default());
    let hint = if form.submitting {
        Span::styled("saving...", styles.info)
    } else {
        Span::styled(
            "tab: next field  enter: save (or add tag)  del: remove tag by name  esc: cancel",
            styles.dim,
        )
    };
    lines.push(Line::from(hint));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        rect,
    );
}

fn push_field(lines: &mut Vec<Line<'static>>, label: &str, value: &str, focused: bool, styles: &UiStyles) {
    let label_style = if focused { styles.title } else { styles.dim };
    let mut spans = vec![Span::styled(format!("{label}: "), label_style), Span::raw(value.to_owned())];
    if focused {
        spans.push(Span::styled("_", styles.selected));
    }
    lines.push(Line::from(spans));
}
