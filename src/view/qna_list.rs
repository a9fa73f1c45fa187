//! The Q&A record list with facet sidebar and per-record expansion.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::state::{AppState, Facet, FocusPane, SearchInput};
use crate::view::pagination_bar;
use crate::view::styles::UiStyles;

/// Render the browse body: facet sidebar, search line, record list, and
/// pagination bar.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, styles: &UiStyles) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(20)])
        .split(area);

    render_facets(frame, columns[0], state, styles);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(columns[1]);

    render_search_line(frame, rows[0], state, styles);
    render_records(frame, rows[1], state, styles);
    pagination_bar::render(frame, rows[2], state, styles);
}

fn render_search_line(frame: &mut Frame, area: Rect, state: &AppState, styles: &UiStyles) {
    let line = match &state.search {
        SearchInput::Typing(buffer) => Line::from(vec![
            Span::styled("search: ", styles.title),
            Span::raw(buffer.clone()),
            Span::styled("_", styles.selected),
        ]),
        SearchInput::Inactive if !state.criteria.search_term.is_empty() => Line::from(vec![
            Span::styled("search: ", styles.dim),
            Span::raw(state.criteria.search_term.clone()),
        ]),
        SearchInput::Inactive => Line::from(Span::styled("/ to search", styles.dim)),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_facets(frame: &mut Frame, area: Rect, state: &AppState, styles: &UiStyles) {
    let focused = state.focus == FocusPane::Facets;
    let title = if state.criteria.is_active() {
        "Filters (x clears)"
    } else {
        "Filters"
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(title, styles.title));

    let mut lines = Vec::new();
    let facets = state.facets();
    if facets.is_empty() {
        lines.push(Line::from(Span::styled("no facets", styles.dim)));
    }
    let mut last_was_category = true;
    for (i, facet) in facets.iter().enumerate() {
        let (label, is_category) = match facet {
            Facet::Category(c) => (c.as_str(), true),
            Facet::Tag(t) => (t.as_str(), false),
        };
        // Blank separator between the category run and the tag run.
        if last_was_category && !is_category {
            lines.push(Line::from(Span::styled("tags", styles.dim)));
        }
        last_was_category = is_category;

        let mut style = if state.facet_selected(facet) {
            styles.facet_active
        } else {
            styles.facet
        };
        if focused && i == state.facet_cursor {
            style = style.patch(styles.selected);
        }
        let marker = if state.facet_selected(facet) { "[x] " } else { "[ ] " };
        lines.push(Line::from(vec![Span::raw(marker), Span::styled(label.to_owned(), style)]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_records(frame: &mut Frame, area: Rect, state: &AppState, styles: &UiStyles) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled("Q&A", styles.title));

    let visible = state.visible();
    let mut lines: Vec<Line> = Vec::new();

    if state.qna.loading && state.qna.records.is_empty() {
        lines.push(Line::from(Span::styled("loading...", styles.dim)));
    } else if visible.is_empty() {
        lines.push(Line::from(Span::styled("no results", styles.dim)));
    }

    let mut selected_line = 0;
    for (i, record) in visible.iter().enumerate() {
        let expanded = state.qna.expanded.contains(&record.id);
        let cursor = state.focus == FocusPane::List && i == state.qna.selected;
        if cursor {
            selected_line = lines.len();
        }

        let marker = if expanded { "v " } else { "> " };
        let mut spans = vec![
            Span::raw(marker),
            Span::styled(
                record.question.clone(),
                if cursor {
                    styles.question.patch(styles.selected)
                } else {
                    styles.question
                },
            ),
            Span::raw("  "),
            Span::styled(format!("[{}]", record.category), styles.facet),
        ];
        for tag in &record.tags {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(format!("#{tag}"), styles.dim));
        }
        lines.push(Line::from(spans));

        if expanded {
            for answer_line in record.answer.lines() {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(answer_line.to_owned(), styles.answer),
                ]));
            }
            lines.push(Line::default());
        }
    }

    // Keep the cursor row inside the viewport.
    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = if inner_height > 0 && selected_line >= inner_height {
        (selected_line + 1 - inner_height) as u16
    } else {
        0
    };

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        area,
    );
}
