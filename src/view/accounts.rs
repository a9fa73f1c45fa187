//! Accounts tab: user table and the add-user overlay.

use ratatui::layout::{Constraint, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table};
use ratatui::Frame;

use crate::state::{AppState, RegisterField, RegisterForm};
use crate::view::layout::centered_rect;
use crate::view::styles::UiStyles;

/// Render the accounts table.
pub fn render_list(frame: &mut Frame, area: Rect, state: &AppState, styles: &UiStyles) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled("Accounts", styles.title));

    if !state.accounts_loaded {
        frame.render_widget(
            Paragraph::new(Span::styled("loading...", styles.dim)).block(block),
            area,
        );
        return;
    }

    let header = Row::new(vec!["Name", "Email", "Role", "Created"]).style(styles.title);
    let rows = state.accounts.iter().enumerate().map(|(i, user)| {
        let row = Row::new(vec![
            Cell::from(user.name.clone()),
            Cell::from(user.email.clone()),
            Cell::from(user.role.as_str()),
            Cell::from(user.created_at.clone().unwrap_or_default()),
        ]);
        if i == state.qna.selected {
            row.style(styles.selected)
        } else {
            row
        }
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(15),
            Constraint::Percentage(25),
        ],
    )
    .header(header)
    .block(block);
    frame.render_widget(table, area);
}

/// Render the add-user overlay.
pub fn render_form(frame: &mut Frame, area: Rect, form: &RegisterForm, styles: &UiStyles) {
    let rect = centered_rect(area, 60, 12);
    frame.render_widget(Clear, rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled("New account", styles.title));

    let masked: String = "*".repeat(form.password.chars().count());
    let fields: [(&str, String, RegisterField); 4] = [
        ("Name", form.name.clone(), RegisterField::Name),
        ("Email", form.email.clone(), RegisterField::Email),
        ("Password", masked, RegisterField::Password),
        ("Role", form.role.as_str().to_owned(), RegisterField::Role),
    ];

    let mut lines = Vec::new();
    for (label, value, field) in fields {
        let focused = form.focus == field;
        let mut spans = vec![
            Span::styled(
                format!("{label}: "),
                if focused { styles.title } else { styles.dim },
            ),
            Span::raw(value),
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
        Span::styled(
            "tab: next field  space on role: toggle  enter: save  esc: cancel",
            styles.dim,
        )
    };
    lines.push(Line::from(hint));

    frame.render_widget(Paragraph::new(lines).block(block), rect);
}
