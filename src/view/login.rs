//! Login screen.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::state::{LoginField, LoginForm};
use crate::view::layout::centered_rect;
use crate::view::styles::UiStyles;

/// Render the credential entry box.
pub fn render(frame: &mut Frame, area: Rect, form: &LoginForm, styles: &UiStyles) {
    let rect = centered_rect(area, 50, 9);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled("Sign in", styles.title));

    let masked: String = "*".repeat(form.password.chars().count());
    let mut lines = Vec::new();
    for (label, value, field) in [
        ("Email", form.email.clone(), LoginField::Email),
        ("Password", masked, LoginField::Password),
    ] {
        let focused = form.focus == field;
        let mut spans = vec![
            Span::styled(format!("{label}: "), if focused { styles.title } else { styles.dim }),
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
        Span::styled("signing in...", styles.info)
    } else {
        Span::styled("tab: switch field  enter: sign in  esc: back", styles.dim)
    };
    lines.push(Line::from(hint));

    frame.render_widget(Paragraph::new(lines).block(block), rect);
}
