//! Pagination bar: prev/next controls, condensed page numbers, and the
//! items-per-page indicator.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::{page_tokens, AppState, PageToken};
use crate::view::styles::UiStyles;

/// Render the bar for the current pager and metadata.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, styles: &UiStyles) {
    frame.render_widget(Paragraph::new(line_for(state, styles)), area);
}

fn line_for(state: &AppState, styles: &UiStyles) -> Line<'static> {
    let total_pages = state.qna.meta.total_pages;
    let current = state.pager.current_page();

    let mut spans = Vec::new();
    spans.push(Span::styled(
        "< prev ",
        if state.pager.can_prev() { styles.facet } else { styles.dim },
    ));

    for token in page_tokens(current, total_pages) {
        match token {
            PageToken::Number(n) if n == current => {
                spans.push(Span::styled(format!("[{n}]"), styles.selected));
            }
            PageToken::Number(n) => {
                spans.push(Span::raw(format!(" {n} ")));
            }
            PageToken::Ellipsis => {
                spans.push(Span::styled(" ... ", styles.dim));
            }
        }
    }

    spans.push(Span::styled(
        " next >",
        if state.pager.can_next(total_pages) { styles.facet } else { styles.dim },
    ));

    spans.push(Span::styled(
        format!(
            "   {}/page, {} total{}",
            state.pager.items_per_page(),
            state.qna.meta.total,
            if state.qna.loading { ", loading..." } else { "" }
        ),
        styles.dim,
    ));

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::line_for;
    use crate::api::{ApiRequest, ApiResponse, QnaPage};
    use crate::model::PaginationMeta;
    use crate::state::AppState;
    use crate::view::styles::{ColorConfig, UiStyles};

    fn state_on(page: u32, total_pages: u32) -> AppState {
        let mut state = AppState::new(10);
        state.pager.goto(page, total_pages);
        let request = state.fetch_request();
        let seq = match request {
            ApiRequest::FetchQna { seq, .. } => seq,
            _ => unreachable!(),
        };
        state.apply_response(ApiResponse::QnaPage {
            seq,
            result: Ok(QnaPage {
                items: Vec::new(),
                pagination: PaginationMeta {
                    page,
                    limit: 10,
                    total: u64::from(total_pages) * 10,
                    total_pages,
                },
            }),
        });
        state
    }

    fn rendered(state: &AppState) -> String {
        let styles = UiStyles::new(ColorConfig::from_env_and_args(true));
        line_for(state, &styles)
            .spans
            .iter()
            .map(|s| s.content.clone().into_owned())
            .collect()
    }

    #[test]
    fn middle_page_renders_window_with_gaps() {
        let text = rendered(&state_on(5, 10));
        assert!(text.contains("[5]"), "{text}");
        assert!(text.contains("..."), "{text}");
        assert!(text.contains(" 1 "), "{text}");
        assert!(text.contains(" 10 "), "{text}");
    }

    #[test]
    fn small_page_counts_have_no_gaps() {
        let text = rendered(&state_on(2, 3));
        assert!(!text.contains("..."), "{text}");
        assert!(text.contains("[2]"), "{text}");
    }
}
