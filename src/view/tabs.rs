//! Dashboard tab bar.

use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Tabs;
use ratatui::Frame;

use crate::state::{AdminTab, AppState};
use crate::view::styles::UiStyles;

const TABS: [AdminTab; 3] = [AdminTab::Qna, AdminTab::Notes, AdminTab::Accounts];

/// Render the dashboard tab bar.
///
/// Admin-only tabs render dimmed for non-admin users; selecting them is
/// refused in the state layer, this is just the visual cue.
pub fn render_tab_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: &UiStyles) {
    let titles: Vec<Line> = TABS
        .iter()
        .map(|tab| {
            let label = format!(" {} ", tab.label());
            if tab.admin_only() && !state.is_admin() {
                Line::styled(label, styles.dim)
            } else {
                Line::raw(label)
            }
        })
        .collect();

    let selected = TABS.iter().position(|t| *t == state.tab).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(styles.selected)
        .divider("|");
    frame.render_widget(tabs, area);
}
