//! Color configuration and widget styles.

use ratatui::style::{Color, Modifier, Style};

/// Configuration for color output.
///
/// Priority (first match wins):
/// 1. `--no-color` CLI flag (disables colors)
/// 2. `NO_COLOR` env var (any value disables colors)
/// 3. Default: colors enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

/// Styles used across the UI.
#[derive(Debug, Clone, Copy)]
pub struct UiStyles {
    /// Pane titles and tab labels.
    pub title: Style,
    /// The row or facet under the cursor.
    pub selected: Style,
    /// Question lines.
    pub question: Style,
    /// Answer body text.
    pub answer: Style,
    /// Category and tag chips.
    pub facet: Style,
    /// A facet that is part of the active filter.
    pub facet_active: Style,
    /// Informational status text.
    pub info: Style,
    /// Error status text and field errors.
    pub error: Style,
    /// Dimmed hints and disabled controls.
    pub dim: Style,
}

impl UiStyles {
    /// Styles for the given color configuration. All defaults when colors
    /// are disabled.
    pub fn new(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                title: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                selected: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
                question: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                answer: Style::default().fg(Color::Gray),
                facet: Style::default().fg(Color::Yellow),
                facet_active: Style::default().fg(Color::Black).bg(Color::Yellow),
                info: Style::default().fg(Color::Green),
                error: Style::default().fg(Color::Red),
                dim: Style::default().fg(Color::DarkGray),
            }
        } else {
            Self {
                title: Style::default(),
                selected: Style::default().add_modifier(Modifier::REVERSED),
                question: Style::default(),
                answer: Style::default(),
                facet: Style::default(),
                facet_active: Style::default().add_modifier(Modifier::REVERSED),
                info: Style::default(),
                error: Style::default(),
                dim: Style::default(),
            }
        }
    }
}

impl Default for UiStyles {
    fn default() -> Self {
        Self::new(ColorConfig::from_env_and_args(false))
    }
}
