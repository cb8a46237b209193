//! Card styling configuration.

use ratatui::style::{Color, Modifier, Style};

/// Configuration for color output.
///
/// Colors are disabled by the `--no-color` CLI flag or the `NO_COLOR`
/// environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins): `--no-color` flag, `NO_COLOR` env var,
    /// default enabled.
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

/// Styles for the card browser.
#[derive(Debug, Clone)]
pub struct CardStyles {
    /// Card heading ("Issue N").
    pub heading: Style,
    /// Open state badge.
    pub open: Style,
    /// Closed state badge.
    pub closed: Style,
    /// Label chips.
    pub label: Style,
    /// Link sections (repository, accounts, detail URL).
    pub link: Style,
    /// Section captions ("Repo", "Status", ...).
    pub caption: Style,
    /// Placeholder content for unmounted cards.
    pub placeholder: Style,
    /// Border of the selected card.
    pub selected_border: Style,
    /// Status line at the bottom of the screen.
    pub status: Style,
}

impl CardStyles {
    /// Create styles with the default color scheme.
    pub fn new() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }

    /// Create styles honoring the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                heading: Style::default().add_modifier(Modifier::BOLD),
                open: Style::default().fg(Color::Green),
                closed: Style::default().fg(Color::Red),
                label: Style::default().fg(Color::Yellow),
                link: Style::default().fg(Color::Blue),
                caption: Style::default().add_modifier(Modifier::BOLD),
                placeholder: Style::default().fg(Color::DarkGray),
                selected_border: Style::default().fg(Color::Cyan),
                status: Style::default().fg(Color::Cyan),
            }
        } else {
            Self {
                heading: Style::default(),
                open: Style::default(),
                closed: Style::default(),
                label: Style::default(),
                link: Style::default(),
                caption: Style::default(),
                placeholder: Style::default(),
                selected_border: Style::default(),
                status: Style::default(),
            }
        }
    }
}

impl Default for CardStyles {
    fn default() -> Self {
        Self::new()
    }
}
