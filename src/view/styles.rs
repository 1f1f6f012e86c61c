//! Styling configuration.
//!
//! Distinct styles for questions, answers, highlights, and form errors.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any non-empty value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let env_no_color = std::env::var("NO_COLOR").is_ok_and(|v| !v.is_empty());
        Self {
            enabled: !no_color_flag && !env_no_color,
        }
    }

    /// ColorConfig with colors forced on or off, bypassing the environment.
    pub fn with_enabled(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== FaqStyles =====

/// Style set for the whole application.
///
/// If colors are disabled, every style degrades to modifiers only so
/// highlights and selection stay visible in monochrome.
pub struct FaqStyles {
    /// Closed question row.
    pub question: Style,
    /// Open question row.
    pub question_open: Style,
    /// Answer body text.
    pub answer: Style,
    /// Matched search term occurrences.
    pub highlight: Style,
    /// The selected entry's marker.
    pub selected: Style,
    /// The active category control.
    pub category_active: Style,
    /// Inactive category controls.
    pub category_inactive: Style,
    /// Inline form errors.
    pub error: Style,
    /// Success notices.
    pub success: Style,
    /// Secondary text (counters, hints).
    pub muted: Style,
}

impl FaqStyles {
    /// Build the style set for the given color configuration.
    pub fn new(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                question: Style::default().fg(Color::Cyan),
                question_open: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                answer: Style::default(),
                highlight: Style::default()
                    .bg(Color::Yellow)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                selected: Style::default().add_modifier(Modifier::REVERSED),
                category_active: Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                category_inactive: Style::default().fg(Color::DarkGray),
                error: Style::default().fg(Color::Red),
                success: Style::default().fg(Color::Green),
                muted: Style::default().fg(Color::DarkGray),
            }
        } else {
            Self {
                question: Style::default(),
                question_open: Style::default().add_modifier(Modifier::BOLD),
                answer: Style::default(),
                highlight: Style::default().add_modifier(Modifier::REVERSED),
                selected: Style::default().add_modifier(Modifier::UNDERLINED),
                category_active: Style::default().add_modifier(Modifier::BOLD),
                category_inactive: Style::default().add_modifier(Modifier::DIM),
                error: Style::default().add_modifier(Modifier::BOLD),
                success: Style::default(),
                muted: Style::default().add_modifier(Modifier::DIM),
            }
        }
    }
}

impl Default for FaqStyles {
    fn default() -> Self {
        Self::new(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
