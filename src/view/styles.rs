//! Letter and control styling.
//!
//! Each letter state gets a distinct look. Without colors the states are
//! told apart by text modifiers alone.

use crate::model::Letter;
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
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Explicit setting, bypassing the environment.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::new(true)
    }
}

// ===== LetterStyles =====

/// Styles for letter cells and controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterStyles {
    letter: Style,
    selected: Style,
    dragging: Style,
    drag_over: Style,
    focused: Style,
}

impl LetterStyles {
    /// Styles for the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                letter: Style::default().fg(Color::White).bg(Color::DarkGray),
                selected: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                dragging: Style::default().add_modifier(Modifier::DIM),
                drag_over: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::UNDERLINED),
                focused: Style::default().fg(Color::Yellow),
            }
        } else {
            Self {
                letter: Style::default(),
                selected: Style::default().add_modifier(Modifier::REVERSED),
                dragging: Style::default().add_modifier(Modifier::DIM),
                drag_over: Style::default().add_modifier(Modifier::UNDERLINED),
                focused: Style::default().add_modifier(Modifier::BOLD),
            }
        }
    }

    /// Combined style for a letter's current flags.
    ///
    /// Layered base → selected → dragging → drag-over.
    pub fn style_for(&self, letter: &Letter) -> Style {
        let mut style = self.letter;
        if letter.selected {
            style = style.patch(self.selected);
        }
        if letter.dragging {
            style = style.patch(self.dragging);
        }
        if letter.drag_over {
            style = style.patch(self.drag_over);
        }
        style
    }

    /// Border style of the focused control.
    pub fn focused(&self) -> Style {
        self.focused
    }
}

impl Default for LetterStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::default())
    }
}
