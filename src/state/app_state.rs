//! Top-level application state.

use super::controller::BoardController;
use super::focus::{ButtonKind, Focus};
use super::mouse_handler::PointerGesture;
use crate::config::{ResolvedConfig, SelectionModifier};
use tracing::debug;

/// Everything the view renders and the handlers mutate.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The letter board controller.
    pub controller: BoardController,
    /// Pointer gesture in progress.
    pub gesture: PointerGesture,
    /// Modifier that turns a click into a selection toggle.
    pub selection_modifier: SelectionModifier,
    /// Whether the key hint bar is shown.
    pub show_hints: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// State with default settings and no board.
    pub fn new() -> Self {
        Self {
            controller: BoardController::new(),
            gesture: PointerGesture::Idle,
            selection_modifier: SelectionModifier::default(),
            show_hints: true,
        }
    }

    /// State using resolved configuration.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            selection_modifier: config.selection_modifier,
            show_hints: config.show_hints,
            ..Self::new()
        }
    }

    /// Focus and press `button`.
    pub fn activate(&mut self, button: ButtonKind) {
        debug!(button = button.label(), "Button activated");
        self.controller.set_focus(Focus::Button(button));
        match button {
            ButtonKind::Display => self.controller.generate(),
            ButtonKind::Clear => self.controller.clear(),
            ButtonKind::Reset => self.controller.reset_selection(),
        }
    }

    /// Activate whatever has focus. Activating the input field displays it.
    pub fn activate_focused(&mut self) {
        match self.controller.focus() {
            Focus::Input => self.controller.generate(),
            Focus::Button(button) => self.activate(button),
        }
    }
}
