//! Mouse event handler.
//!
//! Translates raw terminal mouse reports into controller operations:
//! press + release on a letter is a click, press + motion starts a drag,
//! motion during a drag produces enter/over/leave, release delivers the
//! drop.

use super::focus::{ButtonKind, Focus};
use crate::model::PositionIndex;
use crate::state::AppState;
use crate::view::layout::{HitTarget, ScreenLayout};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use tracing::trace;

/// Pointer gesture between a left press and its release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerGesture {
    /// No button held.
    #[default]
    Idle,
    /// Pressed on a letter; no motion yet.
    Pressed {
        /// Letter under the press.
        source: PositionIndex,
    },
    /// Motion after a press on a letter.
    Dragging {
        /// Letter currently under the pointer.
        hover: Option<PositionIndex>,
    },
    /// Pressed on a button.
    PressedButton(ButtonKind),
}

/// Apply one mouse report to `state`, using `layout` for hit testing.
pub fn handle_mouse_event(state: &mut AppState, mouse: MouseEvent, layout: &ScreenLayout) {
    let hit = layout.hit_test(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_press(state, hit),
        MouseEventKind::Drag(MouseButton::Left) => handle_motion(state, hit),
        MouseEventKind::Up(MouseButton::Left) => {
            let modifier_held = state.selection_modifier.is_held(mouse.modifiers);
            handle_release(state, hit, modifier_held);
        }
        _ => {}
    }
}

fn handle_press(state: &mut AppState, hit: HitTarget) {
    state.gesture = match hit {
        HitTarget::Letter(source) => PointerGesture::Pressed { source },
        HitTarget::Button(button) => PointerGesture::PressedButton(button),
        HitTarget::Input => {
            state.controller.set_focus(Focus::Input);
            PointerGesture::Idle
        }
        HitTarget::Board | HitTarget::Nothing => PointerGesture::Idle,
    };
}

fn handle_motion(state: &mut AppState, hit: HitTarget) {
    let previous = match state.gesture {
        PointerGesture::Pressed { source } => {
            state.controller.begin_drag(source);
            None
        }
        PointerGesture::Dragging { hover } => hover,
        PointerGesture::Idle | PointerGesture::PressedButton(_) => return,
    };

    let current = match hit {
        HitTarget::Letter(position) => Some(position),
        _ => None,
    };

    if current != previous {
        if let Some(left) = previous {
            state.controller.drag_leave(left);
        }
        if let Some(entered) = current {
            state.controller.drag_enter(entered);
        }
    }
    if let Some(over) = current {
        state.controller.drag_over(over);
    }

    state.gesture = PointerGesture::Dragging { hover: current };
}

fn handle_release(state: &mut AppState, hit: HitTarget, modifier_held: bool) {
    let gesture = std::mem::take(&mut state.gesture);

    match (gesture, hit) {
        (PointerGesture::Pressed { source }, HitTarget::Letter(position)) if position == source => {
            state.controller.toggle_selection(source, modifier_held);
        }
        (PointerGesture::Dragging { .. }, HitTarget::Letter(target))
            if state
                .controller
                .drag()
                .is_some_and(|drag| drag.accepts(target)) =>
        {
            if let Some(payload) = state.controller.drag().map(|drag| drag.payload.clone()) {
                state.controller.drop(target, &payload);
            }
        }
        (PointerGesture::Dragging { hover }, _) => {
            if let Some(left) = hover {
                state.controller.drag_leave(left);
            }
            state.controller.cancel_drag();
        }
        (PointerGesture::PressedButton(pressed), HitTarget::Button(released))
            if pressed == released =>
        {
            state.activate(pressed);
        }
        (gesture, hit) => trace!(?gesture, ?hit, "release ignored"),
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "mouse_handler_tests.rs"]
mod tests;
