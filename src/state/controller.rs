//! Letter board controller.
//!
//! Owns the input field, the board and the selection set for the lifetime
//! of one view. Every public method is one user-triggered operation; none
//! of them fail. Invalid input degrades to a no-op.

use super::focus::Focus;
use super::text_field::TextField;
use crate::model::{Board, BoardGeneration, DragPayload, PositionIndex, SelectionSet};
use tracing::{debug, trace};

/// Work scheduled to run after the current event has been drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    /// Flag the drag source once the drag-start frame is on screen.
    MarkDragging {
        /// Board the source letter belonged to when the drag began.
        generation: BoardGeneration,
        /// Source letter.
        position: PositionIndex,
    },
}

/// A drag between BeginDrag and Drop (or cancel).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    /// Letter the drag started from.
    pub source: PositionIndex,
    /// Text carried on the drag-data channel.
    pub payload: DragPayload,
    /// Letter that most recently suppressed the "no drop" default.
    pub accepting: Option<PositionIndex>,
}

impl DragSession {
    /// Whether releasing over `target` would deliver a drop.
    pub fn accepts(&self, target: PositionIndex) -> bool {
        self.accepting == Some(target)
    }
}

/// Controller for one letter board view.
#[derive(Debug, Clone, Default)]
pub struct BoardController {
    input: TextField,
    focus: Focus,
    board: Board,
    selection: SelectionSet,
    drag: Option<DragSession>,
    deferred: Vec<Deferred>,
}

impl BoardController {
    /// Controller with an empty field and no board.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Accessors =====

    /// The input field.
    pub fn input(&self) -> &TextField {
        &self.input
    }

    /// Replace the input field (editing goes through `text_field` handlers).
    pub fn set_input(&mut self, input: TextField) {
        self.input = input;
    }

    /// Focused control.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Move keyboard focus.
    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Selected positions.
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Drag in progress, if any.
    pub fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Whether deferred work is waiting to run.
    pub fn has_deferred(&self) -> bool {
        !self.deferred.is_empty()
    }

    // ===== Board lifecycle =====

    /// Rebuild the board from the trimmed input field.
    ///
    /// Blank input leaves everything untouched.
    pub fn generate(&mut self) {
        let text = self.input.value().trim();
        if text.is_empty() {
            trace!("generate ignored: input is blank");
            return;
        }

        let generation = self.board.generation().next();
        self.board = Board::from_text(text, generation);
        self.selection.clear();
        self.drag = None;
        debug!(
            letters = self.board.len(),
            generation = generation.get(),
            "Generated board"
        );
    }

    /// Discard the board, the selection and the input text, then focus the
    /// input field.
    pub fn clear(&mut self) {
        self.board = Board::empty(self.board.generation().next());
        self.selection.clear();
        self.drag = None;
        self.input = TextField::default();
        self.focus = Focus::Input;
        debug!("Cleared board");
    }

    /// Deselect every letter. Characters and drag flags are untouched.
    pub fn reset_selection(&mut self) {
        let selected: Vec<PositionIndex> = self.board.selected_positions().collect();
        for position in &selected {
            if let Some(letter) = self.board.get_mut(*position) {
                letter.selected = false;
            }
        }
        self.selection.clear();
        debug!(deselected = selected.len(), "Reset selection");
    }

    // ===== Selection =====

    /// Flip selection of the letter at `position` when the modifier is held.
    pub fn toggle_selection(&mut self, position: PositionIndex, modifier_held: bool) {
        if !modifier_held {
            trace!(%position, "click without selection modifier");
            return;
        }
        let Some(letter) = self.board.get_mut(position) else {
            return;
        };

        letter.selected = !letter.selected;
        let now_selected = self.selection.toggle(position);
        debug_assert_eq!(letter.selected, now_selected);
        debug!(%position, selected = now_selected, "Toggled selection");
    }

    // ===== Drag and drop =====

    /// Start dragging the letter at `position`.
    ///
    /// The payload is recorded now; the dragging flag is deferred until the
    /// frame showing the drag start has been drawn.
    pub fn begin_drag(&mut self, position: PositionIndex) {
        if self.board.get(position).is_none() {
            return;
        }
        self.drag = Some(DragSession {
            source: position,
            payload: DragPayload::from_position(position),
            accepting: None,
        });
        self.deferred.push(Deferred::MarkDragging {
            generation: self.board.generation(),
            position,
        });
        debug!(%position, "Drag started");
    }

    /// Pointer moved over `position` during a drag: allow a drop there.
    pub fn drag_over(&mut self, position: PositionIndex) {
        if self.board.get(position).is_none() {
            return;
        }
        if let Some(drag) = self.drag.as_mut() {
            drag.accepting = Some(position);
        }
    }

    /// Pointer entered `position` during a drag.
    pub fn drag_enter(&mut self, position: PositionIndex) {
        let Some(letter) = self.board.get_mut(position) else {
            return;
        };
        letter.drag_over = true;
        if let Some(drag) = self.drag.as_mut() {
            drag.accepting = Some(position);
        }
    }

    /// Pointer left `position` during a drag.
    pub fn drag_leave(&mut self, position: PositionIndex) {
        if let Some(letter) = self.board.get_mut(position) {
            letter.drag_over = false;
        }
        if let Some(drag) = self.drag.as_mut() {
            if drag.accepting == Some(position) {
                drag.accepting = None;
            }
        }
    }

    /// Release onto `target` carrying `payload`.
    ///
    /// Swaps the displayed characters of the dragged letter and the target.
    /// Positions, selection flags and the selection set stay where they are.
    /// Afterwards the dragging flag is removed from whichever letter has it.
    pub fn drop(&mut self, target: PositionIndex, payload: &DragPayload) {
        if let Some(letter) = self.board.get_mut(target) {
            letter.drag_over = false;
        }

        match payload.position() {
            Some(dragged) if dragged != target => {
                if self.board.swap_characters(dragged, target) {
                    debug!(%dragged, %target, "Swapped letters");
                } else {
                    trace!(%dragged, %target, "drop ignored: position off the board");
                }
            }
            Some(_) => trace!(%target, "drop ignored: source equals target"),
            None => trace!(payload = payload.as_str(), "drop ignored: payload is not a position"),
        }

        if let Some(position) = self.board.dragging_position() {
            if let Some(letter) = self.board.get_mut(position) {
                letter.dragging = false;
            }
        }
        self.drag = None;
    }

    /// Drag ended without a drop (released outside any letter).
    ///
    /// The dragging flag is left for the next drop to clear.
    pub fn cancel_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            debug!(source = %drag.source, "Drag cancelled");
        }
    }

    // ===== Deferred work =====

    /// Run everything scheduled so far. Returns how many tasks ran.
    ///
    /// Tasks aimed at a board that has since been replaced have no effect.
    pub fn run_deferred(&mut self) -> usize {
        let tasks = std::mem::take(&mut self.deferred);
        let count = tasks.len();
        for task in tasks {
            match task {
                Deferred::MarkDragging {
                    generation,
                    position,
                } => {
                    if generation != self.board.generation() {
                        trace!(%position, "dragging flag skipped: board replaced");
                        continue;
                    }
                    if let Some(letter) = self.board.get_mut(position) {
                        letter.dragging = true;
                    }
                }
            }
        }
        count
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
