//! A single rendered letter.

use super::PositionIndex;

/// One interactive character on the board.
///
/// `position` is fixed at creation. `character` is the only field a drop
/// ever exchanges; the visual flags stay with the position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Letter {
    character: char,
    position: PositionIndex,
    /// Marked by a modifier-click.
    pub selected: bool,
    /// Source of an in-progress drag.
    pub dragging: bool,
    /// Hovered as a candidate drop target.
    pub drag_over: bool,
}

impl Letter {
    /// Create an unselected letter at `position`.
    pub fn new(character: char, position: PositionIndex) -> Self {
        Self {
            character,
            position,
            selected: false,
            dragging: false,
            drag_over: false,
        }
    }

    /// Character currently displayed.
    pub fn character(&self) -> char {
        self.character
    }

    /// Ordinal assigned at generation time.
    pub fn position(&self) -> PositionIndex {
        self.position
    }

    /// Rendered letters are always drag sources and targets.
    pub fn is_draggable(&self) -> bool {
        true
    }

    pub(crate) fn set_character(&mut self, character: char) {
        self.character = character;
    }
}
