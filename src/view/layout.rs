//! Screen layout and hit testing.
//!
//! Pure geometry: the same `ScreenLayout` drives rendering and maps mouse
//! coordinates back to letters and buttons.

use super::constants::{
    BUTTON_BAR_HEIGHT, BUTTON_GAP, BUTTON_WIDTH, CELL_GAP, CELL_PADDING, INPUT_HEIGHT,
    STATUS_BAR_HEIGHT,
};
use crate::model::{Board, PositionIndex};
use crate::state::ButtonKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    widgets::Block,
};
use unicode_width::UnicodeWidthChar;

/// What lies under a screen coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// A drawn letter cell.
    Letter(PositionIndex),
    /// An action button.
    Button(ButtonKind),
    /// The input field.
    Input,
    /// Board region outside any letter cell.
    Board,
    /// Anything else.
    Nothing,
}

/// Screen area of one letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterCell {
    /// Letter drawn in this cell.
    pub position: PositionIndex,
    /// Cell rectangle, clipped to the board's inner area.
    pub area: Rect,
}

/// Rectangles of every interactive region for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    /// Input field, including its border.
    pub input: Rect,
    /// Buttons in layout order.
    pub buttons: Vec<(ButtonKind, Rect)>,
    /// Board region, including its border.
    pub board: Rect,
    /// Key hint bar, when shown.
    pub status: Option<Rect>,
    /// Letter cells that fit inside the board region.
    pub cells: Vec<LetterCell>,
}

impl ScreenLayout {
    /// Classify the cell at (`column`, `row`).
    pub fn hit_test(&self, column: u16, row: u16) -> HitTarget {
        let point = Position::new(column, row);

        if let Some(cell) = self.cells.iter().find(|cell| cell.area.contains(point)) {
            return HitTarget::Letter(cell.position);
        }
        if let Some((button, _)) = self.buttons.iter().find(|(_, area)| area.contains(point)) {
            return HitTarget::Button(*button);
        }
        if self.input.contains(point) {
            return HitTarget::Input;
        }
        if self.board.contains(point) {
            return HitTarget::Board;
        }
        HitTarget::Nothing
    }

    /// Area of the letter at `position`, if it is drawn.
    pub fn cell(&self, position: PositionIndex) -> Option<Rect> {
        self.cells
            .iter()
            .find(|cell| cell.position == position)
            .map(|cell| cell.area)
    }

    /// Area of `button`.
    pub fn button(&self, button: ButtonKind) -> Option<Rect> {
        self.buttons
            .iter()
            .find(|(kind, _)| *kind == button)
            .map(|(_, area)| *area)
    }
}

/// Character drawn for `ch`; control characters show as a replacement mark.
pub fn display_char(ch: char) -> char {
    if ch.is_control() {
        char::REPLACEMENT_CHARACTER
    } else {
        ch
    }
}

/// Columns a letter cell occupies, padding included.
pub fn cell_width(ch: char) -> u16 {
    let glyph = display_char(ch).width().unwrap_or(1).max(1) as u16;
    glyph + 2 * CELL_PADDING
}

/// Block drawn around the board. Shared with rendering so the inner area
/// used for hit testing matches what is drawn.
pub fn board_block() -> Block<'static> {
    Block::bordered().title("Letters")
}

/// Lay out the whole screen for `board` inside `area`.
pub fn compute_layout(area: Rect, board: &Board, show_hints: bool) -> ScreenLayout {
    let status_height = if show_hints { STATUS_BAR_HEIGHT } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(BUTTON_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(status_height),
        ])
        .split(area);

    let board_area = chunks[2];
    let inner = board_block().inner(board_area);

    ScreenLayout {
        input: chunks[0],
        buttons: layout_buttons(chunks[1]),
        board: board_area,
        status: show_hints.then_some(chunks[3]),
        cells: layout_cells(inner, board),
    }
}

/// Place buttons left to right, dropping any that do not fit.
pub fn layout_buttons(area: Rect) -> Vec<(ButtonKind, Rect)> {
    let mut x = area.x;
    let mut buttons = Vec::with_capacity(ButtonKind::ALL.len());
    for button in ButtonKind::ALL {
        if x.saturating_add(BUTTON_WIDTH) > area.right() {
            break;
        }
        buttons.push((button, Rect::new(x, area.y, BUTTON_WIDTH, area.height)));
        x = x.saturating_add(BUTTON_WIDTH + BUTTON_GAP);
    }
    buttons
}

/// Flow letter cells left to right, wrapping at the right edge of `inner`.
///
/// Rows that fall below `inner` are not laid out.
pub fn layout_cells(inner: Rect, board: &Board) -> Vec<LetterCell> {
    let mut cells = Vec::with_capacity(board.len());
    if inner.width == 0 || inner.height == 0 {
        return cells;
    }

    let mut x = inner.x;
    let mut y = inner.y;
    for letter in board.letters() {
        let width = cell_width(letter.character());
        if x > inner.x && x.saturating_add(width) > inner.right() {
            x = inner.x;
            y += 1;
        }
        if y >= inner.bottom() {
            break;
        }

        let clipped = width.min(inner.right() - x);
        cells.push(LetterCell {
            position: letter.position(),
            area: Rect::new(x, y, clipped, 1),
        });
        x = x.saturating_add(width + CELL_GAP);
    }
    cells
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
