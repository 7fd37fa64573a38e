//! Board widget: the letter cells inside a bordered region.

use super::layout::{LetterCell, board_block, display_char};
use super::styles::LetterStyles;
use crate::model::Board;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// Draws every laid-out letter cell of a board.
pub struct BoardView<'a> {
    board: &'a Board,
    cells: &'a [LetterCell],
    styles: &'a LetterStyles,
}

impl<'a> BoardView<'a> {
    /// Widget for `board` using cells from `compute_layout`.
    pub fn new(board: &'a Board, cells: &'a [LetterCell], styles: &'a LetterStyles) -> Self {
        Self {
            board,
            cells,
            styles,
        }
    }
}

impl Widget for BoardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        board_block().render(area, buf);

        for cell in self.cells {
            let Some(letter) = self.board.get(cell.position) else {
                continue;
            };
            let area = cell.area.intersection(area);
            if area.is_empty() {
                continue;
            }
            let text = format!(" {} ", display_char(letter.character()));
            buf.set_stringn(
                area.x,
                area.y,
                text,
                usize::from(area.width),
                self.styles.style_for(letter),
            );
        }
    }
}
