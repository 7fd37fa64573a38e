//! Tests for screen layout and hit testing.

use super::*;
use crate::model::BoardGeneration;

fn board(text: &str) -> Board {
    Board::from_text(text, BoardGeneration::default())
}

fn pos(raw: usize) -> PositionIndex {
    PositionIndex::new(raw)
}

#[test]
fn cell_width_pads_narrow_and_wide_characters() {
    assert_eq!(cell_width('a'), 3);
    assert_eq!(cell_width('日'), 4);
    assert_eq!(cell_width('\t'), 3);
}

#[test]
fn cells_flow_left_to_right_with_gap() {
    let inner = Rect::new(1, 1, 40, 5);
    let cells = layout_cells(inner, &board("cat"));

    let xs: Vec<u16> = cells.iter().map(|c| c.area.x).collect();
    assert_eq!(xs, vec![1, 5, 9]);
    assert!(cells.iter().all(|c| c.area.y == 1 && c.area.width == 3));
}

#[test]
fn cells_wrap_at_right_edge() {
    // Each cell is 3 wide plus 1 gap: two fit in 7 columns, the third wraps.
    let inner = Rect::new(0, 0, 7, 3);
    let cells = layout_cells(inner, &board("abc"));

    assert_eq!(cells[0].area, Rect::new(0, 0, 3, 1));
    assert_eq!(cells[1].area, Rect::new(4, 0, 3, 1));
    assert_eq!(cells[2].area, Rect::new(0, 1, 3, 1));
}

#[test]
fn cells_below_region_are_dropped() {
    let inner = Rect::new(0, 0, 3, 2);
    let cells = layout_cells(inner, &board("abcd"));
    assert_eq!(cells.len(), 2);
}

#[test]
fn zero_sized_region_has_no_cells() {
    assert!(layout_cells(Rect::new(0, 0, 0, 4), &board("abc")).is_empty());
}

#[test]
fn buttons_are_laid_out_in_order() {
    let buttons = layout_buttons(Rect::new(0, 3, 80, 3));
    let kinds: Vec<ButtonKind> = buttons.iter().map(|(kind, _)| *kind).collect();
    assert_eq!(kinds, ButtonKind::ALL.to_vec());
    assert_eq!(buttons[1].1.x, BUTTON_WIDTH + BUTTON_GAP);
}

#[test]
fn buttons_that_do_not_fit_are_dropped() {
    let buttons = layout_buttons(Rect::new(0, 0, BUTTON_WIDTH + 2, 3));
    assert_eq!(buttons.len(), 1);
}

#[test]
fn compute_layout_stacks_regions() {
    let layout = compute_layout(Rect::new(0, 0, 60, 20), &board("cat"), true);

    assert_eq!(layout.input, Rect::new(0, 0, 60, INPUT_HEIGHT));
    assert_eq!(layout.board.y, INPUT_HEIGHT + BUTTON_BAR_HEIGHT);
    assert_eq!(layout.status, Some(Rect::new(0, 19, 60, 1)));
    assert_eq!(layout.cells.len(), 3);
    assert_eq!(layout.cells[0].area.y, layout.board.y + 1);
}

#[test]
fn compute_layout_without_hints_gives_board_the_last_row() {
    let layout = compute_layout(Rect::new(0, 0, 60, 20), &board("cat"), false);
    assert_eq!(layout.status, None);
    assert_eq!(layout.board.bottom(), 20);
}

#[test]
fn hit_test_finds_letters_buttons_and_input() {
    let layout = compute_layout(Rect::new(0, 0, 60, 20), &board("cat"), true);

    let second = layout.cell(pos(1)).unwrap();
    assert_eq!(
        layout.hit_test(second.x + 1, second.y),
        HitTarget::Letter(pos(1))
    );

    let clear = layout.button(ButtonKind::Clear).unwrap();
    assert_eq!(
        layout.hit_test(clear.x, clear.y + 1),
        HitTarget::Button(ButtonKind::Clear)
    );

    assert_eq!(layout.hit_test(5, 1), HitTarget::Input);
}

#[test]
fn hit_test_gap_between_cells_is_board() {
    let layout = compute_layout(Rect::new(0, 0, 60, 20), &board("cat"), true);
    let first = layout.cell(pos(0)).unwrap();
    assert_eq!(layout.hit_test(first.right(), first.y), HitTarget::Board);
}

#[test]
fn hit_test_status_bar_is_nothing() {
    let layout = compute_layout(Rect::new(0, 0, 60, 20), &board("cat"), true);
    assert_eq!(layout.hit_test(2, 19), HitTarget::Nothing);
}
