//! Layout dimension constants for TUI rendering.

/// Height of the input field (border + one text row).
pub const INPUT_HEIGHT: u16 = 3;

/// Height of the button row (bordered buttons).
pub const BUTTON_BAR_HEIGHT: u16 = 3;

/// Height of the key hint bar.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width of each button, border included.
pub const BUTTON_WIDTH: u16 = 11;

/// Columns between buttons.
pub const BUTTON_GAP: u16 = 1;

/// Blank columns on each side of a letter inside its cell.
pub const CELL_PADDING: u16 = 1;

/// Columns between adjacent letter cells.
pub const CELL_GAP: u16 = 1;
