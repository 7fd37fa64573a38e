//! Domain model types (pure).
//!
//! Plain data for the letter board: letters, the board that owns them,
//! the selection set and the drag payload.

pub mod board;
pub mod drag;
pub mod identifiers;
pub mod key_action;
pub mod letter;
pub mod selection;

// Re-export for convenience
pub use board::Board;
pub use drag::{DragPayload, parse_leading_integer};
pub use identifiers::{BoardGeneration, PositionIndex};
pub use key_action::KeyAction;
pub use letter::Letter;
pub use selection::SelectionSet;
