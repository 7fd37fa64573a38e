//! UI state machine (pure).
//!
//! All state transitions are plain functions and methods, testable without
//! a terminal.

pub mod app_state;
pub mod controller;
pub mod focus;
pub mod mouse_handler;
pub mod text_field;

// Re-export for convenience
pub use app_state::AppState;
pub use controller::{BoardController, Deferred, DragSession};
pub use focus::{ButtonKind, Focus};
pub use mouse_handler::{PointerGesture, handle_mouse_event};
pub use text_field::TextField;
