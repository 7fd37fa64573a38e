//! Domain-level keyboard actions independent of key bindings.

/// User intent behind a key press.
///
/// The mapping from `crossterm::event::KeyEvent` to `KeyAction` is owned
/// by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Activate the focused control. Enter in the input field means Display.
    /// Default: Enter/Space
    Activate,
    /// Rebuild the board from the input field. Default: F5
    Display,
    /// Discard the board and empty the input field. Default: Ctrl+L
    Clear,
    /// Deselect every letter. Default: Ctrl+R
    ResetSelection,
    /// Move focus to the next control. Default: Tab
    FocusNext,
    /// Move focus to the previous control. Default: Shift+Tab
    FocusPrev,
    /// Exit the application. Default: Esc
    Quit,
}
