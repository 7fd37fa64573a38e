//! Acceptance Test Harness for TUI testing
//!
//! Wraps `TuiApp<TestBackend>` with methods that simulate what a user does:
//! typing, pressing keys, clicking and dragging letters.

use crate::config::KeyBindings;
use crate::model::PositionIndex;
use crate::state::{AppState, ButtonKind};
use crate::view::{LetterStyles, TuiApp, buffer_to_string};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

/// Test harness for acceptance testing
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Harness with default state and an 80x24 terminal
    pub fn new() -> Self {
        Self::with_state(AppState::new(), 80, 24)
    }

    /// Harness around `state` with a custom terminal size
    pub fn with_state(state: AppState, width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .expect("TestBackend terminal should initialize");
        let mut app = TuiApp::new_for_test(
            terminal,
            state,
            KeyBindings::default(),
            LetterStyles::default(),
        );
        app.render_test().expect("Initial render should succeed");
        Self { app, running: true }
    }

    fn dispatch(&mut self, event: Event) -> bool {
        if !self.running {
            return true;
        }
        let quit = self
            .app
            .dispatch_test(event)
            .expect("Dispatch should succeed with TestBackend");
        if quit {
            self.running = false;
        }
        quit
    }

    /// Send a single key. Returns true if the app quit.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers. Returns true if the app quit.
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        self.dispatch(Event::Key(KeyEvent::new(key, mods)))
    }

    /// Type text one character at a time.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break;
            }
        }
    }

    /// Type `text` into the focused input field and press Enter.
    pub fn display(&mut self, text: &str) {
        self.type_text(text);
        self.send_key(KeyCode::Enter);
    }

    fn mouse(&mut self, kind: MouseEventKind, column: u16, row: u16, modifiers: KeyModifiers) {
        self.dispatch(Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers,
        }));
    }

    /// Deliver one unmodified mouse report through the event loop path.
    pub fn mouse_event(&mut self, kind: MouseEventKind, column: u16, row: u16) {
        self.mouse(kind, column, row, KeyModifiers::NONE);
    }

    /// Left press and release at one spot.
    pub fn click_at(&mut self, column: u16, row: u16, modifiers: KeyModifiers) {
        self.mouse(
            MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers,
        );
        self.mouse(MouseEventKind::Up(MouseButton::Left), column, row, modifiers);
    }

    /// Screen point in the middle of the letter at `position`.
    pub fn letter_point(&self, position: usize) -> (u16, u16) {
        let area = self
            .app
            .last_layout()
            .cell(PositionIndex::new(position))
            .unwrap_or_else(|| panic!("letter {position} should be on screen"));
        center(area)
    }

    /// Screen point in the middle of `button`.
    pub fn button_point(&self, button: ButtonKind) -> (u16, u16) {
        let area = self
            .app
            .last_layout()
            .button(button)
            .unwrap_or_else(|| panic!("{button:?} should be on screen"));
        center(area)
    }

    /// Click the letter at `position` with `modifiers` held.
    pub fn click_letter(&mut self, position: usize, modifiers: KeyModifiers) {
        let (column, row) = self.letter_point(position);
        self.click_at(column, row, modifiers);
    }

    /// Click `button`.
    pub fn click_button(&mut self, button: ButtonKind) {
        let (column, row) = self.button_point(button);
        self.click_at(column, row, KeyModifiers::NONE);
    }

    /// Press on `from`, move to `to`, release there.
    pub fn drag_letter(&mut self, from: usize, to: usize) {
        let (from_col, from_row) = self.letter_point(from);
        let (to_col, to_row) = self.letter_point(to);
        self.drag_between((from_col, from_row), (to_col, to_row));
    }

    /// Press at `from`, one motion report at `from`, one at `to`, release at `to`.
    pub fn drag_between(&mut self, from: (u16, u16), to: (u16, u16)) {
        let none = KeyModifiers::NONE;
        self.mouse(MouseEventKind::Down(MouseButton::Left), from.0, from.1, none);
        self.mouse(MouseEventKind::Drag(MouseButton::Left), from.0, from.1, none);
        self.mouse(MouseEventKind::Drag(MouseButton::Left), to.0, to.1, none);
        self.mouse(MouseEventKind::Up(MouseButton::Left), to.0, to.1, none);
    }

    /// Deliver a raw mouse event without drawing or running deferred work.
    pub fn raw_mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) {
        self.app.handle_mouse_test(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    /// Current application state.
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Displayed board characters in position order.
    pub fn board_text(&self) -> String {
        self.state().controller.board().text()
    }

    /// Selected positions in ascending order.
    pub fn selected(&self) -> Vec<usize> {
        self.state()
            .controller
            .selection()
            .iter()
            .map(PositionIndex::get)
            .collect()
    }

    /// Whether the app is still running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame to a string.
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");
        buffer_to_string(self.app.terminal().backend().buffer())
    }
}

fn center(area: Rect) -> (u16, u16) {
    (area.x + area.width / 2, area.y + area.height / 2)
}
