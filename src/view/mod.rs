//! TUI rendering and terminal management (impure shell)

pub mod board;
pub mod buttons;
pub mod constants;
pub mod input_field;
pub mod layout;
pub mod styles;

pub use board::BoardView;
pub use buttons::ButtonBar;
pub use input_field::InputField;
pub use layout::{HitTarget, ScreenLayout, compute_layout};
pub use styles::{ColorConfig, LetterStyles};

use crate::config::KeyBindings;
use crate::model::KeyAction;
use crate::state::{AppState, Focus, handle_mouse_event, text_field};
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: LetterStyles,
    /// Layout of the last drawn frame (for mouse hit testing)
    last_layout: ScreenLayout,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create the application on the real terminal.
    ///
    /// Enters raw mode and the alternate screen and enables mouse capture.
    pub fn new(app_state: AppState, styles: LetterStyles) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(
            terminal,
            app_state,
            KeyBindings::default(),
            styles,
        ))
    }

    /// Run the main event loop until the user quits.
    ///
    /// Blocks on terminal events; every event is handled to completion,
    /// drawn, and then any deferred work runs and is drawn.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            let event = event::read()?;
            if self.dispatch(event)? {
                return Ok(());
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn with_terminal(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
        styles: LetterStyles,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings,
            styles,
            last_layout: ScreenLayout::default(),
        }
    }

    /// Handle one terminal event and redraw.
    ///
    /// Returns true if the app should quit.
    fn dispatch(&mut self, event: Event) -> Result<bool, TuiError> {
        match event {
            Event::Key(key) => {
                if self.handle_key(key) {
                    return Ok(true);
                }
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, height) => debug!(width, height, "Terminal resized"),
            _ => return Ok(false),
        }

        self.draw()?;
        self.flush_deferred()?;
        Ok(false)
    }

    /// Run deferred controller work, redrawing if any ran.
    fn flush_deferred(&mut self) -> Result<(), TuiError> {
        if self.app_state.controller.run_deferred() > 0 {
            self.draw()?;
        }
        Ok(())
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        // Ctrl+C always quits, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.app_state.controller.focus() == Focus::Input && self.handle_text_edit(key) {
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        match action {
            KeyAction::Quit => return true,
            KeyAction::Activate => self.app_state.activate_focused(),
            KeyAction::Display => self.app_state.controller.generate(),
            KeyAction::Clear => self.app_state.controller.clear(),
            KeyAction::ResetSelection => self.app_state.controller.reset_selection(),
            KeyAction::FocusNext => {
                let next = self.app_state.controller.focus().next();
                self.app_state.controller.set_focus(next);
            }
            KeyAction::FocusPrev => {
                let prev = self.app_state.controller.focus().prev();
                self.app_state.controller.set_focus(prev);
            }
        }
        false
    }

    /// Apply an editing key to the input field.
    ///
    /// Returns true if the key was consumed.
    fn handle_text_edit(&mut self, key: KeyEvent) -> bool {
        let controller = &mut self.app_state.controller;
        let field = controller.input().clone();

        let edited = match key.code {
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                text_field::handle_char_input(field, ch)
            }
            KeyCode::Backspace => text_field::handle_backspace(field),
            KeyCode::Delete => text_field::handle_delete(field),
            KeyCode::Left => text_field::handle_cursor_left(field),
            KeyCode::Right => text_field::handle_cursor_right(field),
            KeyCode::Home => text_field::handle_home(field),
            KeyCode::End => text_field::handle_end(field),
            _ => return false,
        };

        controller.set_input(edited);
        true
    }

    /// Handle a single mouse event against the last drawn layout
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        handle_mouse_event(&mut self.app_state, mouse, &self.last_layout);
    }

    /// Draw one frame and remember its layout for hit testing
    fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let styles = &self.styles;
        let mut layout = ScreenLayout::default();

        self.terminal.draw(|frame| {
            layout = compute_layout(frame.area(), state.controller.board(), state.show_hints);
            render_frame(frame, state, styles, &layout);
        })?;

        self.last_layout = layout;
        Ok(())
    }
}

/// Render every region of the screen.
fn render_frame(frame: &mut Frame, state: &AppState, styles: &LetterStyles, layout: &ScreenLayout) {
    let controller = &state.controller;
    let focus = controller.focus();

    frame.render_widget(
        InputField::new(controller.input(), focus == Focus::Input).focused_style(styles.focused()),
        layout.input,
    );

    let button_row = layout
        .buttons
        .iter()
        .map(|(_, rect)| *rect)
        .reduce(|acc, rect| acc.union(rect))
        .unwrap_or_default();
    frame.render_widget(
        ButtonBar::new(&layout.buttons, focus, styles.focused()),
        button_row,
    );

    frame.render_widget(
        BoardView::new(controller.board(), &layout.cells, styles),
        layout.board,
    );

    if let Some(status) = layout.status {
        render_status_bar(frame, status, state);
    }
}

/// Key hints and selection count.
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let text = format!(
        " selected: {} | Enter: display | Tab: focus | {}+click: select | drag: swap | Ctrl+L: clear | Ctrl+R: reset | Esc: quit",
        state.controller.selection().len(),
        state.selection_modifier,
    );
    frame.render_widget(
        Paragraph::new(Line::from(text)).style(Style::default().fg(Color::Gray)),
        area,
    );
}

/// Start the letter board on the real terminal and run it to completion.
///
/// `initial_text`, when given, pre-fills the input field and performs an
/// initial Display.
pub fn run(
    mut app_state: AppState,
    styles: LetterStyles,
    initial_text: Option<String>,
) -> Result<(), TuiError> {
    if let Some(text) = initial_text {
        app_state
            .controller
            .set_input(crate::state::TextField::with_value(text));
        app_state.controller.generate();
    }

    let mut app = match TuiApp::new(app_state, styles) {
        Ok(app) => app,
        Err(err) => {
            // Setup may have failed after entering raw mode
            let _ = restore_terminal();
            return Err(err);
        }
    };
    info!("Letter board started");

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    info!("Letter board stopped");
    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

// ===== Test Helpers =====

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp around an existing terminal (test-only constructor)
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
        styles: LetterStyles,
    ) -> Self {
        Self::with_terminal(terminal, app_state, key_bindings, styles)
    }

    /// Feed one event through the same path as the event loop (test-only)
    ///
    /// Returns true if app should quit.
    pub(crate) fn dispatch_test(&mut self, event: Event) -> Result<bool, TuiError> {
        self.dispatch(event)
    }

    /// Handle a mouse event without drawing or running deferred work (test-only)
    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent) {
        self.handle_mouse(mouse)
    }

    /// Render a single frame (test-only accessor)
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Current application state (test-only accessor)
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Layout of the last drawn frame (test-only accessor)
    pub(crate) fn last_layout(&self) -> &ScreenLayout {
        &self.last_layout
    }

    /// Get reference to terminal (test-only accessor)
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Convert a ratatui buffer to a string for snapshot testing.
///
/// Trailing spaces and blank lines are dropped.
#[cfg(test)]
pub(crate) fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}
