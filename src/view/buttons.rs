//! Button row widget.

use crate::state::{ButtonKind, Focus};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Paragraph, Widget},
};

/// Draws the Display / Clear / Reset buttons at precomputed positions.
pub struct ButtonBar<'a> {
    buttons: &'a [(ButtonKind, Rect)],
    focus: Focus,
    focused_style: Style,
}

impl<'a> ButtonBar<'a> {
    /// Widget drawing `buttons`, highlighting the focused one.
    pub fn new(buttons: &'a [(ButtonKind, Rect)], focus: Focus, focused_style: Style) -> Self {
        Self {
            buttons,
            focus,
            focused_style,
        }
    }
}

impl Widget for ButtonBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (button, rect) in self.buttons {
            let rect = rect.intersection(area);
            if rect.is_empty() {
                continue;
            }
            let style = if self.focus == Focus::Button(*button) {
                self.focused_style
            } else {
                Style::default()
            };
            Paragraph::new(button.label())
                .alignment(Alignment::Center)
                .block(Block::bordered().border_style(style))
                .style(style)
                .render(rect, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::buffer_to_string;
    use crate::view::layout::layout_buttons;
    use insta::assert_snapshot;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn renders_three_labelled_buttons() {
        let mut terminal = Terminal::new(TestBackend::new(36, 3)).unwrap();
        terminal
            .draw(|frame| {
                let buttons = layout_buttons(frame.area());
                let bar = ButtonBar::new(&buttons, Focus::Input, Style::default());
                frame.render_widget(bar, frame.area());
            })
            .unwrap();

        assert_snapshot!(buffer_to_string(terminal.backend().buffer()), @r"
        ┌─────────┐ ┌─────────┐ ┌─────────┐
        │ Display │ │  Clear  │ │  Reset  │
        └─────────┘ └─────────┘ └─────────┘
        ");
    }
}
