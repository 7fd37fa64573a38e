//! Input field widget.

use crate::state::TextField;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

/// Bordered single-line text field. Shows a block cursor when focused.
pub struct InputField<'a> {
    field: &'a TextField,
    focused: bool,
    border_style: Style,
}

impl<'a> InputField<'a> {
    /// Widget for `field`.
    pub fn new(field: &'a TextField, focused: bool) -> Self {
        Self {
            field,
            focused,
            border_style: Style::default(),
        }
    }

    /// Style applied to the border when focused.
    pub fn focused_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }
}

impl Widget for InputField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let value = self.field.value();
        let cursor = self.field.cursor();

        let line = if self.focused {
            let inner_width = usize::from(area.width.saturating_sub(2));
            let start = first_visible_char(value, cursor, inner_width);
            let before: String = value.chars().skip(start).take(cursor - start).collect();
            let mut rest = value.chars().skip(cursor);
            let under = rest.next().map_or_else(|| " ".to_string(), String::from);
            let after: String = rest.collect();

            Line::from(vec![
                Span::raw(before),
                Span::styled(
                    under,
                    Style::default()
                        .bg(Color::White)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(after),
            ])
        } else {
            Line::from(value)
        };

        let border_style = if self.focused {
            self.border_style
        } else {
            Style::default()
        };

        Paragraph::new(line)
            .block(Block::bordered().title("Text").border_style(border_style))
            .render(area, buf);
    }
}

/// First character to draw so that the cursor cell fits in `width` columns.
fn first_visible_char(value: &str, cursor: usize, width: usize) -> usize {
    let widths: Vec<usize> = value.chars().map(|ch| ch.width().unwrap_or(0)).collect();
    let cursor = cursor.min(widths.len());
    let cursor_width = widths.get(cursor).copied().unwrap_or(1).max(1);

    let mut used = widths[..cursor].iter().sum::<usize>() + cursor_width;
    let mut start = 0;
    while used > width && start < cursor {
        used -= widths[start];
        start += 1;
    }
    start
}
