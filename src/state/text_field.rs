//! Single-line text field (pure state transitions).
//!
//! The cursor counts characters, not bytes.

/// Contents and cursor of the input field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextField {
    value: String,
    cursor: usize,
}

impl TextField {
    /// Field holding `value` with the cursor at the end.
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    /// Current text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the field holds no text.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// Byte offset of the character at `cursor`.
    fn byte_offset(&self, cursor: usize) -> usize {
        self.value
            .char_indices()
            .nth(cursor)
            .map_or(self.value.len(), |(offset, _)| offset)
    }
}

/// Insert `ch` at the cursor and advance past it.
pub fn handle_char_input(mut field: TextField, ch: char) -> TextField {
    let offset = field.byte_offset(field.cursor);
    field.value.insert(offset, ch);
    field.cursor += 1;
    field
}

/// Delete the character before the cursor.
pub fn handle_backspace(mut field: TextField) -> TextField {
    if field.cursor == 0 {
        return field;
    }
    let offset = field.byte_offset(field.cursor - 1);
    field.value.remove(offset);
    field.cursor -= 1;
    field
}

/// Delete the character under the cursor.
pub fn handle_delete(mut field: TextField) -> TextField {
    if field.cursor < field.char_count() {
        let offset = field.byte_offset(field.cursor);
        field.value.remove(offset);
    }
    field
}

/// Move cursor one character left, saturating at 0.
pub fn handle_cursor_left(mut field: TextField) -> TextField {
    field.cursor = field.cursor.saturating_sub(1);
    field
}

/// Move cursor one character right, saturating at the end.
pub fn handle_cursor_right(mut field: TextField) -> TextField {
    field.cursor = (field.cursor + 1).min(field.char_count());
    field
}

/// Move cursor to the start.
pub fn handle_home(mut field: TextField) -> TextField {
    field.cursor = 0;
    field
}

/// Move cursor past the last character.
pub fn handle_end(mut field: TextField) -> TextField {
    field.cursor = field.char_count();
    field
}
