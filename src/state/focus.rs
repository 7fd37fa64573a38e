//! Keyboard focus among the input field and the buttons.

/// The three action buttons, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    /// Build the board from the input field.
    Display,
    /// Discard the board and empty the input field.
    Clear,
    /// Deselect every letter.
    Reset,
}

impl ButtonKind {
    /// Buttons in layout order.
    pub const ALL: [ButtonKind; 3] = [ButtonKind::Display, ButtonKind::Clear, ButtonKind::Reset];

    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            Self::Display => "Display",
            Self::Clear => "Clear",
            Self::Reset => "Reset",
        }
    }
}

/// Control that receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The text field.
    #[default]
    Input,
    /// One of the buttons.
    Button(ButtonKind),
}

impl Focus {
    const ORDER: [Focus; 4] = [
        Focus::Input,
        Focus::Button(ButtonKind::Display),
        Focus::Button(ButtonKind::Clear),
        Focus::Button(ButtonKind::Reset),
    ];

    fn index(self) -> usize {
        Self::ORDER
            .iter()
            .position(|focus| *focus == self)
            .unwrap_or(0)
    }

    /// Next control in tab order, wrapping.
    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    /// Previous control in tab order, wrapping.
    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }
}
