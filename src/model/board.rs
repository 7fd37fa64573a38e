//! The ordered sequence of letters produced by one Generate.

use super::{BoardGeneration, Letter, PositionIndex};

/// Ordered letters, owned wholesale and rebuilt on every Generate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    letters: Vec<Letter>,
    generation: BoardGeneration,
}

impl Board {
    /// Empty board for the given generation.
    pub fn empty(generation: BoardGeneration) -> Self {
        Self {
            letters: Vec::new(),
            generation,
        }
    }

    /// One letter per character of `text`, positions in input order.
    pub fn from_text(text: &str, generation: BoardGeneration) -> Self {
        let letters = text
            .chars()
            .enumerate()
            .map(|(offset, ch)| Letter::new(ch, PositionIndex::new(offset)))
            .collect();
        Self {
            letters,
            generation,
        }
    }

    /// Generation this board belongs to.
    pub fn generation(&self) -> BoardGeneration {
        self.generation
    }

    /// Number of letters.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Whether the board has no letters.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// All letters in display order.
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Letter at `position`, if any.
    pub fn get(&self, position: PositionIndex) -> Option<&Letter> {
        self.letters.get(position.get())
    }

    /// Mutable letter at `position`, if any.
    pub fn get_mut(&mut self, position: PositionIndex) -> Option<&mut Letter> {
        self.letters.get_mut(position.get())
    }

    /// Displayed characters concatenated in position order.
    pub fn text(&self) -> String {
        self.letters.iter().map(Letter::character).collect()
    }

    /// Exchange the displayed characters at two positions.
    ///
    /// Flags and positions do not move. Returns `false` (and changes nothing)
    /// when either position is off the board.
    pub fn swap_characters(&mut self, a: PositionIndex, b: PositionIndex) -> bool {
        let (Some(first), Some(second)) = (self.get(a), self.get(b)) else {
            return false;
        };
        let (first, second) = (first.character(), second.character());
        if let Some(letter) = self.get_mut(a) {
            letter.set_character(second);
        }
        if let Some(letter) = self.get_mut(b) {
            letter.set_character(first);
        }
        true
    }

    /// Position of the first letter carrying the dragging flag.
    pub fn dragging_position(&self) -> Option<PositionIndex> {
        self.letters
            .iter()
            .find(|letter| letter.dragging)
            .map(Letter::position)
    }

    /// Positions of every selected letter.
    pub fn selected_positions(&self) -> impl Iterator<Item = PositionIndex> + '_ {
        self.letters
            .iter()
            .filter(|letter| letter.selected)
            .map(Letter::position)
    }
}
