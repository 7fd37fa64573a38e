//! Core identifier newtypes.
//!
//! Positions are ordinals assigned when a board is generated. They never
//! move with the character a letter happens to display.

use std::fmt;

/// 0-based ordinal of a letter on the board.
///
/// Assigned once at generation time and stable for the lifetime of the
/// board. Equal to the character's offset in the generating text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PositionIndex(usize);

impl PositionIndex {
    /// Wrap a raw ordinal.
    pub const fn new(raw: usize) -> Self {
        Self(raw)
    }

    /// Raw ordinal value.
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for PositionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for PositionIndex {
    fn from(raw: usize) -> Self {
        Self(raw)
    }
}

/// Identity of one generated board.
///
/// Every Generate or Clear produces a fresh generation. Work that was
/// scheduled against an older generation refers to letters that no longer
/// exist on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BoardGeneration(u64);

impl BoardGeneration {
    /// The generation that follows this one.
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}
