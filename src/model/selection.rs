//! Set of selected board positions.

use super::PositionIndex;
use std::collections::BTreeSet;

/// Positions currently marked selected.
///
/// Stores positions, never letters: a selection stays on its screen slot
/// when characters are swapped underneath it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionSet {
    positions: BTreeSet<PositionIndex>,
}

impl SelectionSet {
    /// Empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `position` if absent, remove it if present.
    ///
    /// Returns whether the position is selected afterwards.
    pub fn toggle(&mut self, position: PositionIndex) -> bool {
        if self.positions.remove(&position) {
            false
        } else {
            self.positions.insert(position);
            true
        }
    }

    /// Whether `position` is selected.
    pub fn contains(&self, position: PositionIndex) -> bool {
        self.positions.contains(&position)
    }

    /// Number of selected positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.positions.clear();
    }

    /// Selected positions in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = PositionIndex> + '_ {
        self.positions.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_membership() {
        let mut set = SelectionSet::new();
        let p = PositionIndex::new(4);
        assert!(set.toggle(p));
        assert!(set.contains(p));
        assert!(!set.toggle(p));
        assert!(set.is_empty());
    }

    #[test]
    fn iter_is_ascending() {
        let mut set = SelectionSet::new();
        set.toggle(PositionIndex::new(2));
        set.toggle(PositionIndex::new(0));
        let collected: Vec<usize> = set.iter().map(PositionIndex::get).collect();
        assert_eq!(collected, vec![0, 2]);
    }
}
