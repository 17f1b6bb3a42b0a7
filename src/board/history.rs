use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, CastlingRights, Color, Square};

/// The parts of a position that decide whether two positions are "the same"
/// for repetition purposes. Clocks and move numbers are not compared.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PositionSnapshot {
    pub board: Board,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<Square>,
}

/// Append-only record of the positions a game has passed through.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PositionHistory {
    entries: Vec<PositionSnapshot>,
}

impl PositionHistory {
    #[must_use]
    pub fn new() -> Self {
        PositionHistory {
            entries: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, snapshot: PositionSnapshot) {
        self.entries.push(snapshot);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PositionSnapshot> {
        self.entries.iter()
    }

    /// How many recorded entries equal `snapshot`
    #[must_use]
    pub fn occurrences(&self, snapshot: &PositionSnapshot) -> usize {
        self.entries.iter().filter(|s| *s == snapshot).count()
    }

    /// Highest number of times any single position occurs across the
    /// history plus `current`.
    #[must_use]
    pub fn max_repetitions(&self, current: &PositionSnapshot) -> u32 {
        let mut table = RepetitionTable::new();
        let mut max = table.increment(current);
        for snapshot in &self.entries {
            max = max.max(table.increment(snapshot));
        }
        max
    }
}

#[derive(Debug)]
struct RepetitionTable<'a> {
    counts: HashMap<&'a PositionSnapshot, u32>,
}

impl<'a> RepetitionTable<'a> {
    fn new() -> Self {
        RepetitionTable {
            counts: HashMap::new(),
        }
    }

    fn increment(&mut self, snapshot: &'a PositionSnapshot) -> u32 {
        let count = self.counts.entry(snapshot).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Position;

    #[test]
    fn test_max_repetitions_counts_current() {
        let pos = Position::new();
        let snap = pos.snapshot();
        let mut history = PositionHistory::new();
        assert_eq!(history.max_repetitions(&snap), 1);

        history.push(snap.clone());
        assert_eq!(history.max_repetitions(&snap), 2);
        assert_eq!(history.occurrences(&snap), 1);
    }

    #[test]
    fn test_snapshot_equality_includes_rights() {
        let pos = Position::new();
        let a = pos.snapshot();
        let mut b = a.clone();
        b.castling_rights = CastlingRights::none();
        assert_ne!(a, b);

        let mut c = a.clone();
        c.side_to_move = Color::Black;
        assert_ne!(a, c);
    }
}
