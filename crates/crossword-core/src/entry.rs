use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::{Direction, Position};

/// Identifies an entry by clue number and direction, e.g. "1 across".
///
/// Ordering is by clue number first, then across before down. This is the
/// order in which clues are listed and in which answers form a seed phrase.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("{number} {direction}")]
pub struct EntryId {
    number: u32,
    direction: Direction,
}

impl EntryId {
    /// Creates an entry id.
    #[must_use]
    pub const fn new(number: u32, direction: Direction) -> Self {
        Self { number, direction }
    }

    /// Returns the clue number.
    #[must_use]
    pub const fn number(self) -> u32 {
        self.number
    }

    /// Returns the direction.
    #[must_use]
    pub const fn direction(self) -> Direction {
        self.direction
    }
}

/// A single answer slot on the grid together with its clue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    id: EntryId,
    start: Position,
    len: u8,
    clue: String,
}

impl Entry {
    pub(crate) fn new(id: EntryId, start: Position, len: u8, clue: String) -> Self {
        Self {
            id,
            start,
            len,
            clue,
        }
    }

    /// Returns the entry id.
    #[must_use]
    pub fn id(&self) -> EntryId {
        self.id
    }

    /// Returns the first cell of the entry.
    #[must_use]
    pub fn start(&self) -> Position {
        self.start
    }

    /// Returns the number of cells in the entry.
    #[must_use]
    pub fn len(&self) -> u8 {
        self.len
    }

    /// Always false; entries are at least one cell long.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the clue text.
    #[must_use]
    pub fn clue(&self) -> &str {
        &self.clue
    }

    /// Returns the cells of the entry in reading order.
    pub fn positions(&self) -> EntryPositions {
        EntryPositions {
            start: self.start,
            direction: self.id.direction(),
            offset: 0,
            len: self.len,
        }
    }

    /// Returns whether the entry covers `pos`.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.offset_of(pos).is_some()
    }

    /// Returns the 0-based index of `pos` within the entry.
    #[must_use]
    pub fn offset_of(&self, pos: Position) -> Option<u8> {
        let (fixed, fixed_start, moving, moving_start) = match self.id.direction() {
            Direction::Across => (pos.row(), self.start.row(), pos.col(), self.start.col()),
            Direction::Down => (pos.col(), self.start.col(), pos.row(), self.start.row()),
        };
        if fixed != fixed_start {
            return None;
        }
        let offset = moving.checked_sub(moving_start)?;
        (offset < self.len).then_some(offset)
    }

    /// Returns the last cell of the entry.
    #[must_use]
    pub fn end(&self) -> Position {
        self.positions().last().unwrap_or(self.start)
    }
}

/// Iterator over the cells of an [`Entry`].
#[derive(Debug, Clone)]
pub struct EntryPositions {
    start: Position,
    direction: Direction,
    offset: u8,
    len: u8,
}

impl Iterator for EntryPositions {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.len {
            return None;
        }
        let pos = self.start.advance(self.direction, self.offset)?;
        self.offset += 1;
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.len.saturating_sub(self.offset));
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for EntryPositions {}
impl FusedIterator for EntryPositions {}
