use serde::{Deserialize, Serialize};

use crate::Direction;

/// A cell position on the crossword grid.
///
/// Rows grow downwards and columns grow to the right, both starting at 0.
/// Upper bounds are owned by [`PuzzleLayout`](crate::PuzzleLayout); the
/// stepping methods here only guard against leaving the grid at the top or
/// left edge.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Display,
    Serialize,
    Deserialize,
)]
#[display("({row}, {col})")]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position from a row and a column.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns the row (0-based, top to bottom).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0-based, left to right).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the position one row up, or `None` on the top edge.
    #[must_use]
    pub fn up(self) -> Option<Self> {
        Some(Self::new(self.row.checked_sub(1)?, self.col))
    }

    /// Returns the position one row down, or `None` if the row would overflow.
    #[must_use]
    pub fn down(self) -> Option<Self> {
        Some(Self::new(self.row.checked_add(1)?, self.col))
    }

    /// Returns the position one column left, or `None` on the left edge.
    #[must_use]
    pub fn left(self) -> Option<Self> {
        Some(Self::new(self.row, self.col.checked_sub(1)?))
    }

    /// Returns the position one column right, or `None` if the column would overflow.
    #[must_use]
    pub fn right(self) -> Option<Self> {
        Some(Self::new(self.row, self.col.checked_add(1)?))
    }

    /// Returns the position `offset` cells further along `direction`.
    #[must_use]
    pub fn advance(self, direction: Direction, offset: u8) -> Option<Self> {
        match direction {
            Direction::Across => Some(Self::new(self.row, self.col.checked_add(offset)?)),
            Direction::Down => Some(Self::new(self.row.checked_add(offset)?, self.col)),
        }
    }

    /// Returns the next position along `direction`.
    #[must_use]
    pub fn next(self, direction: Direction) -> Option<Self> {
        self.advance(direction, 1)
    }

    /// Returns the previous position along `direction`.
    #[must_use]
    pub fn prev(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Across => self.left(),
            Direction::Down => self.up(),
        }
    }
}
