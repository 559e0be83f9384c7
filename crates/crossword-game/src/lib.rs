//! Crossword game session: the user's guesses over a [`PuzzleLayout`].
//!
//! [`Game`] is the interactive part of a crossword. It owns the
//! [`GridData`] (one optional guessed character per letter cell), validates
//! input, and reports a [`CompletionEvent`] whenever the grid is completely
//! filled or stops being so. [`Cursor`] implements keyboard and mouse
//! navigation over the layout.
//!
//! The game knows nothing about the correct answer; checking a finished grid is
//! left to a verifier that reads [`GridData`].
//!
//! [`PuzzleLayout`]: crossword_core::PuzzleLayout

use crossword_core::Position;

pub use self::{cursor::*, game::*, grid_data::*};

mod cursor;
mod game;
mod grid_data;

/// The state of a single cell as seen by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum CellState {
    /// The cell is not part of any entry.
    Block,
    /// A letter cell without a guess.
    Empty,
    /// A letter cell holding the player's guess.
    Guess(char),
}

impl CellState {
    /// Returns the guessed character, if any.
    #[must_use]
    pub fn as_guess(self) -> Option<char> {
        match self {
            Self::Guess(ch) => Some(ch),
            Self::Block | Self::Empty => None,
        }
    }
}

/// The effect an input had on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum InputOperation {
    /// Nothing changed.
    NoOp,
    /// A guess was written.
    Set,
    /// A guess was removed.
    Removed,
}

/// Notification that the grid's completeness changed.
///
/// Emitted after every change that leaves the grid fully filled (so that a
/// corrected letter in a full grid is re-checked) and after a change that
/// makes a previously full grid incomplete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionEvent {
    complete: bool,
}

impl CompletionEvent {
    /// Creates an event.
    #[must_use]
    pub const fn new(complete: bool) -> Self {
        Self { complete }
    }

    /// Returns whether every letter cell holds a guess.
    #[must_use]
    pub const fn is_complete(self) -> bool {
        self.complete
    }
}

/// Errors returned by game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The position lies outside the grid.
    #[display("position {pos} is outside the grid")]
    OutOfBounds {
        /// The rejected position.
        pos: Position,
    },
    /// The position is a block cell.
    #[display("position {pos} is a block cell")]
    BlockCell {
        /// The rejected position.
        pos: Position,
    },
    /// The character cannot be entered into a cell.
    #[display("{ch:?} is not a valid guess")]
    InvalidGuess {
        /// The rejected character.
        ch: char,
    },
    /// Grid rows are ragged or contain a character that is not a guess,
    /// `#` (block) or `.` (empty).
    #[display("malformed grid data")]
    MalformedGrid,
    /// Saved grid data does not match the puzzle layout.
    #[display("saved grid does not match the puzzle layout")]
    LayoutMismatch,
}
