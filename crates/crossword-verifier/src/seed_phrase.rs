use crossword_core::PuzzleLayout;
use crossword_game::GridData;
use serde::{Deserialize, Serialize};

/// The order in which guesses are read to form a [`SeedPhrase`].
///
/// The order is part of the puzzle format: a solution hash is only meaningful
/// together with the order it was computed with.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum SeedOrder {
    /// Entries sorted by clue number, across before down, each read along its
    /// direction and separated by a single space.
    #[default]
    #[display("by_entry")]
    ByEntry,
    /// Letter cells read row by row, left to right, with no separator.
    #[display("row_major")]
    RowMajor,
}

/// The separator placed between entries in [`SeedOrder::ByEntry`].
pub const ENTRY_SEPARATOR: char = ' ';

/// The guesses of a grid concatenated in canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub struct SeedPhrase(String);

impl SeedPhrase {
    /// Wraps an already assembled phrase, e.g. one typed by a puzzle author.
    #[must_use]
    pub fn new(phrase: impl Into<String>) -> Self {
        Self(phrase.into())
    }

    /// Reads the guesses of `grid` in `order`.
    ///
    /// Empty cells contribute no character, so an incomplete grid yields a
    /// phrase that cannot match a complete answer.
    #[must_use]
    pub fn derive(layout: &PuzzleLayout, grid: &GridData, order: SeedOrder) -> Self {
        let phrase = match order {
            SeedOrder::ByEntry => {
                let mut phrase = String::new();
                for (index, entry) in layout.entries().iter().enumerate() {
                    if index > 0 {
                        phrase.push(ENTRY_SEPARATOR);
                    }
                    phrase.extend(entry.positions().filter_map(|pos| grid.guess(pos)));
                }
                phrase
            }
            SeedOrder::RowMajor => layout
                .letter_positions()
                .filter_map(|pos| grid.guess(pos))
                .collect(),
        };
        Self(phrase)
    }

    /// Returns the phrase text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
