use std::{collections::BTreeMap, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Direction, EntryId, Position};

/// Clue descriptions for one crossword, keyed by clue number.
///
/// The JSON shape mirrors the data format of common web crossword widgets:
///
/// ```json
/// {
///   "across": { "1": { "clue": "Feline", "answer": "???", "row": 0, "col": 0 } },
///   "down":   { "2": { "clue": "Snake", "length": 3, "row": 0, "col": 2 } }
/// }
/// ```
///
/// Only the character count of `answer` is used, so a mask like `"???"` is
/// enough and the plaintext answer never needs to be shipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleData {
    #[serde(default)]
    across: BTreeMap<u32, Clue>,
    #[serde(default)]
    down: BTreeMap<u32, Clue>,
}

impl PuzzleData {
    /// Creates puzzle data from across and down clue maps.
    #[must_use]
    pub fn new(across: BTreeMap<u32, Clue>, down: BTreeMap<u32, Clue>) -> Self {
        Self { across, down }
    }

    /// Parses puzzle data from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::Json`] if the text is not valid puzzle JSON or a
    /// clue has an invalid length.
    pub fn from_json(json: &str) -> Result<Self, PuzzleError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns the clues of one direction, ordered by clue number.
    #[must_use]
    pub fn clues(&self, direction: Direction) -> &BTreeMap<u32, Clue> {
        match direction {
            Direction::Across => &self.across,
            Direction::Down => &self.down,
        }
    }

    /// Returns every clue with its entry id, ordered by [`EntryId`].
    pub fn iter(&self) -> impl Iterator<Item = (EntryId, &Clue)> {
        let mut all: Vec<_> = Direction::ALL
            .into_iter()
            .flat_map(|direction| {
                self.clues(direction)
                    .iter()
                    .map(move |(number, clue)| (EntryId::new(*number, direction), clue))
            })
            .collect();
        all.sort_by_key(|(id, _)| *id);
        all.into_iter()
    }

    /// Returns the total number of clues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.across.len() + self.down.len()
    }

    /// Returns whether there are no clues at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromStr for PuzzleData {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}

/// A single clue: its text, where its entry starts and how long it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawClue", into = "RawClue")]
pub struct Clue {
    text: String,
    start: Position,
    len: u8,
}

impl Clue {
    /// Creates a clue.
    ///
    /// # Errors
    ///
    /// Returns [`ClueError::EmptyAnswer`] if `len` is zero.
    pub fn new(text: impl Into<String>, start: Position, len: u8) -> Result<Self, ClueError> {
        if len == 0 {
            return Err(ClueError::EmptyAnswer);
        }
        Ok(Self {
            text: text.into(),
            start,
            len,
        })
    }

    /// Returns the clue text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the first cell of the answer.
    #[must_use]
    pub fn start(&self) -> Position {
        self.start
    }

    /// Returns the answer length in cells.
    #[must_use]
    pub fn len(&self) -> u8 {
        self.len
    }

    /// Always false for a constructed clue.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawClue {
    clue: String,
    row: u8,
    col: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    length: Option<u8>,
}

impl TryFrom<RawClue> for Clue {
    type Error = ClueError;

    fn try_from(raw: RawClue) -> Result<Self, Self::Error> {
        let answer_len = raw
            .answer
            .as_deref()
            .map(|answer| {
                let count = answer.chars().count();
                u8::try_from(count).map_err(|_| ClueError::AnswerTooLong { len: count })
            })
            .transpose()?;
        let len = match (answer_len, raw.length) {
            (Some(answer), Some(length)) if answer != length => {
                return Err(ClueError::LengthMismatch { answer, length });
            }
            (Some(len), _) | (None, Some(len)) => len,
            (None, None) => return Err(ClueError::MissingLength),
        };
        Self::new(raw.clue, Position::new(raw.row, raw.col), len)
    }
}

impl From<Clue> for RawClue {
    fn from(clue: Clue) -> Self {
        Self {
            clue: clue.text,
            row: clue.start.row(),
            col: clue.start.col(),
            answer: None,
            length: Some(clue.len),
        }
    }
}

/// Errors for a single malformed clue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ClueError {
    /// Neither `answer` nor `length` was given.
    #[display("clue needs an `answer` or a `length`")]
    MissingLength,
    /// The answer has no cells.
    #[display("answer length must be at least 1")]
    EmptyAnswer,
    /// `answer` and `length` disagree.
    #[display("answer has {answer} characters but length is {length}")]
    LengthMismatch {
        /// Character count of `answer`.
        answer: u8,
        /// Declared `length`.
        length: u8,
    },
    /// `answer` is longer than any grid can hold.
    #[display("answer has {len} characters, at most 255 are supported")]
    AnswerTooLong {
        /// Character count of `answer`.
        len: usize,
    },
}

/// Errors raised while parsing puzzle data or deriving its layout.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum PuzzleError {
    /// The JSON could not be parsed.
    #[display("invalid puzzle data: {_0}")]
    Json(#[from] serde_json::Error),
    /// The puzzle has no clues.
    #[display("puzzle has no clues")]
    NoEntries,
    /// An entry runs past the largest supported grid.
    #[display("entry {id} does not fit on the grid")]
    OutOfBounds {
        /// The offending entry.
        id: EntryId,
    },
    /// Across and down clues with the same number start on different cells.
    #[display("clue {number} starts at different cells across and down")]
    NumberMismatch {
        /// The clue number.
        number: u32,
    },
    /// Two different clue numbers start on the same cell.
    #[display("clues {first} and {second} both start at {pos}")]
    ConflictingNumbers {
        /// The shared start cell.
        pos: Position,
        /// The number already assigned to the cell.
        first: u32,
        /// The number that collides with it.
        second: u32,
    },
    /// Two entries of the same direction share a cell.
    #[display("entries {first} and {second} overlap at {pos}")]
    OverlappingEntries {
        /// The shared cell.
        pos: Position,
        /// The entry that claimed the cell first.
        first: EntryId,
        /// The entry that overlaps it.
        second: EntryId,
    },
}
