use std::fmt;

use crossword_core::{Position, PuzzleLayout};
use serde::{Deserialize, Serialize};

use crate::{CellState, GameError};

const BLOCK_CHAR: char = '#';
const EMPTY_CHAR: char = '.';

/// Per-cell guess state for one crossword.
///
/// Holds a [`CellState`] for every position of the layout's bounding box, in
/// row-major order. Serialises as a list of row strings where `#` is a block,
/// `.` an empty letter cell and any other character a guess:
///
/// ```
/// use crossword_game::GridData;
///
/// let grid: GridData = serde_json::from_str(r###"["CA.", "#T#"]"###).unwrap();
/// assert_eq!(grid.width(), 3);
/// assert!(!grid.is_complete());
/// assert_eq!(grid.to_string(), "CA.\n#T#\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct GridData {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl GridData {
    /// Creates an unfilled grid for `layout`.
    #[must_use]
    pub fn new(layout: &PuzzleLayout) -> Self {
        let cells = layout
            .positions()
            .map(|pos| {
                if layout.is_letter(pos) {
                    CellState::Empty
                } else {
                    CellState::Block
                }
            })
            .collect();
        Self {
            width: layout.width(),
            height: layout.height(),
            cells,
        }
    }

    fn index(&self, pos: Position) -> Option<usize> {
        let row = usize::from(pos.row());
        let col = usize::from(pos.col());
        (row < self.height && col < self.width).then_some(row * self.width + col)
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the state of the cell at `pos`, or `None` off the grid.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<CellState> {
        self.index(pos).map(|index| self.cells[index])
    }

    /// Returns the guess at `pos`, if any.
    #[must_use]
    pub fn guess(&self, pos: Position) -> Option<char> {
        self.cell(pos).and_then(CellState::as_guess)
    }

    pub(crate) fn set(&mut self, pos: Position, state: CellState) -> Result<(), GameError> {
        let index = self.index(pos).ok_or(GameError::OutOfBounds { pos })?;
        self.cells[index] = state;
        Ok(())
    }

    pub(crate) fn clear_all(&mut self) -> usize {
        let mut cleared = 0;
        for cell in &mut self.cells {
            if cell.is_guess() {
                *cell = CellState::Empty;
                cleared += 1;
            }
        }
        cleared
    }

    /// Returns the number of letter cells.
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_block()).count()
    }

    /// Returns the number of letter cells holding a guess.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_guess()).count()
    }

    /// Returns whether every letter cell holds a guess.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.cells.iter().any(|cell| cell.is_empty())
    }

    /// Returns whether this grid has the same shape and blocks as `layout`.
    #[must_use]
    pub fn matches_layout(&self, layout: &PuzzleLayout) -> bool {
        self.width == layout.width()
            && self.height == layout.height()
            && layout
                .positions()
                .zip(&self.cells)
                .all(|(pos, cell)| layout.is_letter(pos) != cell.is_block())
    }
}

impl TryFrom<Vec<String>> for GridData {
    type Error = GameError;

    fn try_from(rows: Vec<String>) -> Result<Self, Self::Error> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.chars().count());
        let mut cells = Vec::with_capacity(width * height);
        for row in &rows {
            if row.chars().count() != width {
                return Err(GameError::MalformedGrid);
            }
            for ch in row.chars() {
                let cell = match ch {
                    BLOCK_CHAR => CellState::Block,
                    EMPTY_CHAR => CellState::Empty,
                    ch if is_valid_guess(ch) => CellState::Guess(ch),
                    _ => return Err(GameError::MalformedGrid),
                };
                cells.push(cell);
            }
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }
}

impl From<GridData> for Vec<String> {
    fn from(grid: GridData) -> Self {
        if grid.width == 0 {
            return vec![String::new(); grid.height];
        }
        grid.cells
            .chunks(grid.width)
            .map(|row| row.iter().map(|cell| cell_char(*cell)).collect())
            .collect()
    }
}

impl fmt::Display for GridData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell_char(*cell))?;
            if (index + 1) % self.width == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

fn cell_char(cell: CellState) -> char {
    match cell {
        CellState::Block => BLOCK_CHAR,
        CellState::Empty => EMPTY_CHAR,
        CellState::Guess(ch) => ch,
    }
}

/// Returns whether `ch` may be entered as a guess.
///
/// Letters and digits of any script are accepted; whitespace, punctuation and
/// control characters are not.
#[must_use]
pub fn is_valid_guess(ch: char) -> bool {
    ch.is_alphanumeric()
}
