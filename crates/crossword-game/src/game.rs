use std::sync::Arc;

use crossword_core::{Entry, Position, PuzzleLayout};

use crate::{CellState, CompletionEvent, GameError, GridData, InputOperation, is_valid_guess};

/// A crossword game session.
///
/// Combines the immutable [`PuzzleLayout`] with the mutable [`GridData`].
/// Every mutation that changes the grid records whether it affected
/// completeness; the resulting [`CompletionEvent`] is collected with
/// [`Game::take_completion_event`].
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use crossword_core::{Position, PuzzleData, PuzzleLayout};
/// use crossword_game::Game;
///
/// let data: PuzzleData = r#"{ "across": { "1": { "clue": "Feline", "length": 2, "row": 0, "col": 0 } } }"#
///     .parse()
///     .unwrap();
/// let mut game = Game::new(Arc::new(PuzzleLayout::new(&data).unwrap()));
///
/// game.set_guess(Position::new(0, 0), 'O').unwrap();
/// assert_eq!(game.take_completion_event(), None);
///
/// game.set_guess(Position::new(0, 1), 'X').unwrap();
/// let event = game.take_completion_event().unwrap();
/// assert!(event.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    layout: Arc<PuzzleLayout>,
    grid: GridData,
    pending_event: Option<CompletionEvent>,
}

impl Game {
    /// Creates a game with an empty grid.
    #[must_use]
    pub fn new(layout: Arc<PuzzleLayout>) -> Self {
        let grid = GridData::new(&layout);
        Self {
            layout,
            grid,
            pending_event: None,
        }
    }

    /// Creates a game from previously saved grid data.
    ///
    /// If the restored grid is already complete, a completion event is
    /// pending so the caller can re-check it.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::LayoutMismatch`] if `grid` has a different shape
    /// or block pattern than `layout`.
    pub fn with_grid(layout: Arc<PuzzleLayout>, grid: GridData) -> Result<Self, GameError> {
        if !grid.matches_layout(&layout) {
            return Err(GameError::LayoutMismatch);
        }
        let pending_event = grid.is_complete().then(|| CompletionEvent::new(true));
        Ok(Self {
            layout,
            grid,
            pending_event,
        })
    }

    /// Returns the puzzle layout.
    #[must_use]
    pub fn layout(&self) -> &PuzzleLayout {
        &self.layout
    }

    /// Returns a shared handle to the puzzle layout.
    #[must_use]
    pub fn shared_layout(&self) -> Arc<PuzzleLayout> {
        Arc::clone(&self.layout)
    }

    /// Returns the current guesses.
    #[must_use]
    pub fn grid(&self) -> &GridData {
        &self.grid
    }

    /// Returns the state of the cell at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if `pos` is off the grid.
    pub fn cell(&self, pos: Position) -> Result<CellState, GameError> {
        self.grid.cell(pos).ok_or(GameError::OutOfBounds { pos })
    }

    /// Returns whether every letter cell holds a guess.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.grid.is_complete()
    }

    /// Returns the guesses along `entry`, skipping empty cells.
    #[must_use]
    pub fn entry_text(&self, entry: &Entry) -> String {
        entry
            .positions()
            .filter_map(|pos| self.grid.guess(pos))
            .collect()
    }

    /// Returns whether every cell of `entry` holds a guess.
    #[must_use]
    pub fn is_entry_filled(&self, entry: &Entry) -> bool {
        entry
            .positions()
            .all(|pos| self.grid.guess(pos).is_some())
    }

    fn letter_cell(&self, pos: Position) -> Result<CellState, GameError> {
        match self.cell(pos)? {
            CellState::Block => Err(GameError::BlockCell { pos }),
            state => Ok(state),
        }
    }

    /// Writes a guess into a letter cell.
    ///
    /// The character is stored exactly as given; callers that want
    /// case-insensitive entry must normalise before calling.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidGuess`] if `ch` is not a letter or digit.
    /// - [`GameError::OutOfBounds`] or [`GameError::BlockCell`] if `pos` does
    ///   not name a letter cell.
    pub fn set_guess(&mut self, pos: Position, ch: char) -> Result<InputOperation, GameError> {
        if !is_valid_guess(ch) {
            return Err(GameError::InvalidGuess { ch });
        }
        let operation = match self.letter_cell(pos)? {
            CellState::Guess(current) if current == ch => InputOperation::NoOp,
            _ => InputOperation::Set,
        };
        if operation.is_set() {
            let was_complete = self.is_complete();
            self.grid.set(pos, CellState::Guess(ch))?;
            self.record_change(was_complete);
        }
        Ok(operation)
    }

    /// Removes the guess from a letter cell.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] or [`GameError::BlockCell`] if `pos`
    /// does not name a letter cell.
    pub fn clear_guess(&mut self, pos: Position) -> Result<InputOperation, GameError> {
        match self.letter_cell(pos)? {
            CellState::Guess(_) => {
                let was_complete = self.is_complete();
                self.grid.set(pos, CellState::Empty)?;
                self.record_change(was_complete);
                Ok(InputOperation::Removed)
            }
            CellState::Empty | CellState::Block => Ok(InputOperation::NoOp),
        }
    }

    /// Removes every guess. Returns the number of cells cleared.
    pub fn clear_all(&mut self) -> usize {
        let was_complete = self.is_complete();
        let cleared = self.grid.clear_all();
        if cleared > 0 {
            self.record_change(was_complete);
        }
        cleared
    }

    fn record_change(&mut self, was_complete: bool) {
        let complete = self.is_complete();
        if complete || was_complete {
            self.pending_event = Some(CompletionEvent::new(complete));
        }
    }

    /// Takes the completion event produced by the latest mutations, if any.
    ///
    /// When several mutations happen between calls, only the most recent
    /// event is kept.
    pub fn take_completion_event(&mut self) -> Option<CompletionEvent> {
        self.pending_event.take()
    }
}
