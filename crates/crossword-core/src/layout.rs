use crate::{Direction, Entry, EntryId, Position, PuzzleData, PuzzleError};

/// A cell of the derived grid.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum LayoutCell {
    /// A cell that belongs to no entry.
    Block,
    /// A cell that takes a letter.
    Letter(LetterCell),
}

impl LayoutCell {
    /// Returns the letter cell details, or `None` for a block.
    #[must_use]
    pub fn as_letter(&self) -> Option<&LetterCell> {
        match self {
            Self::Block => None,
            Self::Letter(cell) => Some(cell),
        }
    }
}

/// The entries a letter cell belongs to, and its clue number label if an
/// entry starts here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCell {
    number: Option<u32>,
    across: Option<EntryId>,
    down: Option<EntryId>,
}

impl LetterCell {
    /// Returns the clue number printed in the cell, if any.
    #[must_use]
    pub fn number(&self) -> Option<u32> {
        self.number
    }

    /// Returns the entry covering this cell in `direction`.
    #[must_use]
    pub fn entry(&self, direction: Direction) -> Option<EntryId> {
        match direction {
            Direction::Across => self.across,
            Direction::Down => self.down,
        }
    }

    fn entry_mut(&mut self, direction: Direction) -> &mut Option<EntryId> {
        match direction {
            Direction::Across => &mut self.across,
            Direction::Down => &mut self.down,
        }
    }
}

/// The crossword grid derived from [`PuzzleData`].
///
/// The grid is the bounding box of all entries. Every cell covered by an
/// entry is a [`LayoutCell::Letter`]; everything else is a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleLayout {
    width: usize,
    height: usize,
    cells: Vec<LayoutCell>,
    entries: Vec<Entry>,
}

impl PuzzleLayout {
    /// Derives the grid from puzzle data.
    ///
    /// # Errors
    ///
    /// - [`PuzzleError::NoEntries`] if there are no clues.
    /// - [`PuzzleError::OutOfBounds`] if an entry runs past row or column 255.
    /// - [`PuzzleError::NumberMismatch`] if an across and a down clue share a
    ///   number but not a start cell.
    /// - [`PuzzleError::ConflictingNumbers`] if two numbers start on one cell.
    /// - [`PuzzleError::OverlappingEntries`] if two entries of the same
    ///   direction cover the same cell.
    pub fn new(data: &PuzzleData) -> Result<Self, PuzzleError> {
        if data.is_empty() {
            return Err(PuzzleError::NoEntries);
        }

        let mut entries = Vec::with_capacity(data.len());
        let mut width = 0;
        let mut height = 0;
        for (id, clue) in data.iter() {
            let end = clue
                .start()
                .advance(id.direction(), clue.len() - 1)
                .ok_or(PuzzleError::OutOfBounds { id })?;
            width = width.max(usize::from(end.col()) + 1);
            height = height.max(usize::from(end.row()) + 1);
            entries.push(Entry::new(
                id,
                clue.start(),
                clue.len(),
                clue.text().to_owned(),
            ));
        }

        for (number, across) in data.clues(Direction::Across) {
            if let Some(down) = data.clues(Direction::Down).get(number)
                && down.start() != across.start()
            {
                return Err(PuzzleError::NumberMismatch { number: *number });
            }
        }

        let mut this = Self {
            width,
            height,
            cells: vec![LayoutCell::Block; width * height],
            entries: Vec::new(),
        };
        for entry in &entries {
            this.place(entry)?;
        }
        this.entries = entries;
        Ok(this)
    }

    fn place(&mut self, entry: &Entry) -> Result<(), PuzzleError> {
        let id = entry.id();
        for pos in entry.positions() {
            let index = self.index(pos).ok_or(PuzzleError::OutOfBounds { id })?;
            let cell = &mut self.cells[index];
            if cell.is_block() {
                *cell = LayoutCell::Letter(LetterCell::default());
            }
            let LayoutCell::Letter(letter) = cell else {
                unreachable!("block cells are replaced above");
            };
            let slot = letter.entry_mut(id.direction());
            if let Some(first) = *slot {
                return Err(PuzzleError::OverlappingEntries {
                    pos,
                    first,
                    second: id,
                });
            }
            *slot = Some(id);
            if pos == entry.start() {
                match letter.number {
                    Some(first) if first != id.number() => {
                        return Err(PuzzleError::ConflictingNumbers {
                            pos,
                            first,
                            second: id.number(),
                        });
                    }
                    _ => letter.number = Some(id.number()),
                }
            }
        }
        Ok(())
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

    /// Returns whether `pos` lies on the grid.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// Returns the cell at `pos`, or `None` if it lies off the grid.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<&LayoutCell> {
        self.index(pos).map(|index| &self.cells[index])
    }

    /// Returns the letter cell at `pos`, or `None` for blocks and off-grid positions.
    #[must_use]
    pub fn letter(&self, pos: Position) -> Option<&LetterCell> {
        self.cell(pos).and_then(LayoutCell::as_letter)
    }

    /// Returns whether `pos` is a letter cell.
    #[must_use]
    pub fn is_letter(&self, pos: Position) -> bool {
        self.letter(pos).is_some()
    }

    /// Returns every position on the grid in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let rows = (0..self.height).filter_map(|row| u8::try_from(row).ok());
        rows.flat_map(move |row| {
            (0..self.width)
                .filter_map(|col| u8::try_from(col).ok())
                .map(move |col| Position::new(row, col))
        })
    }

    /// Returns every letter cell position in row-major order.
    pub fn letter_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions().filter(|pos| self.is_letter(*pos))
    }

    /// Returns the number of letter cells.
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_letter()).count()
    }

    /// Returns all entries ordered by [`EntryId`].
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns the entries of one direction ordered by clue number.
    pub fn entries_in(&self, direction: Direction) -> impl Iterator<Item = &Entry> {
        self.entries
            .iter()
            .filter(move |entry| entry.id().direction() == direction)
    }

    /// Looks up an entry by id.
    #[must_use]
    pub fn entry(&self, id: EntryId) -> Option<&Entry> {
        self.entries
            .binary_search_by_key(&id, Entry::id)
            .ok()
            .map(|index| &self.entries[index])
    }

    /// Returns the entry covering `pos` in `direction`.
    #[must_use]
    pub fn entry_at(&self, pos: Position, direction: Direction) -> Option<&Entry> {
        self.letter(pos)?
            .entry(direction)
            .and_then(|id| self.entry(id))
    }
}
