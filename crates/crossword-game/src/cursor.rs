use crossword_core::{Direction, Entry, EntryId, Position, PuzzleLayout};

/// Arrow-key movement on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MoveDirection {
    /// Towards row 0.
    Up,
    /// Away from row 0.
    Down,
    /// Towards column 0.
    Left,
    /// Away from column 0.
    Right,
}

impl MoveDirection {
    /// Returns the entry direction this movement runs along.
    #[must_use]
    pub const fn axis(self) -> Direction {
        match self {
            Self::Up | Self::Down => Direction::Down,
            Self::Left | Self::Right => Direction::Across,
        }
    }

    /// Applies the movement to `pos`.
    #[must_use]
    pub fn apply_to(self, pos: Position) -> Option<Position> {
        match self {
            Self::Up => pos.up(),
            Self::Down => pos.down(),
            Self::Left => pos.left(),
            Self::Right => pos.right(),
        }
    }
}

/// The selected cell and the direction of typing.
///
/// The cursor always sits on a letter cell, and its direction always names an
/// entry that covers that cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pos: Position,
    direction: Direction,
}

impl Cursor {
    /// Places the cursor on the first letter cell in row-major order.
    ///
    /// Returns `None` if the layout has no letter cells.
    #[must_use]
    pub fn first(layout: &PuzzleLayout) -> Option<Self> {
        let pos = layout.letter_positions().next()?;
        Self::at(layout, pos, Direction::Across)
    }

    /// Places the cursor on `pos`, preferring `direction`.
    ///
    /// Returns `None` if `pos` is not a letter cell.
    #[must_use]
    pub fn at(layout: &PuzzleLayout, pos: Position, direction: Direction) -> Option<Self> {
        let cell = layout.letter(pos)?;
        let direction = if cell.entry(direction).is_some() {
            direction
        } else {
            direction.other()
        };
        Some(Self { pos, direction })
    }

    /// Returns the selected cell.
    #[must_use]
    pub fn pos(self) -> Position {
        self.pos
    }

    /// Returns the typing direction.
    #[must_use]
    pub fn direction(self) -> Direction {
        self.direction
    }

    /// Returns the entry being typed into.
    #[must_use]
    pub fn entry(self, layout: &PuzzleLayout) -> Option<&Entry> {
        layout.entry_at(self.pos, self.direction)
    }

    /// Returns the id of the entry being typed into.
    #[must_use]
    pub fn entry_id(self, layout: &PuzzleLayout) -> Option<EntryId> {
        self.entry(layout).map(Entry::id)
    }

    /// Handles a click on `pos`.
    ///
    /// Clicking the selected cell switches direction; clicking another letter
    /// cell moves there. Clicks on blocks are ignored.
    pub fn select(&mut self, layout: &PuzzleLayout, pos: Position) {
        if pos == self.pos {
            self.toggle_direction(layout);
        } else if let Some(cursor) = Self::at(layout, pos, self.direction) {
            *self = cursor;
        }
    }

    /// Jumps to the first cell of entry `id`.
    pub fn select_entry(&mut self, layout: &PuzzleLayout, id: EntryId) {
        if let Some(entry) = layout.entry(id) {
            self.pos = entry.start();
            self.direction = id.direction();
        }
    }

    /// Switches typing direction if the cell belongs to an entry in the other
    /// direction.
    pub fn toggle_direction(&mut self, layout: &PuzzleLayout) {
        let other = self.direction.other();
        if layout.entry_at(self.pos, other).is_some() {
            self.direction = other;
        }
    }

    /// Moves to the nearest letter cell in `movement`, jumping over blocks.
    ///
    /// The direction follows the movement axis when the target cell has an
    /// entry along it. The cursor stays put if there is no letter cell that
    /// way.
    pub fn move_by(&mut self, layout: &PuzzleLayout, movement: MoveDirection) {
        let mut pos = self.pos;
        while let Some(next) = movement.apply_to(pos) {
            if !layout.contains(next) {
                break;
            }
            if layout.is_letter(next) {
                if let Some(cursor) = Self::at(layout, next, movement.axis()) {
                    *self = cursor;
                }
                return;
            }
            pos = next;
        }
    }

    /// Steps to the next cell of the current entry, staying at its end.
    pub fn advance(&mut self, layout: &PuzzleLayout) {
        if let Some(entry) = self.entry(layout)
            && let Some(next) = self.pos.next(self.direction)
            && entry.contains(next)
        {
            self.pos = next;
        }
    }

    /// Steps to the previous cell of the current entry, staying at its start.
    pub fn retreat(&mut self, layout: &PuzzleLayout) {
        if let Some(entry) = self.entry(layout)
            && let Some(prev) = self.pos.prev(self.direction)
            && entry.contains(prev)
        {
            self.pos = prev;
        }
    }
}

#[cfg(test)]
mod tests {
    use crossword_core::PuzzleData;

    use super::*;

    // R U S T
    // A . . O
    // F . . K
    // T R E E
    // . . . N
    fn layout() -> PuzzleLayout {
        let data: PuzzleData = r#"{
            "across": {
                "1": { "clue": "a", "length": 4, "row": 0, "col": 0 },
                "3": { "clue": "b", "length": 4, "row": 3, "col": 0 }
            },
            "down": {
                "1": { "clue": "c", "length": 4, "row": 0, "col": 0 },
                "2": { "clue": "d", "length": 5, "row": 0, "col": 3 }
            }
        }"#
        .parse()
        .unwrap();
        PuzzleLayout::new(&data).unwrap()
    }

    #[test]
    fn test_first_prefers_across() {
        let cursor = Cursor::first(&layout()).unwrap();
        assert_eq!(cursor.pos(), Position::new(0, 0));
        assert_eq!(cursor.direction(), Direction::Across);
    }

    #[test]
    fn test_at_adjusts_direction() {
        let layout = layout();
        let cursor = Cursor::at(&layout, Position::new(1, 0), Direction::Across).unwrap();
        assert_eq!(cursor.direction(), Direction::Down);
        assert!(Cursor::at(&layout, Position::new(1, 1), Direction::Across).is_none());
    }

    #[test]
    fn test_select_same_cell_toggles_direction() {
        let layout = layout();
        let mut cursor = Cursor::first(&layout).unwrap();
        cursor.select(&layout, Position::new(0, 0));
        assert_eq!(cursor.direction(), Direction::Down);

        // (0, 1) is only part of 1 across.
        cursor.select(&layout, Position::new(0, 1));
        assert_eq!(cursor.direction(), Direction::Across);
        cursor.select(&layout, Position::new(0, 1));
        assert_eq!(cursor.direction(), Direction::Across);

        cursor.select(&layout, Position::new(2, 2));
        assert_eq!(cursor.pos(), Position::new(0, 1));
    }

    #[test]
    fn test_advance_and_retreat_stay_within_entry() {
        let layout = layout();
        let mut cursor = Cursor::at(&layout, Position::new(0, 2), Direction::Across).unwrap();
        cursor.advance(&layout);
        assert_eq!(cursor.pos(), Position::new(0, 3));
        cursor.advance(&layout);
        assert_eq!(cursor.pos(), Position::new(0, 3));

        let mut cursor = Cursor::at(&layout, Position::new(1, 3), Direction::Down).unwrap();
        cursor.retreat(&layout);
        assert_eq!(cursor.pos(), Position::new(0, 3));
        cursor.retreat(&layout);
        assert_eq!(cursor.pos(), Position::new(0, 3));
    }

    #[test]
    fn test_move_by_skips_blocks() {
        let layout = layout();
        let mut cursor = Cursor::at(&layout, Position::new(1, 0), Direction::Down).unwrap();
        cursor.move_by(&layout, MoveDirection::Right);
        assert_eq!(cursor.pos(), Position::new(1, 3));
        assert_eq!(cursor.direction(), Direction::Down);

        cursor.move_by(&layout, MoveDirection::Right);
        assert_eq!(cursor.pos(), Position::new(1, 3));

        let mut cursor = Cursor::at(&layout, Position::new(3, 1), Direction::Across).unwrap();
        cursor.move_by(&layout, MoveDirection::Up);
        assert_eq!(cursor.pos(), Position::new(0, 1));
        assert_eq!(cursor.direction(), Direction::Across);

        let mut cursor = Cursor::at(&layout, Position::new(0, 0), Direction::Across).unwrap();
        cursor.move_by(&layout, MoveDirection::Down);
        assert_eq!(cursor.pos(), Position::new(1, 0));
        assert_eq!(cursor.direction(), Direction::Down);
    }

    #[test]
    fn test_select_entry() {
        let layout = layout();
        let mut cursor = Cursor::first(&layout).unwrap();
        cursor.select_entry(&layout, EntryId::new(2, Direction::Down));
        assert_eq!(cursor.pos(), Position::new(0, 3));
        assert_eq!(cursor.direction(), Direction::Down);
        assert_eq!(
            cursor.entry_id(&layout),
            Some(EntryId::new(2, Direction::Down))
        );
    }
}
