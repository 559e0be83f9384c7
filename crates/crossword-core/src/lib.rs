//! Core data types for crossword puzzles.
//!
//! This crate describes a single crossword independently of any user input:
//!
//! - [`Position`] and [`Direction`] address cells and entries on the grid.
//! - [`PuzzleData`] is the clue description parsed from JSON.
//! - [`PuzzleLayout`] is the grid derived from [`PuzzleData`]: which cells hold
//!   letters, which are blocks, and where the clue numbers go.
//!
//! # Examples
//!
//! ```
//! use crossword_core::{Direction, Position, PuzzleData, PuzzleLayout};
//!
//! let data: PuzzleData = r#"{
//!     "across": { "1": { "clue": "Feline", "answer": "???", "row": 0, "col": 0 } },
//!     "down": {}
//! }"#
//! .parse()
//! .unwrap();
//! let layout = PuzzleLayout::new(&data).unwrap();
//!
//! assert_eq!(layout.width(), 3);
//! assert_eq!(layout.height(), 1);
//! assert!(layout.cell(Position::new(0, 2)).is_some_and(|cell| cell.is_letter()));
//! assert_eq!(layout.entries()[0].id().direction(), Direction::Across);
//! ```

pub use self::{direction::*, entry::*, layout::*, position::*, puzzle::*};

mod direction;
mod entry;
mod layout;
mod position;
mod puzzle;
