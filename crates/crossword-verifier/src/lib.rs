//! Hash-based answer checking for crossword grids.
//!
//! A finished grid is reduced to a [`SeedPhrase`] by reading the guesses in
//! the canonical order named by [`SeedOrder`]. The phrase is hashed with
//! SHA-256 and compared against the [`SolutionHash`] shipped with the puzzle,
//! so the plaintext answer never has to be stored alongside it.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use crossword_core::{Position, PuzzleData, PuzzleLayout};
//! use crossword_game::Game;
//! use crossword_verifier::{SeedOrder, SolutionHash, Status, verify};
//!
//! let data: PuzzleData = r#"{ "across": { "1": { "clue": "Feline", "answer": "???", "row": 0, "col": 0 } } }"#
//!     .parse()
//!     .unwrap();
//! let mut game = Game::new(Arc::new(PuzzleLayout::new(&data).unwrap()));
//! let expected: SolutionHash = "15b89a569474240a616f9a94dd045b2711d445dde955b62bf4b8f2a2afaf0f6b"
//!     .parse()
//!     .unwrap();
//!
//! for (col, ch) in (0..).zip("CAT".chars()) {
//!     game.set_guess(Position::new(0, col), ch).unwrap();
//! }
//! let status = verify(game.layout(), game.grid(), SeedOrder::ByEntry, &expected);
//! assert_eq!(status, Status::Correct);
//! assert_eq!(status.to_string(), "Correct!");
//! ```

pub use self::{seed_phrase::*, solution_hash::*, status::*};

mod seed_phrase;
mod solution_hash;
mod status;
