use crossword_core::PuzzleLayout;
use crossword_game::GridData;

use crate::{SeedOrder, SeedPhrase, SolutionHash};

/// The verification status shown to the player.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum Status {
    /// The grid has not (yet) been verified as correct.
    #[default]
    #[display("Not correct yet")]
    NotCorrectYet,
    /// The grid hashes to the solution hash.
    #[display("Correct!")]
    Correct,
}

/// Checks a grid against the expected solution hash.
///
/// Derives the [`SeedPhrase`] in `order`, hashes it and compares the hex
/// encoding with `expected`. There is no case folding or whitespace
/// normalisation: any difference in the phrase gives
/// [`Status::NotCorrectYet`].
#[must_use]
pub fn verify(
    layout: &PuzzleLayout,
    grid: &GridData,
    order: SeedOrder,
    expected: &SolutionHash,
) -> Status {
    let phrase = SeedPhrase::derive(layout, grid, order);
    if SolutionHash::of(&phrase) == *expected {
        Status::Correct
    } else {
        Status::NotCorrectYet
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossword_core::{Position, PuzzleData};
    use crossword_game::Game;
    use proptest::prelude::*;

    use super::*;

    const CAT_HASH: &str = "15b89a569474240a616f9a94dd045b2711d445dde955b62bf4b8f2a2afaf0f6b";

    fn cat_game(word: &str) -> Game {
        let data: PuzzleData = r#"{
            "across": { "1": { "clue": "Feline", "answer": "???", "row": 0, "col": 0 } }
        }"#
        .parse()
        .unwrap();
        let mut game = Game::new(Arc::new(PuzzleLayout::new(&data).unwrap()));
        for (col, ch) in (0..).zip(word.chars()) {
            game.set_guess(Position::new(0, col), ch).unwrap();
        }
        game
    }

    fn check(game: &Game, order: SeedOrder, expected: &str) -> Status {
        verify(
            game.layout(),
            game.grid(),
            order,
            &expected.parse().unwrap(),
        )
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(Status::default().to_string(), "Not correct yet");
        assert_eq!(Status::Correct.to_string(), "Correct!");
    }

    #[test]
    fn test_cat_scenario() {
        assert_eq!(
            check(&cat_game("CAT"), SeedOrder::ByEntry, CAT_HASH),
            Status::Correct
        );
        assert_eq!(
            check(&cat_game("CAS"), SeedOrder::ByEntry, CAT_HASH),
            Status::NotCorrectYet
        );
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(
            check(&cat_game("cat"), SeedOrder::ByEntry, CAT_HASH),
            Status::NotCorrectYet
        );
        assert_eq!(
            check(&cat_game("Cat"), SeedOrder::ByEntry, CAT_HASH),
            Status::NotCorrectYet
        );
    }

    #[test]
    fn test_incomplete_grid_is_not_correct() {
        assert_eq!(
            check(&cat_game("CA"), SeedOrder::ByEntry, CAT_HASH),
            Status::NotCorrectYet
        );
    }

    #[test]
    fn test_cell_order_is_load_bearing() {
        // R U S T
        // A . . O
        // F . . K
        // T R E E
        // . . . N
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
        let mut game = Game::new(Arc::new(PuzzleLayout::new(&data).unwrap()));
        for (row, text) in (0..).zip(["RUST", "A..O", "F..K", "TREE", "...N"]) {
            for (col, ch) in (0..).zip(text.chars()) {
                if ch != '.' {
                    game.set_guess(Position::new(row, col), ch).unwrap();
                }
            }
        }

        let by_entry = "0c9af96a3492558bc696ad3fa8af106e438f19940d79cec74564cc909f93c328";
        assert_eq!(check(&game, SeedOrder::ByEntry, by_entry), Status::Correct);
        assert_eq!(
            check(&game, SeedOrder::RowMajor, by_entry),
            Status::NotCorrectYet
        );

        let row_major = "3e47d90b27b140b68373d0919b534e7ed7a0aa30c42c2d7d2b669be9fc429737";
        assert_eq!(check(&game, SeedOrder::RowMajor, row_major), Status::Correct);
    }

    proptest! {
        #[test]
        fn verify_is_idempotent(word in "[A-Za-z0-9]{3}") {
            let game = cat_game(&word);
            let first = check(&game, SeedOrder::ByEntry, CAT_HASH);
            let second = check(&game, SeedOrder::ByEntry, CAT_HASH);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn correct_iff_phrase_hashes_to_expected(word in "[A-Za-z]{3}") {
            let game = cat_game(&word);
            let status = check(&game, SeedOrder::ByEntry, CAT_HASH);
            prop_assert_eq!(status.is_correct(), word == "CAT");
        }

        #[test]
        fn own_hash_always_verifies(word in "[A-Za-z0-9]{3}") {
            let game = cat_game(&word);
            let hash = SolutionHash::of(&SeedPhrase::new(word.clone()));
            prop_assert_eq!(
                verify(game.layout(), game.grid(), SeedOrder::ByEntry, &hash),
                Status::Correct
            );
        }
    }
}
