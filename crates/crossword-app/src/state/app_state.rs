use std::sync::Arc;

use crossword_game::{Cursor, Game};

use crate::{config::Puzzle, puzzle_view::PuzzleView, state::Settings};

// AppState holds the session (guesses, cursor, verification status) and settings.
// Guesses, cursor and settings are persisted; the status is recomputed on restore.
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) title: String,
    pub(crate) game: Game,
    pub(crate) cursor: Option<Cursor>,
    pub(crate) settings: Settings,
    pub(crate) puzzle_view: PuzzleView,
    dirty: bool,
}

impl AppState {
    #[must_use]
    pub(crate) fn new(puzzle: Puzzle) -> Self {
        let Puzzle {
            title,
            layout,
            solution_hash,
            seed_order,
        } = puzzle;
        let cursor = Cursor::first(&layout);
        let puzzle_view = PuzzleView::new(Arc::clone(&layout), solution_hash, seed_order);
        Self {
            title,
            game: Game::new(layout),
            cursor,
            settings: Settings::default(),
            puzzle_view,
            dirty: false,
        }
    }

    pub(crate) fn access(&mut self) -> AppStateAccess<'_> {
        AppStateAccess { app_state: self }
    }

    #[must_use]
    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Hands the game's pending completion event, if any, to the puzzle view.
    pub(crate) fn dispatch_completion_event(&mut self) {
        if let Some(event) = self.game.take_completion_event() {
            log::debug!("grid completeness changed: complete={}", event.is_complete());
            self.puzzle_view
                .on_completeness_changed(event, self.game.grid());
        }
    }
}

#[derive(Debug)]
pub(crate) struct AppStateAccess<'a> {
    app_state: &'a mut AppState,
}

impl AppStateAccess<'_> {
    #[must_use]
    pub(crate) fn as_ref(&self) -> &AppState {
        self.app_state
    }

    pub(crate) fn as_mut(&mut self) -> &mut AppState {
        self.app_state.dirty = true;
        self.app_state
    }
}

#[cfg(test)]
mod tests {
    use crossword_core::{Position, PuzzleData};
    use crossword_verifier::Status;

    use super::*;
    use crate::config::PuzzleConfig;

    #[test]
    fn new_places_cursor_on_first_entry() {
        let app_state = AppState::new(PuzzleConfig::bundled().unwrap().into_puzzle().unwrap());
        let cursor = app_state.cursor.unwrap();
        assert_eq!(cursor.pos(), Position::new(0, 0));
        assert_eq!(app_state.puzzle_view.status(), Status::NotCorrectYet);
        assert!(!app_state.is_dirty());
    }

    #[test]
    fn mutable_access_marks_dirty() {
        let mut app_state =
            AppState::new(PuzzleConfig::bundled().unwrap().into_puzzle().unwrap());
        let _ = app_state.access().as_ref();
        assert!(!app_state.is_dirty());
        let _ = app_state.access().as_mut();
        assert!(app_state.is_dirty());
        app_state.clear_dirty();
        assert!(!app_state.is_dirty());
    }

    #[test]
    fn dispatch_forwards_pending_event() {
        let data: PuzzleData = r#"{
            "across": { "1": { "clue": "Feline", "answer": "???", "row": 0, "col": 0 } }
        }"#
        .parse()
        .unwrap();
        let config = PuzzleConfig {
            title: "t".to_owned(),
            solution_hash: "15b89a569474240a616f9a94dd045b2711d445dde955b62bf4b8f2a2afaf0f6b"
                .parse()
                .unwrap(),
            seed_order: crossword_verifier::SeedOrder::ByEntry,
            data,
        };
        let mut app_state = AppState::new(config.into_puzzle().unwrap());
        for (col, ch) in (0..).zip("CAT".chars()) {
            app_state.game.set_guess(Position::new(0, col), ch).unwrap();
        }
        app_state.dispatch_completion_event();
        assert_eq!(app_state.puzzle_view.status(), Status::Correct);
        assert_eq!(app_state.game.take_completion_event(), None);
    }
}
