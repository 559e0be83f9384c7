//! Saving and restoring a session through eframe's key-value storage.
//!
//! Guesses and the cursor are stored under a key derived from the solution
//! hash, so progress saved for one puzzle is never applied to another.
//! Settings are shared by all puzzles.

use crossword_core::{Direction, Position};
use crossword_game::{Cursor, Game, GridData};
use crossword_verifier::SolutionHash;
use eframe::Storage;
use serde::{Deserialize, Serialize};

use crate::state::{AppState, Settings};

const SETTINGS_KEY: &str = "crossword/settings";

fn game_key(hash: &SolutionHash) -> String {
    format!("crossword/game/{hash}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct SavedCursor {
    pos: Position,
    direction: Direction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct SavedGame {
    grid: GridData,
    cursor: Option<SavedCursor>,
}

pub(crate) fn save_state(storage: &mut dyn Storage, app_state: &AppState) {
    let saved = SavedGame {
        grid: app_state.game.grid().clone(),
        cursor: app_state.cursor.map(|cursor| SavedCursor {
            pos: cursor.pos(),
            direction: cursor.direction(),
        }),
    };
    eframe::set_value(
        storage,
        &game_key(app_state.puzzle_view.solution_hash()),
        &saved,
    );
    eframe::set_value(storage, SETTINGS_KEY, &app_state.settings);
    log::debug!(
        "saved {} of {} guesses",
        saved.grid.filled_count(),
        saved.grid.letter_count()
    );
}

/// Restores settings and the saved session for the current puzzle.
///
/// A saved grid that does not fit the puzzle is discarded with a warning. If
/// the restored grid is full, its completion event is dispatched so the
/// status reflects it right away.
pub(crate) fn load_state(storage: &dyn Storage, app_state: &mut AppState) {
    if let Some(settings) = eframe::get_value::<Settings>(storage, SETTINGS_KEY) {
        app_state.settings = settings;
    }

    let key = game_key(app_state.puzzle_view.solution_hash());
    let Some(saved) = eframe::get_value::<SavedGame>(storage, &key) else {
        log::debug!("no saved game for this puzzle");
        return;
    };

    let layout = app_state.game.shared_layout();
    let game = match Game::with_grid(layout, saved.grid) {
        Ok(game) => game,
        Err(err) => {
            log::warn!("discarding saved game: {err}");
            return;
        }
    };
    app_state.cursor = saved
        .cursor
        .and_then(|cursor| Cursor::at(game.layout(), cursor.pos, cursor.direction))
        .or(app_state.cursor);
    log::info!(
        "restored {} of {} guesses",
        game.grid().filled_count(),
        game.grid().letter_count()
    );
    app_state.game = game;
    app_state.dispatch_completion_event();
}
