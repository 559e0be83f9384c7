use crossword_core::{Direction, EntryId, Position};
use crossword_game::{Cursor, MoveDirection};

use crate::{
    action::{Action, ActionRequestQueue, ConfirmResult, ModalKind, ModalResponse},
    state::{AppState, AppStateAccess, UiState},
};

#[derive(Debug)]
struct ActionContext<'a> {
    app_state: AppStateAccess<'a>,
    ui_state: &'a mut UiState,
}

pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action);
    }
}

pub(crate) fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action) {
    let mut ctx = ActionContext {
        app_state: app_state.access(),
        ui_state,
    };

    match action {
        Action::SelectCell(pos) => ctx.select_cell(pos),
        Action::SelectEntry(id) => ctx.select_entry(id),
        Action::ClearSelection => ctx.app_state.as_mut().cursor = None,
        Action::MoveSelection(movement) => ctx.move_selection(movement),
        Action::ToggleDirection => ctx.toggle_direction(),
        Action::InputChar(ch) => ctx.input_char(ch),
        Action::Backspace => ctx.backspace(),
        Action::ClearCell => ctx.clear_cell(),
        Action::OpenModal(kind) => ctx.ui_state.active_modal = Some(kind),
        Action::ModalResponse(response) => ctx.modal_response(response),
        Action::UpdateSettings(settings) => ctx.app_state.as_mut().settings = settings,
    }

    app_state.dispatch_completion_event();
}

/// Upper-cases a typed character when it has a single-character upper-case
/// form, and keeps it as typed otherwise.
fn normalize_guess(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(upper), None) => upper,
        _ => ch,
    }
}

impl ActionContext<'_> {
    fn select_cell(&mut self, pos: Position) {
        let app_state = self.app_state.as_mut();
        let layout = app_state.game.shared_layout();
        match &mut app_state.cursor {
            Some(cursor) => cursor.select(&layout, pos),
            None => app_state.cursor = Cursor::at(&layout, pos, Direction::Across),
        }
    }

    fn select_entry(&mut self, id: EntryId) {
        let app_state = self.app_state.as_mut();
        let layout = app_state.game.shared_layout();
        let Some(entry) = layout.entry(id) else {
            log::warn!("unknown entry {id}");
            return;
        };
        match &mut app_state.cursor {
            Some(cursor) => cursor.select_entry(&layout, id),
            None => app_state.cursor = Cursor::at(&layout, entry.start(), id.direction()),
        }
    }

    fn move_selection(&mut self, movement: MoveDirection) {
        let app_state = self.app_state.as_mut();
        let layout = app_state.game.shared_layout();
        match &mut app_state.cursor {
            Some(cursor) => cursor.move_by(&layout, movement),
            None => app_state.cursor = Cursor::first(&layout),
        }
    }

    fn toggle_direction(&mut self) {
        let app_state = self.app_state.as_mut();
        let layout = app_state.game.shared_layout();
        if let Some(cursor) = &mut app_state.cursor {
            cursor.toggle_direction(&layout);
        }
    }

    fn input_char(&mut self, ch: char) {
        let app_state = self.app_state.as_mut();
        let Some(cursor) = &mut app_state.cursor else {
            return;
        };
        let ch = normalize_guess(ch);
        match app_state.game.set_guess(cursor.pos(), ch) {
            Ok(_) => cursor.advance(app_state.game.layout()),
            Err(err) => log::debug!("rejected input {ch:?}: {err}"),
        }
    }

    fn backspace(&mut self) {
        let app_state = self.app_state.as_mut();
        let Some(cursor) = &mut app_state.cursor else {
            return;
        };
        // An empty cell deletes backwards into the previous one.
        if app_state.game.grid().guess(cursor.pos()).is_none() {
            cursor.retreat(app_state.game.layout());
        }
        if let Err(err) = app_state.game.clear_guess(cursor.pos()) {
            log::debug!("failed to clear {}: {err}", cursor.pos());
        }
    }

    fn clear_cell(&mut self) {
        let app_state = self.app_state.as_mut();
        if let Some(cursor) = app_state.cursor
            && let Err(err) = app_state.game.clear_guess(cursor.pos())
        {
            log::debug!("failed to clear {}: {err}", cursor.pos());
        }
    }

    fn modal_response(&mut self, response: ModalResponse) {
        let Some(kind) = self.ui_state.active_modal.take() else {
            return;
        };
        match (kind, response) {
            (ModalKind::ClearGridConfirm, ModalResponse::Confirm(ConfirmResult::Confirmed)) => {
                let cleared = self.app_state.as_mut().game.clear_all();
                log::info!("cleared {cleared} guesses");
            }
            (ModalKind::ClearGridConfirm, ModalResponse::Confirm(ConfirmResult::Cancelled)) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use crossword_game::CellState;
    use crossword_verifier::Status;

    use super::*;
    use crate::{config::PuzzleConfig, state::Settings};

    // R U S T
    // A . . O
    // F . . K
    // T R E E
    // . . . N
    fn setup() -> (AppState, UiState) {
        let puzzle = PuzzleConfig::bundled().unwrap().into_puzzle().unwrap();
        (AppState::new(puzzle), UiState::new())
    }

    fn type_word(app_state: &mut AppState, ui_state: &mut UiState, word: &str) {
        for ch in word.chars() {
            handle(app_state, ui_state, Action::InputChar(ch));
        }
    }

    fn solve(app_state: &mut AppState, ui_state: &mut UiState) {
        handle(
            app_state,
            ui_state,
            Action::SelectEntry(EntryId::new(1, Direction::Across)),
        );
        type_word(app_state, ui_state, "rust");
        handle(
            app_state,
            ui_state,
            Action::SelectEntry(EntryId::new(1, Direction::Down)),
        );
        type_word(app_state, ui_state, "raft");
        handle(
            app_state,
            ui_state,
            Action::SelectEntry(EntryId::new(2, Direction::Down)),
        );
        type_word(app_state, ui_state, "token");
        handle(
            app_state,
            ui_state,
            Action::SelectEntry(EntryId::new(3, Direction::Across)),
        );
        type_word(app_state, ui_state, "tree");
    }

    #[test]
    fn typing_uppercases_and_advances() {
        let (mut app_state, mut ui_state) = setup();
        type_word(&mut app_state, &mut ui_state, "ru");

        assert_eq!(
            app_state.game.cell(Position::new(0, 0)).unwrap(),
            CellState::Guess('R')
        );
        assert_eq!(
            app_state.game.cell(Position::new(0, 1)).unwrap(),
            CellState::Guess('U')
        );
        assert_eq!(app_state.cursor.unwrap().pos(), Position::new(0, 2));
        assert!(app_state.is_dirty());
    }

    #[test]
    fn rejected_input_keeps_cursor() {
        let (mut app_state, mut ui_state) = setup();
        handle(&mut app_state, &mut ui_state, Action::InputChar('-'));
        assert_eq!(app_state.cursor.unwrap().pos(), Position::new(0, 0));
        assert_eq!(
            app_state.game.cell(Position::new(0, 0)).unwrap(),
            CellState::Empty
        );
    }

    #[test]
    fn input_without_selection_is_noop() {
        let (mut app_state, mut ui_state) = setup();
        handle(&mut app_state, &mut ui_state, Action::ClearSelection);
        let before = app_state.game.clone();
        handle(&mut app_state, &mut ui_state, Action::InputChar('a'));
        assert_eq!(app_state.game, before);
    }

    #[test]
    fn backspace_clears_and_steps_back() {
        let (mut app_state, mut ui_state) = setup();
        type_word(&mut app_state, &mut ui_state, "ru");
        handle(&mut app_state, &mut ui_state, Action::Backspace);

        assert_eq!(app_state.cursor.unwrap().pos(), Position::new(0, 1));
        assert_eq!(
            app_state.game.cell(Position::new(0, 1)).unwrap(),
            CellState::Empty
        );
        assert_eq!(
            app_state.game.cell(Position::new(0, 0)).unwrap(),
            CellState::Guess('R')
        );

        // A filled cell under the cursor is cleared in place.
        handle(&mut app_state, &mut ui_state, Action::InputChar('u'));
        handle(&mut app_state, &mut ui_state, Action::SelectCell(Position::new(0, 1)));
        handle(&mut app_state, &mut ui_state, Action::Backspace);
        assert_eq!(app_state.cursor.unwrap().pos(), Position::new(0, 1));
        assert_eq!(
            app_state.game.cell(Position::new(0, 1)).unwrap(),
            CellState::Empty
        );
    }

    #[test]
    fn solving_updates_status() {
        let (mut app_state, mut ui_state) = setup();
        solve(&mut app_state, &mut ui_state);
        assert!(app_state.game.is_complete());
        assert_eq!(app_state.puzzle_view.status(), Status::Correct);
    }

    #[test]
    fn wrong_letter_in_full_grid_is_rechecked() {
        let (mut app_state, mut ui_state) = setup();
        solve(&mut app_state, &mut ui_state);

        handle(
            &mut app_state,
            &mut ui_state,
            Action::SelectCell(Position::new(0, 1)),
        );
        handle(&mut app_state, &mut ui_state, Action::InputChar('x'));
        assert_eq!(app_state.puzzle_view.status(), Status::NotCorrectYet);

        handle(
            &mut app_state,
            &mut ui_state,
            Action::SelectCell(Position::new(0, 1)),
        );
        handle(&mut app_state, &mut ui_state, Action::InputChar('u'));
        assert_eq!(app_state.puzzle_view.status(), Status::Correct);
    }

    #[test]
    fn clearing_a_cell_keeps_status() {
        let (mut app_state, mut ui_state) = setup();
        solve(&mut app_state, &mut ui_state);
        handle(&mut app_state, &mut ui_state, Action::ClearCell);
        assert!(!app_state.game.is_complete());
        assert_eq!(app_state.puzzle_view.status(), Status::Correct);
    }

    #[test]
    fn clear_grid_requires_confirmation() {
        let (mut app_state, mut ui_state) = setup();
        type_word(&mut app_state, &mut ui_state, "ru");

        handle(
            &mut app_state,
            &mut ui_state,
            Action::OpenModal(ModalKind::ClearGridConfirm),
        );
        handle(
            &mut app_state,
            &mut ui_state,
            Action::ModalResponse(ModalResponse::Confirm(ConfirmResult::Cancelled)),
        );
        assert!(ui_state.active_modal.is_none());
        assert_eq!(app_state.game.grid().filled_count(), 2);

        handle(
            &mut app_state,
            &mut ui_state,
            Action::OpenModal(ModalKind::ClearGridConfirm),
        );
        handle(
            &mut app_state,
            &mut ui_state,
            Action::ModalResponse(ModalResponse::Confirm(ConfirmResult::Confirmed)),
        );
        assert!(ui_state.active_modal.is_none());
        assert_eq!(app_state.game.grid().filled_count(), 0);
    }

    #[test]
    fn modal_response_without_modal_is_ignored() {
        let (mut app_state, mut ui_state) = setup();
        type_word(&mut app_state, &mut ui_state, "r");
        handle(
            &mut app_state,
            &mut ui_state,
            Action::ModalResponse(ModalResponse::Confirm(ConfirmResult::Confirmed)),
        );
        assert_eq!(app_state.game.grid().filled_count(), 1);
    }

    #[test]
    fn selection_actions_move_cursor() {
        let (mut app_state, mut ui_state) = setup();
        handle(&mut app_state, &mut ui_state, Action::ToggleDirection);
        assert_eq!(app_state.cursor.unwrap().direction(), Direction::Down);

        handle(
            &mut app_state,
            &mut ui_state,
            Action::MoveSelection(MoveDirection::Right),
        );
        assert_eq!(app_state.cursor.unwrap().pos(), Position::new(0, 1));
        assert_eq!(app_state.cursor.unwrap().direction(), Direction::Across);

        handle(&mut app_state, &mut ui_state, Action::ClearSelection);
        assert!(app_state.cursor.is_none());

        handle(
            &mut app_state,
            &mut ui_state,
            Action::MoveSelection(MoveDirection::Down),
        );
        assert_eq!(app_state.cursor.unwrap().pos(), Position::new(0, 0));

        handle(&mut app_state, &mut ui_state, Action::ClearSelection);
        handle(
            &mut app_state,
            &mut ui_state,
            Action::SelectEntry(EntryId::new(2, Direction::Down)),
        );
        let cursor = app_state.cursor.unwrap();
        assert_eq!(cursor.pos(), Position::new(0, 3));
        assert_eq!(cursor.direction(), Direction::Down);
    }

    #[test]
    fn update_settings_replaces_settings() {
        let (mut app_state, mut ui_state) = setup();
        let settings = Settings {
            highlight_active_entry: false,
            show_clue_lists: false,
        };
        handle(
            &mut app_state,
            &mut ui_state,
            Action::UpdateSettings(settings.clone()),
        );
        assert_eq!(app_state.settings, settings);
    }

    #[test]
    fn normalize_guess_keeps_multi_char_uppercase() {
        assert_eq!(normalize_guess('a'), 'A');
        assert_eq!(normalize_guess('7'), '7');
        assert_eq!(normalize_guess('ß'), 'ß');
    }
}
