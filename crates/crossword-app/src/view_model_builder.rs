use crossword_core::{Direction, LayoutCell};
use crossword_game::CellState;

use crate::{
    state::AppState,
    ui::{
        clue_list::{ClueItem, ClueListViewModel},
        game_screen::GameScreenViewModel,
        grid::{GridCell, GridViewModel, GridVisualState},
        sidebar::SidebarViewModel,
        status_line::StatusLineViewModel,
    },
};

fn build_grid_vm(app_state: &AppState) -> GridViewModel {
    let layout = app_state.game.layout();
    let cursor = app_state.cursor;
    let active_entry = cursor.and_then(|cursor| cursor.entry(layout));

    let cells = layout
        .positions()
        .map(|pos| {
            let (content, number) = match layout.cell(pos) {
                Some(LayoutCell::Letter(letter)) => (
                    app_state.game.cell(pos).unwrap_or(CellState::Empty),
                    letter.number(),
                ),
                Some(LayoutCell::Block) | None => (CellState::Block, None),
            };
            let mut visual_state = GridVisualState::empty();
            if cursor.is_some_and(|cursor| cursor.pos() == pos) {
                visual_state |= GridVisualState::SELECTED;
            }
            if active_entry.is_some_and(|entry| entry.contains(pos)) {
                visual_state |= GridVisualState::ACTIVE_ENTRY;
            }
            GridCell {
                pos,
                content,
                number,
                visual_state,
            }
        })
        .collect();

    // Layout dimensions never exceed 256 cells per side.
    let width = u16::try_from(layout.width()).unwrap_or(u16::MAX);
    let height = u16::try_from(layout.height()).unwrap_or(u16::MAX);
    GridViewModel::new(width, height, cells, &app_state.settings)
}

fn build_clue_items(app_state: &AppState, direction: Direction) -> Vec<ClueItem> {
    let layout = app_state.game.layout();
    let active_id = app_state.cursor.and_then(|cursor| cursor.entry_id(layout));
    layout
        .entries_in(direction)
        .map(|entry| ClueItem {
            id: entry.id(),
            text: entry.clue().to_owned(),
            is_active: active_id == Some(entry.id()),
            is_filled: app_state.game.is_entry_filled(entry),
        })
        .collect()
}

#[must_use]
pub(crate) fn build_game_screen_view_model(app_state: &AppState) -> GameScreenViewModel {
    let clue_list_vm = app_state
        .settings
        .show_clue_lists
        .then(|| ClueListViewModel {
            across: build_clue_items(app_state, Direction::Across),
            down: build_clue_items(app_state, Direction::Down),
        });
    GameScreenViewModel {
        title: app_state.title.clone(),
        status_line_vm: StatusLineViewModel::new(app_state.puzzle_view.status()),
        grid_vm: build_grid_vm(app_state),
        clue_list_vm,
    }
}

#[must_use]
pub(crate) fn build_sidebar_view_model(app_state: &AppState) -> SidebarViewModel<'_> {
    let grid = app_state.game.grid();
    SidebarViewModel::new(grid.filled_count(), grid.letter_count(), &app_state.settings)
}

#[cfg(test)]
mod tests {
    use crossword_core::{EntryId, Position};
    use crossword_game::Cursor;

    use super::*;
    use crate::config::PuzzleConfig;

    // R U S T
    // A . . O
    // F . . K
    // T R E E
    // . . . N
    fn app_state() -> AppState {
        AppState::new(PuzzleConfig::bundled().unwrap().into_puzzle().unwrap())
    }

    fn cell(vm: &GameScreenViewModel, pos: Position) -> &GridCell {
        vm.grid_vm
            .cells()
            .iter()
            .find(|cell| cell.pos == pos)
            .unwrap()
    }

    #[test]
    fn grid_marks_selection_and_active_entry() {
        let mut app_state = app_state();
        app_state.cursor = Cursor::at(
            app_state.game.layout(),
            Position::new(1, 3),
            Direction::Down,
        );
        let vm = build_game_screen_view_model(&app_state);

        assert_eq!(vm.grid_vm.cells().len(), 20);
        assert_eq!(
            cell(&vm, Position::new(1, 3)).visual_state,
            GridVisualState::SELECTED | GridVisualState::ACTIVE_ENTRY
        );
        assert_eq!(
            cell(&vm, Position::new(4, 3)).visual_state,
            GridVisualState::ACTIVE_ENTRY
        );
        assert_eq!(
            cell(&vm, Position::new(0, 0)).visual_state,
            GridVisualState::empty()
        );
        assert_eq!(cell(&vm, Position::new(1, 1)).content, CellState::Block);
    }

    #[test]
    fn grid_carries_numbers_and_guesses() {
        let mut app_state = app_state();
        app_state
            .game
            .set_guess(Position::new(0, 1), 'U')
            .unwrap();
        let vm = build_game_screen_view_model(&app_state);

        assert_eq!(cell(&vm, Position::new(0, 0)).number, Some(1));
        assert_eq!(cell(&vm, Position::new(0, 3)).number, Some(2));
        assert_eq!(cell(&vm, Position::new(3, 0)).number, Some(3));
        assert_eq!(cell(&vm, Position::new(0, 1)).number, None);
        assert_eq!(cell(&vm, Position::new(0, 1)).content, CellState::Guess('U'));
    }

    #[test]
    fn clue_lists_follow_cursor_and_settings() {
        let mut app_state = app_state();
        let vm = build_game_screen_view_model(&app_state);
        let clues = vm.clue_list_vm.unwrap();
        assert_eq!(clues.across.len(), 2);
        assert_eq!(clues.down.len(), 2);
        assert_eq!(clues.across[0].id, EntryId::new(1, Direction::Across));
        assert!(clues.across[0].is_active);
        assert!(!clues.down[0].is_active);
        assert_eq!(clues.down[1].text, "Unit produced by a lexer");

        app_state.settings.show_clue_lists = false;
        let vm = build_game_screen_view_model(&app_state);
        assert!(vm.clue_list_vm.is_none());
    }

    #[test]
    fn status_line_shows_status() {
        let vm = build_game_screen_view_model(&app_state());
        assert_eq!(vm.status_line_vm.text(), "Status: Not correct yet");
        assert_eq!(vm.title, "Crossword Puzzle");
    }
}
