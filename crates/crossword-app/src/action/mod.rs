use std::mem;

use crossword_core::{EntryId, Position};
use crossword_game::MoveDirection;

use crate::state::Settings;

pub(crate) mod handler;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Action {
    SelectCell(Position),
    SelectEntry(EntryId),
    ClearSelection,
    MoveSelection(MoveDirection),
    ToggleDirection,
    InputChar(char),
    Backspace,
    ClearCell,
    OpenModal(ModalKind),
    ModalResponse(ModalResponse),
    UpdateSettings(Settings),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ModalKind {
    ClearGridConfirm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfirmResult {
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ModalResponse {
    Confirm(ConfirmResult),
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, ActionRequestQueue};

    #[test]
    fn take_all_returns_actions_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(Action::InputChar('a'));
        queue.request(Action::ToggleDirection);

        let drained = queue.take_all();
        assert_eq!(drained.len(), 2);
        assert!(matches!(drained[0], Action::InputChar('a')));
        assert!(matches!(drained[1], Action::ToggleDirection));

        assert!(queue.take_all().is_empty());
    }
}
