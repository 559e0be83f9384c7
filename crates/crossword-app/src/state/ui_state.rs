use crate::action::ModalKind;

// UiState holds ephemeral UI-only state. It is not persisted.
#[derive(Debug, Default)]
pub(crate) struct UiState {
    pub(crate) active_modal: Option<ModalKind>,
}

impl UiState {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }
}
