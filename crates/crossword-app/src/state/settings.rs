use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub(crate) highlight_active_entry: bool,
    pub(crate) show_clue_lists: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            highlight_active_entry: true,
            show_clue_lists: true,
        }
    }
}
