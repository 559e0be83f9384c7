use crossword_core::{Direction, EntryId};
use eframe::egui::{RichText, ScrollArea, Ui};

use crate::{
    action::{Action, ActionRequestQueue},
    ui::layout::LayoutScale,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ClueItem {
    pub(crate) id: EntryId,
    pub(crate) text: String,
    pub(crate) is_active: bool,
    pub(crate) is_filled: bool,
}

impl ClueItem {
    fn label(&self) -> String {
        format!("{}. {}", self.id.number(), self.text)
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct ClueListViewModel {
    pub(crate) across: Vec<ClueItem>,
    pub(crate) down: Vec<ClueItem>,
}

impl ClueListViewModel {
    #[must_use]
    pub(crate) fn items(&self, direction: Direction) -> &[ClueItem] {
        match direction {
            Direction::Across => &self.across,
            Direction::Down => &self.down,
        }
    }
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &ClueListViewModel,
    scale: &LayoutScale,
    action_queue: &mut ActionRequestQueue,
) {
    let text_size = scale.cell_size * 0.3;
    ScrollArea::vertical().show(ui, |ui| {
        for direction in Direction::ALL {
            let heading = match direction {
                Direction::Across => "Across",
                Direction::Down => "Down",
            };
            ui.label(RichText::new(heading).strong().size(text_size * 1.2));
            for item in vm.items(direction) {
                let mut text = RichText::new(item.label()).size(text_size);
                if item.is_filled && !item.is_active {
                    text = text.weak();
                }
                if ui.selectable_label(item.is_active, text).clicked() {
                    action_queue.request(Action::SelectEntry(item.id));
                }
            }
            ui.add_space(scale.spacing.y);
        }
    });
}
