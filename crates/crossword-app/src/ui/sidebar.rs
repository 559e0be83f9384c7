use eframe::egui::{Button, CollapsingHeader, ProgressBar, ScrollArea, Ui, widgets};

use crate::{
    action::{Action, ActionRequestQueue, ModalKind},
    state::Settings,
};

#[derive(Debug, Clone)]
pub(crate) struct SidebarViewModel<'a> {
    filled: usize,
    total: usize,
    settings: &'a Settings,
}

impl<'a> SidebarViewModel<'a> {
    #[must_use]
    pub(crate) fn new(filled: usize, total: usize, settings: &'a Settings) -> Self {
        Self {
            filled,
            total,
            settings,
        }
    }

    #[expect(clippy::cast_precision_loss)]
    fn progress(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.filled as f32 / self.total as f32
        }
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &SidebarViewModel, action_queue: &mut ActionRequestQueue) {
    ui.vertical(|ui| {
        ui.group(|ui| {
            ui.label(format!("Filled {} of {} cells", vm.filled, vm.total));
            ui.add(ProgressBar::new(vm.progress()));
            if ui
                .add_enabled(vm.filled > 0, Button::new("Clear grid"))
                .clicked()
            {
                action_queue.request(Action::OpenModal(ModalKind::ClearGridConfirm));
            }
        });

        let mut changed = false;
        let mut settings = vm.settings.clone();
        let Settings {
            highlight_active_entry,
            show_clue_lists,
        } = &mut settings;
        ScrollArea::vertical().show(ui, |ui| {
            ui.heading("Settings");
            ui.indent("sidebar_settings", |ui| {
                CollapsingHeader::new("Display")
                    .default_open(true)
                    .show(ui, |ui| {
                        changed |= ui
                            .checkbox(highlight_active_entry, "Highlight the active entry")
                            .changed();
                        changed |= ui.checkbox(show_clue_lists, "Show clue lists").changed();
                    });

                CollapsingHeader::new("Appearance")
                    .default_open(true)
                    .show(ui, |ui| {
                        widgets::global_theme_preference_buttons(ui);
                    });
            });
        });
        if changed {
            action_queue.request(Action::UpdateSettings(settings));
        }
    });
}
