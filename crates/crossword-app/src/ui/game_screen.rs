use eframe::egui::Ui;
use egui_extras::{Size, StripBuilder};

use crate::{
    action::ActionRequestQueue,
    ui::{
        clue_list::{self, ClueListViewModel},
        grid::{self, GridViewModel},
        layout::{ComponentUnits, LayoutScale},
        status_line::{self, StatusLineViewModel},
    },
};

// Room for the title and status line above the grid, and for the clue
// lists beside it, in grid cells.
const HEADER_UNITS: f32 = 2.0;
const CLUE_LIST_UNITS: f32 = 6.0;

#[derive(Debug, Clone)]
pub(crate) struct GameScreenViewModel {
    pub(crate) title: String,
    pub(crate) status_line_vm: StatusLineViewModel,
    pub(crate) grid_vm: GridViewModel,
    pub(crate) clue_list_vm: Option<ClueListViewModel>,
}

impl GameScreenViewModel {
    #[must_use]
    pub(crate) fn required_units(&self) -> ComponentUnits {
        let grid = self.grid_vm.required_units();
        let clue_width = if self.clue_list_vm.is_some() {
            CLUE_LIST_UNITS
        } else {
            0.0
        };
        ComponentUnits::new(grid.width + clue_width, grid.height + HEADER_UNITS)
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &GameScreenViewModel, action_queue: &mut ActionRequestQueue) {
    let scale = LayoutScale::fit(ui.available_size(), vm.required_units());
    let grid_units = vm.grid_vm.required_units();

    ui.vertical_centered(|ui| {
        ui.heading(&vm.title);
        status_line::show(ui, vm.status_line_vm, &scale);
    });
    ui.add_space(scale.spacing.y);

    let grid_height = grid_units.height * scale.cell_size;
    let grid_width = grid_units.width * scale.cell_size;
    StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(grid_width))
        .size(Size::exact(scale.spacing.x))
        .size(if vm.clue_list_vm.is_some() {
            Size::relative(0.4).at_least(scale.cell_size * CLUE_LIST_UNITS)
        } else {
            Size::exact(0.0)
        })
        .size(Size::remainder())
        .horizontal(|mut strip| {
            strip.empty();
            strip.cell(|ui| {
                ui.set_min_height(grid_height);
                grid::show(ui, &vm.grid_vm, &scale, action_queue);
            });
            strip.empty();
            strip.cell(|ui| {
                if let Some(clue_list_vm) = &vm.clue_list_vm {
                    clue_list::show(ui, clue_list_vm, &scale, action_queue);
                }
            });
            strip.empty();
        });
}
