use std::sync::Arc;

use crossword_core::Position;
use crossword_game::CellState;
use eframe::egui::{Align2, Color32, FontId, Rect, Sense, Stroke, StrokeKind, Ui, Vec2};

use crate::{
    action::{Action, ActionRequestQueue},
    state::Settings,
    ui::{
        grid_theme::{GridPalette, GridTheme},
        layout::{ComponentUnits, LayoutScale},
    },
};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct GridVisualState: u8 {
        const SELECTED = 0b0000_0001;
        const ACTIVE_ENTRY = 0b0000_0010;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GridCell {
    pub(crate) pos: Position,
    pub(crate) content: CellState,
    pub(crate) number: Option<u32>,
    pub(crate) visual_state: GridVisualState,
}

#[derive(Debug, Clone)]
pub(crate) struct GridViewModel {
    width: u16,
    height: u16,
    cells: Vec<GridCell>,
    enabled_highlights: GridVisualState,
}

impl GridViewModel {
    #[must_use]
    pub(crate) fn new(width: u16, height: u16, cells: Vec<GridCell>, settings: &Settings) -> Self {
        let mut enabled_highlights = GridVisualState::SELECTED;
        if settings.highlight_active_entry {
            enabled_highlights |= GridVisualState::ACTIVE_ENTRY;
        }
        Self {
            width,
            height,
            cells,
            enabled_highlights,
        }
    }

    #[must_use]
    pub(crate) fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    #[must_use]
    pub(crate) fn required_units(&self) -> ComponentUnits {
        ComponentUnits::new(f32::from(self.width), f32::from(self.height))
    }

    fn effective_visual_state(&self, state: GridVisualState) -> EffectiveGridVisualState {
        EffectiveGridVisualState(self.enabled_highlights & state)
    }
}

const BORDER_WIDTH_RATIO: f32 = 0.03;
const SELECTED_BORDER_WIDTH_RATIO: f32 = 3.0;
const GUESS_FONT_RATIO: f32 = 0.6;
const NUMBER_FONT_RATIO: f32 = 0.28;
const NUMBER_INSET_RATIO: f32 = 0.06;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EffectiveGridVisualState(GridVisualState);

impl EffectiveGridVisualState {
    fn cell_fill_color(self, palette: &GridPalette) -> Color32 {
        if self.0.intersects(GridVisualState::SELECTED) {
            return palette.cell_bg_selected;
        }
        if self.0.intersects(GridVisualState::ACTIVE_ENTRY) {
            return palette.cell_bg_active_entry;
        }
        palette.cell_bg_default
    }

    fn cell_border(self, palette: &GridPalette, cell_size: f32) -> Stroke {
        let base_width = f32::max(cell_size * BORDER_WIDTH_RATIO, 1.0);
        if self.0.intersects(GridVisualState::SELECTED) {
            Stroke::new(base_width * SELECTED_BORDER_WIDTH_RATIO, palette.border_selected)
        } else {
            Stroke::new(base_width, palette.border_inactive)
        }
    }
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &GridViewModel,
    scale: &LayoutScale,
    action_queue: &mut ActionRequestQueue,
) {
    let cell_size = scale.cell_size;
    let style = Arc::clone(ui.style());
    let visuals = &style.visuals;
    let grid_theme = GridTheme::from_visuals(visuals);
    let palette = grid_theme.palette_for(visuals);

    let size = Vec2::new(f32::from(vm.width), f32::from(vm.height)) * cell_size;
    let (rect, _response) = ui.allocate_exact_size(size, Sense::hover());
    let painter = ui.painter();

    for cell in &vm.cells {
        let offset = Vec2::new(f32::from(cell.pos.col()), f32::from(cell.pos.row())) * cell_size;
        let cell_rect = Rect::from_min_size(rect.min + offset, Vec2::splat(cell_size));

        if cell.content.is_block() {
            painter.rect_filled(cell_rect, 0.0, palette.block);
            continue;
        }

        let vs = vm.effective_visual_state(cell.visual_state);
        painter.rect_filled(cell_rect, 0.0, vs.cell_fill_color(palette));

        if let Some(number) = cell.number {
            painter.text(
                cell_rect.min + Vec2::splat(cell_size * NUMBER_INSET_RATIO),
                Align2::LEFT_TOP,
                number.to_string(),
                FontId::proportional(cell_size * NUMBER_FONT_RATIO),
                palette.text_number,
            );
        }
        if let Some(ch) = cell.content.as_guess() {
            painter.text(
                cell_rect.center() + Vec2::new(0.0, cell_size * 0.08),
                Align2::CENTER_CENTER,
                ch,
                FontId::proportional(cell_size * GUESS_FONT_RATIO),
                palette.text_guess,
            );
        }

        painter.rect_stroke(
            cell_rect,
            0.0,
            vs.cell_border(palette, cell_size),
            StrokeKind::Inside,
        );

        let id = ui.id().with((cell.pos.row(), cell.pos.col()));
        if ui.interact(cell_rect, id, Sense::click()).clicked() {
            action_queue.request(Action::SelectCell(cell.pos));
        }
    }
}
