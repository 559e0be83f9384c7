use crossword_verifier::Status;
use eframe::egui::{Label, RichText, Ui, Widget as _};

use crate::ui::layout::LayoutScale;

#[derive(Debug, Clone, Copy)]
pub(crate) struct StatusLineViewModel {
    status: Status,
}

impl StatusLineViewModel {
    #[must_use]
    pub(crate) fn new(status: Status) -> Self {
        Self { status }
    }

    #[must_use]
    pub(crate) fn text(self) -> String {
        format!("Status: {}", self.status)
    }
}

pub(crate) fn show(ui: &mut Ui, vm: StatusLineViewModel, scale: &LayoutScale) {
    let color = match vm.status {
        Status::Correct => ui.visuals().warn_fg_color,
        Status::NotCorrectYet => ui.visuals().text_color(),
    };
    Label::new(
        RichText::new(vm.text())
            .color(color)
            .strong()
            .size(scale.cell_size * 0.4),
    )
    .ui(ui);
}
