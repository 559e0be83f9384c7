use eframe::egui::Context;

use crate::action::{ActionRequestQueue, ModalKind};

mod dialogs;

pub(crate) fn show(ctx: &Context, action_queue: &mut ActionRequestQueue, kind: ModalKind) {
    match kind {
        ModalKind::ClearGridConfirm => dialogs::show_confirm(ctx, action_queue, kind),
    }
}
