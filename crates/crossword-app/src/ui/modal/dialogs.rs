use eframe::egui::{Context, Id, Modal, Response, RichText, Sides, Ui};

use crate::action::{Action, ActionRequestQueue, ConfirmResult, ModalKind, ModalResponse};

struct ConfirmDialogSpec {
    id: Id,
    heading: &'static str,
    label: &'static str,
    confirm_label: &'static str,
}

impl ModalKind {
    fn confirm_spec(self) -> ConfirmDialogSpec {
        match self {
            ModalKind::ClearGridConfirm => ConfirmDialogSpec {
                id: Id::new("clear_grid_confirm"),
                heading: "Clear Grid?",
                label: "Remove every letter from the grid? This cannot be undone.",
                confirm_label: "Clear Grid",
            },
        }
    }
}

fn request_focus_if_none(ui: &Ui, response: &Response) {
    if ui.memory(|memory| memory.focused().is_none()) {
        response.request_focus();
    }
}

fn respond(action_queue: &mut ActionRequestQueue, result: ConfirmResult) {
    action_queue.request(Action::ModalResponse(ModalResponse::Confirm(result)));
}

pub(crate) fn show_confirm(ctx: &Context, action_queue: &mut ActionRequestQueue, kind: ModalKind) {
    let spec = kind.confirm_spec();
    let mut responded = false;
    let modal = Modal::new(spec.id).show(ctx, |ui| {
        ui.heading(RichText::new(spec.heading));
        ui.add_space(4.0);
        ui.label(spec.label);
        ui.add_space(8.0);

        Sides::new().show(
            ui,
            |_ui| {},
            |ui| {
                let confirm = ui.button(spec.confirm_label);
                request_focus_if_none(ui, &confirm);
                if confirm.clicked() {
                    respond(action_queue, ConfirmResult::Confirmed);
                    responded = true;
                    ui.close();
                }

                if ui.button("Cancel").clicked() {
                    respond(action_queue, ConfirmResult::Cancelled);
                    responded = true;
                    ui.close();
                }
            },
        );
    });

    if modal.should_close() && !responded {
        respond(action_queue, ConfirmResult::Cancelled);
    }
}
