//! Crossword desktop and web application.
//!
//! # Design Notes
//! - One puzzle per session, loaded from a [`Puzzle`] configuration.
//! - Keyboard-driven input (letters, arrows, Tab/Space, Backspace/Delete)
//!   with mouse selection on the grid and the clue lists.
//! - The status line reflects the [`PuzzleView`](crate::puzzle_view::PuzzleView),
//!   which re-verifies the grid whenever it becomes full.

use std::time::Duration;

use eframe::{
    App, CreationContext, Frame, Storage,
    egui::{CentralPanel, Context, SidePanel, TopBottomPanel},
};

use crate::{
    action::{self, ActionRequestQueue},
    config::Puzzle,
    persistence,
    state::{AppState, UiState},
    ui, view_model_builder,
};

const FOOTER_TEXT: &str = "Thank you";

#[derive(Debug)]
pub struct CrosswordApp {
    app_state: AppState,
    ui_state: UiState,
}

impl CrosswordApp {
    #[must_use]
    pub fn new(cc: &CreationContext<'_>, puzzle: Puzzle) -> Self {
        let mut app_state = AppState::new(puzzle);
        if let Some(storage) = cc.storage {
            persistence::load_state(storage, &mut app_state);
        }
        Self {
            app_state,
            ui_state: UiState::new(),
        }
    }

    fn apply_persistence(&mut self, frame: &mut Frame) {
        if self.app_state.is_dirty()
            && let Some(storage) = frame.storage_mut()
        {
            self.save(storage);
            self.app_state.clear_dirty();
        }
    }
}

impl App for CrosswordApp {
    fn save(&mut self, storage: &mut dyn Storage) {
        persistence::save_state(storage, &self.app_state);
    }

    fn auto_save_interval(&self) -> Duration {
        Duration::from_secs(30)
    }

    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        if self.ui_state.active_modal.is_none() {
            ctx.input(|i| ui::input::handle_input(i, &mut action_queue));
            action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);
        }

        TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| ui.weak(FOOTER_TEXT));
        });

        let sidebar_vm = view_model_builder::build_sidebar_view_model(&self.app_state);
        SidePanel::right("sidebar")
            .resizable(false)
            .show(ctx, |ui| {
                ui::sidebar::show(ui, &sidebar_vm, &mut action_queue);
            });

        let game_screen_vm = view_model_builder::build_game_screen_view_model(&self.app_state);
        CentralPanel::default().show(ctx, |ui| {
            ui::game_screen::show(ui, &game_screen_vm, &mut action_queue);
        });

        if let Some(kind) = self.ui_state.active_modal {
            ui::modal::show(ctx, &mut action_queue, kind);
        }

        action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        self.apply_persistence(frame);
    }
}
