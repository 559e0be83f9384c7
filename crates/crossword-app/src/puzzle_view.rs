use std::sync::Arc;

use crossword_core::PuzzleLayout;
use crossword_game::{CompletionEvent, GridData};
use crossword_verifier::{SeedOrder, SolutionHash, Status};

/// Owns the verification status of the displayed puzzle.
///
/// The view reacts to exactly one event, a change of grid completeness.
/// A complete grid is verified against the solution hash; an incomplete one
/// leaves the status alone, so a solved puzzle stays `Correct!` while the
/// player edits it until the grid is full again.
#[derive(Debug, Clone)]
pub struct PuzzleView {
    layout: Arc<PuzzleLayout>,
    solution_hash: SolutionHash,
    seed_order: SeedOrder,
    status: Status,
}

impl PuzzleView {
    #[must_use]
    pub fn new(layout: Arc<PuzzleLayout>, solution_hash: SolutionHash, seed_order: SeedOrder) -> Self {
        Self {
            layout,
            solution_hash,
            seed_order,
            status: Status::default(),
        }
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn solution_hash(&self) -> &SolutionHash {
        &self.solution_hash
    }

    pub fn on_completeness_changed(&mut self, event: CompletionEvent, grid: &GridData) {
        if !event.is_complete() {
            return;
        }
        self.status =
            crossword_verifier::verify(&self.layout, grid, self.seed_order, &self.solution_hash);
        match self.status {
            Status::Correct => log::info!("You're correct!"),
            Status::NotCorrectYet => log::info!("That's not the correct solution. :/"),
        }
    }
}
