//! Interactive crossword application with hash-based answer checking.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub use self::{
    app::CrosswordApp,
    config::{ConfigError, Puzzle, PuzzleConfig},
    puzzle_view::PuzzleView,
};

pub mod app;
pub mod config;
pub mod puzzle_view;
pub mod version;

mod action;
mod persistence;
mod state;
mod ui;
mod view_model_builder;
