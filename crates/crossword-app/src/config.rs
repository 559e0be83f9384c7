//! Puzzle configuration: the puzzle data plus the hash its answer must match.

use std::sync::Arc;

use crossword_core::{PuzzleData, PuzzleError, PuzzleLayout};
use crossword_verifier::{SeedOrder, SolutionHash};
use serde::{Deserialize, Serialize};

/// The puzzle bundled into the binary.
pub const DEFAULT_PUZZLE: &str = include_str!("../../../assets/puzzle.json");

/// A puzzle as shipped to the player.
///
/// ```json
/// {
///   "title": "Crossword Puzzle",
///   "solution_hash": "<64 lowercase hex digits>",
///   "seed_order": "by_entry",
///   "data": { "across": { ... }, "down": { ... } }
/// }
/// ```
///
/// `seed_order` may be omitted and defaults to `by_entry`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    pub title: String,
    pub solution_hash: SolutionHash,
    #[serde(default)]
    pub seed_order: SeedOrder,
    pub data: PuzzleData,
}

impl PuzzleConfig {
    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns the bundled puzzle.
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_json(DEFAULT_PUZZLE)
    }

    /// Reads a configuration file.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Validates the puzzle data and derives its layout.
    pub fn into_puzzle(self) -> Result<Puzzle, ConfigError> {
        let layout = PuzzleLayout::new(&self.data)?;
        Ok(Puzzle {
            title: self.title,
            layout: Arc::new(layout),
            solution_hash: self.solution_hash,
            seed_order: self.seed_order,
        })
    }
}

/// A validated puzzle, ready to play.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub title: String,
    pub layout: Arc<PuzzleLayout>,
    pub solution_hash: SolutionHash,
    pub seed_order: SeedOrder,
}

/// Errors raised while loading a puzzle configuration.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[display("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    /// The configuration is not valid JSON, or a field is malformed
    /// (including the solution hash).
    #[display("invalid puzzle configuration: {_0}")]
    Json(#[from] serde_json::Error),
    /// The puzzle data does not describe a consistent grid.
    #[display("invalid puzzle data: {_0}")]
    Puzzle(#[from] PuzzleError),
}
