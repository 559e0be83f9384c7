//! Computes the solution hash for a crossword, for puzzle authors.
//!
//! Reads a puzzle file (either a full puzzle configuration with `data` and
//! `seed_order` fields, or bare puzzle data), fills the grid with the given
//! rows, and prints the seed phrase and its SHA-256 hash.
//!
//! # Usage
//!
//! Rows use `#` for blocks and letters for filled cells:
//!
//! ```sh
//! cargo run --example solution_hash -- --puzzle assets/puzzle.json RUST A##O F##K TREE ###N
//! ```
//!
//! Override the seed order stored in the file:
//!
//! ```sh
//! cargo run --example solution_hash -- --puzzle assets/puzzle.json --order row-major RUST A##O F##K TREE ###N
//! ```
//!
//! Hash a phrase directly, without a puzzle:
//!
//! ```sh
//! cargo run --example solution_hash -- --phrase "RUST RAFT TOKEN TREE"
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
    process,
    sync::Arc,
};

use clap::{Parser, ValueEnum};
use crossword_core::{PuzzleData, PuzzleLayout};
use crossword_game::{Game, GridData};
use crossword_verifier::{SeedOrder, SeedPhrase, SolutionHash};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OrderArg {
    ByEntry,
    RowMajor,
}

impl From<OrderArg> for SeedOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::ByEntry => Self::ByEntry,
            OrderArg::RowMajor => Self::RowMajor,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle configuration or puzzle data file.
    #[arg(long, value_name = "PATH", required_unless_present = "phrase")]
    puzzle: Option<PathBuf>,

    /// Seed order; defaults to the file's `seed_order`.
    #[arg(long, value_name = "ORDER")]
    order: Option<OrderArg>,

    /// Seed phrase to hash as is.
    #[arg(long, value_name = "PHRASE", conflicts_with_all = ["puzzle", "rows"])]
    phrase: Option<String>,

    /// Filled grid rows, top to bottom.
    #[arg(value_name = "ROW")]
    rows: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct PuzzleFile {
    #[serde(default)]
    seed_order: SeedOrder,
    data: PuzzleData,
}

fn main() {
    let args = Args::parse();

    let phrase = match (&args.phrase, &args.puzzle) {
        (Some(phrase), _) => SeedPhrase::new(phrase.as_str()),
        (None, Some(path)) => phrase_from_puzzle(path, args.order.map(SeedOrder::from), args.rows)
            .unwrap_or_else(|message| {
                eprintln!("{message}");
                process::exit(1);
            }),
        (None, None) => unreachable!("clap requires --puzzle without --phrase"),
    };

    println!("Seed phrase: {:?}", phrase.as_str());
    println!("Solution hash: {}", SolutionHash::of(&phrase));
}

fn phrase_from_puzzle(
    path: &Path,
    order: Option<SeedOrder>,
    rows: Vec<String>,
) -> Result<SeedPhrase, String> {
    let text = fs::read_to_string(path)
        .map_err(|err| format!("failed to read {}: {err}", path.display()))?;
    let (data, file_order) = match serde_json::from_str::<PuzzleFile>(&text) {
        Ok(file) => (file.data, file.seed_order),
        Err(_) => {
            let data = PuzzleData::from_json(&text)
                .map_err(|err| format!("failed to parse {}: {err}", path.display()))?;
            (data, SeedOrder::default())
        }
    };
    let layout =
        PuzzleLayout::new(&data).map_err(|err| format!("invalid puzzle layout: {err}"))?;
    let grid = GridData::try_from(rows).map_err(|err| format!("invalid rows: {err}"))?;
    let game = Game::with_grid(Arc::new(layout), grid).map_err(|err| format!("{err}"))?;

    if !game.is_complete() {
        eprintln!("warning: grid is not completely filled");
    }
    Ok(SeedPhrase::derive(
        game.layout(),
        game.grid(),
        order.unwrap_or(file_order),
    ))
}
