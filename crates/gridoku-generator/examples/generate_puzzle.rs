//! Example demonstrating puzzle generation from the command line.
//!
//! Prints the generated puzzle, its solution, and the seed that reproduces
//! the round.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a board size and difficulty:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --size 16 --difficulty expert
//! ```
//!
//! Replay a specific round:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed 42
//! ```
//!
//! Unrecognized difficulty labels fall back to medium with a warning; run
//! with `RUST_LOG=warn` to see it.

use std::process;

use clap::Parser;
use gridoku_core::GridSize;
use gridoku_generator::{Difficulty, PuzzleGenerator};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board side length (4, 9, or 16).
    #[arg(long, value_name = "CELLS", default_value_t = 9)]
    size: usize,

    /// Difficulty label (easy, medium, hard, expert; lenient).
    #[arg(long, value_name = "LABEL", default_value = "medium")]
    difficulty: String,

    /// Seed to replay; a fresh one is drawn when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let size = match GridSize::try_from_cells(args.size) {
        Ok(size) => size,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };
    let difficulty = Difficulty::from_label(&args.difficulty);

    let generator = PuzzleGenerator::new(size);
    let result = match args.seed {
        Some(seed) => generator.generate_with_seed(difficulty, seed),
        None => generator.generate(difficulty),
    };
    let round = match result {
        Ok(round) => round,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    println!("Seed:");
    println!("  {}", round.seed);
    println!();
    println!("Puzzle ({} {}):", round.difficulty, size);
    println!("{}", round.puzzle);
    println!();
    println!("Solution:");
    println!("{}", round.solution);
}
