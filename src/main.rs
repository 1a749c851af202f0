//! CLI entry point for the puzzle engine.
//!
//! Usage:
//!   crossy-puzzle generate [options]
//!   crossy-puzzle solve <PUZZLE_ID>
//!   crossy-puzzle solve --stdin
//!
//! Options (generate):
//!   --size <n>          Board side length, 3 or 4 (default: 4)
//!   --level <n>         Scramble depth in moves (default: 20)
//!   --seed <n>          RNG seed for reproducible puzzles
//!   --max-attempts <n>  Shuffle budget before giving up (default: 256)

mod board;
mod generator;
mod import;
mod solver;
mod tile;

use std::io::{self, Read};
use std::time::Instant;

use clap::{Parser, Subcommand};
use serde::Serialize;

use generator::{Generator, GeneratorConfig};
use import::{import_puzzle, puzzle_id};
use tile::Direction;

#[derive(Parser)]
#[command(name = "crossy-puzzle")]
#[command(about = "Sliding-tile puzzle generator and solver")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a solvable puzzle pair of the requested difficulty
    Generate {
        /// Board side length, 3 or 4
        #[arg(long, default_value = "4")]
        size: usize,

        /// Scramble depth; the recorded solution is this many moves
        #[arg(long, default_value = "20")]
        level: usize,

        /// RNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Shuffle budget before generation gives up
        #[arg(long, default_value = "256")]
        max_attempts: usize,
    },

    /// Validate a puzzle ID and print its shortest solution
    Solve {
        /// Puzzle ID digits (use --stdin to read from stdin)
        #[arg(value_name = "PUZZLE_ID")]
        id: Option<String>,

        /// Read the puzzle ID from stdin instead of the command line
        #[arg(long)]
        stdin: bool,
    },
}

/// Output format for `generate`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateOutput {
    puzzle_id: String,
    size: usize,
    level: usize,
    solution_length: usize,
    solution: Vec<Direction>,
    attempts: usize,
    time_elapsed_ms: u64,
}

/// Output format for `solve`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    level: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    solution: Option<Vec<Direction>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    states_expanded: Option<usize>,
    time_elapsed_ms: u64,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            size,
            level,
            seed,
            max_attempts,
        } => {
            let start_time = Instant::now();
            let mut generator = Generator::new(seed);
            let config = GeneratorConfig {
                size,
                level,
                max_attempts,
            };

            match generator.generate(&config) {
                Ok(generated) => {
                    let output = GenerateOutput {
                        puzzle_id: puzzle_id(&generated.start, &generated.goal),
                        size,
                        level,
                        solution_length: generated.solution.len(),
                        solution: generated.solution,
                        attempts: generated.attempts,
                        time_elapsed_ms: start_time.elapsed().as_millis() as u64,
                    };
                    println!("{}", serde_json::to_string_pretty(&output).unwrap());
                }
                Err(e) => {
                    eprintln!("Error generating puzzle: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Solve { id, stdin } => {
            // Read the puzzle ID
            let raw = if stdin {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .expect("Failed to read from stdin");
                buffer
            } else if let Some(id) = id {
                id
            } else {
                eprintln!("Error: Must provide either a puzzle ID or --stdin");
                std::process::exit(1);
            };

            let start_time = Instant::now();
            let output = match import_puzzle(raw.trim()) {
                Ok(imported) => SolveOutput {
                    valid: true,
                    reason: None,
                    level: Some(imported.solution.len()),
                    solution: Some(imported.solution),
                    states_expanded: Some(imported.expanded),
                    time_elapsed_ms: start_time.elapsed().as_millis() as u64,
                },
                Err(e) => SolveOutput {
                    valid: false,
                    reason: Some(e.to_string()),
                    level: None,
                    solution: None,
                    states_expanded: None,
                    time_elapsed_ms: start_time.elapsed().as_millis() as u64,
                },
            };

            println!("{}", serde_json::to_string_pretty(&output).unwrap());

            if output.valid {
                std::process::exit(0);
            } else {
                std::process::exit(1);
            }
        }
    }
}
