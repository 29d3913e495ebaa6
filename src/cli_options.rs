/*
cli_options.rs

Copyright 2025 Hervé Quatremain

This file is part of Hexpass.

Hexpass is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Hexpass is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Hexpass. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! # Examples
//!
//! Generate a board of size 3, print the result in JSON format, and save the board:
//!
//! ```
//! $ hexpass generate --size 3 --seed 42 --difficulty hard --output board.json
//! ```
//!
//! Pre-generate 20 boards of sizes 3 and 4, and print some statistics:
//!
//! ```
//! $ hexpass batch --sizes 3,4 --count 20 --output levels.json --summary
//!
//!         total time = 1.2034s
//!       average time = 0.030085s
//!           max time = 0.1102s
//!             boards = 40
//!             errors = 0
//!    boards of size 3 = 20
//!    boards of size 4 = 20
//! ```
//!
//! Add 10 boards of size 5 to the same file:
//!
//! ```
//! $ hexpass batch --sizes 5 --count 10 --output levels.json --append
//! ```
//!
//! Verify a board that is stored in a file, or that is given inline:
//!
//! ```
//! $ hexpass validate board.json
//! $ hexpass validate '{"id": "b", "size": 1, "cells": {"0,0": {"q": 0, "r": 0}}, "checkpointCount": 0}'
//! ```
//!
//! Display a board:
//!
//! ```
//! $ hexpass show board.json
//! ```

use clap::{Parser, Subcommand};
use log::debug;
use serde::Serialize;
use std::env;
use std::path::{Path, PathBuf};

use hexpass::board::Board;
use hexpass::config::{
    COPYRIGHT_NOTICE, Difficulty, GeneratorConfig, MAX_BATCH_FAILURES, SEARCH_STEP_BUDGET,
    SearchConfig,
};
use hexpass::error::PuzzleError;
use hexpass::generator::level::{GenerationResult, LevelGenerator};
use hexpass::generator::validator::{LevelValidator, ValidationResult};
use hexpass::saver::batch::{BatchFile, SaverBatch};
use hexpass::saver::board::{read_board, save_board};

/// Generate and verify Hexpass boards.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a board and print the result in JSON format
    Generate {
        /// Board size (cells at a distance lower than the size from the center)
        #[arg(short, long)]
        size: u32,

        /// Seed for the random generator
        #[arg(long)]
        seed: Option<u64>,

        /// Difficulty level for the board
        #[arg(value_enum, short = 'f', long, default_value_t = Difficulty::Medium)]
        difficulty: Difficulty,

        /// Board identifier
        #[arg(long)]
        id: Option<String>,

        /// Checkpoints only constrain the visiting order, not the ends of the path
        #[arg(long, default_value_t = false)]
        lenient_endpoints: bool,

        /// File where to save the board
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate boards for several sizes and save them in a file
    Batch {
        /// Comma separated list of board sizes
        #[arg(long, value_delimiter = ',', required = true)]
        sizes: Vec<u32>,

        /// Number of boards for each size
        #[arg(short, long, default_value_t = 1)]
        count: usize,

        /// Seed for the first board. The next boards use the following seeds
        #[arg(long)]
        seed: Option<u64>,

        /// Difficulty level for the boards
        #[arg(value_enum, short = 'f', long, default_value_t = Difficulty::Medium)]
        difficulty: Difficulty,

        /// Checkpoints only constrain the visiting order, not the ends of the path
        #[arg(long, default_value_t = false)]
        lenient_endpoints: bool,

        /// File where to save the boards
        #[arg(short, long)]
        output: PathBuf,

        /// Add the boards to the ones already in the output file
        #[arg(short, long, default_value_t = false)]
        append: bool,

        /// Print some statistics after generating the boards
        #[arg(short, long, default_value_t = false)]
        summary: bool,
    },

    /// Verify that a board can be solved and print the result in JSON format
    Validate {
        /// Board in JSON format, or path to a JSON file
        board: String,

        /// Checkpoints only constrain the visiting order, not the ends of the path
        #[arg(long, default_value_t = false)]
        lenient_endpoints: bool,

        /// Number of search steps before giving up
        #[arg(long, default_value_t = SEARCH_STEP_BUDGET)]
        step_budget: u64,
    },

    /// Display a board
    Show {
        /// Board in JSON format, or path to a JSON file
        board: String,
    },
}

/// Parse and process command-line options. Return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    match args.command {
        Command::Generate {
            size,
            seed,
            difficulty,
            id,
            lenient_endpoints,
            output,
        } => {
            let mut config: GeneratorConfig = generator_config(seed, difficulty, lenient_endpoints);
            if let Some(i) = id {
                config = config.with_id(&i);
            }
            generate(size, config, output.as_deref())
        }
        Command::Batch {
            sizes,
            count,
            seed,
            difficulty,
            lenient_endpoints,
            output,
            append,
            summary,
        } => {
            let saver: SaverBatch = SaverBatch::new(output);
            let batch_file: BatchFile = if append {
                match saver.load() {
                    Ok(Some(b)) if b.difficulty != difficulty => {
                        eprintln!(
                            "Error: the batch file holds {} boards, not {difficulty}",
                            b.difficulty
                        );
                        return 1;
                    }
                    Ok(Some(b)) => b,
                    Ok(None) => BatchFile::new(difficulty),
                    Err(e) => {
                        eprintln!("Cannot read the batch file: {e}");
                        return 1;
                    }
                }
            } else {
                BatchFile::new(difficulty)
            };
            batch(
                &sizes,
                count,
                seed,
                lenient_endpoints,
                batch_file,
                &saver,
                summary,
            )
        }
        Command::Validate {
            board,
            lenient_endpoints,
            step_budget,
        } => validate(&board, lenient_endpoints, step_budget),
        Command::Show { board } => match read_board(&board) {
            Ok(b) => {
                println!("{}", b.render());
                0
            }
            Err(e) => {
                eprintln!("Cannot read the board: {e}");
                1
            }
        },
    }
}

/// Print the object in JSON format.
fn print_json<T: Serialize>(value: &T) -> bool {
    match serde_json::to_string_pretty(value) {
        Ok(s) => {
            println!("{s}");
            true
        }
        Err(e) => {
            eprintln!("Cannot serialize the result: {e}");
            false
        }
    }
}

fn generator_config(
    seed: Option<u64>,
    difficulty: Difficulty,
    lenient_endpoints: bool,
) -> GeneratorConfig {
    let config: GeneratorConfig = GeneratorConfig::default()
        .with_difficulty(difficulty)
        .with_search(SearchConfig::default().with_strict_endpoints(!lenient_endpoints));
    match seed {
        Some(s) => config.with_seed(s),
        None => config,
    }
}

fn generate(size: u32, config: GeneratorConfig, output: Option<&Path>) -> u8 {
    let result: GenerationResult = LevelGenerator::new(config).generate(size);
    if !print_json(&result) {
        return 1;
    }
    match (&result.board, output) {
        (Some(board), Some(path)) => match save_board(path, board) {
            Ok(()) => 0,
            Err(e) => {
                eprintln!("Cannot save the board to {path:?}: {e}");
                1
            }
        },
        (Some(_), None) => 0,
        (None, _) => 1,
    }
}

fn batch(
    sizes: &[u32],
    count: usize,
    seed: Option<u64>,
    lenient_endpoints: bool,
    mut batch: BatchFile,
    saver: &SaverBatch,
    summary: bool,
) -> u8 {
    let difficulty: Difficulty = batch.difficulty;
    let mut next_seed: Option<u64> = seed;
    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut errors: usize = 0;
    let mut generated: usize = 0;

    for &size in sizes {
        let mut failures: usize = 0;
        let mut i: usize = 0;
        while i < count {
            debug!("Size {size}: board {i}");

            let result: GenerationResult =
                LevelGenerator::new(generator_config(next_seed, difficulty, lenient_endpoints))
                    .generate(size);
            next_seed = next_seed.map(|s| s.wrapping_add(1));
            total += result.stats.duration;
            if result.stats.duration > max {
                max = result.stats.duration;
            }

            match (result.board, result.error) {
                (Some(board), None) => {
                    batch.push(board);
                    generated += 1;
                    i += 1;
                }
                (_, Some(e @ PuzzleError::InvalidSize { .. })) => {
                    eprintln!("Error: {e}");
                    return 1;
                }
                (_, e) => {
                    // Try again with another seed instead of leaving a gap
                    errors += 1;
                    failures += 1;
                    debug!("ERROR generating board {i} of size {size}: {e:?}");
                    if failures >= MAX_BATCH_FAILURES {
                        eprintln!("Error: too many failures for size {size} ({failures})");
                        return 1;
                    }
                }
            }
        }
    }

    if let Err(e) = saver.save(&batch) {
        eprintln!("Cannot save the boards: {e}");
        return 1;
    }

    // Print some stats
    if summary {
        println!(
            "
        total time = {}s
      average time = {}s
          max time = {}s
            boards = {}
            errors = {}",
            total,
            if generated > 0 {
                total / generated as f32
            } else {
                0.0
            },
            max,
            generated,
            errors
        );
        for &size in sizes {
            println!("   boards of size {size} = {}", batch.boards(size).len());
        }
    }
    0
}

fn validate(source: &str, lenient_endpoints: bool, step_budget: u64) -> u8 {
    let board: Board = match read_board(source) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Cannot read the board: {e}");
            return 1;
        }
    };

    let config: SearchConfig = SearchConfig::default()
        .with_strict_endpoints(!lenient_endpoints)
        .with_step_budget(step_budget);
    let result: ValidationResult = LevelValidator::new(config).validate(&board);
    if print_json(&result) { 0 } else { 1 }
}
