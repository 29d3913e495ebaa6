/*
level.rs

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

//! Generate levels that have at least one solution.
//!
//! A generation round goes through the following stages:
//!
//! 1. Trace a random path that visits every cell ([`RandomPath`]).
//! 2. Place the checkpoints at evenly spaced positions along that path, including both ends.
//!    The traced path is therefore a solution.
//! 3. Try walls on a share of the edges that the path does not use.
//!    After each wall, the search runs again and the wall is removed unless a path is found.
//! 4. Build the board and validate it.
//!
//! If a stage fails, a new round starts, up to [`GeneratorConfig::max_restarts`] rounds.

use log::{Level, debug, info, log_enabled, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::Serialize;
use std::time::Instant;

use super::board_graph::BoardGraph;
use super::edges::EdgeStatus;
use super::path::SearchPath;
use super::random_path::{RandomPath, RandomPathError};
use super::search::{PathSearch, SearchOutcome};
use super::validator::{LevelValidator, ValidationResult};
use crate::board::Board;
use crate::config::{GeneratorConfig, MAX_SIZE, MIN_SIZE, SearchConfig};
use crate::error::PuzzleError;
use crate::hex::{self, Axial};

/// Statistics about a generation.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationStats {
    /// Seed of the random generator. Generating again with that seed gives the same board.
    pub seed: u64,

    /// Number of rounds abandoned before the result.
    pub restarts: usize,

    /// Number of attempts at tracing a path, for all the rounds.
    pub trace_attempts: usize,

    /// Steps used for tracing paths.
    pub trace_steps: u64,

    /// Walls on the final board.
    pub walls_placed: usize,

    /// Walls tried then removed, for all the rounds.
    pub walls_reverted: usize,

    /// Steps used by the searches that verified the walls and the final board.
    pub search_steps: u64,

    /// Duration in seconds.
    pub duration: f32,
}

/// Result of a generation.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub board: Option<Board>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<PuzzleError>,

    pub stats: GenerationStats,
}

impl GenerationResult {
    fn failed(error: PuzzleError, stats: GenerationStats) -> Self {
        Self {
            success: false,
            board: None,
            error: Some(error),
            stats,
        }
    }
}

/// Level generator object.
#[derive(Debug, Clone, Default)]
pub struct LevelGenerator {
    config: GeneratorConfig,
}

impl LevelGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generate a board of the given size.
    pub fn generate(&self, size: u32) -> GenerationResult {
        let start: Instant = Instant::now();
        let seed: u64 = self.config.seed.unwrap_or_else(rand::random);
        let mut stats: GenerationStats = GenerationStats {
            seed,
            ..GenerationStats::default()
        };

        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return GenerationResult::failed(
                PuzzleError::InvalidSize {
                    size,
                    min: MIN_SIZE,
                    max: MAX_SIZE,
                },
                stats,
            );
        }

        let mut rng: StdRng = StdRng::seed_from_u64(seed);
        let id: String = match &self.config.id {
            Some(id) => id.clone(),
            None => format!("s{size}-{seed:016x}"),
        };
        let coordinates: Vec<Axial> = hex::board_coordinates(size);
        let validator: LevelValidator = LevelValidator::new(self.config.search);

        debug!(
            "Generating board {id}: size = {size}  cells = {}  difficulty = {}",
            coordinates.len(),
            self.config.difficulty
        );

        for restart in 0..self.config.max_restarts {
            stats.restarts = restart;
            stats.walls_placed = 0;

            let mut graph: BoardGraph = BoardGraph::from_coordinates(&coordinates);
            let path: SearchPath = match self.trace(&graph, &mut rng, &mut stats) {
                Some(p) => p,
                None => {
                    warn!("Round {restart}: cannot trace a path for board {id}");
                    continue;
                }
            };

            self.place_checkpoints(&mut graph, &path);
            for (v1, v2) in path.steps() {
                graph.set_status(v1, v2, EdgeStatus::Traced);
            }
            self.place_walls(&mut graph, &mut rng, &mut stats);

            let board: Board = graph.to_board(&id, size);
            if log_enabled!(Level::Debug) {
                debug!("Candidate board {id}:\n{}", board.render());
            }

            let result: ValidationResult = validator.validate(&board);
            stats.search_steps += result.steps;
            if result.is_solvable {
                stats.duration = start.elapsed().as_secs_f32();
                info!(
                    "Generated board {id} in {} seconds ({} restarts, {} walls)",
                    stats.duration, stats.restarts, stats.walls_placed
                );
                return GenerationResult {
                    success: true,
                    board: Some(board),
                    error: None,
                    stats,
                };
            }
            warn!(
                "Round {restart}: board {id} did not pass the validation: {}",
                result
                    .error
                    .map(|e| e.to_string())
                    .unwrap_or_default()
            );
        }

        stats.restarts = self.config.max_restarts;
        stats.duration = start.elapsed().as_secs_f32();
        GenerationResult::failed(
            PuzzleError::GenerationFailed {
                restarts: self.config.max_restarts,
            },
            stats,
        )
    }

    /// Trace a random path through all the cells, from random starting cells.
    fn trace(
        &self,
        graph: &BoardGraph,
        rng: &mut StdRng,
        stats: &mut GenerationStats,
    ) -> Option<SearchPath> {
        for attempt in 0..self.config.trace_attempts {
            stats.trace_attempts += 1;
            let mut random_path: RandomPath = RandomPath::new(graph, self.config.trace_step_budget);
            let res: Result<SearchPath, RandomPathError> = random_path.generate(rng, None);
            stats.trace_steps += random_path.iteration;
            match res {
                Ok(path) => return Some(path),
                Err(e) => debug!(
                    "Trace attempt {attempt} from vertex {} failed: {e:?}",
                    random_path.starting_vertex
                ),
            }
        }
        None
    }

    /// Place the checkpoints along the path.
    fn place_checkpoints(&self, graph: &mut BoardGraph, path: &SearchPath) {
        let vertexes: &[usize] = path.get();
        let n: usize = vertexes.len();
        let k: usize = self.config.difficulty.checkpoint_count(n).min(n);

        graph.vertexes.clear_checkpoints();
        if k < 2 {
            return;
        }
        for i in 0..k {
            let index: usize = i * (n - 1) / (k - 1);
            graph.vertexes.set_checkpoint(vertexes[index], i as u32 + 1);
        }
        debug!("{k} checkpoints placed along a path of {n} cells");
    }

    /// Try walls on the edges that the traced path does not use.
    fn place_walls(&self, graph: &mut BoardGraph, rng: &mut StdRng, stats: &mut GenerationStats) {
        let mut candidates: Vec<(usize, usize)> = graph.edges.list(EdgeStatus::Open);
        candidates.shuffle(rng);
        let target: usize =
            (self.config.difficulty.wall_ratio() * candidates.len() as f32).round() as usize;
        let search_config: SearchConfig = self
            .config
            .search
            .with_step_budget(self.config.wall_step_budget);

        for (v1, v2) in candidates.into_iter().take(target) {
            graph.set_status(v1, v2, EdgeStatus::Walled);

            let mut search: PathSearch = PathSearch::new(graph, search_config);
            let outcome: SearchOutcome = search.run();
            stats.search_steps += search.steps;

            if let SearchOutcome::Solved(_) = outcome {
                stats.walls_placed += 1;
            } else {
                debug!("Wall {v1}-{v2} removed: {outcome:?}");
                graph.set_status(v1, v2, EdgeStatus::Open);
                stats.walls_reverted += 1;
            }
        }
        debug!(
            "{} walls placed out of {target} tried",
            stats.walls_placed
        );
    }
}
