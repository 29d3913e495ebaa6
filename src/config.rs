/*
config.rs

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

//! Tuning constants and configuration objects for the search engine and the generator.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Copyright notice displayed by `hexpass --version`.
pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nCopyright 2025 Hervé Quatremain\nLicense GPL-3.0-or-later"
);

/// Smallest board size that the generator accepts. A board of size 1 has a single cell and cannot
/// host two checkpoints.
pub const MIN_SIZE: u32 = 2;

/// Largest board size that the generator accepts (91 cells).
pub const MAX_SIZE: u32 = 6;

/// Largest board size that [`Board::render`](crate::board::Board::render) draws cell by cell.
pub const MAX_RENDER_SIZE: u32 = 32;

/// Minimum number of checkpoints on a generated board.
pub const MIN_CHECKPOINTS: usize = 2;

/// Default number of path extensions the search engine can try before giving up.
pub const SEARCH_STEP_BUDGET: u64 = 2_000_000;

/// Number of path extensions for tracing one random path.
pub const TRACE_STEP_BUDGET: u64 = 20_000;

/// Number of random starting cells tried when tracing a path.
pub const TRACE_ATTEMPTS: usize = 16;

/// Search budget when verifying a board after adding a wall.
pub const WALL_STEP_BUDGET: u64 = 200_000;

/// Number of full generation rounds (path, checkpoints, walls, verification).
pub const MAX_RESTARTS: usize = 8;

/// Number of failed generations tolerated per size by the batch tool.
pub const MAX_BATCH_FAILURES: usize = 100;

/// Version of the batch file format.
pub const BATCH_FORMAT_VERSION: u32 = 1;

/// Level difficulty.
///
/// Harder levels get fewer checkpoints and more walls.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialOrd,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl Difficulty {
    /// Number of checkpoints for a board with the given number of cells.
    pub fn checkpoint_count(self, num_cells: usize) -> usize {
        let divisor: usize = match self {
            Difficulty::Easy => 3,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
        };
        (num_cells / divisor).max(MIN_CHECKPOINTS)
    }

    /// Share of the free edges (not used by the traced path) to turn into walls.
    pub fn wall_ratio(self) -> f32 {
        match self {
            Difficulty::Easy => 0.10,
            Difficulty::Medium => 0.25,
            Difficulty::Hard => 0.40,
        }
    }
}

/// Search engine parameters.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchConfig {
    /// When checkpoints exist, whether the path must start on checkpoint 1 and end on the last
    /// checkpoint. Otherwise checkpoints only constrain the visiting order.
    pub strict_endpoints: bool,

    /// Number of path extensions after which the search gives up.
    pub step_budget: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strict_endpoints: true,
            step_budget: SEARCH_STEP_BUDGET,
        }
    }
}

impl SearchConfig {
    pub fn with_strict_endpoints(mut self, strict_endpoints: bool) -> Self {
        self.strict_endpoints = strict_endpoints;
        self
    }

    pub fn with_step_budget(mut self, step_budget: u64) -> Self {
        self.step_budget = step_budget;
        self
    }
}

/// Generator parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Random seed. With the same seed and parameters, the generator returns the same board.
    /// If not set, a random seed is drawn for each generation.
    pub seed: Option<u64>,

    /// Board identifier. Derived from the size and the seed when not set.
    pub id: Option<String>,

    pub difficulty: Difficulty,

    /// Number of full generation rounds before giving up.
    pub max_restarts: usize,

    /// Number of starting cells tried when tracing the path.
    pub trace_attempts: usize,

    /// Step budget for tracing the path from one starting cell.
    pub trace_step_budget: u64,

    /// Search budget when verifying a board after adding a wall.
    pub wall_step_budget: u64,

    /// Parameters of the final verification.
    pub search: SearchConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            id: None,
            difficulty: Difficulty::default(),
            max_restarts: MAX_RESTARTS,
            trace_attempts: TRACE_ATTEMPTS,
            trace_step_budget: TRACE_STEP_BUDGET,
            wall_step_budget: WALL_STEP_BUDGET,
            search: SearchConfig::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }
}
