/*
validator.rs

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

//! Verify that a board can be solved.
//!
//! The structure of the board is checked first.
//! A board that breaks one of its invariants is rejected with
//! [`PuzzleError::Structural`] without running the search.

use log::{debug, info};
use serde::Serialize;
use std::collections::HashSet;

use super::board_graph::BoardGraph;
use super::search::{PathSearch, SearchOutcome};
use crate::board::Board;
use crate::config::SearchConfig;
use crate::error::PuzzleError;
use crate::hex::Axial;

/// Verdict for a board.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_solvable: bool,

    /// Path that visits every cell, when the board is solvable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub witness: Option<Vec<Axial>>,

    /// Reason why the board is not solvable, or why the search could not conclude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<PuzzleError>,

    /// Number of steps used by the search.
    pub steps: u64,
}

impl ValidationResult {
    fn solved(witness: Vec<Axial>, steps: u64) -> Self {
        Self {
            is_solvable: true,
            witness: Some(witness),
            error: None,
            steps,
        }
    }

    fn failed(error: PuzzleError, steps: u64) -> Self {
        Self {
            is_solvable: false,
            witness: None,
            error: Some(error),
            steps,
        }
    }

    /// Check the witness path against the board.
    ///
    /// Returns `false` when there is no witness.
    pub fn verify_witness(&self, board: &Board, strict_endpoints: bool) -> bool {
        match &self.witness {
            Some(w) => is_valid_witness(board, w, strict_endpoints),
            None => false,
        }
    }
}

/// Level validator object.
#[derive(Debug, Clone, Default)]
pub struct LevelValidator {
    config: SearchConfig,
}

impl LevelValidator {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Decide whether the board can be solved.
    pub fn validate(&self, board: &Board) -> ValidationResult {
        if let Err(e) = board.check_structure() {
            info!("Board {} is not valid: {e}", board.id());
            return ValidationResult::failed(e.into(), 0);
        }

        let graph: BoardGraph = BoardGraph::from_board(board);
        let mut search: PathSearch = PathSearch::new(&graph, self.config);
        let outcome: SearchOutcome = search.run();
        debug!(
            "Board {}: {} steps in {} seconds",
            board.id(),
            search.steps,
            search.duration
        );

        match outcome {
            SearchOutcome::Solved(path) => ValidationResult::solved(
                graph.vertexes.to_coordinates(path.get()),
                search.steps,
            ),
            SearchOutcome::Unsolvable => {
                ValidationResult::failed(PuzzleError::ProvenUnsolvable, search.steps)
            }
            SearchOutcome::BudgetExceeded => ValidationResult::failed(
                PuzzleError::SearchBudgetExceeded {
                    steps: search.steps,
                },
                search.steps,
            ),
        }
    }
}

/// Whether the path visits every cell of the board once, without crossing walls, and goes
/// through the checkpoints in order.
///
/// With `strict_endpoints`, the path must also start on checkpoint 1 and, when the board has
/// several checkpoints, end on the last one.
pub fn is_valid_witness(board: &Board, witness: &[Axial], strict_endpoints: bool) -> bool {
    if witness.len() != board.cell_count() {
        return false;
    }

    let mut seen: HashSet<Axial> = HashSet::with_capacity(witness.len());
    for c in witness {
        if !board.contains(c) || !seen.insert(*c) {
            return false;
        }
    }

    for w in witness.windows(2) {
        if !w[0].is_adjacent(&w[1]) || board.is_walled(&w[0], &w[1]) {
            return false;
        }
    }

    let ordinals: Vec<u32> = witness
        .iter()
        .filter_map(|c| board.cell(c).and_then(|cell| cell.checkpoint))
        .collect();
    if ordinals.windows(2).any(|w| w[0] >= w[1]) {
        return false;
    }

    if strict_endpoints && board.checkpoint_count() > 0 {
        let first_ok: bool = board.checkpoint_cell(1).map(|c| c.coord) == witness.first().copied();
        let last_ok: bool = board.checkpoint_count() < 2
            || board
                .checkpoint_cell(board.checkpoint_count())
                .map(|c| c.coord)
                == witness.last().copied();
        return first_ok && last_ok;
    }
    true
}
