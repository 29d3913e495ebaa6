/*
search.rs

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

//! Search for a path that visits every cell.
//!
//! The path must go through each cell exactly once, must not cross walls, and must visit the
//! checkpoints in ascending order.
//! With [`SearchConfig::strict_endpoints`], the path also starts on checkpoint 1 and ends on the
//! last checkpoint.
//!
//! The search is a depth-first backtracking that extends the path one cell at a time.
//! After each extension, the partial path is abandoned as soon as one of these conditions is
//! detected:
//!
//! * A cell that is not in the path has no remaining connection, or only one connection although
//!   it cannot be the end of the path (dead end).
//! * The cells that are not in the path cannot all be reached from the head of the path.
//! * The next checkpoint cannot be reached from the head of the path without crossing a
//!   checkpoint with a higher number.
//!
//! Each extension consumes one step of the [`SearchConfig::step_budget`].
//! When the budget is exhausted, the search stops and returns [`SearchOutcome::BudgetExceeded`],
//! which is not a proof that no path exists.

use log::debug;
use std::time::Instant;

use super::board_graph::BoardGraph;
use super::path::SearchPath;
use crate::config::SearchConfig;

/// Result of a search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// A path exists. The value is the path that has been found.
    Solved(SearchPath),

    /// All the possibilities have been explored: no path exists.
    Unsolvable,

    /// The search stopped before reaching a conclusion.
    BudgetExceeded,
}

/// Type of errors.
#[derive(Debug, PartialEq)]
enum SearchError {
    /// No possible path from the current partial path.
    NoPath,

    /// The step budget is exhausted.
    BudgetExceeded,
}

/// Working state of one search.
struct Walk {
    /// Partial path.
    path: SearchPath,

    /// For each vertex, the number of adjacent vertexes, not behind a wall, that are not in the
    /// path.
    free: Vec<usize>,

    /// Next checkpoint to visit.
    next_ordinal: u32,
}

/// Path search object.
pub struct PathSearch<'a> {
    /// Board to solve.
    graph: &'a BoardGraph,

    config: SearchConfig,

    /// Number of checkpoints on the board.
    num_checkpoints: u32,

    /// Vertex that must end the path, if any.
    ending_vertex: Option<usize>,

    /// Number of steps used by the last search.
    pub steps: u64,

    /// Duration in seconds of the last search.
    pub duration: f32,
}

impl<'a> PathSearch<'a> {
    /// Create the object.
    ///
    /// The checkpoints of the graph must be numbered from 1 without gaps.
    pub fn new(graph: &'a BoardGraph, config: SearchConfig) -> Self {
        let num_checkpoints: u32 = graph.vertexes.num_checkpoints();
        let ending_vertex: Option<usize> = if config.strict_endpoints && num_checkpoints >= 2 {
            graph.vertexes.last_checkpoint().map(|(_, v)| v)
        } else {
            None
        };

        Self {
            graph,
            config,
            num_checkpoints,
            ending_vertex,
            steps: 0,
            duration: 0.0,
        }
    }

    /// Search for a path.
    pub fn run(&mut self) -> SearchOutcome {
        let start: Instant = Instant::now();
        let num_vertexes: usize = self.graph.num_vertexes();
        self.steps = 0;

        let mut walk: Walk = Walk {
            path: SearchPath::new(num_vertexes),
            free: (0..num_vertexes)
                .map(|v| self.graph.neighbors(v).len())
                .collect(),
            next_ordinal: 1,
        };

        let starting_vertexes: Vec<usize> = self.starting_vertexes();
        debug!(
            "Searching: {} vertexes, {} checkpoints, starting vertexes = {:?}, ending vertex = {:?}",
            num_vertexes, self.num_checkpoints, starting_vertexes, self.ending_vertex
        );

        let mut outcome: SearchOutcome = if num_vertexes == 0 {
            SearchOutcome::Solved(walk.path.clone())
        } else {
            SearchOutcome::Unsolvable
        };
        for v in starting_vertexes {
            match self.start_from(v, &mut walk) {
                Ok(()) => {
                    outcome = SearchOutcome::Solved(walk.path.clone());
                    break;
                }
                Err(SearchError::NoPath) => (),
                Err(SearchError::BudgetExceeded) => {
                    outcome = SearchOutcome::BudgetExceeded;
                    break;
                }
            }
        }

        self.duration = start.elapsed().as_secs_f32();
        debug!(
            "Search result = {}  Steps = {}  Duration = {}",
            match &outcome {
                SearchOutcome::Solved(_) => "solved",
                SearchOutcome::Unsolvable => "unsolvable",
                SearchOutcome::BudgetExceeded => "budget exceeded",
            },
            self.steps,
            self.duration
        );
        outcome
    }

    /// Return the vertexes the path can start from, the most promising first.
    fn starting_vertexes(&self) -> Vec<usize> {
        let num_vertexes: usize = self.graph.num_vertexes();
        let first: Option<usize> = self.graph.vertexes.checkpoint_vertex(1);

        if self.config.strict_endpoints
            && let Some(v) = first
        {
            return vec![v];
        }

        // A cell with a checkpoint other than 1 cannot start the path
        let mut starts: Vec<usize> = (0..num_vertexes)
            .filter(|v| matches!(self.graph.vertexes.checkpoint(*v), None | Some(1)))
            .collect();

        // Without checkpoints, a path can be reversed. A cell with a single neighbor is at one
        // end of any path, so starting from these cells is enough.
        if self.num_checkpoints == 0 {
            let dead_ends: Vec<usize> = starts
                .iter()
                .copied()
                .filter(|v| self.graph.neighbors(*v).len() <= 1)
                .collect();
            if !dead_ends.is_empty() {
                starts = dead_ends;
            }
        }

        starts.sort_by_key(|v| (Some(*v) != first, self.graph.neighbors(*v).len(), *v));
        starts
    }

    /// Search for a path from the given starting vertex.
    fn start_from(&mut self, vertex: usize, walk: &mut Walk) -> Result<(), SearchError> {
        if !self.can_enter(walk, vertex) {
            return Err(SearchError::NoPath);
        }
        self.tick()?;
        self.visit(walk, vertex);

        let res: Result<(), SearchError> = if self.is_feasible(walk) {
            self.extend(walk)
        } else {
            Err(SearchError::NoPath)
        };
        if res.is_err() {
            self.leave(walk, vertex);
        }
        res
    }

    /// Recursively extend the path.
    fn extend(&mut self, walk: &mut Walk) -> Result<(), SearchError> {
        if walk.path.len() == self.graph.num_vertexes() {
            return Ok(());
        }
        let head: usize = walk.path.get_last().ok_or(SearchError::NoPath)?;

        // Try the vertexes with the fewest remaining options first
        let mut candidates: Vec<usize> = self
            .graph
            .neighbors(head)
            .iter()
            .copied()
            .filter(|v| !walk.path.contains(*v) && self.can_enter(walk, *v))
            .collect();
        candidates.sort_by_key(|v| (walk.free[*v], *v));

        for v in candidates {
            self.tick()?;
            self.visit(walk, v);
            if self.is_feasible(walk) {
                match self.extend(walk) {
                    Ok(()) => return Ok(()),
                    Err(SearchError::NoPath) => (),
                    Err(e) => return Err(e),
                }
            }
            self.leave(walk, v);
        }
        Err(SearchError::NoPath)
    }

    /// Consume one step of the budget.
    fn tick(&mut self) -> Result<(), SearchError> {
        self.steps += 1;
        if self.steps > self.config.step_budget {
            return Err(SearchError::BudgetExceeded);
        }
        Ok(())
    }

    /// Whether the vertex can be the next one in the path.
    fn can_enter(&self, walk: &Walk, vertex: usize) -> bool {
        if let Some(ordinal) = self.graph.vertexes.checkpoint(vertex)
            && ordinal != walk.next_ordinal
        {
            return false;
        }
        if self.ending_vertex == Some(vertex) && walk.path.len() + 1 != self.graph.num_vertexes() {
            return false;
        }
        true
    }

    /// Add the vertex to the path.
    fn visit(&self, walk: &mut Walk, vertex: usize) {
        walk.path.push(vertex);
        for &w in self.graph.neighbors(vertex) {
            walk.free[w] -= 1;
        }
        if let Some(ordinal) = self.graph.vertexes.checkpoint(vertex) {
            walk.next_ordinal = ordinal + 1;
        }
    }

    /// Remove the vertex, which must be the last one, from the path.
    fn leave(&self, walk: &mut Walk, vertex: usize) {
        walk.path.pop();
        for &w in self.graph.neighbors(vertex) {
            walk.free[w] += 1;
        }
        if let Some(ordinal) = self.graph.vertexes.checkpoint(vertex) {
            walk.next_ordinal = ordinal;
        }
    }

    /// Whether the partial path can still be completed, as far as the pruning rules can tell.
    fn is_feasible(&self, walk: &Walk) -> bool {
        let num_vertexes: usize = self.graph.num_vertexes();
        let remaining: usize = num_vertexes - walk.path.len();
        if remaining == 0 {
            return true;
        }
        let head: usize = match walk.path.get_last() {
            Some(v) => v,
            None => return false,
        };
        let head_neighbors: &[usize] = self.graph.neighbors(head);

        // Dead ends: a cell with a single connection must end the path
        let mut dead_ends: usize = 0;
        for v in (0..num_vertexes).filter(|v| !walk.path.contains(*v)) {
            let links: usize = walk.free[v] + usize::from(head_neighbors.contains(&v));
            match links {
                0 => return false,
                1 => match self.ending_vertex {
                    Some(end) if end != v => return false,
                    Some(_) => (),
                    None => {
                        dead_ends += 1;
                        if dead_ends > 1 {
                            return false;
                        }
                    }
                },
                _ => (),
            }
        }

        // Connectivity: all the remaining cells must be reachable from the head
        let reached: Vec<bool> = self.graph.flood(head, &walk.path, |_| false);
        if reached.iter().filter(|r| **r).count() != remaining {
            return false;
        }

        // Checkpoint order: the next checkpoint must be reachable without crossing a later one
        let next: u32 = walk.next_ordinal;
        if next < self.num_checkpoints
            && let Some(target) = self.graph.vertexes.checkpoint_vertex(next)
        {
            let reached: Vec<bool> = self.graph.flood(head, &walk.path, |v| {
                matches!(self.graph.vertexes.checkpoint(v), Some(o) if o > next)
            });
            if !reached[target] {
                return false;
            }
        }
        true
    }
}
