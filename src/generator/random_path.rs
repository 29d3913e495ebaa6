/*
random_path.rs

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

//! Generate a random path that visits every cell.
//!
//! The walk prefers the cells with the fewest unvisited neighbors, and breaks ties randomly.
//! That way, the walk does not leave isolated cells behind and the path looks random.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use std::time::Instant;

use super::board_graph::BoardGraph;
use super::path::SearchPath;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum RandomPathError {
    /// No possible path.
    NoPath,

    /// No path found before the step limit.
    StepsExceeded,
}

/// [`RandomPath`] object.
pub struct RandomPath<'a> {
    /// Starting vertex of the last generated path.
    pub starting_vertex: usize,

    /// Number of vertexes in the graph.
    pub num_vertexes: usize,

    /// Number of iterations it took to generate the last random path.
    pub iteration: u64,

    /// Duration in seconds it took to generate the last random path.
    pub duration: f32,

    /// Graph to walk through.
    graph: &'a BoardGraph,

    /// Maximum number of iterations before giving up.
    max_steps: u64,

    /// For each vertex, the number of adjacent vertexes not in the path.
    free: Vec<usize>,
}

impl<'a> RandomPath<'a> {
    /// Create the object.
    pub fn new(graph: &'a BoardGraph, max_steps: u64) -> Self {
        Self {
            starting_vertex: 0,
            num_vertexes: graph.num_vertexes(),
            iteration: 0,
            duration: 0.0,
            graph,
            max_steps,
            free: Vec::new(),
        }
    }

    /// Generate and return a random path.
    ///
    /// If `starting_vertex` is not provided, then a random vertex is selected.
    ///
    /// # Errors
    ///
    /// The method returns an error if a path cannot be found, or if it takes too many iterations
    /// to produce a path. In that later case, the method can be retried.
    pub fn generate<R: Rng>(
        &mut self,
        rng: &mut R,
        starting_vertex: Option<usize>,
    ) -> Result<SearchPath, RandomPathError> {
        let start: Instant = Instant::now();
        self.iteration = 0;
        self.duration = 0.0;

        if self.num_vertexes == 0 {
            return Err(RandomPathError::NoPath);
        }
        self.starting_vertex = match starting_vertex {
            Some(v) => v.min(self.num_vertexes - 1),
            None => rng.random_range(0..self.num_vertexes),
        };
        self.free = (0..self.num_vertexes)
            .map(|v| self.graph.neighbors(v).len())
            .collect();

        debug!(
            "Starting vertex = {}  Number of vertexes = {}",
            self.starting_vertex, self.num_vertexes
        );

        let mut path: SearchPath = SearchPath::new(self.num_vertexes);
        let res: Result<(), RandomPathError> =
            self.find_path(rng, self.starting_vertex, &mut path);
        self.duration = start.elapsed().as_secs_f32();
        debug!(
            "Iterations = {}  Duration = {}",
            self.iteration, self.duration
        );
        res.map(|()| path)
    }

    /// Recursively find a path.
    fn find_path<R: Rng>(
        &mut self,
        rng: &mut R,
        current_vertex: usize,
        path: &mut SearchPath,
    ) -> Result<(), RandomPathError> {
        self.iteration += 1;
        if self.iteration > self.max_steps {
            return Err(RandomPathError::StepsExceeded);
        }

        self.push(current_vertex, path);
        if path.len() == self.num_vertexes {
            return Ok(());
        }
        if !self.is_viable(current_vertex, path) {
            self.pop(current_vertex, path);
            return Err(RandomPathError::NoPath);
        }

        // Randomize the order in which to test the edges, then try the tightest vertexes first
        let mut indices: Vec<usize> = self
            .graph
            .neighbors(current_vertex)
            .iter()
            .filter(|&vertex| !path.contains(*vertex))
            .copied()
            .collect();
        indices.shuffle(rng);
        indices.sort_by_key(|v| self.free[*v]);

        for v2 in indices {
            match self.find_path(rng, v2, path) {
                Ok(()) => return Ok(()),
                Err(RandomPathError::NoPath) => (),
                Err(e) => return Err(e),
            }
        }
        self.pop(current_vertex, path);
        Err(RandomPathError::NoPath)
    }

    fn push(&mut self, vertex: usize, path: &mut SearchPath) {
        path.push(vertex);
        for &w in self.graph.neighbors(vertex) {
            self.free[w] -= 1;
        }
    }

    fn pop(&mut self, vertex: usize, path: &mut SearchPath) {
        path.pop();
        for &w in self.graph.neighbors(vertex) {
            self.free[w] += 1;
        }
    }

    /// Whether the unvisited vertexes can still be covered from the head of the path.
    fn is_viable(&self, head: usize, path: &SearchPath) -> bool {
        let head_neighbors: &[usize] = self.graph.neighbors(head);
        let mut dead_ends: usize = 0;
        let mut remaining: usize = 0;

        for v in (0..self.num_vertexes).filter(|v| !path.contains(*v)) {
            remaining += 1;
            match self.free[v] + usize::from(head_neighbors.contains(&v)) {
                0 => return false,
                // Only one vertex can end the path
                1 => {
                    dead_ends += 1;
                    if dead_ends > 1 {
                        return false;
                    }
                }
                _ => (),
            }
        }

        let reached: Vec<bool> = self.graph.flood(head, path, |_| false);
        reached.iter().filter(|r| **r).count() == remaining
    }
}
