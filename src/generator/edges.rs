/*
edges.rs

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

//! Edges between vertexes in the Hexpass graph.

use log::debug;

/// Status of the edges in the Hexpass graph.
///
/// - an `Open` edge can be crossed.
/// - a `Traced` edge can be crossed and is used by the path the generator traced. The generator
///   never puts a wall on such an edge.
/// - a `Walled` edge is blocked by a wall; similar to removing the edge.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EdgeStatus {
    Open,
    Traced,
    Walled,
}

/// Represent the edges in the Hexpass graph.
#[derive(Debug, Clone, Default)]
pub struct Edges {
    /// For each vertex, the list of the adjacent vertexes with the status of the edge.
    edges: Vec<Vec<(usize, EdgeStatus)>>,
}

impl Edges {
    /// Create the edge object for the given number of vertexes, without any edge.
    pub fn new(num_vertexes: usize) -> Self {
        Self {
            edges: vec![Vec::with_capacity(6); num_vertexes],
        }
    }

    /// Add all the adjacent vertexes of the given vertex.
    pub fn push_from_array(
        &mut self,
        vertex: usize,
        adjacent_vertex_array: &[usize],
        status: EdgeStatus,
    ) {
        // Because the method is used in a loop to initialize all the edges, it is not necessary to
        // create the edges in both directions.
        self.edges[vertex] = adjacent_vertex_array.iter().map(|v| (*v, status)).collect();
    }

    /// For the given vertex, return all the adjacent vertexes that are not behind a wall.
    pub fn get_open_vertexes(&self, vertex: usize) -> Vec<usize> {
        match self.edges.get(vertex) {
            Some(a) => a
                .iter()
                .filter(|t| t.1 != EdgeStatus::Walled)
                .map(|t| t.0)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Return the status of the edge between the given vertexes, or [`None`] if they are not
    /// adjacent.
    pub fn get_status(&self, vertex1: usize, vertex2: usize) -> Option<EdgeStatus> {
        self.edges
            .get(vertex1)?
            .iter()
            .find(|t| t.0 == vertex2)
            .map(|t| t.1)
    }

    /// Set the status of the edge between the given vertexes.
    pub fn set_status(&mut self, vertex1: usize, vertex2: usize, status: EdgeStatus) {
        if let Some(a) = self.edges.get_mut(vertex1) {
            for t in a.iter_mut().filter(|t| t.0 == vertex2) {
                t.1 = status;
            }
        }

        if let Some(a) = self.edges.get_mut(vertex2) {
            for t in a.iter_mut().filter(|t| t.0 == vertex1) {
                t.1 = status;
            }
        }
    }

    /// Return each edge with the given status once, as `(vertex1, vertex2)` with
    /// `vertex1 < vertex2`.
    pub fn list(&self, status: EdgeStatus) -> Vec<(usize, usize)> {
        let mut l: Vec<(usize, usize)> = Vec::new();
        for (v1, e) in self.edges.iter().enumerate() {
            for (v2, s) in e {
                if v1 < *v2 && *s == status {
                    l.push((v1, *v2));
                }
            }
        }
        l
    }

    /// Print the edges.
    pub fn debug(&self) {
        let mut s: String = String::new();

        for (v1, e) in self.edges.iter().enumerate() {
            s.clear();
            s.push_str(&format!("{v1:>3} -->"));
            for (v2, c) in e {
                match c {
                    EdgeStatus::Traced => s.push_str(&format!(" {v2}(traced)")),
                    EdgeStatus::Open => s.push_str(&format!(" {v2}")),
                    EdgeStatus::Walled => s.push_str(&format!(" {v2}(wall)")),
                }
            }
            debug!("{s}");
        }
    }
}
