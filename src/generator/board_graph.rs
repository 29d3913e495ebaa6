/*
board_graph.rs

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

//! Internal graph representation of a Hexpass board.
//!
//! The [`BoardGraph`] object groups the vertexes and the edges.
//! The vertexes are the cells and the edges join adjacent cells.
//! Walls do not remove edges: their status is set to [`EdgeStatus::Walled`].

use log::{Level, debug, log_enabled};

use super::edges::{EdgeStatus, Edges};
use super::path::SearchPath;
use super::vertexes::Vertexes;
use crate::board::wall::Wall;
use crate::board::{Board, Cell};
use crate::hex::Axial;

/// Board graph object.
#[derive(Debug, Clone)]
pub struct BoardGraph {
    /// Cells of the board.
    pub vertexes: Vertexes,

    /// Sides between adjacent cells.
    pub edges: Edges,

    /// For each vertex, the adjacent vertexes that are not behind a wall. The search algorithms
    /// read these lists at each step, so they are kept up to date instead of being rebuilt from
    /// [`BoardGraph::edges`].
    open: Vec<Vec<usize>>,
}

impl BoardGraph {
    /// Create the graph for the given cells, without walls or checkpoints.
    pub fn from_coordinates(coordinates: &[Axial]) -> Self {
        let vertexes: Vertexes = Vertexes::new(coordinates);
        let mut edges: Edges = Edges::new(vertexes.num_vertexes);

        for (v1, c) in vertexes.iter() {
            let e: Vec<usize> = c
                .neighbors()
                .filter_map(|n| vertexes.get_vertex(&n))
                .collect();
            edges.push_from_array(v1, &e, EdgeStatus::Open);
        }

        let open: Vec<Vec<usize>> = (0..vertexes.num_vertexes)
            .map(|v| edges.get_open_vertexes(v))
            .collect();
        Self {
            vertexes,
            edges,
            open,
        }
    }

    /// Create the graph of the given board.
    ///
    /// Checkpoints and walls that reference cells outside the board are ignored. Use
    /// [`Board::check_structure`] beforehand to reject such boards.
    pub fn from_board(board: &Board) -> Self {
        let coordinates: Vec<Axial> = board.cells().map(|c| c.coord).collect();
        let mut graph: BoardGraph = Self::from_coordinates(&coordinates);

        for cell in board.cells() {
            if let Some(ordinal) = cell.checkpoint
                && let Some(v) = graph.vertexes.get_vertex(&cell.coord)
            {
                graph.vertexes.set_checkpoint(v, ordinal);
            }
        }
        for wall in board.walls() {
            let (a, b) = wall.cells();
            if let (Some(v1), Some(v2)) = (graph.vertexes.get_vertex(&a), graph.vertexes.get_vertex(&b))
            {
                graph.set_status(v1, v2, EdgeStatus::Walled);
            }
        }

        if log_enabled!(Level::Debug) {
            debug!("Graph for board {}", board.id());
            graph.edges.debug();
        }
        graph
    }

    /// Number of vertexes in the graph.
    pub fn num_vertexes(&self) -> usize {
        self.vertexes.num_vertexes
    }

    /// Adjacent vertexes that are not behind a wall.
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        &self.open[vertex][..]
    }

    /// Whether the path can go from one vertex to the other.
    pub fn is_open(&self, vertex1: usize, vertex2: usize) -> bool {
        matches!(
            self.edges.get_status(vertex1, vertex2),
            Some(EdgeStatus::Open | EdgeStatus::Traced)
        )
    }

    /// Set the status of the edge between the given vertexes.
    pub fn set_status(&mut self, vertex1: usize, vertex2: usize, status: EdgeStatus) {
        self.edges.set_status(vertex1, vertex2, status);
        self.open[vertex1] = self.edges.get_open_vertexes(vertex1);
        self.open[vertex2] = self.edges.get_open_vertexes(vertex2);
    }

    /// Return the vertexes that can be reached from `start` without going through the vertexes of
    /// the path.
    ///
    /// Vertexes for which `stop` returns `true` are reached, but the exploration does not continue
    /// through them.
    pub fn flood<F>(&self, start: usize, path: &SearchPath, stop: F) -> Vec<bool>
    where
        F: Fn(usize) -> bool,
    {
        let mut reached: Vec<bool> = vec![false; self.num_vertexes()];
        let mut stack: Vec<usize> = Vec::with_capacity(self.num_vertexes());

        stack.push(start);
        while let Some(v) = stack.pop() {
            for &w in &self.open[v] {
                if reached[w] || path.contains(w) {
                    continue;
                }
                reached[w] = true;
                if !stop(w) {
                    stack.push(w);
                }
            }
        }
        reached
    }

    /// Build a [`Board`] object from the graph.
    pub fn to_board(&self, id: &str, size: u32) -> Board {
        let cells: Vec<Cell> = self
            .vertexes
            .iter()
            .map(|(v, coord)| Cell {
                coord,
                checkpoint: self.vertexes.checkpoint(v),
            })
            .collect();
        let walls: Vec<Wall> = self
            .edges
            .list(EdgeStatus::Walled)
            .into_iter()
            .filter_map(|(v1, v2)| {
                Some(Wall::new(
                    self.vertexes.get_coordinates(v1)?,
                    self.vertexes.get_coordinates(v2)?,
                ))
            })
            .collect();
        Board::new(id, size, cells, walls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex;

    #[test]
    fn hexagon_degrees() {
        let g: BoardGraph = BoardGraph::from_coordinates(&hex::board_coordinates(2));
        let center: usize = g.vertexes.get_vertex(&Axial::ORIGIN).unwrap();
        assert_eq!(g.neighbors(center).len(), 6);
        for (v, c) in g.vertexes.iter() {
            if c != Axial::ORIGIN {
                assert_eq!(g.neighbors(v).len(), 3);
            }
        }
    }

    #[test]
    fn walls_close_edges() {
        let mut g: BoardGraph = BoardGraph::from_coordinates(&hex::board_coordinates(2));
        let a: usize = g.vertexes.get_vertex(&Axial::new(0, 0)).unwrap();
        let b: usize = g.vertexes.get_vertex(&Axial::new(1, 0)).unwrap();
        assert!(g.is_open(a, b));
        g.set_status(a, b, EdgeStatus::Walled);
        assert!(!g.is_open(b, a));
        assert!(!g.neighbors(a).contains(&b));
        assert!(!g.neighbors(b).contains(&a));
        g.set_status(a, b, EdgeStatus::Traced);
        assert!(g.is_open(a, b));
    }

    #[test]
    fn board_round_trip() {
        let coords: Vec<Axial> = hex::board_coordinates(2);
        let mut cells: Vec<Cell> = coords.iter().map(|c| Cell::new(*c)).collect();
        cells[0].checkpoint = Some(1);
        cells[6].checkpoint = Some(2);
        let wall: Wall = Wall::new(Axial::new(0, 0), Axial::new(0, 1));
        let board: Board = Board::new("b", 2, cells, vec![wall]);

        let g: BoardGraph = BoardGraph::from_board(&board);
        assert_eq!(g.vertexes.num_checkpoints(), 2);
        assert_eq!(g.edges.list(EdgeStatus::Walled).len(), 1);

        let rebuilt: Board = g.to_board("b", 2);
        assert_eq!(rebuilt.walls(), &[wall]);
        assert_eq!(rebuilt.checkpoint_count(), 2);
        assert_eq!(
            rebuilt.cells().collect::<Vec<_>>(),
            board.cells().collect::<Vec<_>>()
        );
    }

    #[test]
    fn flood_stops_at_the_path_and_at_stop_vertexes() {
        // Size 2 board: the path holds the center, so the six ring cells remain connected
        let g: BoardGraph = BoardGraph::from_coordinates(&hex::board_coordinates(2));
        let center: usize = g.vertexes.get_vertex(&Axial::ORIGIN).unwrap();
        let mut path: SearchPath = SearchPath::new(g.num_vertexes());
        path.push(center);
        let reached: Vec<bool> = g.flood(center, &path, |_| false);
        assert_eq!(reached.iter().filter(|r| **r).count(), 6);
        assert!(!reached[center]);

        // Stopping at (1,0) and (-1,0) splits the ring, but both halves touch the center
        let east: usize = g.vertexes.get_vertex(&Axial::new(1, 0)).unwrap();
        let west: usize = g.vertexes.get_vertex(&Axial::new(-1, 0)).unwrap();
        let start: usize = g.vertexes.get_vertex(&Axial::new(0, -1)).unwrap();
        path.push(start);
        let reached: Vec<bool> = g.flood(start, &path, |v| v == east || v == west);
        let count: usize = reached.iter().filter(|r| **r).count();
        assert!(reached[east] && reached[west]);
        // (1,-1), (1,0) and (-1,0) from (0,-1); the southern cells stay behind (1,0) and (-1,0)
        assert_eq!(count, 3);
    }
}
