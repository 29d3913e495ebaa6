/*
vertexes.rs

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

//! Vertexes for cells in the Hexpass graph.
//!
//! The algorithms work on vertex IDs, from `0` to `num_vertexes - 1`, instead of coordinates.
//! The [`Vertexes`] object maps these IDs to the cell coordinates and to their checkpoint.

use std::collections::{BTreeMap, HashMap};

use crate::hex::Axial;

/// Represent the vertexes of the Hexpass graph.
#[derive(Debug, Clone)]
pub struct Vertexes {
    /// Number of vertexes (cells) in the graph.
    pub num_vertexes: usize,

    /// Vertex coordinates, indexed by vertex ID.
    coordinates: Vec<Axial>,

    /// Vertex IDs, indexed by coordinates.
    ids: HashMap<Axial, usize>,

    /// Checkpoint of each vertex.
    checkpoints: Vec<Option<u32>>,

    /// Vertex ID of each checkpoint, indexed by checkpoint number.
    checkpoint_vertexes: BTreeMap<u32, usize>,
}

impl Vertexes {
    /// Create a [`Vertexes`] object. The vertex IDs follow the order of the provided coordinates.
    pub fn new(coordinates: &[Axial]) -> Self {
        Self {
            num_vertexes: coordinates.len(),
            coordinates: coordinates.to_vec(),
            ids: coordinates
                .iter()
                .enumerate()
                .map(|(id, c)| (*c, id))
                .collect(),
            checkpoints: vec![None; coordinates.len()],
            checkpoint_vertexes: BTreeMap::new(),
        }
    }

    /// Return the coordinates of the given vertex.
    pub fn get_coordinates(&self, vertex: usize) -> Option<Axial> {
        self.coordinates.get(vertex).copied()
    }

    /// Return the vertex at the given coordinates.
    pub fn get_vertex(&self, coord: &Axial) -> Option<usize> {
        self.ids.get(coord).copied()
    }

    /// Set the checkpoint of the given vertex.
    pub fn set_checkpoint(&mut self, vertex: usize, ordinal: u32) {
        if let Some(previous) = self.checkpoints[vertex].replace(ordinal) {
            self.checkpoint_vertexes.remove(&previous);
        }
        self.checkpoint_vertexes.insert(ordinal, vertex);
    }

    /// Remove all the checkpoints.
    pub fn clear_checkpoints(&mut self) {
        self.checkpoints.fill(None);
        self.checkpoint_vertexes.clear();
    }

    /// Return the checkpoint of the given vertex.
    pub fn checkpoint(&self, vertex: usize) -> Option<u32> {
        self.checkpoints[vertex]
    }

    /// Return the vertex that carries the given checkpoint.
    pub fn checkpoint_vertex(&self, ordinal: u32) -> Option<usize> {
        self.checkpoint_vertexes.get(&ordinal).copied()
    }

    /// Number of checkpoints.
    pub fn num_checkpoints(&self) -> u32 {
        self.checkpoint_vertexes.len() as u32
    }

    /// Return the highest checkpoint number and its vertex.
    pub fn last_checkpoint(&self) -> Option<(u32, usize)> {
        self.checkpoint_vertexes
            .last_key_value()
            .map(|(o, v)| (*o, *v))
    }

    /// Convert a list of vertex IDs into coordinates.
    pub fn to_coordinates(&self, vertexes: &[usize]) -> Vec<Axial> {
        vertexes
            .iter()
            .filter_map(|v| self.get_coordinates(*v))
            .collect()
    }

    /// Iterate over the vertex IDs and their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Axial)> + '_ {
        self.coordinates.iter().copied().enumerate()
    }
}
