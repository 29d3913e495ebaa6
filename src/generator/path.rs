/*
path.rs

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

//! Path in the Hexpass graph.

/// Path object.
#[derive(Debug, Default, Clone)]
pub struct SearchPath {
    /// Path as an ordered list of vertexes.
    path: Vec<usize>,

    /// Stores the visited status of the vertexes, indexed by vertex ID.
    /// Instead of looking for the vertex in the [`SearchPath::path`] vector, this vector speeds up
    /// the lookup.
    visited: Vec<bool>,
}

impl PartialEq for SearchPath {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl SearchPath {
    /// Create a [`SearchPath`] object for a graph with the given number of vertexes.
    pub fn new(num_vertexes: usize) -> Self {
        Self {
            path: Vec::with_capacity(num_vertexes),
            visited: vec![false; num_vertexes],
        }
    }

    /// Add a vertex to the path.
    pub fn push(&mut self, vertex: usize) {
        self.path.push(vertex);
        self.visited[vertex] = true;
    }

    /// Remove the last vertex from the path.
    pub fn pop(&mut self) -> Option<usize> {
        let v: usize = self.path.pop()?;
        self.visited[v] = false;
        Some(v)
    }

    /// Get the number of vertexes in the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Whether the vertex is in the path or not.
    pub fn contains(&self, vertex: usize) -> bool {
        self.visited.get(vertex).copied().unwrap_or(false)
    }

    /// Return a reference to the path vector.
    pub fn get(&self) -> &[usize] {
        &self.path[..]
    }

    /// Return the first vertex in the path.
    pub fn get_first(&self) -> Option<usize> {
        self.path.first().copied()
    }

    /// Return the last vertex in the path.
    pub fn get_last(&self) -> Option<usize> {
        self.path.last().copied()
    }

    /// Iterate over the consecutive pairs of vertexes.
    pub fn steps(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.path.windows(2).map(|w| (w[0], w[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_pop() {
        let mut p: SearchPath = SearchPath::new(4);
        assert!(p.is_empty());
        assert_eq!(p.get_first(), None);
        p.push(2);
        p.push(0);
        p.push(3);
        assert_eq!(p.len(), 3);
        assert!(p.contains(0));
        assert!(!p.contains(1));
        assert!(!p.contains(42));
        assert_eq!(p.get_first(), Some(2));
        assert_eq!(p.get_last(), Some(3));
        assert_eq!(p.steps().collect::<Vec<_>>(), vec![(2, 0), (0, 3)]);

        assert_eq!(p.pop(), Some(3));
        assert!(!p.contains(3));
        assert_eq!(p.pop(), Some(0));
        assert_eq!(p.pop(), Some(2));
        assert!(p.is_empty());
        assert!(!p.contains(2));
        assert_eq!(p.pop(), None);
    }
}
