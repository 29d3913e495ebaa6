/*
wall.rs

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

//! Walls between cells.
//!
//! A wall blocks the side shared by two adjacent cells, in both directions.
//!
//! ```text
//!  / \    / \           / \    / \
//! |   |  |   |   ===>  |   |##|   |
//!  \ /    \ /           \ /    \ /
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::hex::Axial;

/// Wall representation.
///
/// The two cells are not ordered: `Wall::new(a, b) == Wall::new(b, a)`.
#[derive(Debug, Copy, Clone)]
pub struct Wall {
    cell1: Axial,
    cell2: Axial,
}

impl Hash for Wall {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (a, b) = self.ordered();
        a.hash(state);
        b.hash(state);
    }
}

impl PartialEq for Wall {
    fn eq(&self, other: &Self) -> bool {
        (self.cell1 == other.cell1 && self.cell2 == other.cell2)
            || (self.cell1 == other.cell2 && self.cell2 == other.cell1)
    }
}

impl Eq for Wall {}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.cell1, self.cell2)
    }
}

impl Wall {
    /// Create a [`Wall`] object between the two cells.
    pub fn new(cell1: Axial, cell2: Axial) -> Self {
        Self { cell1, cell2 }
    }

    /// Return the two cells, as provided at creation time.
    pub fn cells(&self) -> (Axial, Axial) {
        (self.cell1, self.cell2)
    }

    /// Return the two cells, the smaller first.
    pub fn ordered(&self) -> (Axial, Axial) {
        if self.cell1 <= self.cell2 {
            (self.cell1, self.cell2)
        } else {
            (self.cell2, self.cell1)
        }
    }

    /// Whether the wall blocks the move between the two given cells.
    pub fn blocks(&self, from: &Axial, to: &Axial) -> bool {
        *self == Wall::new(*from, *to)
    }

    /// Whether the two sides are adjacent cells.
    pub fn is_adjacent(&self) -> bool {
        self.cell1.is_adjacent(&self.cell2)
    }
}
