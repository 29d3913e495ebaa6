/*
hex.rs

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

//! Coordinates of the cells in the hexagonal grid.
//!
//! Cells are addressed with axial `(q, r)` coordinates.
//! The third cube coordinate is implicit: `s = -q - r`.
//!
//! ```text
//!        (0,-1) (1,-1)
//!    (-1,0) (0,0) (1,0)
//!        (-1,1) (0,1)
//! ```
//!
//! A board of size `n` covers every cell at a distance strictly lower than `n` from the origin.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

/// Directions from a cell to its six adjacent cells.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[repr(u8)]
pub enum Direction {
    East,
    NorthEast,
    NorthWest,
    West,
    SouthWest,
    SouthEast,
}

impl Direction {
    /// Iterate over the six directions, starting east and turning counterclockwise.
    pub fn all() -> impl Iterator<Item = Direction> {
        (0..6).filter_map(Direction::from_repr)
    }

    /// Axial offset `(dq, dr)` of the direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::NorthEast => (1, -1),
            Direction::NorthWest => (0, -1),
            Direction::West => (-1, 0),
            Direction::SouthWest => (-1, 1),
            Direction::SouthEast => (0, 1),
        }
    }

    /// Direction pointing the other way.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::East => Direction::West,
            Direction::NorthEast => Direction::SouthWest,
            Direction::NorthWest => Direction::SouthEast,
            Direction::West => Direction::East,
            Direction::SouthWest => Direction::NorthEast,
            Direction::SouthEast => Direction::NorthWest,
        }
    }
}

/// Axial coordinates of a cell.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Axial {
    pub q: i32,
    pub r: i32,
}

impl fmt::Display for Axial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.q, self.r)
    }
}

impl Axial {
    /// Coordinates of the central cell.
    pub const ORIGIN: Axial = Axial { q: 0, r: 0 };

    /// Create an [`Axial`] object.
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Implicit third cube coordinate.
    ///
    /// The value is an `i64` because `-q - r` does not always fit in an `i32`.
    pub fn s(&self) -> i64 {
        -i64::from(self.q) - i64::from(self.r)
    }

    /// Return the adjacent cell in the given direction.
    ///
    /// Returns `None` when the coordinates of that cell cannot be represented.
    pub fn neighbor(&self, direction: Direction) -> Option<Axial> {
        let (dq, dr) = direction.offset();
        Some(Axial::new(self.q.checked_add(dq)?, self.r.checked_add(dr)?))
    }

    /// Iterate over the adjacent cells, in the [`Direction::all`] order.
    ///
    /// At the edge of the `i32` range, fewer than six cells are returned.
    pub fn neighbors(&self) -> impl Iterator<Item = Axial> + use<> {
        let c: Axial = *self;
        Direction::all().filter_map(move |d| c.neighbor(d))
    }

    /// Number of steps between two cells.
    pub fn distance(&self, other: &Axial) -> u64 {
        let dq: i64 = i64::from(self.q) - i64::from(other.q);
        let dr: i64 = i64::from(self.r) - i64::from(other.r);
        let ds: i64 = self.s() - other.s();
        (dq.unsigned_abs() + dr.unsigned_abs() + ds.unsigned_abs()) / 2
    }

    /// Distance from the origin.
    pub fn length(&self) -> u64 {
        self.distance(&Axial::ORIGIN)
    }

    /// Whether the two cells share a side.
    pub fn is_adjacent(&self, other: &Axial) -> bool {
        self.distance(other) == 1
    }

    /// Direction to follow to reach an adjacent cell.
    pub fn direction_to(&self, other: &Axial) -> Option<Direction> {
        Direction::all().find(|d| self.neighbor(*d) == Some(*other))
    }

    /// Key used to identify the cell in serialized boards, such as `"-1,2"`.
    pub fn key(&self) -> String {
        format!("{},{}", self.q, self.r)
    }

    /// Parse a key produced by [`Axial::key`].
    pub fn from_key(key: &str) -> Option<Axial> {
        let (q, r) = key.split_once(',')?;
        Some(Axial::new(q.trim().parse().ok()?, r.trim().parse().ok()?))
    }
}

/// Iterate over the coordinates at a distance lower or equal to `radius` from the origin.
///
/// The coordinates are produced by `q` and then by `r`, which is the [`Axial`] ordering.
/// Coordinates outside of the `i32` range are skipped. Every column of the hexagon contains
/// the `r = 0` row, so the iterator never spins over empty columns.
pub fn coordinates_within(radius: u32) -> impl Iterator<Item = Axial> {
    let n: i64 = i64::from(radius);
    let lowest: i64 = i64::from(i32::MIN);
    let highest: i64 = i64::from(i32::MAX);

    (lowest.max(-n)..=highest.min(n)).flat_map(move |q| {
        let r_min: i64 = (-n).max(-q - n).max(lowest);
        let r_max: i64 = n.min(-q + n).min(highest);
        (r_min..=r_max).map(move |r| Axial::new(q as i32, r as i32))
    })
}

/// Return all the coordinates at a distance lower or equal to `radius` from the origin.
///
/// There are `1 + 3 * radius * (radius + 1)` such coordinates.
/// They are ordered by `q` and then by `r`, which is the [`Axial`] ordering.
pub fn within_radius(radius: u32) -> Vec<Axial> {
    coordinates_within(radius).collect()
}

/// Iterate over the coordinates of the cells of a board of the given size.
pub fn board_cells(size: u32) -> impl Iterator<Item = Axial> {
    size.checked_sub(1).into_iter().flat_map(coordinates_within)
}

/// Return the coordinates of the cells of a board of the given size.
///
/// The board covers every cell at a distance strictly lower than `size` from the origin.
pub fn board_coordinates(size: u32) -> Vec<Axial> {
    board_cells(size).collect()
}

/// Number of cells of a board of the given size.
///
/// Returns `None` when the number does not fit in a `u64`.
pub fn cell_count(size: u32) -> Option<u64> {
    match u64::from(size) {
        0 => Some(0),
        s => 3u64.checked_mul(s * (s - 1))?.checked_add(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn within_radius_counts() {
        assert_eq!(within_radius(0), vec![Axial::ORIGIN]);
        assert_eq!(within_radius(1).len(), 7);
        assert_eq!(within_radius(2).len(), 19);
        assert_eq!(within_radius(3).len(), 37);
    }

    #[test]
    fn board_sizes() {
        assert!(board_coordinates(0).is_empty());
        assert_eq!(board_coordinates(1), vec![Axial::ORIGIN]);
        assert_eq!(board_coordinates(2).len(), 7);
        assert_eq!(board_coordinates(3).len(), 19);
        assert_eq!(board_coordinates(4).len(), 37);
        for size in 0..8 {
            assert_eq!(Some(board_coordinates(size).len() as u64), cell_count(size));
        }
    }

    #[test]
    fn huge_sizes() {
        assert_eq!(cell_count(100_000), Some(29_999_700_001));
        assert_eq!(cell_count(u32::MAX), None);

        // The iterator is lazy: only the first coordinates are computed
        let first: Vec<Axial> = board_cells(100_000).take(2).collect();
        assert_eq!(first, vec![Axial::new(-99_999, 0), Axial::new(-99_999, 1)]);
        let first: Option<Axial> = board_cells(u32::MAX).next();
        assert_eq!(first, Some(Axial::new(i32::MIN, -2_147_483_646)));
    }

    #[test]
    fn neighbors_of_origin() {
        let n: Vec<Axial> = Axial::ORIGIN.neighbors().collect();
        assert_eq!(n.len(), 6);
        assert_eq!(n[0], Axial::new(1, 0));
        assert_eq!(n[3], Axial::new(-1, 0));
        assert!(n.iter().all(|c| c.length() == 1));
    }

    #[test]
    fn neighbors_at_the_edge_of_the_range() {
        let corner: Axial = Axial::new(i32::MAX, i32::MIN);
        assert_eq!(corner.neighbor(Direction::East), None);
        assert_eq!(corner.neighbor(Direction::NorthWest), None);
        assert_eq!(
            corner.neighbor(Direction::West),
            Some(Axial::new(i32::MAX - 1, i32::MIN))
        );
        assert_eq!(corner.neighbors().count(), 3);
        assert_eq!(corner.s(), 1);
        assert_eq!(Axial::new(i32::MIN, 0).length(), 2_147_483_648);
        assert_eq!(
            Axial::new(i32::MIN, 0).distance(&Axial::new(i32::MAX, 0)),
            4_294_967_295
        );
    }

    #[test]
    fn opposite_directions_cancel() {
        let c: Axial = Axial::new(2, -1);
        for d in Direction::all() {
            let n: Axial = c.neighbor(d).unwrap();
            assert_eq!(n.neighbor(d.opposite()), Some(c));
            assert_eq!(c.direction_to(&n), Some(d));
        }
        assert_eq!(c.direction_to(&Axial::new(4, -1)), None);
    }

    #[test]
    fn distance_uses_the_cube_coordinate() {
        assert_eq!(Axial::new(2, -1).length(), 2);
        assert_eq!(Axial::new(-3, 3).length(), 3);
        assert_eq!(Axial::new(1, 1).distance(&Axial::new(-1, 0)), 3);
        assert!(!Axial::new(1, 1).is_adjacent(&Axial::new(0, 0)));
        assert!(Axial::new(1, -1).is_adjacent(&Axial::new(0, 0)));
    }

    #[test]
    fn keys() {
        let c: Axial = Axial::new(-1, 2);
        assert_eq!(c.key(), "-1,2");
        assert_eq!(Axial::from_key("-1,2"), Some(c));
        assert_eq!(Axial::from_key(" 3 , -4 "), Some(Axial::new(3, -4)));
        assert_eq!(Axial::from_key("3"), None);
        assert_eq!(Axial::from_key("a,b"), None);
    }
}
