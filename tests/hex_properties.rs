/*
hex_properties.rs

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

use proptest::prelude::*;
use std::collections::HashSet;

use hexpass::board::wall::Wall;
use hexpass::hex::{self, Axial, Direction};

fn axial() -> impl Strategy<Value = Axial> {
    (-50i32..50, -50i32..50).prop_map(|(q, r)| Axial::new(q, r))
}

fn any_axial() -> impl Strategy<Value = Axial> {
    (any::<i32>(), any::<i32>()).prop_map(|(q, r)| Axial::new(q, r))
}

proptest! {
    #[test]
    fn radius_cell_count(radius in 0u32..12) {
        let cells: Vec<Axial> = hex::within_radius(radius);
        let expected: usize = 1 + 3 * radius as usize * (radius as usize + 1);
        prop_assert_eq!(cells.len(), expected);

        let distinct: HashSet<Axial> = cells.iter().copied().collect();
        prop_assert_eq!(distinct.len(), expected);
        for c in &cells {
            prop_assert!(c.length() <= u64::from(radius));
        }
    }

    #[test]
    fn board_cells_below_size(size in 1u32..12) {
        let cells: Vec<Axial> = hex::board_coordinates(size);
        prop_assert_eq!(Some(cells.len() as u64), hex::cell_count(size));
        prop_assert_eq!(cells, hex::within_radius(size - 1));
    }

    #[test]
    fn distance_is_a_metric(a in axial(), b in axial(), c in axial()) {
        prop_assert_eq!(a.distance(&b), b.distance(&a));
        prop_assert_eq!(a.distance(&a), 0);
        prop_assert!(a.distance(&c) <= a.distance(&b) + b.distance(&c));
    }

    #[test]
    fn neighbors_are_adjacent(a in axial()) {
        for d in Direction::all() {
            let n: Axial = a.neighbor(d).unwrap();
            prop_assert!(a.is_adjacent(&n));
            prop_assert!(n.is_adjacent(&a));
            prop_assert_eq!(a.direction_to(&n), Some(d));
            prop_assert_eq!(n.neighbor(d.opposite()), Some(a));
        }
    }

    #[test]
    fn whole_coordinate_range(a in any_axial(), b in any_axial()) {
        prop_assert_eq!(a.distance(&b), b.distance(&a));
        prop_assert!(a.distance(&b) <= a.length() + b.length());
        for n in a.neighbors() {
            prop_assert!(a.is_adjacent(&n));
        }
        prop_assert!(a.neighbors().count() >= 2);
    }

    #[test]
    fn key_round_trip(a in any_axial()) {
        prop_assert_eq!(Axial::from_key(&a.key()), Some(a));
    }

    #[test]
    fn walls_are_unordered(a in axial(), b in axial()) {
        prop_assert_eq!(Wall::new(a, b), Wall::new(b, a));
        prop_assert_eq!(Wall::new(a, b).is_adjacent(), a.is_adjacent(&b));
    }
}
