/*
board.rs

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

//! Hexpass boards.
//!
//! A [`Board`] is a hexagon of cells.
//! Some cells carry a checkpoint number, and walls block some of the sides between adjacent cells.
//! The player must draw a path that goes through every cell once, through the checkpoints in
//! ascending order, and that never crosses a wall.
//!
//! A [`Board`] object is never modified after its creation.
//! It can be built from external data that breaks the board invariants: the
//! [`Board::check_structure`] method reports these errors.
//!
//! See [`codec`] for the JSON representation.

pub mod codec;
pub mod wall;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

use crate::config::MAX_RENDER_SIZE;
use crate::error::StructuralError;
use crate::hex::{self, Axial};
use wall::Wall;

/// A board cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cell {
    pub coord: Axial,

    /// Checkpoint number, starting at 1.
    pub checkpoint: Option<u32>,
}

impl Cell {
    /// Create a [`Cell`] object without checkpoint.
    pub fn new(coord: Axial) -> Self {
        Self {
            coord,
            checkpoint: None,
        }
    }

    /// Create a [`Cell`] object with a checkpoint.
    pub fn with_checkpoint(coord: Axial, ordinal: u32) -> Self {
        Self {
            coord,
            checkpoint: Some(ordinal),
        }
    }
}

/// Board representation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "codec::BoardRecord", into = "codec::BoardRecord")]
pub struct Board {
    id: String,

    /// Cells are at a distance strictly lower than `size` from the origin.
    size: u32,

    cells: BTreeMap<Axial, Cell>,

    walls: Vec<Wall>,

    checkpoint_count: u32,
}

impl Board {
    /// Create a [`Board`] object.
    ///
    /// The checkpoint count is the number of cells that carry a checkpoint.
    pub fn new(id: &str, size: u32, cells: Vec<Cell>, walls: Vec<Wall>) -> Self {
        let checkpoint_count: u32 = cells.iter().filter(|c| c.checkpoint.is_some()).count() as u32;
        Self::from_parts(id.to_string(), size, cells, walls, checkpoint_count)
    }

    /// Create a [`Board`] object with the declared checkpoint count.
    ///
    /// No verification is performed. Use [`Board::check_structure`] to verify the board.
    pub fn from_parts(
        id: String,
        size: u32,
        cells: Vec<Cell>,
        walls: Vec<Wall>,
        checkpoint_count: u32,
    ) -> Self {
        Self {
            id,
            size,
            cells: cells.into_iter().map(|c| (c.coord, c)).collect(),
            walls,
            checkpoint_count,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn checkpoint_count(&self) -> u32 {
        self.checkpoint_count
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Iterate over the cells, ordered by coordinates.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values()
    }

    pub fn cell(&self, coord: &Axial) -> Option<&Cell> {
        self.cells.get(coord)
    }

    pub fn contains(&self, coord: &Axial) -> bool {
        self.cells.contains_key(coord)
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls[..]
    }

    /// Return the cell that carries the given checkpoint.
    pub fn checkpoint_cell(&self, ordinal: u32) -> Option<&Cell> {
        self.cells.values().find(|c| c.checkpoint == Some(ordinal))
    }

    /// Whether a wall blocks the move between the two cells.
    pub fn is_walled(&self, from: &Axial, to: &Axial) -> bool {
        self.walls.iter().any(|w| w.blocks(from, to))
    }

    /// Verify the board invariants.
    ///
    /// # Errors
    ///
    /// The method returns the first broken invariant, in this order: size, cells outside the board,
    /// cells that cannot be reached (walls ignored), missing cells, checkpoint numbers, and walls.
    pub fn check_structure(&self) -> Result<(), StructuralError> {
        if self.size == 0 {
            return Err(StructuralError::ZeroSize);
        }
        if let Some(c) = self
            .cells
            .keys()
            .find(|c| c.length() >= u64::from(self.size))
        {
            return Err(StructuralError::CellOutsideBoard {
                cell: *c,
                size: self.size,
            });
        }
        self.check_connected()?;
        // The cells are distinct and inside the board, so a count that differs means that some
        // cells are missing. The scan stops at the first missing cell, so it looks up at most
        // one more coordinate than there are cells.
        if hex::cell_count(self.size) != Some(self.cells.len() as u64)
            && let Some(c) = hex::board_cells(self.size).find(|c| !self.contains(c))
        {
            return Err(StructuralError::MissingCell {
                cell: c,
                size: self.size,
            });
        }
        self.check_checkpoints()?;
        self.check_walls()
    }

    /// Verify that all the cells can be reached from the first one, ignoring the walls.
    fn check_connected(&self) -> Result<(), StructuralError> {
        let start: Axial = match self.cells.keys().next() {
            Some(c) => *c,
            None => return Ok(()),
        };
        let mut reached: HashSet<Axial> = HashSet::with_capacity(self.cells.len());
        let mut queue: VecDeque<Axial> = VecDeque::new();

        reached.insert(start);
        queue.push_back(start);
        while let Some(c) = queue.pop_front() {
            for n in c.neighbors() {
                if self.contains(&n) && reached.insert(n) {
                    queue.push_back(n);
                }
            }
        }

        match self.cells.keys().find(|c| !reached.contains(*c)) {
            Some(c) => Err(StructuralError::Disconnected {
                cell: *c,
                from: start,
            }),
            None => Ok(()),
        }
    }

    /// Verify that the checkpoints are numbered from 1 to the checkpoint count, without duplicates.
    fn check_checkpoints(&self) -> Result<(), StructuralError> {
        let mut seen: HashMap<u32, Axial> = HashMap::new();

        for cell in self.cells.values() {
            let ordinal: u32 = match cell.checkpoint {
                Some(o) => o,
                None => continue,
            };
            if ordinal == 0 {
                return Err(StructuralError::ZeroOrdinal(cell.coord));
            }
            if ordinal > self.checkpoint_count {
                return Err(StructuralError::OrdinalOutOfRange {
                    ordinal,
                    cell: cell.coord,
                    count: self.checkpoint_count,
                });
            }
            if let Some(first) = seen.insert(ordinal, cell.coord) {
                return Err(StructuralError::DuplicateOrdinal {
                    ordinal,
                    first,
                    second: cell.coord,
                });
            }
        }

        match (1..=self.checkpoint_count).find(|o| !seen.contains_key(o)) {
            Some(ordinal) => Err(StructuralError::MissingOrdinal {
                ordinal,
                count: self.checkpoint_count,
            }),
            None => Ok(()),
        }
    }

    /// Verify that the walls are between adjacent cells of the board, and are not duplicated.
    fn check_walls(&self) -> Result<(), StructuralError> {
        let mut seen: HashSet<Wall> = HashSet::with_capacity(self.walls.len());

        for wall in &self.walls {
            let (a, b) = wall.cells();
            if !self.contains(&a) || !self.contains(&b) {
                return Err(StructuralError::WallOutsideBoard(a, b));
            }
            if !wall.is_adjacent() {
                return Err(StructuralError::WallNotAdjacent(a, b));
            }
            if !seen.insert(*wall) {
                return Err(StructuralError::DuplicateWall(a, b));
            }
        }
        Ok(())
    }

    /// Return an "ASCII art" representation of the board, such as:
    ///
    /// ```text
    ///     1   .   .
    ///   .   .   .   .
    /// .   .   .   .   .
    ///   .   .   .   .
    ///     .   .   2
    /// walls: (0,0)-(1,0)
    /// ```
    ///
    /// Missing cells are represented by `?`.
    /// Boards larger than [`MAX_RENDER_SIZE`] are summarized on one line instead.
    pub fn render(&self) -> String {
        if self.size > MAX_RENDER_SIZE {
            return format!(
                "board {}: size {} with {} cells and {} walls, too large to draw",
                self.id,
                self.size,
                self.cells.len(),
                self.walls.len()
            );
        }
        let radius: i32 = self.size as i32 - 1;
        let mut lines: Vec<String> = Vec::with_capacity(self.size as usize * 2);

        for r in -radius..=radius {
            let mut line: String = " ".repeat(r.unsigned_abs() as usize * 2);
            let q_min: i32 = (-radius).max(-r - radius);
            let q_max: i32 = radius.min(-r + radius);
            for q in q_min..=q_max {
                match self.cell(&Axial::new(q, r)) {
                    Some(Cell {
                        checkpoint: Some(o),
                        ..
                    }) => line.push_str(&format!("{o:<4}")),
                    Some(_) => line.push_str(".   "),
                    None => line.push_str("?   "),
                }
            }
            lines.push(line.trim_end().to_string());
        }

        if !self.walls.is_empty() {
            let walls: Vec<String> = self.walls.iter().map(|w| w.to_string()).collect();
            lines.push(format!("walls: {}", walls.join(" ")));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_board(walls: Vec<Wall>) -> Board {
        let cells: Vec<Cell> = hex::board_coordinates(2)
            .into_iter()
            .map(|c| match (c.q, c.r) {
                (0, 0) => Cell::with_checkpoint(c, 1),
                (1, 0) => Cell::with_checkpoint(c, 2),
                _ => Cell::new(c),
            })
            .collect();
        Board::new("small", 2, cells, walls)
    }

    #[test]
    fn accessors() {
        let b: Board = small_board(vec![Wall::new(Axial::new(0, 0), Axial::new(0, 1))]);
        assert_eq!(b.id(), "small");
        assert_eq!(b.cell_count(), 7);
        assert_eq!(b.checkpoint_count(), 2);
        assert_eq!(
            b.checkpoint_cell(2).map(|c| c.coord),
            Some(Axial::new(1, 0))
        );
        assert!(b.is_walled(&Axial::new(0, 1), &Axial::new(0, 0)));
        assert!(!b.is_walled(&Axial::new(1, 0), &Axial::new(0, 0)));
        assert!(b.check_structure().is_ok());
    }

    #[test]
    fn zero_size() {
        let b: Board = Board::new("empty", 0, Vec::new(), Vec::new());
        assert_eq!(b.check_structure(), Err(StructuralError::ZeroSize));
    }

    #[test]
    fn missing_and_outside_cells() {
        let mut cells: Vec<Cell> = hex::board_coordinates(2).into_iter().map(Cell::new).collect();
        cells.retain(|c| c.coord != Axial::new(-1, 0));
        let b: Board = Board::new("missing", 2, cells.clone(), Vec::new());
        assert!(matches!(
            b.check_structure(),
            Err(StructuralError::MissingCell { .. })
        ));

        cells.push(Cell::new(Axial::new(2, 0)));
        let b: Board = Board::new("outside", 2, cells, Vec::new());
        assert!(matches!(
            b.check_structure(),
            Err(StructuralError::CellOutsideBoard { .. })
        ));
    }

    #[test]
    fn disconnected_cells() {
        // Removing the middle ring isolates the center
        let cells: Vec<Cell> = hex::board_coordinates(3)
            .into_iter()
            .filter(|c| c.length() != 1)
            .map(Cell::new)
            .collect();
        let b: Board = Board::new("island", 3, cells, Vec::new());
        assert!(matches!(
            b.check_structure(),
            Err(StructuralError::Disconnected { .. })
        ));
    }

    #[test]
    fn checkpoint_errors() {
        let coords: Vec<Axial> = hex::board_coordinates(2);
        let mut cells: Vec<Cell> = coords.iter().map(|c| Cell::new(*c)).collect();
        cells[0].checkpoint = Some(1);
        cells[1].checkpoint = Some(1);
        let b: Board = Board::from_parts("dup".to_string(), 2, cells.clone(), Vec::new(), 2);
        assert!(matches!(
            b.check_structure(),
            Err(StructuralError::DuplicateOrdinal { ordinal: 1, .. })
        ));

        cells[1].checkpoint = Some(3);
        let b: Board = Board::from_parts("gap".to_string(), 2, cells.clone(), Vec::new(), 3);
        assert_eq!(
            b.check_structure(),
            Err(StructuralError::MissingOrdinal {
                ordinal: 2,
                count: 3
            })
        );

        let b: Board = Board::from_parts("range".to_string(), 2, cells.clone(), Vec::new(), 2);
        assert!(matches!(
            b.check_structure(),
            Err(StructuralError::OrdinalOutOfRange { ordinal: 3, .. })
        ));

        cells[1].checkpoint = Some(0);
        let b: Board = Board::from_parts("zero".to_string(), 2, cells, Vec::new(), 1);
        assert!(matches!(
            b.check_structure(),
            Err(StructuralError::ZeroOrdinal(_))
        ));
    }

    #[test]
    fn wall_errors() {
        let a: Axial = Axial::new(0, 0);
        let b: Board = small_board(vec![Wall::new(Axial::new(1, 0), Axial::new(-1, 0))]);
        assert_eq!(
            b.check_structure(),
            Err(StructuralError::WallNotAdjacent(
                Axial::new(1, 0),
                Axial::new(-1, 0)
            ))
        );

        let b: Board = small_board(vec![Wall::new(Axial::new(1, 0), Axial::new(2, 0))]);
        assert!(matches!(
            b.check_structure(),
            Err(StructuralError::WallOutsideBoard(_, _))
        ));

        let b: Board = small_board(vec![
            Wall::new(a, Axial::new(0, 1)),
            Wall::new(Axial::new(0, 1), a),
        ]);
        assert!(matches!(
            b.check_structure(),
            Err(StructuralError::DuplicateWall(_, _))
        ));
    }

    #[test]
    fn render() {
        let b: Board = small_board(vec![Wall::new(Axial::new(0, 0), Axial::new(0, 1))]);
        let picture: String = b.render();
        let lines: Vec<&str> = picture.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "  .   .");
        assert_eq!(lines[1], ".   1   2");
        assert_eq!(lines[2], "  .   .");
        assert_eq!(lines[3], "walls: (0,0)-(0,1)");
    }

    #[test]
    fn huge_board() {
        let b: Board = Board::new("huge", 100_000, vec![Cell::new(Axial::ORIGIN)], Vec::new());
        assert_eq!(
            b.check_structure(),
            Err(StructuralError::MissingCell {
                cell: Axial::new(-99_999, 0),
                size: 100_000
            })
        );
        assert_eq!(
            b.render(),
            "board huge: size 100000 with 1 cells and 0 walls, too large to draw"
        );

        // Too many cells to count them in a u64
        let corner: Axial = Axial::new(i32::MAX, 0);
        let b: Board = Board::new("widest", u32::MAX, vec![Cell::new(corner)], Vec::new());
        assert_eq!(
            b.check_structure(),
            Err(StructuralError::MissingCell {
                cell: Axial::new(i32::MIN, -2_147_483_646),
                size: u32::MAX
            })
        );
    }

    #[test]
    fn cells_at_the_edge_of_the_range() {
        let cells: Vec<Cell> = vec![
            Cell::new(Axial::new(i32::MIN, 0)),
            Cell::new(Axial::new(i32::MAX, i32::MIN)),
        ];
        let b: Board = Board::new("edge", 2, cells, Vec::new());
        assert_eq!(
            b.check_structure(),
            Err(StructuralError::CellOutsideBoard {
                cell: Axial::new(i32::MIN, 0),
                size: 2
            })
        );
    }
}
