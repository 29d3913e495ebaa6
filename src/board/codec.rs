/*
codec.rs

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

//! JSON representation of the boards.
//!
//! ```json
//! {
//!   "id": "s2-000000000000002a",
//!   "size": 2,
//!   "cells": {
//!     "0,0": {"q": 0, "r": 0, "checkpoint": 1},
//!     "1,0": {"q": 1, "r": 0, "checkpoint": 2},
//!     "0,1": {"q": 0, "r": 1},
//!     ...
//!   },
//!   "walls": [[{"q": 0, "r": 0}, {"q": 0, "r": 1}]],
//!   "checkpointCount": 2
//! }
//! ```
//!
//! The order of the cells and of the walls is not significant.
//! Decoding only rejects malformed documents, such as a cell key that does not match the cell
//! coordinates.
//! Boards that break the game rules (missing cells, walls between distant cells...) are decoded,
//! and then reported by [`Board::check_structure`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use super::wall::Wall;
use super::{Board, Cell};
use crate::hex::Axial;

/// Malformed board document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("invalid cell key {0:?} (expected \"q,r\")")]
    InvalidKey(String),

    #[error("cell key {key:?} does not match the cell coordinates {coord}")]
    KeyMismatch { key: String, coord: Axial },
}

/// Serialized cell.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct CellRecord {
    pub q: i32,
    pub r: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkpoint: Option<u32>,
}

/// Serialized board.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BoardRecord {
    pub id: String,
    pub size: u32,
    pub cells: BTreeMap<String, CellRecord>,
    #[serde(default)]
    pub walls: Vec<[Axial; 2]>,
    pub checkpoint_count: u32,
}

impl From<Board> for BoardRecord {
    fn from(board: Board) -> Self {
        let cells: BTreeMap<String, CellRecord> = board
            .cells()
            .map(|c| {
                (
                    c.coord.key(),
                    CellRecord {
                        q: c.coord.q,
                        r: c.coord.r,
                        checkpoint: c.checkpoint,
                    },
                )
            })
            .collect();
        let walls: Vec<[Axial; 2]> = board
            .walls()
            .iter()
            .map(|w| {
                let (a, b) = w.cells();
                [a, b]
            })
            .collect();

        Self {
            id: board.id,
            size: board.size,
            cells,
            walls,
            checkpoint_count: board.checkpoint_count,
        }
    }
}

impl TryFrom<BoardRecord> for Board {
    type Error = CodecError;

    fn try_from(record: BoardRecord) -> Result<Self, Self::Error> {
        let mut cells: Vec<Cell> = Vec::with_capacity(record.cells.len());

        for (key, c) in record.cells {
            let coord: Axial = Axial::new(c.q, c.r);
            match Axial::from_key(&key) {
                None => return Err(CodecError::InvalidKey(key)),
                Some(k) if k != coord => return Err(CodecError::KeyMismatch { key, coord }),
                Some(_) => cells.push(Cell {
                    coord,
                    checkpoint: c.checkpoint,
                }),
            }
        }
        let walls: Vec<Wall> = record
            .walls
            .into_iter()
            .map(|[a, b]| Wall::new(a, b))
            .collect();

        Ok(Board::from_parts(
            record.id,
            record.size,
            cells,
            walls,
            record.checkpoint_count,
        ))
    }
}

/// Return the JSON representation of the board.
pub fn encode(board: &Board) -> Result<String, serde_json::Error> {
    serde_json::to_string(board)
}

/// Build a board from its JSON representation.
pub fn decode(json: &str) -> Result<Board, serde_json::Error> {
    serde_json::from_str(json)
}
