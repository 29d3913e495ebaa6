/*
error.rs

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

//! Errors reported by the validator and the generator.
//!
//! Errors are values: the search engine, the validator, and the generator return them inside
//! their result objects instead of failing.
//! In JSON output, an error is an object with a stable `code` and a human readable `message`:
//!
//! ```json
//! {"code": "STRUCTURAL_ERROR", "message": "wall (0,0)-(2,0) joins cells that are not adjacent"}
//! ```

use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

use crate::hex::Axial;

/// Broken board invariant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    #[error("board size must be positive")]
    ZeroSize,

    #[error("cell {cell} is outside of a board of size {size}")]
    CellOutsideBoard { cell: Axial, size: u32 },

    #[error("cell {cell} is missing from a board of size {size}")]
    MissingCell { cell: Axial, size: u32 },

    #[error("cell {cell} cannot be reached from cell {from}")]
    Disconnected { cell: Axial, from: Axial },

    #[error("cell {0} has checkpoint 0 (checkpoints start at 1)")]
    ZeroOrdinal(Axial),

    #[error("checkpoint {ordinal} is set on both {first} and {second}")]
    DuplicateOrdinal {
        ordinal: u32,
        first: Axial,
        second: Axial,
    },

    #[error("checkpoint {ordinal} on cell {cell} exceeds the checkpoint count ({count})")]
    OrdinalOutOfRange { ordinal: u32, cell: Axial, count: u32 },

    #[error("checkpoint {ordinal} is missing (checkpoint count is {count})")]
    MissingOrdinal { ordinal: u32, count: u32 },

    #[error("wall {0}-{1} references a cell that is not on the board")]
    WallOutsideBoard(Axial, Axial),

    #[error("wall {0}-{1} joins cells that are not adjacent")]
    WallNotAdjacent(Axial, Axial),

    #[error("wall {0}-{1} is declared more than once")]
    DuplicateWall(Axial, Axial),
}

/// Error taxonomy shared by the validator and the generator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// The board breaks one of its invariants. No search was attempted.
    #[error("{0}")]
    Structural(#[from] StructuralError),

    /// The search stopped before reaching a conclusion. This is not a proof that the board has
    /// no solution.
    #[error("search aborted after {steps} steps without a conclusion")]
    SearchBudgetExceeded { steps: u64 },

    /// The search explored every possibility: no path exists.
    #[error("no path visits every cell with the checkpoints in order")]
    ProvenUnsolvable,

    /// The requested board size cannot be generated.
    #[error("size {size} is not supported (expected {min} to {max})")]
    InvalidSize { size: u32, min: u32, max: u32 },

    /// The generator exhausted its restarts.
    #[error("no level could be generated after {restarts} attempts")]
    GenerationFailed { restarts: usize },
}

impl PuzzleError {
    /// Stable identifier of the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            PuzzleError::Structural(_) => "STRUCTURAL_ERROR",
            PuzzleError::SearchBudgetExceeded { .. } => "SEARCH_BUDGET_EXCEEDED",
            PuzzleError::ProvenUnsolvable => "PROVEN_UNSOLVABLE",
            PuzzleError::InvalidSize { .. } => "INVALID_SIZE",
            PuzzleError::GenerationFailed { .. } => "GENERATION_FAILED",
        }
    }
}

/// Serialize a [`PuzzleError`] object as its code and message.
impl Serialize for PuzzleError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("PuzzleError", 2)?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes() {
        let e: PuzzleError = StructuralError::ZeroSize.into();
        assert_eq!(e.code(), "STRUCTURAL_ERROR");
        assert_eq!(
            PuzzleError::SearchBudgetExceeded { steps: 3 }.code(),
            "SEARCH_BUDGET_EXCEEDED"
        );
        assert_eq!(PuzzleError::ProvenUnsolvable.code(), "PROVEN_UNSOLVABLE");
        assert_eq!(
            PuzzleError::InvalidSize {
                size: 1,
                min: 2,
                max: 6
            }
            .code(),
            "INVALID_SIZE"
        );
        assert_eq!(
            PuzzleError::GenerationFailed { restarts: 8 }.code(),
            "GENERATION_FAILED"
        );
    }

    #[test]
    fn serialized_as_code_and_message() {
        let e: PuzzleError =
            StructuralError::WallNotAdjacent(Axial::new(0, 0), Axial::new(2, 0)).into();
        let json: serde_json::Value = serde_json::to_value(&e).unwrap();
        assert_eq!(json["code"], "STRUCTURAL_ERROR");
        assert_eq!(
            json["message"],
            "wall (0,0)-(2,0) joins cells that are not adjacent"
        );
    }
}
