/*
scenarios.rs

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

//! Validation of hand-made boards.

use hexpass::board::wall::Wall;
use hexpass::board::{Board, Cell, codec};
use hexpass::config::SearchConfig;
use hexpass::error::{PuzzleError, StructuralError};
use hexpass::generator::validator::{LevelValidator, ValidationResult, is_valid_witness};
use hexpass::hex::{self, Axial};

/// Size 2 board with checkpoint 1 at the center and checkpoint 2 at (1,0).
fn small_board(walls: &[((i32, i32), (i32, i32))]) -> Board {
    let cells: Vec<Cell> = hex::board_coordinates(2)
        .into_iter()
        .map(|c| match (c.q, c.r) {
            (0, 0) => Cell::with_checkpoint(c, 1),
            (1, 0) => Cell::with_checkpoint(c, 2),
            _ => Cell::new(c),
        })
        .collect();
    let walls: Vec<Wall> = walls
        .iter()
        .map(|(a, b)| Wall::new(Axial::new(a.0, a.1), Axial::new(b.0, b.1)))
        .collect();
    Board::new("small", 2, cells, walls)
}

#[test]
fn open_board_with_two_checkpoints() {
    let board: Board = small_board(&[]);
    let result: ValidationResult = LevelValidator::default().validate(&board);

    assert!(result.is_solvable);
    let witness: Vec<Axial> = result.witness.clone().unwrap();
    assert_eq!(witness.len(), 7);
    assert_eq!(witness.first(), Some(&Axial::new(0, 0)));
    assert_eq!(witness.last(), Some(&Axial::new(1, 0)));
    assert!(is_valid_witness(&board, &witness, true));
}

#[test]
fn last_cell_reachable_through_one_side() {
    // Only the side towards (1,-1) stays open: the path can end there
    let board: Board = small_board(&[((1, 0), (0, 0)), ((1, 0), (0, 1))]);
    let result: ValidationResult = LevelValidator::default().validate(&board);
    assert!(result.is_solvable, "{:?}", result.error);
    assert!(result.verify_witness(&board, true));
    assert_eq!(result.witness.unwrap()[5], Axial::new(1, -1));
}

#[test]
fn last_cell_reachable_only_from_the_start() {
    // Only the side towards the starting cell stays open
    let board: Board = small_board(&[((1, 0), (1, -1)), ((1, 0), (0, 1))]);
    let result: ValidationResult = LevelValidator::default().validate(&board);
    assert!(!result.is_solvable);
    assert!(result.witness.is_none());
    assert_eq!(result.error, Some(PuzzleError::ProvenUnsolvable));
    assert_eq!(result.error.unwrap().code(), "PROVEN_UNSOLVABLE");

    // Without fixed ends, the path can go around the ring and finish with the center
    let lenient: LevelValidator =
        LevelValidator::new(SearchConfig::default().with_strict_endpoints(false));
    let result: ValidationResult = lenient.validate(&board);
    assert!(result.is_solvable);
    assert!(result.verify_witness(&board, false));
    assert!(!result.verify_witness(&board, true));
}

#[test]
fn wall_between_distant_cells() {
    let json: &str = r#"{
        "id": "bad-wall",
        "size": 2,
        "cells": {
            "0,0": {"q": 0, "r": 0, "checkpoint": 1},
            "1,0": {"q": 1, "r": 0, "checkpoint": 2},
            "1,-1": {"q": 1, "r": -1},
            "0,-1": {"q": 0, "r": -1},
            "-1,0": {"q": -1, "r": 0},
            "-1,1": {"q": -1, "r": 1},
            "0,1": {"q": 0, "r": 1}
        },
        "walls": [[{"q": 1, "r": 0}, {"q": -1, "r": 0}]],
        "checkpointCount": 2
    }"#;
    let board: Board = codec::decode(json).unwrap();
    let result: ValidationResult = LevelValidator::default().validate(&board);

    assert!(!result.is_solvable);
    assert_eq!(result.steps, 0);
    assert_eq!(
        result.error,
        Some(PuzzleError::Structural(StructuralError::WallNotAdjacent(
            Axial::new(1, 0),
            Axial::new(-1, 0)
        )))
    );

    let output: serde_json::Value = serde_json::to_value(&result).unwrap();
    assert_eq!(output["error"]["code"], "STRUCTURAL_ERROR");
}

#[test]
fn huge_size_with_a_single_cell() {
    let json: &str =
        r#"{"id": "x", "size": 100000, "cells": {"0,0": {"q": 0, "r": 0}}, "checkpointCount": 0}"#;
    let board: Board = codec::decode(json).unwrap();
    let result: ValidationResult = LevelValidator::default().validate(&board);

    assert!(!result.is_solvable);
    assert_eq!(result.steps, 0);
    assert!(matches!(
        result.error,
        Some(PuzzleError::Structural(StructuralError::MissingCell {
            size: 100_000,
            ..
        }))
    ));
    assert_eq!(
        result.error.as_ref().map(|e| e.code()),
        Some("STRUCTURAL_ERROR")
    );
    assert!(board.render().ends_with("too large to draw"));
}

#[test]
fn largest_size_with_a_single_cell() {
    let json: &str = r#"{
        "id": "widest",
        "size": 4294967295,
        "cells": {"2147483647,0": {"q": 2147483647, "r": 0}},
        "checkpointCount": 0
    }"#;
    let board: Board = codec::decode(json).unwrap();
    let result: ValidationResult = LevelValidator::default().validate(&board);

    assert_eq!(result.steps, 0);
    assert!(matches!(
        result.error,
        Some(PuzzleError::Structural(StructuralError::MissingCell { .. }))
    ));
}

#[test]
fn extreme_coordinates() {
    let json: &str = r#"{
        "id": "far",
        "size": 2,
        "cells": {"-2147483648,0": {"q": -2147483648, "r": 0}},
        "checkpointCount": 0
    }"#;
    let board: Board = codec::decode(json).unwrap();
    let result: ValidationResult = LevelValidator::default().validate(&board);

    assert_eq!(result.steps, 0);
    assert_eq!(
        result.error,
        Some(PuzzleError::Structural(StructuralError::CellOutsideBoard {
            cell: Axial::new(i32::MIN, 0),
            size: 2
        }))
    );
    assert!(board.render().contains('?'));

    // Walls between extreme coordinates
    let mut board_json: serde_json::Value =
        serde_json::from_str(&codec::encode(&small_board(&[])).unwrap()).unwrap();
    board_json["walls"] = serde_json::json!([[
        {"q": 2147483647, "r": -2147483648},
        {"q": -2147483648, "r": 2147483647}
    ]]);
    let board: Board = codec::decode(&board_json.to_string()).unwrap();
    let result: ValidationResult = LevelValidator::default().validate(&board);
    assert_eq!(
        result.error,
        Some(PuzzleError::Structural(StructuralError::WallOutsideBoard(
            Axial::new(i32::MAX, i32::MIN),
            Axial::new(i32::MIN, i32::MAX)
        )))
    );

    // Coordinates beyond the i32 range do not decode
    let json: &str = r#"{
        "id": "beyond",
        "size": 2,
        "cells": {"2147483648,0": {"q": 2147483648, "r": 0}},
        "checkpointCount": 0
    }"#;
    assert!(codec::decode(json).is_err());
}

#[test]
fn checkpoint_count_mismatch() {
    let mut board_json: serde_json::Value =
        serde_json::from_str(&codec::encode(&small_board(&[])).unwrap()).unwrap();
    board_json["checkpointCount"] = serde_json::json!(3);
    let board: Board = codec::decode(&board_json.to_string()).unwrap();

    let result: ValidationResult = LevelValidator::default().validate(&board);
    assert_eq!(
        result.error,
        Some(PuzzleError::Structural(StructuralError::MissingOrdinal {
            ordinal: 3,
            count: 3
        }))
    );
}

#[test]
fn validation_is_repeatable() {
    let board: Board = small_board(&[((0, 0), (0, -1)), ((-1, 1), (0, 1))]);
    let validator: LevelValidator = LevelValidator::default();
    let first: ValidationResult = validator.validate(&board);
    let second: ValidationResult = validator.validate(&board);
    assert_eq!(first.is_solvable, second.is_solvable);
    assert_eq!(first.witness, second.witness);
    assert_eq!(first.steps, second.steps);
}

#[test]
fn board_without_checkpoints() {
    let cells: Vec<Cell> = hex::board_coordinates(3)
        .into_iter()
        .map(Cell::new)
        .collect();
    let board: Board = Board::new("free", 3, cells, Vec::new());
    let result: ValidationResult = LevelValidator::default().validate(&board);
    assert!(result.is_solvable);
    assert_eq!(result.witness.as_ref().map(|w| w.len()), Some(19));
    assert!(result.verify_witness(&board, true));
}
