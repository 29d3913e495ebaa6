/*
generator.rs

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

//! Solve, validate, and generate boards.
//!
//! The algorithms do not work on [`crate::board::Board`] objects directly.
//! A [`board_graph::BoardGraph`] object stores an internal representation of the board, where
//! cells are vertexes numbered from `0` ([`vertexes::Vertexes`]) and where the sides between
//! adjacent cells are edges ([`edges::Edges`]).
//! Walls do not remove edges: they change their status.
//!
//! Three services are built on top of that representation:
//!
//! * [`search::PathSearch`] looks for a path that visits every cell once, in checkpoint order.
//!   The search result distinguishes a board without a solution from a search that ran out of
//!   steps.
//!
//! * [`validator::LevelValidator`] checks the structure of a board, runs the search, and
//!   returns a [`validator::ValidationResult`] object.
//!
//! * [`level::LevelGenerator`] creates boards.
//!   It traces a random path with [`random_path::RandomPath`], places the checkpoints along that
//!   path, then adds walls while the search still finds a path.

pub mod board_graph;
pub mod edges;
pub mod level;
pub mod path;
pub mod random_path;
pub mod search;
pub mod validator;
pub mod vertexes;
