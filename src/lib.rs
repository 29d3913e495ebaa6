/*
lib.rs

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

//! Engine for hexagonal one-pass puzzles.
//!
//! A board is a hexagon of hexagonal cells.
//! The player draws one path that goes through every cell exactly once, visits the numbered
//! checkpoints in ascending order, and never crosses a wall.
//!
//! The crate decides whether a board can be solved ([`generator::validator`]) and generates new
//! boards that have at least one solution ([`generator::level`]).

pub mod board;
pub mod config;
pub mod error;
pub mod generator;
pub mod hex;
pub mod saver;
