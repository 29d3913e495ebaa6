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

//! Load and save a single board.
//!
//! The board is a serialization of the [`Board`] object in JSON format by using [`serde`].
//! See the [`crate::board::codec`] module for the format.

use log::debug;
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::board::{Board, codec};

/// Retrieve a board from inline JSON or from a file.
///
/// The source is read as JSON when its first non-blank character is `{`. Otherwise, it is the
/// path to a JSON file.
pub fn read_board(source: &str) -> Result<Board, Box<dyn Error>> {
    if source.trim_start().starts_with('{') {
        debug!("Reading the board from the command line");
        let board: Board = codec::decode(source)?;
        return Ok(board);
    }
    load_board(Path::new(source))
}

/// Load the board from the given file.
pub fn load_board(path: &Path) -> Result<Board, Box<dyn Error>> {
    debug!("Reading the board from {path:?}");
    let file: File = File::open(path)?;
    let reader: BufReader<File> = BufReader::new(file);
    let board: Board = serde_json::from_reader(reader)?;
    Ok(board)
}

/// Save the board to the given file.
pub fn save_board(path: &Path, board: &Board) -> Result<(), Box<dyn Error>> {
    let file: File = File::create(path)?;
    let mut writer: BufWriter<File> = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, board)?;
    writer.flush()?;
    Ok(())
}
