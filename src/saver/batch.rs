/*
batch.rs

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

//! Save and restore batches of pre-generated boards.
//!
//! The saved object is a serialization of the [`BatchFile`] object in JSON format by
//! using [`serde`]:
//!
//! ```json
//! {
//!   "version": 1,
//!   "generatedAt": "2025-06-01T08:00:00.000000000+00:00",
//!   "difficulty": "medium",
//!   "counts": {"3": 20, "4": 20},
//!   "levels": {"3": [...], "4": [...]}
//! }
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::board::Board;
use crate::config::{BATCH_FORMAT_VERSION, Difficulty};

/// Boards grouped by size.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BatchFile {
    /// Format version. See [`BATCH_FORMAT_VERSION`].
    pub version: u32,

    /// Creation date, in RFC 3339 format.
    pub generated_at: String,

    pub difficulty: Difficulty,

    /// Number of boards for each size.
    pub counts: BTreeMap<String, usize>,

    /// Boards for each size.
    pub levels: BTreeMap<String, Vec<Board>>,
}

impl BatchFile {
    /// Create an empty batch, dated now.
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            version: BATCH_FORMAT_VERSION,
            generated_at: chrono::Utc::now().to_rfc3339(),
            difficulty,
            counts: BTreeMap::new(),
            levels: BTreeMap::new(),
        }
    }

    /// Add a board to the batch.
    pub fn push(&mut self, board: Board) {
        let key: String = board.size().to_string();
        *self.counts.entry(key.clone()).or_insert(0) += 1;
        self.levels.entry(key).or_default().push(board);
    }

    /// Return the boards of the given size.
    pub fn boards(&self, size: u32) -> &[Board] {
        match self.levels.get(&size.to_string()) {
            Some(l) => &l[..],
            None => &[],
        }
    }
}

/// Object to save and restore a batch.
pub struct SaverBatch {
    /// Path to the batch file.
    save_file: PathBuf,
}

impl SaverBatch {
    /// Create a [`SaverBatch`] object for the given file.
    pub fn new(save_file: PathBuf) -> Self {
        debug!("Batch file: {save_file:?}");
        Self { save_file }
    }

    /// Retrieve the [`BatchFile`] object from the batch file.
    ///
    /// Return the [`BatchFile`] object or None if the batch file does not exist.
    pub fn load(&self) -> Result<Option<BatchFile>, Box<dyn Error>> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let batch: BatchFile = serde_json::from_reader(reader)?;
        if batch.version != BATCH_FORMAT_VERSION {
            return Err(format!(
                "unsupported batch format version {} (expected {BATCH_FORMAT_VERSION})",
                batch.version
            )
            .into());
        }
        Ok(Some(batch))
    }

    /// Save the provided [`BatchFile`] object.
    pub fn save(&self, batch: &BatchFile) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, batch)?;
        writer.flush()?;
        Ok(())
    }
}
