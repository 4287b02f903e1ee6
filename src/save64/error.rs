// Copyright (C) 2024 Wilfred Bos
// Licensed under the MIT license. See the LICENSE file for the terms and conditions.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Unrecoverable failures of a detect, load and decode pass.
///
/// A checksum mismatch is not an error, see [`super::checksum::ChecksumResult`].
#[derive(Error, Debug)]
pub enum SaveError {
    /// None of the known magic numbers was found
    #[error("Couldn't determine the game type: {}", .path.display())]
    UnknownFormat { path: PathBuf },

    /// Opening, seeking, reading or allocating failed
    #[error("Error reading file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file holds fewer bytes than the detected format declares
    #[error("Couldn't read the save data: expected {expected} bytes, read {actual} bytes")]
    TruncatedFile { expected: usize, actual: usize },

    /// Requested slot lies outside `[0, slot_count)`
    #[error("Invalid save slot number {}. It should be between 1 and {slot_count}.", slot_number(.slot))]
    InvalidSlot { slot: u8, slot_count: u8 },

    /// A field read would run past the record or the image
    #[error("Field at offset 0x{offset:04X} ({size} bytes) exceeds the record limit of 0x{limit:04X}")]
    OutOfBounds { offset: usize, size: usize, limit: usize },
}

impl SaveError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> SaveError {
        SaveError::Io { path: path.into(), source }
    }
}

fn slot_number(slot: &u8) -> u16 {
    *slot as u16 + 1
}

pub type Result<T> = std::result::Result<T, SaveError>;
