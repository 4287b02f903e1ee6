// Copyright (C) 2024 Wilfred Bos
// Licensed under the MIT license. See the LICENSE file for the terms and conditions.

use std::fs::File;
use std::io::{self, BufReader, ErrorKind, Read};
use std::path::Path;

use tracing::debug;

use super::error::{Result, SaveError};
use crate::byte_order::{self, Endianness, WORD_SIZE};

/// Save data in canonical (big-endian) word order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveImage {
    data: Vec<u8>
}

impl SaveImage {
    #[cfg(test)]
    pub fn from_canonical(data: Vec<u8>) -> SaveImage {
        SaveImage { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn read_u16(&self, offset: usize) -> Result<u16> {
        byte_order::read_u16(&self.data, offset)
            .ok_or(SaveError::OutOfBounds { offset, size: 2, limit: self.data.len() })
    }
}

/// Reads `expected_size` bytes word by word, swapping little-endian words into
/// canonical order. Bytes past `expected_size` are left unread.
///
/// `expected_size` is a whole number of words for every known format.
pub fn load(path: &Path, expected_size: usize, endianness: Endianness) -> Result<SaveImage> {
    let file = File::open(path).map_err(|e| SaveError::io(path, e))?;
    let mut reader = BufReader::new(file);

    let mut data = Vec::new();
    data.try_reserve_exact(expected_size)
        .map_err(|e| SaveError::io(path, io::Error::new(ErrorKind::OutOfMemory, e)))?;

    let mut word = [0u8; WORD_SIZE];
    while data.len() < expected_size {
        let bytes_read = read_word(&mut reader, &mut word).map_err(|e| SaveError::io(path, e))?;
        if bytes_read != WORD_SIZE {
            break;
        }
        data.extend_from_slice(&byte_order::to_canonical(word, endianness));
    }

    if data.len() != expected_size {
        return Err(SaveError::TruncatedFile { expected: expected_size, actual: data.len() });
    }

    debug!(path = %path.display(), bytes = data.len(), ?endianness, "Loaded save data");
    Ok(SaveImage { data })
}

fn read_word<R: Read>(reader: &mut R, word: &mut [u8; WORD_SIZE]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < WORD_SIZE {
        match reader.read(&mut word[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e)
        }
    }
    Ok(filled)
}

#[cfg(test)]
#[path = "./loader_test.rs"]
mod loader_test;
