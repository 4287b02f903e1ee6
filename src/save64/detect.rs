// Copyright (C) 2024 Wilfred Bos
// Licensed under the MIT license. See the LICENSE file for the terms and conditions.

use std::fs::File;
use std::io::{self, ErrorKind, Read, Seek, SeekFrom};
use std::path::Path;

use tracing::debug;

use super::error::{Result, SaveError};
use super::profile::GameProfile;
use super::text::Charset;
use crate::byte_order::{Endianness, WORD_SIZE};

pub const MAGIC_OFFSET_MM: u64 = 0x24;
pub const MAGIC_OFFSET_OOT: u64 = 0x3C;

/// "ZELD" as stored by big-endian dumps
pub const MAGIC_ZELD: [u8; WORD_SIZE] = *b"ZELD";
/// "ZELD" with each word byte-swapped, as stored by little-endian dumps
pub const MAGIC_DLEZ: [u8; WORD_SIZE] = *b"DLEZ";
/// Last word of a Super Mario 64 EEPROM
pub const MAGIC_MARIO: [u8; WORD_SIZE] = [0x48, 0x49, 0x07, 0x09];

type Magic = Option<[u8; WORD_SIZE]>;

struct MagicValues {
    ocarina: Magic,
    majora: Magic,
    trailer: Magic
}

/// Identifies the game of a save file by its magic numbers.
pub fn detect(path: &Path) -> Result<GameProfile> {
    let magic = read_magic_values(path).map_err(|e| SaveError::io(path, e))?;

    let profile = identify(&magic).ok_or_else(|| SaveError::UnknownFormat { path: path.to_path_buf() })?;
    debug!(path = %path.display(), title = profile.title(), endianness = ?profile.endianness(), "Detected save file");
    Ok(profile)
}

fn identify(magic: &MagicValues) -> Option<GameProfile> {
    if let Some(endianness) = zelda_endianness(magic.ocarina) {
        Some(GameProfile::Ocarina { endianness, charset: Charset::Ntsc })
    } else if let Some(endianness) = zelda_endianness(magic.majora) {
        Some(GameProfile::Majora { endianness })
    } else if magic.trailer == Some(MAGIC_MARIO) {
        Some(GameProfile::Mario)
    } else {
        None
    }
}

fn zelda_endianness(magic: Magic) -> Option<Endianness> {
    match magic? {
        MAGIC_ZELD => Some(Endianness::Big),
        MAGIC_DLEZ => Some(Endianness::Little),
        _ => None
    }
}

fn read_magic_values(path: &Path) -> io::Result<MagicValues> {
    let mut file = File::open(path)?;
    let file_size = file.metadata()?.len();

    let majora = read_magic_at(&mut file, MAGIC_OFFSET_MM)?;
    let ocarina = read_magic_at(&mut file, MAGIC_OFFSET_OOT)?;
    let trailer = match file_size.checked_sub(WORD_SIZE as u64) {
        Some(offset) => read_magic_at(&mut file, offset)?,
        None => None
    };

    Ok(MagicValues { ocarina, majora, trailer })
}

fn read_magic_at(file: &mut File, offset: u64) -> io::Result<Magic> {
    file.seek(SeekFrom::Start(offset))?;

    let mut magic = [0u8; WORD_SIZE];
    match file.read_exact(&mut magic) {
        Ok(()) => Ok(Some(magic)),
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => Ok(None),
        Err(e) => Err(e)
    }
}

#[cfg(test)]
#[path = "./detect_test.rs"]
mod detect_test;
