// Copyright (C) 2024 Wilfred Bos
// Licensed under the MIT license. See the LICENSE file for the terms and conditions.

use super::checksum::{ChecksumWindow, Width};
use super::error::{Result, SaveError};
use super::loader::SaveImage;
use super::text::Charset;
use crate::byte_order::Endianness;

pub const SRA_HEADER_SIZE: usize = 0x20;
pub const SRA_BLOCK_SIZE: usize = 0x1450;
pub const SRA_SLOT_COUNT: u8 = 3;
pub const CHK_OFFSET_OOT: u16 = 0x1352;

pub const FLA_BLOCK_SIZE: usize = 0x2000;
pub const FLA_SLOT_COUNT: u8 = 5;
pub const CHK_OFFSET_MM: u16 = 0x100A;

pub const EEP_BLOCK_SIZE: usize = 0x200;
pub const EEP_SLOT_COUNT: u8 = 1;
pub const CHK_OFFSET_MARIO: u16 = 0x36;

const SRA_LANGUAGE_OFFSET: usize = 0x02;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Game {
    Ocarina,
    Majora,
    Mario
}

/// Everything known about a save file after detection.
///
/// The layout of each game is fixed, only byte order and (for Ocarina of Time)
/// the name charset vary per file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameProfile {
    Ocarina { endianness: Endianness, charset: Charset },
    Majora { endianness: Endianness },
    Mario
}

impl GameProfile {
    pub fn game(&self) -> Game {
        match self {
            GameProfile::Ocarina { .. } => Game::Ocarina,
            GameProfile::Majora { .. } => Game::Majora,
            GameProfile::Mario => Game::Mario
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            GameProfile::Ocarina { .. } => "Ocarina of Time (1998)",
            GameProfile::Majora { .. } => "Majora's Mask (2000)",
            GameProfile::Mario => "Super Mario 64 (1996)"
        }
    }

    pub fn endianness(&self) -> Endianness {
        match self {
            GameProfile::Ocarina { endianness, .. } | GameProfile::Majora { endianness } => *endianness,
            GameProfile::Mario => Endianness::Big
        }
    }

    pub fn charset(&self) -> Charset {
        match self {
            GameProfile::Ocarina { charset, .. } => *charset,
            GameProfile::Majora { .. } | GameProfile::Mario => Charset::Pal
        }
    }

    /// Glyph table of player names. Ocarina of Time names use the NTSC table
    /// whatever the header language is.
    pub fn name_charset(&self) -> Charset {
        match self {
            GameProfile::Ocarina { .. } => Charset::Ntsc,
            GameProfile::Majora { .. } | GameProfile::Mario => Charset::Pal
        }
    }

    pub fn checksum_offset(&self) -> u16 {
        match self {
            GameProfile::Ocarina { .. } => CHK_OFFSET_OOT,
            GameProfile::Majora { .. } => CHK_OFFSET_MM,
            GameProfile::Mario => CHK_OFFSET_MARIO
        }
    }

    pub fn header_size(&self) -> usize {
        match self {
            GameProfile::Ocarina { .. } => SRA_HEADER_SIZE,
            GameProfile::Majora { .. } | GameProfile::Mario => 0
        }
    }

    pub fn block_size(&self) -> usize {
        match self {
            GameProfile::Ocarina { .. } => SRA_BLOCK_SIZE,
            GameProfile::Majora { .. } => FLA_BLOCK_SIZE,
            GameProfile::Mario => EEP_BLOCK_SIZE
        }
    }

    pub fn slot_count(&self) -> u8 {
        match self {
            GameProfile::Ocarina { .. } => SRA_SLOT_COUNT,
            GameProfile::Majora { .. } => FLA_SLOT_COUNT,
            GameProfile::Mario => EEP_SLOT_COUNT
        }
    }

    pub fn total_size(&self) -> usize {
        self.header_size() + self.block_size() * self.slot_count() as usize
    }

    pub fn validate_slot(&self, slot: u8) -> Result<()> {
        if slot < self.slot_count() {
            Ok(())
        } else {
            Err(SaveError::InvalidSlot { slot, slot_count: self.slot_count() })
        }
    }

    /// Absolute image offset of the first byte of `slot`.
    pub fn slot_offset(&self, slot: u8) -> usize {
        self.header_size() + slot as usize * self.block_size()
    }

    /// Where the checksum of `slot` is computed and stored.
    ///
    /// Majora's Mask sums from the start of the image up to the slot's checksum,
    /// so every preceding slot is part of the window.
    pub fn checksum_window(&self, slot: u8) -> ChecksumWindow {
        let checksum_offset = self.checksum_offset() as usize;
        let slot_offset = self.slot_offset(slot);

        match self {
            GameProfile::Ocarina { .. } => ChecksumWindow {
                start: slot_offset,
                upper_bound: checksum_offset,
                width: Width::Half,
                stored_at: slot_offset + checksum_offset
            },
            GameProfile::Majora { .. } => ChecksumWindow {
                start: 0,
                upper_bound: checksum_offset + slot_offset,
                width: Width::Byte,
                stored_at: slot_offset + checksum_offset
            },
            GameProfile::Mario => ChecksumWindow {
                start: 0,
                upper_bound: checksum_offset,
                width: Width::Byte,
                stored_at: checksum_offset
            }
        }
    }

    /// Applies what can only be known after loading: an Ocarina of Time header
    /// with a non-English language selects the PAL charset.
    pub fn refine(&self, image: &SaveImage) -> GameProfile {
        match self {
            GameProfile::Ocarina { endianness, .. } => {
                let language = image.as_bytes().get(SRA_LANGUAGE_OFFSET).copied().unwrap_or(0);
                let charset = if language != 0 { Charset::Pal } else { Charset::Ntsc };
                GameProfile::Ocarina { endianness: *endianness, charset }
            }
            _ => *self
        }
    }
}

#[cfg(test)]
#[path = "./profile_test.rs"]
mod profile_test;
