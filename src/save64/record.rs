// Copyright (C) 2024 Wilfred Bos
// Licensed under the MIT license. See the LICENSE file for the terms and conditions.

use super::bits::count_stars;
use super::error::{Result, SaveError};
use super::fields::{self, DecodedField, FieldKind, FieldSpec, FieldValue, MARIO_COINS_OFFSET, MARIO_COURSES, MARIO_STARS_OFFSET};
use super::loader::SaveImage;
use super::profile::{Game, GameProfile, SRA_HEADER_SIZE};
use super::text::{self, NAME_LENGTH};

/// Bounds-checked window over one save slot of a loaded image.
#[derive(Clone, Copy)]
pub struct RecordView<'a> {
    image: &'a SaveImage,
    profile: &'a GameProfile,
    base_offset: usize
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseProgress {
    pub name: &'static str,
    pub coins: u8,
    pub stars: u8
}

impl<'a> RecordView<'a> {
    pub fn new(image: &'a SaveImage, profile: &'a GameProfile, slot: u8) -> Result<RecordView<'a>> {
        profile.validate_slot(slot)?;

        let base_offset = profile.slot_offset(slot);
        let record_end = base_offset + profile.block_size();
        if record_end > image.len() {
            return Err(SaveError::OutOfBounds { offset: base_offset, size: profile.block_size(), limit: image.len() });
        }

        Ok(RecordView { image, profile, base_offset })
    }

    pub fn base_offset(&self) -> usize {
        self.base_offset
    }

    pub fn bytes(&self, offset: usize, size: usize) -> Result<&'a [u8]> {
        let limit = self.profile.block_size();
        if offset.checked_add(size).map_or(true, |end| end > limit) {
            return Err(SaveError::OutOfBounds { offset, size, limit });
        }

        let start = self.base_offset + offset;
        self.image.as_bytes().get(start..start + size)
            .ok_or(SaveError::OutOfBounds { offset: start, size, limit: self.image.len() })
    }

    pub fn u8(&self, offset: usize) -> Result<u8> {
        Ok(self.bytes(offset, 1)?[0])
    }

    pub fn u16(&self, offset: usize) -> Result<u16> {
        let b = self.bytes(offset, 2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    pub fn i16(&self, offset: usize) -> Result<i16> {
        let b = self.bytes(offset, 2)?;
        Ok(i16::from_be_bytes([b[0], b[1]]))
    }

    pub fn u32(&self, offset: usize) -> Result<u32> {
        let b = self.bytes(offset, 4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn flag(&self, offset: usize, mask: u8) -> Result<bool> {
        Ok(self.u8(offset)? & mask != 0)
    }

    pub fn name_bytes(&self) -> Result<Option<[u8; NAME_LENGTH]>> {
        match fields::name_offset(self.profile.game()) {
            Some(offset) => {
                let mut name = [0u8; NAME_LENGTH];
                name.copy_from_slice(self.bytes(offset, NAME_LENGTH)?);
                Ok(Some(name))
            }
            None => Ok(None)
        }
    }

    pub fn player_name(&self) -> Result<Option<String>> {
        Ok(self.name_bytes()?.map(|raw| text::decode(&raw, self.profile.name_charset())))
    }

    pub fn decode(&self, spec: &FieldSpec) -> Result<DecodedField> {
        let value = match spec.kind {
            FieldKind::Byte => FieldValue::Number { value: self.u8(spec.offset)? as u32, format: spec.format },
            FieldKind::Half => FieldValue::Number { value: self.u16(spec.offset)? as u32, format: spec.format },
            FieldKind::Word => FieldValue::Number { value: self.u32(spec.offset)?, format: spec.format },
            FieldKind::Ratio { total } => FieldValue::Ratio {
                value: self.u16(spec.offset)? as u32,
                total: self.u16(total)? as u32,
                format: spec.format
            },
            FieldKind::SignedHalf => FieldValue::Signed(self.i16(spec.offset)?),
            FieldKind::Flag { mask } => FieldValue::Flag { set: self.flag(spec.offset, mask)?, format: spec.format },
            FieldKind::Ascii { length } => FieldValue::Text(
                self.bytes(spec.offset, length)?.iter().map(|&b| char::from(b)).collect()
            ),
            FieldKind::Name => {
                let mut raw = [0u8; NAME_LENGTH];
                raw.copy_from_slice(self.bytes(spec.offset, NAME_LENGTH)?);
                FieldValue::Text(text::decode(&raw, self.profile.name_charset()))
            }
        };
        Ok(DecodedField { label: spec.label, value })
    }

    /// Decodes every scalar field of the game's field table.
    pub fn fields(&self) -> Result<Vec<DecodedField>> {
        fields::fields_for(self.profile.game()).iter()
            .map(|spec| self.decode(spec))
            .collect()
    }

    /// Coin scores and star counts of the main courses, Super Mario 64 only.
    pub fn courses(&self) -> Result<Vec<CourseProgress>> {
        if self.profile.game() != Game::Mario {
            return Ok(vec![]);
        }

        MARIO_COURSES.iter().enumerate()
            .map(|(index, &name)| Ok(CourseProgress {
                name,
                coins: self.u8(MARIO_COINS_OFFSET + index)?,
                stars: count_stars(self.u8(MARIO_STARS_OFFSET + index)?)
            }))
            .collect()
    }
}

/// Options block at the start of an Ocarina of Time SRA file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OcarinaHeader {
    pub sound: u8,
    pub z_target: u8,
    pub language: u8,
    pub id: [u8; 9]
}

impl OcarinaHeader {
    pub fn read(image: &SaveImage) -> Result<OcarinaHeader> {
        let header = image.as_bytes().get(..SRA_HEADER_SIZE)
            .ok_or(SaveError::OutOfBounds { offset: 0, size: SRA_HEADER_SIZE, limit: image.len() })?;

        let mut id = [0u8; 9];
        id.copy_from_slice(&header[3..12]);
        Ok(OcarinaHeader { sound: header[0], z_target: header[1], language: header[2], id })
    }

    pub fn sound_name(&self) -> &'static str {
        match self.sound {
            0x0 => "Stereo",
            0x1 => "Mono",
            0x2 => "Headset",
            0x3 => "Surround",
            _ => "Unknown"
        }
    }

    pub fn z_target_name(&self) -> &'static str {
        match self.z_target {
            0x0 => "Switch",
            0x1 => "Hold",
            _ => "Unknown"
        }
    }

    pub fn language_name(&self) -> &'static str {
        match self.language {
            0x0 => "English",
            0x1 => "German",
            0x2 => "French",
            _ => "Unknown"
        }
    }

    /// The id is four binary bytes followed by "ZELDA".
    pub fn id_string(&self) -> String {
        let prefix = self.id[..4].iter().map(|b| format!("0x{:x}", b)).collect::<Vec<String>>();
        let suffix = self.id[4..].iter().map(|&b| char::from(b)).collect::<String>();
        format!("{} {}", prefix.join(" "), suffix)
    }
}

#[cfg(test)]
#[path = "./record_test.rs"]
mod record_test;
