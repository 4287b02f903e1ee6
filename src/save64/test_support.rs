use std::io::Write;

use tempfile::NamedTempFile;

use super::checksum::compute;
use super::profile::GameProfile;
use super::text::Charset;
use crate::byte_order::{self, Endianness, WORD_SIZE};

pub const OCARINA_MAGIC_OFFSET: usize = 0x3C;
pub const MAJORA_MAGIC_OFFSET: usize = 0x24;

pub fn ocarina_profile(endianness: Endianness) -> GameProfile {
    GameProfile::Ocarina { endianness, charset: Charset::Ntsc }
}

/// Canonical Ocarina of Time image with the magic string in every slot.
pub fn ocarina_image() -> Vec<u8> {
    let profile = ocarina_profile(Endianness::Big);
    let mut data = vec![0u8; profile.total_size()];
    data[3..12].copy_from_slice(&[0x98, 0x09, 0x10, 0x21, b'Z', b'E', b'L', b'D', b'A']);
    for slot in 0..profile.slot_count() {
        let base = profile.slot_offset(slot);
        data[base + 0x1C..base + 0x22].copy_from_slice(b"ZELDAZ");
    }
    data
}

/// Canonical Majora's Mask image with the magic string in every slot.
pub fn majora_image() -> Vec<u8> {
    let profile = GameProfile::Majora { endianness: Endianness::Big };
    let mut data = vec![0u8; profile.total_size()];
    for slot in 0..profile.slot_count() {
        let base = profile.slot_offset(slot);
        data[base + 0x24..base + 0x2A].copy_from_slice(b"ZELDA3");
    }
    data
}

/// Canonical Super Mario 64 image ending in the menu signature.
pub fn mario_image() -> Vec<u8> {
    let mut data = vec![0u8; GameProfile::Mario.total_size()];
    let end = data.len();
    data[end - 4..].copy_from_slice(&[0x48, 0x49, 0x07, 0x09]);
    data
}

/// Stores the correct checksum of `slot` into a canonical image.
pub fn fix_checksum(data: &mut [u8], profile: &GameProfile, slot: u8) -> u16 {
    let window = profile.checksum_window(slot);
    let checksum = compute(&data[window.start..], window.upper_bound, window.width);
    data[window.stored_at..window.stored_at + 2].copy_from_slice(&checksum.to_be_bytes());
    checksum
}

/// Converts a canonical image into the on-disk byte order.
pub fn to_file_bytes(canonical: &[u8], endianness: Endianness) -> Vec<u8> {
    canonical.chunks(WORD_SIZE)
        .flat_map(|chunk| {
            let mut word = [0u8; WORD_SIZE];
            word[..chunk.len()].copy_from_slice(chunk);
            byte_order::to_canonical(word, endianness)
        })
        .collect()
}

pub fn write_temp(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}
