// Copyright (C) 2024 Wilfred Bos
// Licensed under the MIT license. See the LICENSE file for the terms and conditions.

/// Element width of the additive checksum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Width {
    Byte,
    Half
}

impl Width {
    pub fn bits(&self) -> u8 {
        match self {
            Width::Byte => 8,
            Width::Half => 16
        }
    }
}

/// Placement of a checksum inside a loaded image.
///
/// The sum runs over `image[start..start + upper_bound]`, the stored value is a
/// big-endian `u16` at `stored_at` (absolute image offset).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChecksumWindow {
    pub start: usize,
    pub upper_bound: usize,
    pub width: Width,
    pub stored_at: usize
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChecksumResult {
    pub stored: u16,
    pub computed: u16,
    pub matches: bool
}

impl ChecksumResult {
    pub fn new(stored: u16, computed: u16) -> ChecksumResult {
        ChecksumResult { stored, computed, matches: stored == computed }
    }
}

/// Wrapping 16-bit sum of the elements in `buffer[..upper_bound]`.
///
/// The window is clamped to the buffer. With `Width::Half` an odd trailing byte
/// is not part of any element and is skipped.
pub fn compute(buffer: &[u8], upper_bound: usize, width: Width) -> u16 {
    let window = &buffer[..upper_bound.min(buffer.len())];

    match width {
        Width::Byte => window.iter()
            .fold(0u16, |sum, &b| sum.wrapping_add(b as u16)),
        Width::Half => window.chunks_exact(2)
            .fold(0u16, |sum, pair| sum.wrapping_add(u16::from_be_bytes([pair[0], pair[1]])))
    }
}

#[cfg(test)]
#[path = "./checksum_test.rs"]
mod checksum_test;
