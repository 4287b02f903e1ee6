// Copyright (C) 2024 Wilfred Bos
// Licensed under the MIT license. See the LICENSE file for the terms and conditions.

pub const WORD_SIZE: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endianness {
    Little,
    Big
}

impl Endianness {
    pub fn name(&self) -> &'static str {
        match self {
            Endianness::Little => "Little endian",
            Endianness::Big => "Big endian"
        }
    }
}

pub fn swap_word(word: u32) -> u32 {
    word.swap_bytes()
}

pub fn to_canonical(word: [u8; WORD_SIZE], endianness: Endianness) -> [u8; WORD_SIZE] {
    match endianness {
        Endianness::Little => swap_word(u32::from_be_bytes(word)).to_be_bytes(),
        Endianness::Big => word
    }
}

pub fn read_u16(source: &[u8], offset: usize) -> Option<u16> {
    source.get(offset..offset + 2).map(|b| u16::from_be_bytes([b[0], b[1]]))
}

#[cfg(test)]
#[path = "./byte_order_test.rs"]
mod byte_order_test;
