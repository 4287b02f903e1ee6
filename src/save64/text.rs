// Copyright (C) 2024 Wilfred Bos
// Licensed under the MIT license. See the LICENSE file for the terms and conditions.

pub const NAME_LENGTH: usize = 8;

/// Regional glyph table used for player names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Charset {
    Ntsc,
    Pal
}

struct GlyphTable {
    upper: (u8, u8),
    lower: (u8, u8),
    space: u8
}

const NTSC_TABLE: GlyphTable = GlyphTable { upper: (0xAB, 0xC4), lower: (0xC5, 0xDE), space: 0xDF };
const PAL_TABLE: GlyphTable = GlyphTable { upper: (0x0A, 0x23), lower: (0x24, 0x3D), space: 0x3E };

impl Charset {
    fn table(&self) -> &'static GlyphTable {
        match self {
            Charset::Ntsc => &NTSC_TABLE,
            Charset::Pal => &PAL_TABLE
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Charset::Ntsc => "NTSC",
            Charset::Pal => "PAL"
        }
    }
}

/// Decodes a fixed-width glyph name. Bytes outside the letter and space ranges
/// are emitted as the character with the same code point.
pub fn decode(raw: &[u8; NAME_LENGTH], charset: Charset) -> String {
    raw.iter().map(|&glyph| decode_glyph(glyph, charset)).collect()
}

pub fn decode_glyph(glyph: u8, charset: Charset) -> char {
    let table = charset.table();

    let decoded = if (table.upper.0..=table.upper.1).contains(&glyph) {
        b'A' + (glyph - table.upper.0)
    } else if (table.lower.0..=table.lower.1).contains(&glyph) {
        b'a' + (glyph - table.lower.0)
    } else if glyph == table.space {
        b' '
    } else {
        glyph
    };
    char::from(decoded)
}

#[cfg(test)]
#[path = "./text_test.rs"]
mod text_test;
