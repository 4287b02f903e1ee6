// Copyright (C) 2024 Wilfred Bos
// Licensed under the MIT license. See the LICENSE file for the terms and conditions.

//! Per-game field tables. Offsets are relative to the start of a save slot.
//!
//! Arrays such as inventories, item amounts, dungeon items, small key counts
//! and the event/item/info flag tables are present in the layouts but are not
//! decoded.

use std::fmt;

use super::bits::format_binary;
use super::profile::Game;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Byte,
    Half,
    SignedHalf,
    Word,
    /// Halfword shown against the halfword at `total`, such as health out of heart containers
    Ratio { total: usize },
    Flag { mask: u8 },
    Ascii { length: usize },
    Name
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Decimal,
    Hex { digits: usize },
    Binary { bits: u8 },
    Choice { unset: &'static str, set: &'static str },
    Scaled { divisor: u32 },
    Percent { full: u32 }
}

#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    pub label: &'static str,
    pub offset: usize,
    pub kind: FieldKind,
    pub format: Format
}

const fn field(label: &'static str, offset: usize, kind: FieldKind, format: Format) -> FieldSpec {
    FieldSpec { label, offset, kind, format }
}

const DEC: Format = Format::Decimal;
const HEX2: Format = Format::Hex { digits: 2 };
const HEX4: Format = Format::Hex { digits: 4 };
const HEX8: Format = Format::Hex { digits: 8 };
const HEARTS: Format = Format::Scaled { divisor: 0x10 };
const MAGIC: Format = Format::Percent { full: 0x60 };
const TRUE_FALSE: Format = Format::Choice { unset: "False", set: "True" };
const YES_NO: Format = Format::Choice { unset: "No", set: "Yes" };
const AGE: Format = Format::Choice { unset: "Adult", set: "Child" };
const DAY_NIGHT: Format = Format::Choice { unset: "Day", set: "Night" };

pub const OCARINA_FIELDS: &[FieldSpec] = &[
    field("Entrance Index", 0x00, FieldKind::Word, HEX4),
    field("Age Modifier", 0x04, FieldKind::Word, AGE),
    field("Cutscene", 0x08, FieldKind::Half, HEX4),
    field("World Time", 0x0C, FieldKind::Half, HEX4),
    field("Night Flag", 0x10, FieldKind::Word, DAY_NIGHT),
    field("Magic String", 0x1C, FieldKind::Ascii { length: 6 }, DEC),
    field("Death Counter", 0x22, FieldKind::Half, DEC),
    field("Player Name", 0x24, FieldKind::Name, DEC),
    field("Disk Drive Only", 0x2C, FieldKind::Half, HEX4),
    field("Current Health", 0x30, FieldKind::Ratio { total: 0x2E }, HEARTS),
    field("Magic Meter Size", 0x32, FieldKind::Byte, HEX2),
    field("Current Magic", 0x33, FieldKind::Byte, MAGIC),
    field("Rupees", 0x34, FieldKind::Half, DEC),
    field("Sword Health", 0x36, FieldKind::Half, DEC),
    field("Navi Timer", 0x38, FieldKind::Half, HEX4),
    field("Magic Flag 1", 0x3A, FieldKind::Byte, TRUE_FALSE),
    field("Magic Flag 2", 0x3C, FieldKind::Byte, TRUE_FALSE),
    field("Double Defense", 0x3D, FieldKind::Byte, TRUE_FALSE),
    field("Biggoron Sword Flag", 0x3E, FieldKind::Byte, TRUE_FALSE),
    field("Saved Scene Index", 0x66, FieldKind::Half, HEX4),
    // 0x68 current button equips
    field("Equipped Equipment", 0x70, FieldKind::Half, HEX4),
    // 0x74 inventory, 0x8C item amounts
    field("Magic Beans Bought", 0x9B, FieldKind::Byte, DEC),
    field("Obtained Equipment", 0x9C, FieldKind::Half, Format::Binary { bits: 16 }),
    field("Obtained Upgrades", 0xA0, FieldKind::Word, Format::Binary { bits: 32 }),
    field("Quest Status Items", 0xA4, FieldKind::Word, Format::Binary { bits: 32 }),
    field("Kokiri Emerald", 0xA5, FieldKind::Flag { mask: 0x04 }, YES_NO),
    field("Goron Ruby", 0xA5, FieldKind::Flag { mask: 0x08 }, YES_NO),
    field("Zora Sapphire", 0xA5, FieldKind::Flag { mask: 0x10 }, YES_NO),
    // 0xA8 dungeon items, 0xBC small keys
    field("Double Defense Hearts", 0xCF, FieldKind::Byte, DEC),
    field("Gold Skulltula Tokens", 0xD0, FieldKind::Half, DEC),
    // 0xD4 scene flags
    field("Big Poe Points", 0xEBC, FieldKind::Word, Format::Scaled { divisor: 100 }),
    // 0xED4 event, item and info tables
];

pub const MAJORA_FIELDS: &[FieldSpec] = &[
    field("Entrance Index", 0x00, FieldKind::Word, HEX4),
    field("Equipped Mask", 0x04, FieldKind::Byte, HEX2),
    field("Age Modifier", 0x07, FieldKind::Byte, AGE),
    field("Cutscene Number", 0x08, FieldKind::Word, HEX8),
    field("World Time", 0x0C, FieldKind::Half, HEX4),
    field("Owl Save Location", 0x0E, FieldKind::Half, HEX4),
    field("Night Flag", 0x10, FieldKind::Word, DAY_NIGHT),
    field("Current Day", 0x18, FieldKind::Word, DEC),
    field("Player Form", 0x20, FieldKind::Byte, HEX2),
    field("Have Tatl", 0x22, FieldKind::Byte, YES_NO),
    field("Is Owl Save", 0x23, FieldKind::Byte, YES_NO),
    field("Magic String", 0x24, FieldKind::Ascii { length: 6 }, DEC),
    field("Death Counter", 0x2A, FieldKind::Half, DEC),
    field("Player Name", 0x2C, FieldKind::Name, DEC),
    field("Current Health", 0x36, FieldKind::Ratio { total: 0x34 }, HEARTS),
    field("Magic Meter Size", 0x38, FieldKind::Byte, DEC),
    field("Current Magic", 0x39, FieldKind::Byte, MAGIC),
    field("Rupees", 0x3A, FieldKind::Half, DEC),
    field("Sword Health", 0x3C, FieldKind::Half, HEX2),
    field("Double Defense Hearts", 0x42, FieldKind::Byte, HEX2),
];

pub const MARIO_FIELDS: &[FieldSpec] = &[
    field("Cap Level", 0x00, FieldKind::Byte, DEC),
    field("Cap Area", 0x01, FieldKind::Byte, DEC),
    field("Cap Position X", 0x02, FieldKind::SignedHalf, DEC),
    field("Cap Position Y", 0x04, FieldKind::SignedHalf, DEC),
    field("Cap Position Z", 0x06, FieldKind::SignedHalf, DEC),
    field("Castle Stars", 0x08, FieldKind::Byte, Format::Binary { bits: 8 }),
    field("Castle Flag 1", 0x09, FieldKind::Byte, Format::Binary { bits: 8 }),
    field("Castle Flag 2", 0x0A, FieldKind::Byte, Format::Binary { bits: 8 }),
    field("Castle Flag 3", 0x0B, FieldKind::Byte, Format::Binary { bits: 8 }),
    field("File Exists", 0x0B, FieldKind::Flag { mask: 0x01 }, YES_NO),
    field("Wing Cap Unlocked", 0x0B, FieldKind::Flag { mask: 0x02 }, YES_NO),
    field("Metal Cap Unlocked", 0x0B, FieldKind::Flag { mask: 0x04 }, YES_NO),
    field("Vanish Cap Unlocked", 0x0B, FieldKind::Flag { mask: 0x08 }, YES_NO),
    field("Basement Key", 0x0B, FieldKind::Flag { mask: 0x10 }, YES_NO),
    field("Upstairs Key", 0x0B, FieldKind::Flag { mask: 0x20 }, YES_NO),
    // 0x0C course star flags, see MARIO_COURSES
    field("Bowser 1 Red Coins", 0x1B, FieldKind::Byte, HEX2),
    field("Bowser 2 Red Coins", 0x1C, FieldKind::Byte, HEX2),
    field("Bowser 3 Red Coins", 0x1D, FieldKind::Byte, HEX2),
    field("Princess Secret Slide", 0x1E, FieldKind::Byte, HEX2),
    field("Metal Cap Red Coins", 0x1F, FieldKind::Byte, HEX2),
    field("Wing Cap Red Coins", 0x20, FieldKind::Byte, HEX2),
    field("Vanish Cap Red Coins", 0x21, FieldKind::Byte, HEX2),
    field("Wing Mario Red Coins", 0x22, FieldKind::Byte, HEX2),
    field("Secret Aquarium", 0x23, FieldKind::Byte, HEX2),
    field("Unused Cake Screen", 0x24, FieldKind::Byte, HEX2),
    // 0x25 course coin scores, see MARIO_COURSES
    field("Magic Number", 0x34, FieldKind::Half, HEX4),
];

pub const MARIO_STARS_OFFSET: usize = 0x0C;
pub const MARIO_COINS_OFFSET: usize = 0x25;

pub const MARIO_COURSES: [&str; 15] = [
    "Bob-omb Battlefield", "Whomp's Fortress", "Jolly Roger Bay", "Cool Cool Mountain",
    "Big Boo's Haunt", "Hazy Maze Cave", "Lethal Lava Land", "Shifting Sand Land",
    "Dire Dire Docks", "Snowman's Land", "Wet Dry World", "Tall Tall Mountain",
    "Tiny Huge Island", "Tick Tock Clock", "Rainbow Ride"
];

pub fn fields_for(game: Game) -> &'static [FieldSpec] {
    match game {
        Game::Ocarina => OCARINA_FIELDS,
        Game::Majora => MAJORA_FIELDS,
        Game::Mario => MARIO_FIELDS
    }
}

pub fn name_offset(game: Game) -> Option<usize> {
    fields_for(game).iter()
        .find(|spec| spec.kind == FieldKind::Name)
        .map(|spec| spec.offset)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Number { value: u32, format: Format },
    Signed(i16),
    Ratio { value: u32, total: u32, format: Format },
    Flag { set: bool, format: Format },
    Text(String)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedField {
    pub label: &'static str,
    pub value: FieldValue
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number { value, format } => format_number(f, *value, *format),
            FieldValue::Signed(value) => write!(f, "{}", value),
            FieldValue::Ratio { value, total, format } => {
                format_number(f, *value, *format)?;
                write!(f, "/")?;
                format_number(f, *total, *format)
            }
            FieldValue::Flag { set, format } => format_number(f, *set as u32, *format),
            FieldValue::Text(text) => write!(f, "{}", text)
        }
    }
}

fn format_number(f: &mut fmt::Formatter<'_>, value: u32, format: Format) -> fmt::Result {
    match format {
        Format::Decimal => write!(f, "{}", value),
        Format::Hex { digits } => write!(f, "{:0digits$x}", value, digits = digits),
        Format::Binary { bits } => write!(f, "{}", format_binary(value, bits)),
        Format::Choice { unset, set } => write!(f, "{}", if value != 0 { set } else { unset }),
        Format::Scaled { divisor } => write!(f, "{}", value / divisor),
        Format::Percent { full } => write!(f, "{:.2}%", value as f64 / full as f64 * 100.0)
    }
}

#[cfg(test)]
#[path = "./fields_test.rs"]
mod fields_test;
