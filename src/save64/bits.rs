// Copyright (C) 2024 Wilfred Bos
// Licensed under the MIT license. See the LICENSE file for the terms and conditions.

const DATA_BITS_MASK: u8 = 0x7F;

/// Counts collected stars in a course byte. Bit 7 is the cannon flag.
pub fn count_stars(course_flags: u8) -> u8 {
    (course_flags & DATA_BITS_MASK).count_ones() as u8
}

pub fn format_binary(value: u32, width: u8) -> String {
    let mut output = String::new();
    for bit in (0..width).rev() {
        output.push(if value & (1 << bit) != 0 { '1' } else { '0' });
        if bit > 0 && bit % 4 == 0 {
            output.push(' ');
        }
    }
    output
}

#[cfg(test)]
#[path = "./bits_test.rs"]
mod bits_test;
