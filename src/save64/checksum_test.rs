use super::*;

#[test]
fn compute_bytes() {
    let buffer = [0x01, 0x02, 0x03, 0xFF];

    assert_eq!(compute(&buffer, 4, Width::Byte), 0x0105);
}

#[test]
fn compute_bytes_excludes_upper_bound() {
    let buffer = [0x01, 0x02, 0x03, 0xFF];

    assert_eq!(compute(&buffer, 3, Width::Byte), 0x0006);
}

#[test]
fn compute_halves_big_endian() {
    let buffer = [0x12, 0x34, 0x00, 0x01];

    assert_eq!(compute(&buffer, 4, Width::Half), 0x1235);
}

#[test]
fn compute_halves_wraps_around() {
    let buffer = [0xFF, 0xFF, 0x00, 0x02];

    assert_eq!(compute(&buffer, 4, Width::Half), 0x0001);
}

#[test]
fn compute_bytes_wraps_around() {
    let buffer = vec![0xFF; 0x102];

    let expected = (0xFFu32 * 0x102 % 0x10000) as u16;
    assert_eq!(compute(&buffer, buffer.len(), Width::Byte), expected);
}

#[test]
fn compute_halves_skips_odd_trailing_byte() {
    let buffer = [0x00, 0x10, 0x7F];

    assert_eq!(compute(&buffer, 3, Width::Half), 0x0010);
}

#[test]
fn compute_clamps_to_buffer() {
    let buffer = [0x01, 0x01];

    assert_eq!(compute(&buffer, 0x100, Width::Byte), 0x0002);
}

#[test]
fn compute_empty_window() {
    let buffer = [0x55; 8];

    assert_eq!(compute(&buffer, 0, Width::Half), 0);
}

#[test]
fn compute_is_deterministic() {
    let buffer = (0..=255u8).cycle().take(0x1352).collect::<Vec<u8>>();

    let first = compute(&buffer, 0x1352, Width::Half);
    let second = compute(&buffer, 0x1352, Width::Half);

    assert_eq!(first, second);
}

#[test]
fn checksum_result_matches() {
    assert!(ChecksumResult::new(0x1234, 0x1234).matches);
    assert!(!ChecksumResult::new(0x1234, 0x1235).matches);
}

#[test]
fn width_bits() {
    assert_eq!(Width::Byte.bits(), 8);
    assert_eq!(Width::Half.bits(), 16);
}
