use std::sync::Mutex;

use super::*;
use crate::byte_order::Endianness;
use crate::save64::error::SaveError;
use crate::save64::notify::SilentNotifier;
use crate::save64::text::Charset;
use crate::save64::test_support::{
    fix_checksum, majora_image, mario_image, ocarina_image, ocarina_profile, to_file_bytes, write_temp,
};

#[derive(Default)]
struct RecordingNotifier {
    verdicts: Mutex<Vec<(u8, bool)>>
}

impl NotificationSink for RecordingNotifier {
    fn notify(&self, _profile: &GameProfile, slot: u8, result: &ChecksumResult) {
        self.verdicts.lock().unwrap().push((slot, result.matches));
    }
}

fn little_endian_ocarina(slot: u8) -> (Vec<u8>, u16) {
    let profile = ocarina_profile(Endianness::Little);
    let mut canonical = ocarina_image();
    let base = profile.slot_offset(slot);
    canonical[base + 0x34..base + 0x36].copy_from_slice(&0x01F4u16.to_be_bytes());
    canonical[base + 0x100] = 0x7E;
    let checksum = fix_checksum(&mut canonical, &profile, slot);
    (canonical, checksum)
}

#[test]
fn verify_ocarina_little_endian_matches() {
    let (canonical, checksum) = little_endian_ocarina(0);
    let bytes = to_file_bytes(&canonical, Endianness::Little);
    assert_eq!(&bytes[0x3C..0x40], &0x5A454C44u32.to_le_bytes());
    let file = write_temp(&bytes);
    let notifier = RecordingNotifier::default();

    let report = Verifier::new(&notifier).verify_file(file.path(), SlotSelection::Single(0)).unwrap();

    assert_eq!(report.profile.game(), Game::Ocarina);
    assert_eq!(report.profile.endianness(), Endianness::Little);
    assert_eq!(report.slots.len(), 1);
    assert_eq!(report.slots[0].checksum, ChecksumResult { stored: checksum, computed: checksum, matches: true });
    assert!(report.all_checksums_match());
    assert_eq!(*notifier.verdicts.lock().unwrap(), vec![(0, true)]);
}

#[test]
fn verify_ocarina_flipped_byte_mismatches() {
    let (mut canonical, checksum) = little_endian_ocarina(1);
    let base = ocarina_profile(Endianness::Little).slot_offset(1);
    canonical[base + 0x200] ^= 0x01;
    let file = write_temp(&to_file_bytes(&canonical, Endianness::Little));
    let notifier = RecordingNotifier::default();

    let report = Verifier::new(&notifier).verify_file(file.path(), SlotSelection::Single(1)).unwrap();

    let result = report.slots[0].checksum;
    assert!(!result.matches);
    assert_eq!(result.stored, checksum);
    assert_ne!(result.computed, checksum);
    assert_eq!(*notifier.verdicts.lock().unwrap(), vec![(1, false)]);
}

#[test]
fn verify_ocarina_byte_outside_window_keeps_match() {
    let (mut canonical, _) = little_endian_ocarina(0);
    let base = ocarina_profile(Endianness::Little).slot_offset(0);
    canonical[base + 0x1400] = 0xAA;
    let file = write_temp(&to_file_bytes(&canonical, Endianness::Little));

    let report = Verifier::new(&SilentNotifier).verify_file(file.path(), SlotSelection::Single(0)).unwrap();

    assert!(report.slots[0].checksum.matches);
}

#[test]
fn verify_ocarina_header_and_fields() {
    let (canonical, _) = little_endian_ocarina(0);
    let file = write_temp(&to_file_bytes(&canonical, Endianness::Little));

    let report = Verifier::new(&SilentNotifier).verify_file(file.path(), SlotSelection::Single(0)).unwrap();

    let header = report.header.unwrap();
    assert_eq!(header.language_name(), "English");
    let rupees = report.slots[0].fields.iter().find(|f| f.label == "Rupees").unwrap();
    assert_eq!(rupees.value.to_string(), "500");
}

#[test]
fn verify_ocarina_german_language_name() {
    let profile = ocarina_profile(Endianness::Big);
    let mut canonical = ocarina_image();
    canonical[2] = 0x01;
    let base = profile.slot_offset(0);
    canonical[base + 0x24..base + 0x2C].copy_from_slice(&[0xB6, 0xCD, 0xD2, 0xCF, 0xDF, 0xDF, 0xDF, 0xDF]);
    fix_checksum(&mut canonical, &profile, 0);
    let file = write_temp(&canonical);

    let report = Verifier::new(&SilentNotifier).verify_file(file.path(), SlotSelection::Single(0)).unwrap();

    assert_eq!(report.header.as_ref().unwrap().language_name(), "German");
    assert_eq!(report.profile.charset(), Charset::Pal);
    let name = report.slots[0].fields.iter().find(|f| f.label == "Player Name").unwrap();
    assert_eq!(name.value.to_string(), "Link    ");
    assert!(report.slots[0].checksum.matches);
}

#[test]
fn verify_truncated_file() {
    let canonical = ocarina_image();
    let file = write_temp(&canonical[..canonical.len() - 1]);

    let result = Verifier::new(&SilentNotifier).verify_file(file.path(), SlotSelection::Single(0));

    assert!(matches!(result, Err(SaveError::TruncatedFile { .. })));
}

#[test]
fn verify_unknown_format() {
    let file = write_temp(&[0u8; 0x400]);

    let result = Verifier::new(&SilentNotifier).verify_file(file.path(), SlotSelection::All);

    assert!(matches!(result, Err(SaveError::UnknownFormat { .. })));
}

#[test]
fn verify_invalid_slot_before_decoding() {
    let notifier = RecordingNotifier::default();
    let file = write_temp(&majora_image());

    let result = Verifier::new(&notifier).verify_file(file.path(), SlotSelection::Single(5));

    assert!(matches!(result, Err(SaveError::InvalidSlot { slot: 5, slot_count: 5 })));
    assert!(notifier.verdicts.lock().unwrap().is_empty());
}

#[test]
fn verify_majora_window_spans_preceding_slots() {
    let profile = GameProfile::Majora { endianness: Endianness::Big };
    let mut canonical = majora_image();
    canonical[0x10] = 0x05;
    for slot in 0..profile.slot_count() {
        fix_checksum(&mut canonical, &profile, slot);
    }
    let image = SaveImage::from_canonical(canonical.clone());
    for slot in 0..profile.slot_count() {
        assert!(check_slot(&image, &profile, slot).unwrap().matches);
    }

    canonical[0x10] = 0x06;
    let image = SaveImage::from_canonical(canonical);

    for slot in 0..profile.slot_count() {
        assert!(!check_slot(&image, &profile, slot).unwrap().matches, "slot {} should include slot 0 bytes", slot);
    }
}

#[test]
fn verify_majora_change_in_later_slot_keeps_earlier_slots() {
    let profile = GameProfile::Majora { endianness: Endianness::Big };
    let mut canonical = majora_image();
    for slot in 0..profile.slot_count() {
        fix_checksum(&mut canonical, &profile, slot);
    }
    canonical[3 * 0x2000 + 0x40] = 0x01;
    let image = SaveImage::from_canonical(canonical);

    let verdicts = (0..profile.slot_count())
        .map(|slot| check_slot(&image, &profile, slot).unwrap().matches)
        .collect::<Vec<bool>>();

    assert_eq!(verdicts, vec![true, true, true, false, false]);
}

#[test]
fn verify_majora_all_slots() {
    let profile = GameProfile::Majora { endianness: Endianness::Little };
    let mut canonical = majora_image();
    for slot in 0..profile.slot_count() {
        fix_checksum(&mut canonical, &profile, slot);
    }
    let file = write_temp(&to_file_bytes(&canonical, Endianness::Little));
    let notifier = RecordingNotifier::default();

    let report = Verifier::new(&notifier).verify_file(file.path(), SlotSelection::All).unwrap();

    assert_eq!(report.slots.iter().map(|s| s.slot).collect::<Vec<u8>>(), vec![0, 1, 2, 3, 4]);
    assert!(report.all_checksums_match());
    assert!(report.header.is_none());
    assert_eq!(notifier.verdicts.lock().unwrap().len(), 5);
}

#[test]
fn verify_mario() {
    let mut canonical = mario_image();
    canonical[0x0C] = 0x87;
    canonical[0x25] = 100;
    fix_checksum(&mut canonical, &GameProfile::Mario, 0);
    let file = write_temp(&canonical);

    let report = Verifier::new(&SilentNotifier).verify_file(file.path(), SlotSelection::Single(0)).unwrap();

    assert_eq!(report.profile, GameProfile::Mario);
    assert!(report.slots[0].checksum.matches);
    assert_eq!(report.slots[0].courses[0].stars, 3);
    assert_eq!(report.slots[0].courses[0].coins, 100);
}

#[test]
fn verify_mario_second_slot_invalid() {
    let file = write_temp(&mario_image());

    let result = Verifier::new(&SilentNotifier).verify_file(file.path(), SlotSelection::Single(1));

    assert!(matches!(result, Err(SaveError::InvalidSlot { slot: 1, slot_count: 1 })));
}

#[test]
fn check_slot_is_deterministic() {
    let image = SaveImage::from_canonical(ocarina_image());
    let profile = ocarina_profile(Endianness::Big);

    assert_eq!(check_slot(&image, &profile, 2).unwrap(), check_slot(&image, &profile, 2).unwrap());
}
