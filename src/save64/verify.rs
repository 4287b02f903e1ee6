// Copyright (C) 2024 Wilfred Bos
// Licensed under the MIT license. See the LICENSE file for the terms and conditions.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::debug;

use super::checksum::{self, ChecksumResult};
use super::detect::detect;
use super::error::Result;
use super::fields::DecodedField;
use super::loader::{load, SaveImage};
use super::notify::NotificationSink;
use super::profile::{Game, GameProfile};
use super::record::{CourseProgress, OcarinaHeader, RecordView};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotSelection {
    Single(u8),
    All
}

pub struct SlotReport {
    pub slot: u8,
    pub fields: Vec<DecodedField>,
    pub courses: Vec<CourseProgress>,
    pub checksum: ChecksumResult
}

pub struct SaveReport {
    pub path: PathBuf,
    pub profile: GameProfile,
    pub header: Option<OcarinaHeader>,
    pub slots: Vec<SlotReport>
}

impl SaveReport {
    pub fn all_checksums_match(&self) -> bool {
        self.slots.iter().all(|slot| slot.checksum.matches)
    }
}

pub struct Verifier<'a, N: NotificationSink> {
    notifier: &'a N
}

impl<'a, N: NotificationSink> Verifier<'a, N> {
    pub fn new(notifier: &'a N) -> Verifier<'a, N> {
        Verifier { notifier }
    }

    /// Detects, loads, decodes and checks one save file.
    pub fn verify_file(&self, path: &Path, selection: SlotSelection) -> Result<SaveReport> {
        let detected = detect(path)?;
        if let SlotSelection::Single(slot) = selection {
            detected.validate_slot(slot)?;
        }

        let image = load(path, detected.total_size(), detected.endianness())?;
        let profile = detected.refine(&image);

        let header = match profile.game() {
            Game::Ocarina => Some(OcarinaHeader::read(&image)?),
            Game::Majora | Game::Mario => None
        };

        let slots = match selection {
            SlotSelection::Single(slot) => vec![verify_slot(&image, &profile, slot)?],
            SlotSelection::All => (0..profile.slot_count())
                .into_par_iter()
                .map(|slot| verify_slot(&image, &profile, slot))
                .collect::<Result<Vec<SlotReport>>>()?
        };

        for slot in &slots {
            self.notifier.notify(&profile, slot.slot, &slot.checksum);
        }

        Ok(SaveReport { path: path.to_path_buf(), profile, header, slots })
    }
}

/// Decodes the fields of one slot and checks its checksum.
pub fn verify_slot(image: &SaveImage, profile: &GameProfile, slot: u8) -> Result<SlotReport> {
    let view = RecordView::new(image, profile, slot)?;
    let fields = view.fields()?;
    let courses = view.courses()?;
    let checksum = check_slot(image, profile, slot)?;

    Ok(SlotReport { slot, fields, courses, checksum })
}

pub fn check_slot(image: &SaveImage, profile: &GameProfile, slot: u8) -> Result<ChecksumResult> {
    profile.validate_slot(slot)?;

    let window = profile.checksum_window(slot);
    let stored = image.read_u16(window.stored_at)?;
    let buffer = image.as_bytes().get(window.start..).unwrap_or_default();
    let computed = checksum::compute(buffer, window.upper_bound, window.width);
    debug!(slot = slot + 1, start = window.start, upper_bound = window.upper_bound,
        width = window.width.bits(), stored, computed, "Checksum computed");

    Ok(ChecksumResult::new(stored, computed))
}

#[cfg(test)]
#[path = "./verify_test.rs"]
mod verify_test;
