// Copyright (C) 2024 Wilfred Bos
// Licensed under the MIT license. See the LICENSE file for the terms and conditions.

use std::io::{self, Write};

use tracing::{info, warn};

use super::checksum::ChecksumResult;
use super::profile::{Game, GameProfile};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Secret,
    Coin,
    Error
}

impl Cue {
    pub fn for_result(game: Game, matches: bool) -> Cue {
        match (game, matches) {
            (_, false) => Cue::Error,
            (Game::Mario, true) => Cue::Coin,
            (_, true) => Cue::Secret
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Cue::Secret => "secret",
            Cue::Coin => "coin",
            Cue::Error => "error"
        }
    }
}

/// Receives the verdict of every verified slot.
pub trait NotificationSink: Sync {
    fn notify(&self, profile: &GameProfile, slot: u8, result: &ChecksumResult);
}

/// Logs the cue and rings the terminal bell when a checksum fails.
pub struct BellNotifier;

impl NotificationSink for BellNotifier {
    fn notify(&self, profile: &GameProfile, slot: u8, result: &ChecksumResult) {
        let cue = Cue::for_result(profile.game(), result.matches);
        if result.matches {
            info!(title = profile.title(), slot = slot + 1, cue = cue.name(), "Checksum OK");
        } else {
            warn!(title = profile.title(), slot = slot + 1, cue = cue.name(),
                stored = result.stored, computed = result.computed, "Checksum mismatch");
            let mut stderr = io::stderr();
            let _ = stderr.write_all(b"\x07");
            let _ = stderr.flush();
        }
    }
}

pub struct SilentNotifier;

impl NotificationSink for SilentNotifier {
    fn notify(&self, _profile: &GameProfile, _slot: u8, _result: &ChecksumResult) {}
}

#[cfg(test)]
#[path = "./notify_test.rs"]
mod notify_test;
