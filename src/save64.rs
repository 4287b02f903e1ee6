// Copyright (C) 2024 Wilfred Bos
// Licensed under the MIT license. See the LICENSE file for the terms and conditions.

#![allow(dead_code)]

mod bits;
mod checksum;
mod detect;
mod error;
mod fields;
mod loader;
mod notify;
mod profile;
mod record;
mod text;
mod verify;

#[cfg(test)]
mod test_support;

pub use error::SaveError;
pub use notify::{BellNotifier, NotificationSink, SilentNotifier};
pub use record::OcarinaHeader;
pub use verify::{SaveReport, SlotReport, SlotSelection, Verifier};
