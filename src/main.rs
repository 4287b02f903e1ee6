// Copyright (C) 2024 Wilfred Bos
// Licensed under the MIT license. See the LICENSE file for the terms and conditions.

mod config;
mod save64;

#[path = "./utils/byte_order.rs"] mod byte_order;

use std::env;
use std::path::Path;
use std::process::exit;
use std::time::Instant;

use anyhow::{anyhow, Result};
use rayon::prelude::*;
use tracing_subscriber::EnvFilter;

use self::config::Config;
use self::save64::{
    BellNotifier, NotificationSink, OcarinaHeader, SaveError, SaveReport, SilentNotifier, SlotReport, SlotSelection, Verifier,
};

const LABEL_COL_WIDTH: usize = 32;

fn main() {
    if env::args().count() <= 1 {
        print_usage();
        return;
    }

    init_logging();

    match run() {
        Ok(true) => {}
        Ok(false) => exit(1),
        Err(message) => {
            eprintln!("ERROR: {}\r", message);
            exit(1);
        }
    }
}

pub struct FileVerification {
    pub result: Result<SaveReport, SaveError>,
    pub filename: String,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Returns `false` when at least one file couldn't be decoded.
fn run() -> Result<bool> {
    let config = Config::read().map_err(|message| anyhow!(message))?;

    let start_time = Instant::now();
    let max_depth = if config.recursive { usize::MAX } else { 1 };

    let files = globwalk::GlobWalkerBuilder::from_patterns(&config.base_path, &[&config.filename])
        .max_depth(max_depth)
        .case_insensitive(true)
        .build()?
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().display().to_string())
        .collect::<Vec<String>>();

    if files.is_empty() {
        return Err(anyhow!("No file(s) found: {}", config.filename));
    }

    let pool = rayon::ThreadPoolBuilder::new().num_threads(config.cpu_threads).build()?;
    let selection = config.slot_selection();
    let verifications = pool.install(|| {
        if config.quiet {
            verify_files(&Verifier::new(&SilentNotifier), &files, selection)
        } else {
            verify_files(&Verifier::new(&BellNotifier), &files, selection)
        }
    });

    if let [FileVerification { result: Err(error), .. }] = verifications.as_slice() {
        return Err(anyhow!("{}", error));
    }

    let mut verified_files = 0;
    let mut mismatched_files = 0;
    let mut failed_files = 0;

    for verification in &verifications {
        let filename = verification.filename.strip_prefix("./").unwrap_or(&verification.filename);
        match &verification.result {
            Ok(report) => {
                verified_files += 1;
                if !report.all_checksums_match() {
                    mismatched_files += 1;
                }
                print_report(filename, report, config.verify_only);
            }
            Err(error) => {
                failed_files += 1;
                println!("{} >> {} <<\r", filename.replace('\\', "/"), error);
            }
        }
    }

    if verifications.len() > 1 {
        println!("\r\nSummary:\r");
        println!("Verified files        {:>9}\r", verified_files);
        println!("Checksum mismatches   {:>9}\r", mismatched_files);
        println!("Unreadable files      {:>9}\r", failed_files);
        println!("Total files processed {:>9}\r", verifications.len());

        output_elapsed_time(start_time);
    }

    Ok(failed_files == 0)
}

fn verify_files<N: NotificationSink>(verifier: &Verifier<N>, files: &[String], selection: SlotSelection) -> Vec<FileVerification> {
    files.par_iter()
        .map(|path| FileVerification {
            result: verifier.verify_file(Path::new(path), selection),
            filename: path.to_owned()
        })
        .collect()
}

fn print_report(filename: &str, report: &SaveReport, verify_only: bool) {
    print_welcome(report.profile.title(), filename);
    print_row("Byte Order:", report.profile.endianness().name());
    print_row("Charset:", report.profile.charset().name());

    if !verify_only {
        if let Some(header) = &report.header {
            print_header(header);
        }
    }

    for slot in &report.slots {
        print_slot(slot, verify_only);
    }
}

fn print_welcome(title: &str, filename: &str) {
    println!("\r\n****************************************************************\r");
    println!(" {}  |  {}\r", title, filename);
    println!("****************************************************************\r");
}

fn print_header(header: &OcarinaHeader) {
    print_row("ID:", &header.id_string());
    println!("\r\n       Options        \r");
    print_row("Sound:", header.sound_name());
    print_row("Z Target:", header.z_target_name());
    print_row("Language:", header.language_name());
}

fn print_slot(slot: &SlotReport, verify_only: bool) {
    println!("\r\n    File #{}    \r", slot.slot as u16 + 1);

    if !verify_only {
        for field in &slot.fields {
            print_row(&format!("{}:", field.label), &field.value.to_string());
        }

        if !slot.courses.is_empty() {
            println!("\r\n Levels                  Coins  Stars \r");
            for course in &slot.courses {
                println!("{:<27}{:03} {:>3}/7\r", course.name, course.coins, course.stars);
            }
        }
    }

    let checksum = &slot.checksum;
    let label = format!("Checksum ( {:04x} ?= {:04x} ):", checksum.stored, checksum.computed);
    print_row(&label, if checksum.matches { " OK " } else { "FAIL" });
}

fn print_row(label: &str, value: &str) {
    println!("{:<width$}{}\r", label, value, width = LABEL_COL_WIDTH);
}

fn output_elapsed_time(start_time: Instant) {
    let time_millis = start_time.elapsed().as_millis();
    let time_seconds = time_millis / 1000;
    let seconds = time_seconds % 60;
    let minutes = time_seconds / 60 % 60;
    let hours = time_seconds / 60 / 60;
    eprintln!("\r\nTotal time: {:0>2}:{:0>2}:{:0>2} (+{} milliseconds)\r", hours, minutes, seconds, time_millis % 1000);
}

fn print_usage() {
    println!("N64 Save Viewer (Save64) v1.0 - Copyright (c) 2024 Wilfred Bos\r");
    println!("\r\nUsage: save64 <options> <file_path_pattern>\r");
    println!("\r\n<Options>\r");
    println!("  -a: report all save slots\r");
    println!("  -c{{max_threads}}: set the maximum CPU threads to be used [Default is all]\r");
    println!("  -n{{slot}}: save slot number, starting at 1 [Default is 1]\r");
    println!("  -q: quiet, no notification cues\r");
    println!("  -s: include subdirectories\r");
    println!("  -v: verify checksums only\r");
    println!("\r\nSupported games: Ocarina of Time (.sra), Majora's Mask (.fla), Super Mario 64 (.eep)\r");
}
