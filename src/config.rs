// Copyright (C) 2024 Wilfred Bos
// Licensed under the MIT license. See the LICENSE file for the terms and conditions.

use std::env;

use crate::save64::SlotSelection;

pub struct Config {
    pub cpu_threads: usize,
    pub all_slots: bool,
    pub quiet: bool,
    pub recursive: bool,
    pub verify_only: bool,
    pub slot: u8,
    pub base_path: String,
    pub filename: String
}

impl Config {
    pub fn read() -> Result<Config, String> {
        Self::from_args(&env::args().skip(1).collect::<Vec<String>>())
    }

    fn from_args(args: &[String]) -> Result<Config, String> {
        let max_threads = rayon::current_num_threads();
        let mut cpu_threads = max_threads;
        let mut all_slots = false;
        let mut quiet = false;
        let mut recursive = false;
        let mut verify_only = false;
        let mut slot_number = None;

        for argument in args.iter().filter(|arg| arg.len() > 1 && arg.starts_with('-')) {
            match argument.get(1..2).unwrap_or_default() {
                "a" => all_slots = true,
                "c" => cpu_threads = Self::parse_argument_number("Max threads", &argument[2..])? as usize,
                "n" => slot_number = Some(Self::parse_argument_number("Slot number", &argument[2..])?),
                "q" => quiet = true,
                "s" => recursive = true,
                "v" => verify_only = true,
                _ => return Err(format!("Unknown option: {argument}"))
            }
        }

        if cpu_threads > max_threads {
            cpu_threads = max_threads;
        }

        Self::validate_slot_options(all_slots, slot_number)?;
        let slot = Self::to_slot_index(slot_number.unwrap_or(1))?;

        let (base_path, filename) = Self::get_filename_and_base_path(args);
        if filename.is_empty() {
            return Err("No save file provided.".to_string());
        }

        Ok(Config {
            cpu_threads,
            all_slots,
            quiet,
            recursive,
            verify_only,
            slot,
            base_path,
            filename
        })
    }

    pub fn slot_selection(&self) -> SlotSelection {
        if self.all_slots {
            SlotSelection::All
        } else {
            SlotSelection::Single(self.slot)
        }
    }

    fn validate_slot_options(all_slots: bool, slot_number: Option<u32>) -> Result<(), String> {
        if all_slots && slot_number.is_some() {
            return Err("Options -a and -n cannot be used together.".to_string());
        }
        Ok(())
    }

    fn to_slot_index(slot_number: u32) -> Result<u8, String> {
        u8::try_from(slot_number - 1).map_err(|_| format!("Invalid save slot number: {slot_number}"))
    }

    fn get_filename_and_base_path(args: &[String]) -> (String, String) {
        match args.last() {
            Some(filename) if !filename.starts_with('-') => Self::split_file_path(filename.trim()),
            _ => ("".to_string(), "".to_string())
        }
    }

    fn parse_argument_number(arg_name: &str, arg_value: &str) -> Result<u32, String> {
        let number = match arg_value.parse::<u32>() {
            Ok(i) => i,
            Err(_e) => return Err(format!("{arg_name} must be a valid number."))
        };
        if number > 0 {
            Ok(number)
        } else {
            Err(format!("{arg_name} must be higher than 0."))
        }
    }

    fn split_file_path(filename: &str) -> (String, String) {
        let filename_unix = filename.replace('\\', "/");
        if let Some(index) = filename_unix.rfind('/') {
            return match index {
                0 => (filename[..1].to_string(), filename[1..].to_owned()),
                x if x > 1 && filename_unix.starts_with("./") => (filename[2..index].to_owned(), filename[index + 1..].to_owned()),
                _ => (filename[..index].to_owned(), filename[index + 1..].to_owned())
            }
        }
        (".".to_string(), filename.to_string())
    }
}

#[cfg(test)]
#[path = "./config_test.rs"]
mod config_test;
