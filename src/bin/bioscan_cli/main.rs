// ABOUTME: Bioscan CLI - command-line front end for body-composition evaluation
// ABOUTME: Resolves references, evaluates scans, scores, compares and summarizes histories as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Reference ranges for a 44 year old man
//! bioscan-cli references --age 44 --sex male
//!
//! # Full report for one scan (or every scan of an array)
//! bioscan-cli evaluate --file scan.json
//!
//! # Composite score from raw values
//! bioscan-cli score --weight 82.1 --muscle 38.5 --fat-percent 17.3 --visceral 7 --age 44 --sex male
//!
//! # BMI and its interpretation
//! bioscan-cli bmi --weight 82.1 --height 1.80
//!
//! # Compare the two most recent scans of a history
//! bioscan-cli compare --file history.json
//!
//! # Month and total trends of a history
//! bioscan-cli summary --file history.json
//! ```
//!
//! Results are printed as pretty JSON on stdout. Failures print a JSON error
//! document on stderr and exit non-zero (2 for invalid input, 3 for invalid
//! configuration, 1 otherwise).

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use bioscan::errors::AppResult;
use bioscan::intelligence::BodyCompositionConfig;
use bioscan::logging::LoggingConfig;
use bioscan::models::Sex;
use clap::{Parser, Subcommand};

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "bioscan-cli",
    about = "Bioscan body-composition evaluation CLI",
    long_about = "Evaluate bioimpedance body-composition scans: reference ranges, metric status, composite score, interpretations and history trends."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Show the reference ranges for an age and sex
    References {
        /// Age in years
        #[arg(long)]
        age: u32,

        /// Biological sex (male or female)
        #[arg(long)]
        sex: Sex,
    },

    /// Evaluate the measurement(s) of a JSON file
    Evaluate {
        /// JSON file holding one measurement or an array of measurements
        #[arg(long)]
        file: PathBuf,
    },

    /// Compute the composite score from raw values
    Score {
        /// Body weight (kg)
        #[arg(long)]
        weight: f64,

        /// Skeletal muscle mass (kg)
        #[arg(long)]
        muscle: f64,

        /// Body fat percentage
        #[arg(long)]
        fat_percent: f64,

        /// Visceral fat level
        #[arg(long)]
        visceral: f64,

        /// Age in years
        #[arg(long)]
        age: u32,

        /// Biological sex (male or female)
        #[arg(long)]
        sex: Sex,
    },

    /// Compute the BMI from weight and height and interpret it
    Bmi {
        /// Body weight (kg)
        #[arg(long)]
        weight: f64,

        /// Height (m)
        #[arg(long)]
        height: f64,
    },

    /// Compare the two most recent measurements of a history file
    Compare {
        /// JSON file holding an array of measurements
        #[arg(long)]
        file: PathBuf,
    },

    /// Summarize month and total trends of a history file
    Summary {
        /// JSON file holding an array of measurements
        #[arg(long)]
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let code = error.code.exit_code();
            helpers::display::print_error(error);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(command: Command) -> Result<()> {
    // load once so a bad environment fails every command
    BodyCompositionConfig::try_global()?;

    match command {
        Command::References { age, sex } => commands::body::references(age, sex),
        Command::Evaluate { file } => commands::body::evaluate(&file),
        Command::Score {
            weight,
            muscle,
            fat_percent,
            visceral,
            age,
            sex,
        } => commands::body::score(weight, muscle, fat_percent, visceral, age, sex),
        Command::Bmi { weight, height } => commands::body::bmi(weight, height),
        Command::Compare { file } => commands::history::compare(&file),
        Command::Summary { file } => commands::history::summary(&file),
    }
}
