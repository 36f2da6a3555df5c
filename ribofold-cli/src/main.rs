//! # Ribofold CLI - Batch RNA Structure Prediction
//!
//! Command-line front end for the ribofold structure pipeline.
//!
//! ## Usage
//!
//! ```bash
//! # Fold every record under a sequence-data tree
//! ribofold -i data/sequence_data -o data/structures
//!
//! # Eight workers, custom pairing model
//! ribofold -i data/sequence_data -o data/structures -j 8 -e -2.5 -m 3
//!
//! # Re-run after an interruption: existing documents are skipped
//! ribofold -i data/sequence_data -o data/structures
//! ```
//!
//! ## Options
//!
//! - `-i, --input <DIR>`: sequence-data root directory
//! - `-o, --output <DIR>`: output root for structure documents
//! - `-e, --energy <F>`: base-pair energy weight (default: -1)
//! - `-r, --rt <F>`: normalization constant (default: 1)
//! - `-m, --min-loop <N>`: minimum loop length (default: 1)
//! - `-n, --iters <N>`: refinement sweeps, at least 1 (default: 3)
//! - `-j, --jobs <N>`: worker threads, at least 1 (default: 1)
//! - `-v, --verbose`: debug logging to stderr

use clap::{Arg, ArgAction, Command};
use log::LevelFilter;
use ribofold_core::batch::run_batch;
use ribofold_core::config::FoldConfig;
use ribofold_core::sequence::source::SequenceSource;
use std::path::Path;

/// Parses arguments, configures the pipeline, runs the batch and prints
/// the outcome summary.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("ribofold")
        .version(env!("CARGO_PKG_VERSION"))
        .about("RNA secondary-structure pairing probabilities for sequence-data trees")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("DIR")
                .required(true)
                .help("Sequence-data root directory"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("DIR")
                .required(true)
                .help("Output root for structure documents"),
        )
        .arg(
            Arg::new("energy")
                .short('e')
                .long("energy")
                .value_name("WEIGHT")
                .value_parser(clap::value_parser!(f64))
                .allow_hyphen_values(true)
                .default_value("-1.0")
                .help("Base-pair energy weight"),
        )
        .arg(
            Arg::new("rt")
                .short('r')
                .long("rt")
                .value_name("RT")
                .value_parser(clap::value_parser!(f64))
                .default_value("1.0")
                .help("Normalization constant dividing the energy"),
        )
        .arg(
            Arg::new("min-loop")
                .short('m')
                .long("min-loop")
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .default_value("1")
                .help("Minimum loop length between paired positions"),
        )
        .arg(
            Arg::new("iters")
                .short('n')
                .long("iters")
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .default_value("3")
                .help("Full-table refinement sweeps (>= 1)"),
        )
        .arg(
            Arg::new("jobs")
                .short('j')
                .long("jobs")
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .default_value("1")
                .help("Concurrent worker threads (>= 1)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Print debug messages to stderr"),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");
    env_logger::Builder::from_default_env()
        .filter_level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    let config = FoldConfig {
        bp_energy_weight: *matches.get_one::<f64>("energy").unwrap_or(&-1.0),
        normalized_rt: *matches.get_one::<f64>("rt").unwrap_or(&1.0),
        min_loop_length: *matches.get_one::<usize>("min-loop").unwrap_or(&1),
        iterations: *matches.get_one::<usize>("iters").unwrap_or(&3),
        jobs: *matches.get_one::<usize>("jobs").unwrap_or(&1),
    };
    config.validate()?;

    let input = matches
        .get_one::<String>("input")
        .ok_or("missing input directory")?;
    let output = matches
        .get_one::<String>("output")
        .ok_or("missing output directory")?;

    let source = SequenceSource::new(input.as_str());
    let summary = run_batch(&source, Path::new(output.as_str()), &config)?;

    println!(
        "{} records: {} computed, {} skipped, {} failed",
        summary.total, summary.computed, summary.skipped, summary.failed
    );

    Ok(())
}
