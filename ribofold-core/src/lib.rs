//! # Ribofold - RNA Structure Statistics
//!
//! A Rust library for estimating RNA secondary-structure statistics.
//! Given a nucleotide sequence, ribofold computes partition-function-style
//! score tables over every base-pairing span, derives per-position
//! paired/unpaired probabilities from them, and persists one JSON
//! structure document per record, idempotently, across whole directory
//! trees of sequence data, on a configurable worker pool.
//!
//! ## Overview
//!
//! The pairing model is deliberately simple: a single energy weight per
//! base pair, canonical (A-U, G-C) and wobble (G-U) pairing, and a
//! minimum loop length. Scores are refined by repeated full-table sweeps
//! and probabilities are normalized by the total partition score. The
//! library does not implement nearest-neighbor thermodynamics, structure
//! traceback, or alignment.
//!
//! ## Quick Start
//!
//! ```rust
//! use ribofold_core::FoldAnalyzer;
//! use ribofold_core::config::FoldConfig;
//!
//! let analyzer = FoldAnalyzer::new(FoldConfig::default());
//! let tables = analyzer.fold("GGUCCAC")?;
//!
//! // probability that position 0 is unpaired together with position 0
//! println!("unpaired: {:.2}", tables.unpaired[0][0]);
//! # Ok::<(), ribofold_core::types::RibofoldError>(())
//! ```
//!
//! ## Batch runs
//!
//! ```rust,no_run
//! use std::path::Path;
//! use ribofold_core::batch::run_batch;
//! use ribofold_core::config::FoldConfig;
//! use ribofold_core::sequence::source::SequenceSource;
//!
//! let source = SequenceSource::new("data/sequence_data");
//! let summary = run_batch(&source, Path::new("data/structures"), &FoldConfig::default())?;
//! println!("{} computed, {} skipped, {} failed",
//!          summary.computed, summary.skipped, summary.failed);
//! # Ok::<(), ribofold_core::types::RibofoldError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`config`]: numeric parameters and worker count for a run
//! - [`sequence`]: normalization, validation, FASTA input, tree walking
//! - [`algorithms`]: scoring and probability recurrences
//! - [`engine`]: per-sequence analyzer
//! - [`results`]: probability tables and the persisted document
//! - [`output`]: deterministic paths, atomic writes, skip-on-exists
//! - [`batch`]: worker-pool orchestration and outcome accounting
//!
//! ## Error Handling
//!
//! All fallible operations return
//! [`Result<T, RibofoldError>`](types::RibofoldError). In batch runs,
//! per-record errors are demoted to logged outcomes so one bad record
//! never aborts its siblings; only batch-level problems (bad
//! configuration, unreadable tree root) surface as `Err`.

pub mod algorithms;
pub mod batch;
pub mod config;
pub mod constants;
pub mod engine;
pub mod output;
pub mod results;
pub mod sequence;
pub mod types;

pub use engine::FoldAnalyzer;
