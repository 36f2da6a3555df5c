//! Batch orchestration over a sequence-data tree.
//!
//! Fans record computation out across a dedicated worker pool and
//! aggregates per-record outcomes into a [`BatchSummary`] through atomic
//! counters. Workers share nothing mutable: each record is validated,
//! folded and persisted in isolation, so one record's failure can never
//! cancel or corrupt its siblings. Completion order across records is
//! unspecified.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::{error, info, warn};
use rayon::prelude::*;

use crate::config::FoldConfig;
use crate::engine::FoldAnalyzer;
use crate::output;
use crate::sequence::source::SequenceSource;
use crate::types::{RecordOutcome, RibofoldError, SequenceRecord, StoreStatus};

/// Aggregated counts for one batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Records enumerated from the tree (including unreadable ones)
    pub total: usize,
    /// Records folded and persisted in this run
    pub computed: usize,
    /// Records deliberately skipped (already stored, invalid alphabet)
    pub skipped: usize,
    /// Records that failed (unreadable input, I/O errors on write)
    pub failed: usize,
}

/// Runs the full pipeline over every record under `source`.
///
/// Enumerates records in source order, dispatches them onto a pool of
/// `config.jobs` workers, and for each record either short-circuits on an
/// existing document or runs fold-then-store. Every outcome is logged and
/// counted; nothing is silent and nothing aborts the batch.
///
/// # Errors
///
/// Returns an error only for batch-level problems: an invalid
/// configuration, an unreadable tree root, or a worker pool that cannot
/// be built. Per-record failures are counted in the summary instead.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use ribofold_core::batch::run_batch;
/// use ribofold_core::config::FoldConfig;
/// use ribofold_core::sequence::source::SequenceSource;
///
/// let source = SequenceSource::new("data/sequence_data");
/// let config = FoldConfig { jobs: 4, ..Default::default() };
/// let summary = run_batch(&source, Path::new("data/structures"), &config)?;
/// println!("{} computed, {} skipped", summary.computed, summary.skipped);
/// # Ok::<(), ribofold_core::types::RibofoldError>(())
/// ```
pub fn run_batch(
    source: &SequenceSource,
    out_dir: &Path,
    config: &FoldConfig,
) -> Result<BatchSummary, RibofoldError> {
    config.validate()?;
    let analyzer = FoldAnalyzer::new(config.clone());

    let mut records = Vec::new();
    let mut unreadable = 0usize;
    for item in source.records()? {
        match item {
            Ok(record) => records.push(record),
            Err(e) => {
                error!("failed to enumerate record: {}", e);
                unreadable += 1;
            }
        }
    }
    info!(
        "processing {} records from {} with {} worker(s)",
        records.len(),
        source.root().display(),
        config.jobs
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.jobs)
        .build()
        .map_err(|e| RibofoldError::ThreadPool(e.to_string()))?;

    let computed = AtomicUsize::new(0);
    let skipped = AtomicUsize::new(0);
    let failed = AtomicUsize::new(unreadable);

    pool.install(|| {
        records.par_iter().for_each(|record| {
            match process_record(&analyzer, out_dir, record) {
                RecordOutcome::Computed => {
                    computed.fetch_add(1, Ordering::Relaxed);
                }
                RecordOutcome::Skipped { reason } => {
                    info!("{}: skipped ({})", record_label(record), reason);
                    skipped.fetch_add(1, Ordering::Relaxed);
                }
                RecordOutcome::Failed { reason } => {
                    error!("{}: failed ({})", record_label(record), reason);
                    failed.fetch_add(1, Ordering::Relaxed);
                }
            }
        });
    });

    let summary = BatchSummary {
        total: records.len() + unreadable,
        computed: computed.into_inner(),
        skipped: skipped.into_inner(),
        failed: failed.into_inner(),
    };
    info!(
        "batch complete: {} computed, {} skipped, {} failed of {}",
        summary.computed, summary.skipped, summary.failed, summary.total
    );
    Ok(summary)
}

/// Full pipeline for one record: existence check, fold, persist.
///
/// The existence probe makes re-runs cheap; it is best-effort only (a
/// concurrent duplicate of the same record key could race past it).
fn process_record(
    analyzer: &FoldAnalyzer,
    out_dir: &Path,
    record: &SequenceRecord,
) -> RecordOutcome {
    if output::is_already_stored(out_dir, record) {
        return RecordOutcome::Skipped {
            reason: "already stored".to_string(),
        };
    }

    let document = match analyzer.analyze_record(record) {
        Ok(document) => document,
        Err(RibofoldError::InvalidSequence(msg)) => {
            warn!("{}: invalid sequence", record_label(record));
            return RecordOutcome::Skipped {
                reason: format!("invalid sequence: {}", msg),
            };
        }
        Err(e) => {
            return RecordOutcome::Failed {
                reason: e.to_string(),
            };
        }
    };

    match output::write_structure(out_dir, record, &document) {
        Ok(StoreStatus::Written) => RecordOutcome::Computed,
        Ok(StoreStatus::AlreadyPresent) => RecordOutcome::Skipped {
            reason: "already stored".to_string(),
        },
        Err(e) => RecordOutcome::Failed {
            reason: e.to_string(),
        },
    }
}

fn record_label(record: &SequenceRecord) -> String {
    format!(
        "{}/{}/{}[{}]",
        record.category, record.identifier, record.source, record.index
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_tree(root: &Path) {
        fs::create_dir_all(root.join("a.1/1ABC")).unwrap();
        fs::create_dir_all(root.join("b.2/2XYZ")).unwrap();
        // second record carries a character outside the alphabet
        fs::write(
            root.join("a.1/1ABC/cds.fna"),
            ">r0\nGGUCCAC\n>r1\nGGNCCAC\n",
        )
        .unwrap();
        fs::write(root.join("b.2/2XYZ/rna.fna"), ">r0\nacgu\n").unwrap();
    }

    #[test]
    fn batch_survives_invalid_records() {
        let data = tempdir().unwrap();
        let out = tempdir().unwrap();
        write_tree(data.path());

        let source = SequenceSource::new(data.path());
        let summary = run_batch(&source, out.path(), &FoldConfig::default()).unwrap();

        assert_eq!(summary.total, 3);
        assert_eq!(summary.computed, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.failed, 0);

        assert!(out.path().join("a.1/1ABC/cds/structure_0.json").exists());
        assert!(!out.path().join("a.1/1ABC/cds/structure_1.json").exists());
        assert!(out.path().join("b.2/2XYZ/rna/structure_0.json").exists());
    }

    #[test]
    fn second_run_recomputes_nothing() {
        let data = tempdir().unwrap();
        let out = tempdir().unwrap();
        write_tree(data.path());

        let source = SequenceSource::new(data.path());
        let config = FoldConfig::default();
        run_batch(&source, out.path(), &config).unwrap();
        let first = fs::read(out.path().join("a.1/1ABC/cds/structure_0.json")).unwrap();

        let summary = run_batch(&source, out.path(), &config).unwrap();
        assert_eq!(summary.computed, 0);
        assert_eq!(summary.skipped, 3);

        let second = fs::read(out.path().join("a.1/1ABC/cds/structure_0.json")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn multiple_workers_produce_the_same_artifacts() {
        let data = tempdir().unwrap();
        let out = tempdir().unwrap();
        write_tree(data.path());

        let source = SequenceSource::new(data.path());
        let config = FoldConfig {
            jobs: 4,
            ..Default::default()
        };
        let summary = run_batch(&source, out.path(), &config).unwrap();
        assert_eq!(summary.computed, 2);
        assert!(out.path().join("b.2/2XYZ/rna/structure_0.json").exists());
    }

    #[test]
    fn invalid_config_aborts_before_any_work() {
        let data = tempdir().unwrap();
        let out = tempdir().unwrap();
        write_tree(data.path());

        let source = SequenceSource::new(data.path());
        let config = FoldConfig {
            iterations: 0,
            ..Default::default()
        };
        assert!(run_batch(&source, out.path(), &config).is_err());
        assert!(fs::read_dir(out.path()).unwrap().next().is_none());
    }

    #[test]
    fn missing_root_is_a_batch_level_error() {
        let out = tempdir().unwrap();
        let source = SequenceSource::new("no/such/tree");
        let result = run_batch(&source, out.path(), &FoldConfig::default());
        assert!(matches!(result, Err(RibofoldError::IoError(_))));
    }
}
