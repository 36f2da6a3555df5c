use log::debug;

use crate::algorithms::partition::scoring_tables;
use crate::algorithms::probability::pair_probabilities;
use crate::config::FoldConfig;
use crate::results::{FoldTables, StructureRecord};
use crate::sequence::validate_sequence;
use crate::types::{RibofoldError, SequenceRecord};

/// Per-sequence structure prediction engine.
///
/// Holds the numeric parameters and runs the full validate → score →
/// probabilities chain for one sequence at a time. The analyzer carries
/// no mutable state, so one instance can serve any number of worker
/// threads.
///
/// # Examples
///
/// ```rust
/// use ribofold_core::FoldAnalyzer;
/// use ribofold_core::config::FoldConfig;
///
/// let analyzer = FoldAnalyzer::new(FoldConfig::default());
/// let tables = analyzer.fold("GGUCCAC")?;
/// assert_eq!(tables.unpaired.len(), 7);
/// assert_eq!(tables.paired.len(), 7);
/// # Ok::<(), ribofold_core::types::RibofoldError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FoldAnalyzer {
    /// Numeric parameters for both engines
    pub config: FoldConfig,
}

impl FoldAnalyzer {
    /// Creates an analyzer with the given configuration.
    pub const fn new(config: FoldConfig) -> Self {
        Self { config }
    }

    /// Computes the probability tables for one normalized sequence.
    ///
    /// Validates the alphabet once, then runs the scoring and probability
    /// recurrences with the configured parameters.
    ///
    /// # Errors
    ///
    /// Returns [`RibofoldError::InvalidSequence`] if the sequence contains
    /// characters outside {A, U, G, C}; neither engine runs in that case.
    pub fn fold(&self, sequence: &str) -> Result<FoldTables, RibofoldError> {
        validate_sequence(sequence)?;
        debug!("folding sequence of {} nt", sequence.len());

        let (q, qbp) = scoring_tables(
            sequence,
            self.config.iterations,
            self.config.bp_energy_weight,
            self.config.normalized_rt,
            self.config.min_loop_length,
        );
        let (unpaired, paired) = pair_probabilities(
            &q,
            &qbp,
            self.config.iterations,
            self.config.bp_energy_weight,
            self.config.normalized_rt,
        );

        Ok(FoldTables { unpaired, paired })
    }

    /// Folds a sourced record and assembles its durable document.
    ///
    /// # Errors
    ///
    /// Propagates validation failures from [`FoldAnalyzer::fold`].
    pub fn analyze_record(
        &self,
        record: &SequenceRecord,
    ) -> Result<StructureRecord, RibofoldError> {
        let tables = self.fold(&record.sequence)?;
        Ok(StructureRecord::from_record(record, tables))
    }
}
