use serde::{Deserialize, Serialize};

use crate::types::{Matrix, SequenceRecord};

/// Probability tables produced for one sequence.
///
/// Both matrices are n×n in the external 0-indexed convention, normalized
/// by the total partition score; `unpaired[i][j]` is the probability that
/// the span (i, j) lies outside every base pair, `paired[i][j]` that
/// positions i and j pair with each other.
#[derive(Debug, Clone, PartialEq)]
pub struct FoldTables {
    /// Unpaired-span probability matrix
    pub unpaired: Matrix,
    /// Paired-span probability matrix
    pub paired: Matrix,
}

/// The persisted per-record structure document.
///
/// Field names follow the on-disk JSON contract consumed downstream:
/// `structure` holds the unpaired-probability matrix first, then the
/// paired-probability matrix. Instances are immutable once written; the
/// existence of their output path is the completion marker for the
/// record.
///
/// # Examples
///
/// ```rust
/// use ribofold_core::config::FoldConfig;
/// use ribofold_core::engine::FoldAnalyzer;
///
/// let analyzer = FoldAnalyzer::new(FoldConfig::default());
/// let tables = analyzer.fold("GGUCCAC")?;
/// assert_eq!(tables.unpaired.len(), 7);
/// # Ok::<(), ribofold_core::types::RibofoldError>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StructureRecord {
    /// Entry identifier (the identifier component of the record key)
    pub pdb_id: String,
    /// Classification code
    pub category: String,
    /// Free-text record header
    pub description: String,
    /// Normalized RNA sequence
    pub seq: String,
    /// Unpaired-probability matrix followed by paired-probability matrix
    pub structure: (Matrix, Matrix),
}

impl StructureRecord {
    /// Assembles the durable document for one folded record.
    pub fn from_record(record: &SequenceRecord, tables: FoldTables) -> Self {
        Self {
            pdb_id: record.identifier.clone(),
            category: record.category.clone(),
            description: record.description.clone(),
            seq: record.sequence.clone(),
            structure: (tables.unpaired, tables.paired),
        }
    }
}
