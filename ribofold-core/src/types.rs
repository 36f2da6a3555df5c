use thiserror::Error;

/// Square score or probability matrix indexed `[row][col]`.
///
/// Score tables are (n+1)×(n+1) and 1-indexed so the recurrences read like
/// their textbook form; probability tables are trimmed to n×n before they
/// leave the engine.
pub type Matrix = Vec<Vec<f64>>;

/// One nucleotide record pulled out of a sequence-data tree.
///
/// Produced by [`SequenceSource`](crate::sequence::source::SequenceSource);
/// `category`, `identifier` and `source` come from the record's position in
/// the tree and together with `index` form the record's unique output key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    /// Normalized RNA sequence (uppercase, T rewritten to U)
    pub sequence: String,
    /// Full FASTA header text of the record
    pub description: String,
    /// Classification code, from the record's grandparent directory
    pub category: String,
    /// Entry identifier, from the record's parent directory
    pub identifier: String,
    /// Sequence source name, from the record file's stem
    pub source: String,
    /// 0-based position of the record within its file
    pub index: usize,
}

/// Outcome of processing a single record in a batch run.
///
/// Replaces "truthy marker object" style signalling: every record ends in
/// exactly one of these states and the batch summary counts them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Structure was computed and persisted
    Computed,
    /// Work was skipped on purpose (already stored, or invalid sequence)
    Skipped {
        /// Human-readable reason, surfaced in logs
        reason: String,
    },
    /// Computation or persistence failed; siblings are unaffected
    Failed {
        /// Human-readable reason, surfaced in logs
        reason: String,
    },
}

/// Result of asking the store to persist a structure document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreStatus {
    /// Document was serialized and renamed into place
    Written,
    /// Target path already existed; nothing was touched
    AlreadyPresent,
}

/// Error types that can occur during structure prediction
#[derive(Error, Debug)]
pub enum RibofoldError {
    /// Sequence contains characters outside the RNA alphabet
    #[error("Invalid sequence: {0}")]
    InvalidSequence(String),
    /// Configuration parameter outside its allowed range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// File I/O operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Error parsing input data
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Worker pool could not be constructed
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}
