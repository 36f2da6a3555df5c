// =============================================================================
// =============================================================================

/// Version string for ribofold
pub const VERSION: &str = "0.1.0";

// =============================================================================
// =============================================================================

/// Default base-pair energy weight (Boltzmann exponent numerator)
pub const DEFAULT_BP_ENERGY_WEIGHT: f64 = -1.0;

/// Default normalization constant ("RT") dividing the pairing energy
pub const DEFAULT_NORMALIZED_RT: f64 = 1.0;

/// Default minimum number of unpaired residues enclosed by a base pair
pub const DEFAULT_MIN_LOOP_LENGTH: usize = 1;

/// Default number of full-table refinement sweeps
pub const DEFAULT_ITERATIONS: usize = 3;

/// Default number of concurrent worker threads for batch runs
pub const DEFAULT_JOBS: usize = 1;

// =============================================================================
// =============================================================================

/// File name prefix for persisted structure documents
pub const STRUCTURE_FILE_PREFIX: &str = "structure_";

/// File extensions recognized as multi-record sequence files
pub const SEQUENCE_FILE_EXTENSIONS: [&str; 5] = ["fa", "fasta", "fna", "ffn", "frn"];
