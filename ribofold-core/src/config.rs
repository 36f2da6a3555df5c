use crate::constants::{
    DEFAULT_BP_ENERGY_WEIGHT, DEFAULT_ITERATIONS, DEFAULT_JOBS, DEFAULT_MIN_LOOP_LENGTH,
    DEFAULT_NORMALIZED_RT,
};
use crate::types::RibofoldError;

/// Configuration settings for structure prediction runs.
///
/// Controls the numeric parameters of the pairing model and the degree of
/// parallelism for batch runs. All fields are plain data so a CLI layer can
/// map its flags straight onto them.
///
/// # Examples
///
/// ## Default configuration
///
/// ```rust
/// use ribofold_core::config::FoldConfig;
///
/// let config = FoldConfig::default();
/// assert_eq!(config.iterations, 3);
/// ```
///
/// ## Custom parameters for a batch run
///
/// ```rust
/// use ribofold_core::config::FoldConfig;
///
/// let config = FoldConfig {
///     min_loop_length: 3,
///     jobs: 8,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct FoldConfig {
    /// Energy weight of a single base pair.
    ///
    /// Enters the model as `exp(-bp_energy_weight / normalized_rt)`;
    /// negative values favor pairing.
    ///
    /// **Default**: `-1.0`
    pub bp_energy_weight: f64,

    /// Normalization constant dividing the pairing energy ("RT").
    ///
    /// **Default**: `1.0`
    pub normalized_rt: f64,

    /// Minimum number of residues that must separate two paired positions.
    ///
    /// Models the physical minimum hairpin-loop size; spans of
    /// `min_loop_length` or fewer residues never pair.
    ///
    /// **Default**: `1`
    pub min_loop_length: usize,

    /// Number of full-table refinement sweeps.
    ///
    /// Each sweep revisits every (i, j) span reading values written by
    /// earlier sweeps (and earlier cells of the same sweep). Must be ≥ 1.
    ///
    /// **Default**: `3`
    pub iterations: usize,

    /// Number of worker threads for batch runs. Must be ≥ 1.
    ///
    /// Each record is folded in isolation, so throughput scales with
    /// available cores until I/O dominates.
    ///
    /// **Default**: `1`
    pub jobs: usize,
}

impl Default for FoldConfig {
    fn default() -> Self {
        Self {
            bp_energy_weight: DEFAULT_BP_ENERGY_WEIGHT,
            normalized_rt: DEFAULT_NORMALIZED_RT,
            min_loop_length: DEFAULT_MIN_LOOP_LENGTH,
            iterations: DEFAULT_ITERATIONS,
            jobs: DEFAULT_JOBS,
        }
    }
}

impl FoldConfig {
    /// Checks every parameter against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns [`RibofoldError::InvalidConfig`] if `iterations` or `jobs`
    /// is zero, or if `normalized_rt` is zero (the Boltzmann exponent
    /// would be undefined).
    pub fn validate(&self) -> Result<(), RibofoldError> {
        if self.iterations < 1 {
            return Err(RibofoldError::InvalidConfig(
                "iterations must be at least 1".to_string(),
            ));
        }
        if self.jobs < 1 {
            return Err(RibofoldError::InvalidConfig(
                "jobs must be at least 1".to_string(),
            ));
        }
        if self.normalized_rt == 0.0 {
            return Err(RibofoldError::InvalidConfig(
                "normalized_rt must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(FoldConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_iterations_rejected() {
        let config = FoldConfig {
            iterations: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(RibofoldError::InvalidConfig(_))
        ));
    }

    #[test]
    fn zero_jobs_rejected() {
        let config = FoldConfig {
            jobs: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(RibofoldError::InvalidConfig(_))
        ));
    }

    #[test]
    fn zero_rt_rejected() {
        let config = FoldConfig {
            normalized_rt: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
