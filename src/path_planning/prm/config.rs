//! Tunable parameters for the PRM planner

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::common::{PlanningError, PlanningResult};

/// Configuration for PRM planner
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PrmConfig {
    /// Number of collision-free samples (N)
    pub n_samples: usize,
    /// Maximum accepted outgoing edges per sample (M)
    pub n_knn: usize,
    /// Nearest obstacles checked when validating a sample (K)
    pub sample_check_knn: usize,
    /// Draws allowed before sampling gives up; `None` samples until done
    pub max_sample_attempts: Option<usize>,
    /// Neighbors tried per node before giving up; `None` tries every sample
    pub max_candidates: Option<usize>,
    /// RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for PrmConfig {
    fn default() -> Self {
        Self {
            n_samples: 200,
            n_knn: 5,
            sample_check_knn: 3,
            max_sample_attempts: Some(1_000_000),
            max_candidates: None,
            seed: None,
        }
    }
}

impl PrmConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_samples(mut self, n_samples: usize) -> Self {
        self.n_samples = n_samples;
        self
    }

    pub fn with_knn(mut self, n_knn: usize) -> Self {
        self.n_knn = n_knn;
        self
    }

    pub fn with_sample_check_knn(mut self, k: usize) -> Self {
        self.sample_check_knn = k;
        self
    }

    pub fn with_max_sample_attempts(mut self, attempts: Option<usize>) -> Self {
        self.max_sample_attempts = attempts;
        self
    }

    pub fn with_max_candidates(mut self, candidates: Option<usize>) -> Self {
        self.max_candidates = candidates;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> PlanningResult<()> {
        if self.n_samples == 0 {
            return Err(PlanningError::InvalidParameter(
                "n_samples must be at least 1".to_string(),
            ));
        }
        if self.n_knn == 0 {
            return Err(PlanningError::InvalidParameter(
                "n_knn must be at least 1".to_string(),
            ));
        }
        if self.sample_check_knn == 0 {
            return Err(PlanningError::InvalidParameter(
                "sample_check_knn must be at least 1".to_string(),
            ));
        }
        if self.max_sample_attempts == Some(0) {
            return Err(PlanningError::InvalidParameter(
                "max_sample_attempts must be at least 1".to_string(),
            ));
        }
        if self.max_candidates == Some(0) {
            return Err(PlanningError::InvalidParameter(
                "max_candidates must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prm_config_default() {
        let config = PrmConfig::default();
        assert_eq!(config.n_samples, 200);
        assert_eq!(config.n_knn, 5);
        assert_eq!(config.sample_check_knn, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_counts() {
        assert!(PrmConfig::new().with_samples(0).validate().is_err());
        assert!(PrmConfig::new().with_knn(0).validate().is_err());
        assert!(PrmConfig::new().with_sample_check_knn(0).validate().is_err());
        assert!(PrmConfig::new().with_max_candidates(Some(0)).validate().is_err());
        assert!(PrmConfig::new().with_max_sample_attempts(Some(0)).validate().is_err());
    }
}
