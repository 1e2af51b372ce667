//! Sort configuration.
//!
//! [`SortConfig`] controls how the pairwise domination pass is executed.
//! It never changes the result, only how it is computed.

use crate::error::{Error, Result};

/// Configuration for [`FrontAssigner`](super::FrontAssigner).
///
/// # Defaults
///
/// ```
/// use u_pareto::front::SortConfig;
///
/// let config = SortConfig::default();
/// assert!(config.parallel);
/// assert_eq!(config.parallel_threshold, 256);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_pareto::front::SortConfig;
///
/// let config = SortConfig::default()
///     .with_parallel(true)
///     .with_parallel_threshold(1024);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortConfig {
    /// Whether to run the pairwise domination pass on the rayon pool.
    ///
    /// Has no effect when the crate is built without the `parallel`
    /// feature.
    pub parallel: bool,

    /// Minimum number of distinct fitness vectors before the parallel
    /// pass is used.
    ///
    /// Below this size thread dispatch costs more than the comparisons.
    pub parallel_threshold: usize,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 256,
        }
    }
}

impl SortConfig {
    /// Configuration that always runs on the calling thread.
    pub fn serial() -> Self {
        Self::default().with_parallel(false)
    }

    /// Enables or disables the parallel pass.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the distinct-key count at which the parallel pass kicks in.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.parallel_threshold == 0 {
            return Err(Error::InvalidConfig(
                "parallel_threshold must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Whether a pass over `keys` distinct vectors should run in parallel.
    pub(crate) fn use_parallel(&self, keys: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && keys >= self.parallel_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SortConfig::default();
        assert!(config.parallel);
        assert_eq!(config.parallel_threshold, 256);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SortConfig::default()
            .with_parallel(false)
            .with_parallel_threshold(8);
        assert!(!config.parallel);
        assert_eq!(config.parallel_threshold, 8);
    }

    #[test]
    fn test_serial_preset() {
        let config = SortConfig::serial();
        assert!(!config.parallel);
        assert!(!config.use_parallel(1_000_000));
    }

    #[test]
    fn test_validate_zero_threshold() {
        let config = SortConfig::default().with_parallel_threshold(0);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_use_parallel_threshold() {
        let config = SortConfig::default().with_parallel_threshold(10);
        assert!(!config.use_parallel(9));
        assert_eq!(config.use_parallel(10), cfg!(feature = "parallel"));
    }
}
