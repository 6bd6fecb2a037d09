//! Gate engine configuration

/// Configuration for the gate engine
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Allow rayon to split pair updates across threads
    pub parallel: bool,

    /// Minimum number of amplitudes before the parallel path is taken
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 1 << 14, // 16384 amplitudes
        }
    }
}

impl EngineConfig {
    /// Create a new engine config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-threaded, deterministic iteration order
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Default::default()
        }
    }

    /// Parallelize from smaller states on
    pub fn performance() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 1 << 10,
        }
    }

    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Whether a state of `dimension` amplitudes takes the parallel path
    #[inline]
    pub fn use_parallel_for(&self, dimension: usize) -> bool {
        self.parallel && dimension >= self.parallel_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold() {
        let config = EngineConfig::default();
        assert!(config.parallel);
        assert!(!config.use_parallel_for(1 << 10));
        assert!(config.use_parallel_for(1 << 14));
    }

    #[test]
    fn test_presets() {
        assert!(!EngineConfig::sequential().use_parallel_for(usize::MAX));
        assert!(EngineConfig::performance().use_parallel_for(1 << 10));
    }

    #[test]
    fn test_builders() {
        let config = EngineConfig::new().with_parallel_threshold(2).with_parallel(true);
        assert!(config.use_parallel_for(2));
        assert!(!config.use_parallel_for(1));
    }
}
