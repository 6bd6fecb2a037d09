//! Executor configuration

use qgate_state::EngineConfig;

/// Configuration for circuit execution
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionConfig {
    /// Settings passed to the gate engine
    pub engine: EngineConfig,

    /// Check after every unitary gate that total probability is unchanged
    pub validate_state: bool,

    /// Allowed drift in total probability when validating
    pub tolerance: f64,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            validate_state: cfg!(debug_assertions),
            tolerance: 1e-10,
        }
    }
}

impl ExecutionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequential engine, validate after every gate
    pub fn reliable() -> Self {
        Self {
            engine: EngineConfig::sequential(),
            validate_state: true,
            ..Default::default()
        }
    }

    /// Parallel engine, no per-gate validation
    pub fn performance() -> Self {
        Self {
            engine: EngineConfig::performance(),
            validate_state: false,
            ..Default::default()
        }
    }

    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }

    pub fn with_validation(mut self, enabled: bool) -> Self {
        self.validate_state = enabled;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let reliable = ExecutionConfig::reliable();
        assert!(reliable.validate_state);
        assert!(!reliable.engine.parallel);

        let fast = ExecutionConfig::performance();
        assert!(!fast.validate_state);
        assert!(fast.engine.parallel);
    }

    #[test]
    fn test_builders() {
        let config = ExecutionConfig::new().with_validation(true).with_tolerance(1e-6);
        assert!(config.validate_state);
        assert_eq!(config.tolerance, 1e-6);
    }
}
