//! Configuration for coverage checks.

/// How the active set answers the vertical coverage question at each boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalStrategy {
    /// Keep active rectangles by id and sort them by `y1` at every boundary.
    Resort,
    /// Keep active rectangles ordered by `y1` as they enter and leave, so a
    /// boundary check is a single linear scan.
    #[default]
    Ordered,
}

/// Knobs for [`super::CoverageChecker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverageConfig {
    /// Active-set implementation used by the sweep.
    pub strategy: VerticalStrategy,
    /// Reject non-finite or inverted rectangles up front. When disabled, the
    /// verdict for such inputs is unspecified (but the check still terminates).
    pub validate: bool,
}

impl CoverageConfig {
    pub fn with_strategy(mut self, strategy: VerticalStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            strategy: VerticalStrategy::default(),
            validate: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates_with_ordered_strategy() {
        let cfg = CoverageConfig::default();
        assert!(cfg.validate);
        assert_eq!(cfg.strategy, VerticalStrategy::Ordered);
    }

    #[test]
    fn builder_overrides_fields() {
        let cfg = CoverageConfig::default()
            .with_strategy(VerticalStrategy::Resort)
            .with_validation(false);
        assert_eq!(cfg.strategy, VerticalStrategy::Resort);
        assert!(!cfg.validate);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_serde_roundtrip() {
        let cfg = CoverageConfig::default().with_strategy(VerticalStrategy::Resort);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: CoverageConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
