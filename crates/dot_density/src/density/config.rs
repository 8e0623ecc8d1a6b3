//! Configuration for dot density runs.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sampling::SamplingOptions;

/// Quantity represented by one dot unless configured otherwise.
pub const DEFAULT_UNITS_PER_DOT: f64 = 30.0;

/// Configuration for a [`crate::density::runner::DensityRunner`].
#[non_exhaustive]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct DensityConfig {
    /// How many units of a region's value one dot stands for.
    pub units_per_dot: f64,
    /// Options for the default [`crate::sampling::DotSampler`].
    pub options: SamplingOptions,
}

impl Default for DensityConfig {
    fn default() -> Self {
        Self {
            units_per_dot: DEFAULT_UNITS_PER_DOT,
            options: SamplingOptions::default(),
        }
    }
}

impl DensityConfig {
    pub fn new(units_per_dot: f64) -> Self {
        Self {
            units_per_dot,
            ..Default::default()
        }
    }

    pub fn with_options(mut self, options: SamplingOptions) -> Self {
        self.options = options;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !self.units_per_dot.is_finite() || self.units_per_dot <= 0.0 {
            return Err(Error::InvalidConfig(
                "units_per_dot must be finite and > 0".into(),
            ));
        }
        self.options.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = DensityConfig::default();
        assert_eq!(config.units_per_dot, DEFAULT_UNITS_PER_DOT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_units() {
        for units in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(
                    DensityConfig::new(units).validate(),
                    Err(Error::InvalidConfig(_))
                ),
                "units_per_dot = {units} should be rejected"
            );
        }
    }

    #[test]
    fn validation_covers_sampling_options() {
        let config = DensityConfig::new(10.0)
            .with_options(SamplingOptions::new().with_max_iterations_per_point(0));
        assert!(config.validate().is_err());
    }
}
