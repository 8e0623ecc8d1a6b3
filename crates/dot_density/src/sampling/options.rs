//! Sampling options and default resolution.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::Bounds;

/// Default attempt budget per requested dot.
pub const DEFAULT_MAX_ITERATIONS_PER_POINT: usize = 50;

/// Default point spacing is `min(width, height) / target_count / DEFAULT_SPACING_DIVISOR`.
pub const DEFAULT_SPACING_DIVISOR: f32 = 4.0;

/// Configuration for [`crate::sampling::DotSampler`].
///
/// Distances left as `None` are derived from the polygon bounds and the target count by
/// [`SamplingOptions::resolve`]. An explicit value is used as given, so `Some(0.0)` or a
/// negative value switches the corresponding clearance check off.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingOptions {
    /// Minimum distance between any two accepted dots.
    pub min_point_distance: Option<f32>,
    /// Minimum distance between an accepted dot and any polygon edge.
    pub min_edge_distance: Option<f32>,
    /// Attempt budget multiplier; the sampler stops after
    /// `max_iterations_per_point * target_count` candidates.
    pub max_iterations_per_point: usize,
    /// Treat the segment from the last vertex back to the first as an edge when the ring is
    /// supplied unclosed.
    pub close_ring: bool,
}

impl Default for SamplingOptions {
    fn default() -> Self {
        Self {
            min_point_distance: None,
            min_edge_distance: None,
            max_iterations_per_point: DEFAULT_MAX_ITERATIONS_PER_POINT,
            close_ring: true,
        }
    }
}

impl SamplingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_point_distance(mut self, distance: f32) -> Self {
        self.min_point_distance = Some(distance);
        self
    }

    pub fn with_min_edge_distance(mut self, distance: f32) -> Self {
        self.min_edge_distance = Some(distance);
        self
    }

    pub fn with_max_iterations_per_point(mut self, iterations: usize) -> Self {
        self.max_iterations_per_point = iterations;
        self
    }

    pub fn with_close_ring(mut self, close_ring: bool) -> Self {
        self.close_ring = close_ring;
        self
    }

    /// Validates the options, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations_per_point == 0 {
            return Err(Error::InvalidConfig(
                "max_iterations_per_point must be > 0".into(),
            ));
        }
        if self.min_point_distance.is_some_and(f32::is_nan) {
            return Err(Error::InvalidConfig("min_point_distance is NaN".into()));
        }
        if self.min_edge_distance.is_some_and(f32::is_nan) {
            return Err(Error::InvalidConfig("min_edge_distance is NaN".into()));
        }

        Ok(())
    }

    /// Fills in every unset field for a polygon with the given bounds.
    ///
    /// `target_count` of zero is treated as one for the spacing default; the sampler never
    /// consults the resolved values in that case.
    pub fn resolve(&self, bounds: &Bounds, target_count: usize) -> ResolvedOptions {
        let n = target_count.max(1) as f32;
        let min_point_distance = self
            .min_point_distance
            .unwrap_or_else(|| bounds.width().min(bounds.height()) / n / DEFAULT_SPACING_DIVISOR);
        let min_edge_distance = self.min_edge_distance.unwrap_or(min_point_distance);

        ResolvedOptions {
            min_point_distance,
            min_edge_distance,
            max_attempts: self.max_iterations_per_point.saturating_mul(target_count),
            close_ring: self.close_ring,
        }
    }
}

/// Concrete sampling parameters after defaults were applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedOptions {
    pub min_point_distance: f32,
    pub min_edge_distance: f32,
    pub max_attempts: usize,
    pub close_ring: bool,
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    fn bounds(w: f32, h: f32) -> Bounds {
        Bounds::new(Vec2::ZERO, Vec2::new(w, h))
    }

    #[test]
    fn defaults_derive_from_bounds_and_count() {
        let resolved = SamplingOptions::default().resolve(&bounds(40.0, 20.0), 5);
        assert_eq!(resolved.min_point_distance, 1.0);
        assert_eq!(resolved.min_edge_distance, 1.0);
        assert_eq!(resolved.max_attempts, 250);
        assert!(resolved.close_ring);
    }

    #[test]
    fn edge_distance_follows_explicit_point_distance() {
        let resolved = SamplingOptions::new()
            .with_min_point_distance(3.0)
            .resolve(&bounds(10.0, 10.0), 4);
        assert_eq!(resolved.min_point_distance, 3.0);
        assert_eq!(resolved.min_edge_distance, 3.0);
    }

    #[test]
    fn explicit_zero_and_negative_values_are_kept() {
        let resolved = SamplingOptions::new()
            .with_min_point_distance(0.0)
            .with_min_edge_distance(-1.0)
            .resolve(&bounds(10.0, 10.0), 4);
        assert_eq!(resolved.min_point_distance, 0.0);
        assert_eq!(resolved.min_edge_distance, -1.0);
    }

    #[test]
    fn budget_scales_with_iterations() {
        let resolved = SamplingOptions::new()
            .with_max_iterations_per_point(200)
            .resolve(&bounds(10.0, 10.0), 5);
        assert_eq!(resolved.max_attempts, 1000);

        let huge = SamplingOptions::new()
            .with_max_iterations_per_point(usize::MAX)
            .resolve(&bounds(10.0, 10.0), 3);
        assert_eq!(huge.max_attempts, usize::MAX);
    }

    #[test]
    fn zero_target_count_does_not_divide_by_zero() {
        let resolved = SamplingOptions::default().resolve(&bounds(8.0, 8.0), 0);
        assert!(resolved.min_point_distance.is_finite());
        assert_eq!(resolved.max_attempts, 0);
    }

    #[test]
    fn validate_rejects_zero_budget_and_nan() {
        assert!(SamplingOptions::default().validate().is_ok());
        assert!(matches!(
            SamplingOptions::new()
                .with_max_iterations_per_point(0)
                .validate(),
            Err(Error::InvalidConfig(_))
        ));
        assert!(SamplingOptions::new()
            .with_min_point_distance(f32::NAN)
            .validate()
            .is_err());
        assert!(SamplingOptions::new()
            .with_min_edge_distance(f32::NAN)
            .validate()
            .is_err());
        assert!(SamplingOptions::new()
            .with_min_edge_distance(-2.0)
            .validate()
            .is_ok());
    }
}
