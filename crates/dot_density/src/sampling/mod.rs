//! Dot placement inside polygons.
//!
//! [`DotSampler`] is a brute-force rejection sampler: candidates are drawn uniformly from the
//! polygon's bounding box and kept only when they are inside the polygon, far enough from every
//! edge, and far enough from every dot accepted so far. [`PolygonSampling`] is the seam that
//! lets the density runner accept other strategies.
use rand::RngCore;

use crate::geometry::Polygon;

pub mod dot_sampler;
pub mod options;

pub use dot_sampler::{sample_dots, DotSampler, Rejections, SamplingResult};
pub use options::{ResolvedOptions, SamplingOptions};

/// Trait for placing up to `target_count` points inside a polygon.
pub trait PolygonSampling: Send + Sync {
    fn sample(
        &self,
        polygon: &Polygon,
        target_count: usize,
        rng: &mut dyn RngCore,
    ) -> SamplingResult;
}

/// Generate a random float in the range [0, 1].
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() as f32) / ((u32::MAX as f32) + 1.0)
}

/// Compute the next smaller representable float value.
///
/// Used to keep candidates strictly below the upper edge of the bounding box, since
/// [`rand01`] can round up to exactly 1.0.
#[inline]
pub(crate) fn next_down(val: f32) -> f32 {
    if val.is_nan() || val == f32::NEG_INFINITY {
        return val;
    }

    if val == f32::INFINITY {
        return f32::MAX;
    }

    if val == 0.0 {
        return -f32::from_bits(1);
    }

    let bits = val.to_bits();
    if val > 0.0 {
        f32::from_bits(bits - 1)
    } else {
        f32::from_bits(bits + 1)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) struct FixedRng {
        pub(crate) value: u32,
    }

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.value
        }

        fn next_u64(&mut self) -> u64 {
            self.value as u64
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let bytes = self.value.to_le_bytes();
            for (i, b) in dest.iter_mut().enumerate() {
                *b = bytes[i % 4];
            }
        }
    }

    #[test]
    fn rand01_spans_unit_interval() {
        assert_eq!(rand01(&mut FixedRng { value: 0 }), 0.0);

        let mid = rand01(&mut FixedRng {
            value: u32::MAX / 2,
        });
        assert!((mid - 0.5).abs() < 0.001);

        for value in [1, 1000, u32::MAX - 1, u32::MAX] {
            let r = rand01(&mut FixedRng { value });
            assert!((0.0..=1.0).contains(&r), "rand01({value}) = {r}");
        }
    }

    #[test]
    fn next_down_is_strictly_smaller() {
        assert!(next_down(1.0) < 1.0);
        assert!(next_down(10.0) < 10.0);
        assert!(next_down(-3.0) < -3.0);
        assert!(next_down(0.0) < 0.0);
        assert!(next_down(0.0) > -f32::MIN_POSITIVE);
        assert_eq!(next_down(f32::INFINITY), f32::MAX);
        assert_eq!(next_down(f32::NEG_INFINITY), f32::NEG_INFINITY);
        assert!(next_down(f32::NAN).is_nan());
    }
}
