//! Clearance-constrained rejection sampler.
use glam::Vec2;
use rand::RngCore;
use tracing::{debug, warn};

use crate::geometry::Polygon;
use crate::sampling::{next_down, rand01, PolygonSampling, SamplingOptions};

/// Per-reason counts of rejected candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rejections {
    /// Candidate fell outside the polygon.
    pub outside: usize,
    /// Candidate was closer than the edge clearance to some edge.
    pub edge: usize,
    /// Candidate was closer than the point clearance to an accepted dot.
    pub neighbor: usize,
}

impl Rejections {
    pub fn total(&self) -> usize {
        self.outside + self.edge + self.neighbor
    }
}

/// Outcome of one sampling call.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SamplingResult {
    /// Accepted dots in acceptance order.
    pub points: Vec<Vec2>,
    /// `true` when the requested count was reached before the budget ran out.
    pub complete: bool,
    /// Candidates drawn.
    pub attempts: usize,
    /// Why candidates were thrown away.
    pub rejections: Rejections,
}

impl SamplingResult {
    /// A result with no dots and no attempts.
    pub fn empty(complete: bool) -> Self {
        Self {
            complete,
            ..Default::default()
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn into_points(self) -> Vec<Vec2> {
        self.points
    }
}

/// Rejection sampler that keeps dots inside a polygon, away from its edges and apart from
/// each other.
#[derive(Debug, Clone, Default)]
pub struct DotSampler {
    pub options: SamplingOptions,
}

impl DotSampler {
    pub fn new(options: SamplingOptions) -> Self {
        Self { options }
    }
}

impl PolygonSampling for DotSampler {
    fn sample(
        &self,
        polygon: &Polygon,
        target_count: usize,
        rng: &mut dyn RngCore,
    ) -> SamplingResult {
        if target_count == 0 {
            return SamplingResult::empty(true);
        }

        let bounds = polygon.bounds();
        if bounds.is_degenerate() {
            warn!(
                "Polygon bounds {}x{} have zero area; no dots placed.",
                bounds.width(),
                bounds.height()
            );
            return SamplingResult::empty(false);
        }

        let resolved = self.options.resolve(&bounds, target_count);

        let w = bounds.width();
        let h = bounds.height();
        // Next representable floats below the max edges to enforce strict < bounds
        let max_x = next_down(bounds.max.x);
        let max_y = next_down(bounds.max.y);

        let mut points: Vec<Vec2> = Vec::with_capacity(target_count.min(resolved.max_attempts));
        let mut rejections = Rejections::default();
        let mut attempts = 0usize;

        while points.len() < target_count && attempts < resolved.max_attempts {
            attempts += 1;

            let x = (bounds.min.x + rand01(rng) * w).clamp(bounds.min.x, max_x);
            let y = (bounds.min.y + rand01(rng) * h).clamp(bounds.min.y, max_y);
            let candidate = Vec2::new(x, y);

            if !polygon.contains(candidate) {
                rejections.outside += 1;
                continue;
            }

            if polygon.is_near_boundary(
                candidate,
                resolved.min_edge_distance,
                resolved.close_ring,
            ) {
                rejections.edge += 1;
                continue;
            }

            if points
                .iter()
                .any(|&q| candidate.distance(q) < resolved.min_point_distance)
            {
                rejections.neighbor += 1;
                continue;
            }

            points.push(candidate);
        }

        let complete = points.len() == target_count;
        debug!(
            "Placed {}/{} dots in {} attempts (outside: {}, edge: {}, neighbor: {}).",
            points.len(),
            target_count,
            attempts,
            rejections.outside,
            rejections.edge,
            rejections.neighbor
        );

        SamplingResult {
            points,
            complete,
            attempts,
            rejections,
        }
    }
}

/// Places up to `target_count` dots inside `polygon` with a [`DotSampler`] built from `options`.
pub fn sample_dots<R: RngCore>(
    polygon: &Polygon,
    target_count: usize,
    options: &SamplingOptions,
    rng: &mut R,
) -> SamplingResult {
    DotSampler::new(*options).sample(polygon, target_count, rng)
}
