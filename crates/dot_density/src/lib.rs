#![forbid(unsafe_code)]
//! dot_density: clearance-constrained random dot placement inside polygons.
//!
//! Modules:
//! - geometry: polygons, bounds, point-segment distance, point-in-polygon
//! - sampling: the rejection sampler and its options
//! - density: per-region dot counts, runner, events
//!
//! Polygons are expected in an already-projected plane; this crate does no map projection
//! and no drawing.
pub mod density;
pub mod error;
pub mod geometry;
pub mod sampling;

/// Convenient re-exports for common types. Import with `use dot_density::prelude::*;`.
pub mod prelude {
    pub use crate::density::config::DensityConfig;
    pub use crate::density::events::{DensityEvent, EventSink, FnSink, MultiSink, VecSink};
    pub use crate::density::runner::{
        run_regions, DensityResult, DensityRunner, Dot, RegionRng, RegionSummary,
    };
    pub use crate::density::{dot_count, seed_for_region, Region, RegionGeometry, RegionId};
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{point_in_polygon, point_segment_distance, Bounds, Polygon};
    pub use crate::sampling::{
        sample_dots, DotSampler, PolygonSampling, Rejections, ResolvedOptions, SamplingOptions,
        SamplingResult,
    };
}
