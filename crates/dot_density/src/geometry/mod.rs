//! Planar geometry primitives used by the dot sampler.
//!
//! All coordinates live in an already-projected plane (screen or plot space).
//! Nothing here knows about geographic coordinates.
use glam::Vec2;

pub mod contains;
pub mod polygon;
pub mod segment;

pub use contains::point_in_polygon;
pub use polygon::Polygon;
pub use segment::point_segment_distance;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Smallest box containing every point, or `None` for an empty input.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec2>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self { min, max })
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn extent(&self) -> Vec2 {
        self.max - self.min
    }

    /// True when the box has zero width or zero height.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }
}
