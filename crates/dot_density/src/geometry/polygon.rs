//! Polygon ring with cached bounds.
use glam::Vec2;

use crate::error::{Error, Result};
use crate::geometry::{point_in_polygon, point_segment_distance, Bounds};

/// A simple polygon given as an ordered ring of vertices.
///
/// The ring may be supplied closed (last vertex equal to the first) or unclosed.
/// Whether the wrap-around edge of an unclosed ring counts as an edge is chosen by the
/// caller of [`Polygon::edges`].
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vec2>,
    bounds: Bounds,
}

impl Polygon {
    /// Minimum number of vertices accepted by [`Polygon::try_new`].
    pub const MIN_VERTICES: usize = 3;

    /// Builds a polygon from anything convertible into [`Vec2`]
    /// (`Vec2`, `[f32; 2]`, `(f32, f32)`, `mint::Vector2<f32>`).
    pub fn try_new<I, P>(vertices: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<Vec2>,
    {
        let vertices: Vec<Vec2> = vertices.into_iter().map(Into::into).collect();

        if vertices.len() < Self::MIN_VERTICES {
            return Err(Error::InvalidPolygon(format!(
                "need at least {} vertices, got {}",
                Self::MIN_VERTICES,
                vertices.len()
            )));
        }
        if let Some(i) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(Error::InvalidPolygon(format!(
                "vertex {i} is not finite: ({}, {})",
                vertices[i].x, vertices[i].y
            )));
        }

        let bounds = Bounds::from_points(vertices.iter().copied())
            .ok_or_else(|| Error::InvalidPolygon("empty ring".into()))?;
        if !bounds.extent().is_finite() {
            return Err(Error::InvalidPolygon(format!(
                "bounds extent overflows: {} to {}",
                bounds.min, bounds.max
            )));
        }

        Ok(Self { vertices, bounds })
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// True when the last vertex repeats the first.
    pub fn is_closed(&self) -> bool {
        self.vertices.first() == self.vertices.last()
    }

    /// Point-in-polygon test, see [`point_in_polygon`].
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        point_in_polygon(p, &self.vertices)
    }

    /// Iterates the non-degenerate edges of the ring in order.
    ///
    /// With `close_ring` set, an unclosed ring also yields the edge from the last vertex back
    /// to the first. Zero-length edges (repeated vertices) are skipped.
    pub fn edges(&self, close_ring: bool) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let wrap = if close_ring && !self.is_closed() {
            self.vertices.last().copied().zip(self.vertices.first().copied())
        } else {
            None
        };

        self.vertices
            .windows(2)
            .map(|w| (w[0], w[1]))
            .chain(wrap)
            .filter(|(a, b)| a != b)
    }

    /// True when some edge lies strictly closer than `clearance` to `p`.
    ///
    /// Stops at the first such edge.
    pub fn is_near_boundary(&self, p: Vec2, clearance: f32, close_ring: bool) -> bool {
        self.edges(close_ring)
            .any(|(a, b)| point_segment_distance(p, a, b) < clearance)
    }
}
