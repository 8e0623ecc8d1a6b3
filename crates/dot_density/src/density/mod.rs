//! Dot density layouts for sets of regions.
//!
//! A [`Region`] pairs a projected outline with a quantity. The runner turns each quantity into
//! a dot count via [`dot_count`] and fills the outline using a
//! [`crate::sampling::PolygonSampling`] strategy.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::Polygon;

pub mod config;
pub mod events;
pub mod runner;

pub type RegionId = String;

/// Number of dots for `value` when each dot stands for `units_per_dot` units.
///
/// Partial dots are dropped. Non-finite or non-positive inputs give zero.
pub fn dot_count(value: f64, units_per_dot: f64) -> usize {
    if !value.is_finite() || !units_per_dot.is_finite() || value <= 0.0 || units_per_dot <= 0.0 {
        return 0;
    }
    (value / units_per_dot).floor() as usize
}

/// Outline geometry in the shape of GeoJSON `Polygon` / `MultiPolygon` coordinates,
/// already projected into plane space.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "coordinates"))]
#[derive(Debug, Clone, PartialEq)]
pub enum RegionGeometry {
    /// Rings of a single polygon; the first ring is the outer boundary.
    Polygon(Vec<Vec<[f32; 2]>>),
    /// Several polygons, each a list of rings.
    MultiPolygon(Vec<Vec<Vec<[f32; 2]>>>),
}

impl RegionGeometry {
    /// Outer ring used for dot placement: the first ring of the first polygon.
    ///
    /// Holes and additional parts are not filled.
    pub fn outer_ring(&self) -> Option<&[[f32; 2]]> {
        let ring = match self {
            RegionGeometry::Polygon(rings) => rings.first(),
            RegionGeometry::MultiPolygon(polygons) => polygons.first().and_then(|p| p.first()),
        };
        ring.map(Vec::as_slice)
    }
}

/// A named area together with the quantity its dots encode.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub id: RegionId,
    pub polygon: Polygon,
    pub value: f64,
}

impl Region {
    pub fn new(id: impl Into<RegionId>, polygon: Polygon, value: f64) -> Self {
        Self {
            id: id.into(),
            polygon,
            value,
        }
    }

    /// Builds a region from the outer ring of `geometry`.
    pub fn from_geometry(
        id: impl Into<RegionId>,
        geometry: &RegionGeometry,
        value: f64,
    ) -> Result<Self> {
        let id = id.into();
        let ring = geometry
            .outer_ring()
            .ok_or_else(|| Error::InvalidPolygon(format!("region '{id}' has no rings")))?;
        let polygon = Polygon::try_new(ring.iter().copied()).map_err(|err| match err {
            Error::InvalidPolygon(msg) => Error::InvalidPolygon(format!("region '{id}': {msg}")),
            other => other,
        })?;
        Ok(Self::new(id, polygon, value))
    }
}

/// Creates a deterministic seed for a region from a base seed and the region id.
///
/// Depends only on the id, so reordering regions does not change their dots.
pub fn seed_for_region(base_seed: u64, id: &str) -> u64 {
    // FNV-1a over the id bytes.
    let hash = id.bytes().fold(0xcbf29ce484222325_u64, |h, b| {
        (h ^ b as u64).wrapping_mul(0x100000001b3)
    });
    mix_u64(base_seed ^ hash.wrapping_mul(0x9E3779B97F4A7C15))
}

#[inline]
fn mix_u64(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xBF58476D1CE4E5B9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94D049BB133111EB);
    x ^ (x >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(offset: f32) -> Vec<[f32; 2]> {
        vec![
            [offset, 0.0],
            [offset + 4.0, 0.0],
            [offset + 4.0, 4.0],
            [offset, 4.0],
            [offset, 0.0],
        ]
    }

    #[test]
    fn dot_count_floors_quantity() {
        assert_eq!(dot_count(95.0, 30.0), 3);
        assert_eq!(dot_count(90.0, 30.0), 3);
        assert_eq!(dot_count(29.9, 30.0), 0);
        assert_eq!(dot_count(1234.0, 1.0), 1234);
    }

    #[test]
    fn dot_count_guards_bad_inputs() {
        assert_eq!(dot_count(-60.0, 30.0), 0);
        assert_eq!(dot_count(f64::NAN, 30.0), 0);
        assert_eq!(dot_count(f64::INFINITY, 30.0), 0);
        assert_eq!(dot_count(60.0, 0.0), 0);
        assert_eq!(dot_count(60.0, -1.0), 0);
    }

    #[test]
    fn outer_ring_of_polygon_and_multipolygon() {
        let poly = RegionGeometry::Polygon(vec![ring(0.0), ring(1.0)]);
        assert_eq!(poly.outer_ring(), Some(ring(0.0).as_slice()));

        let multi = RegionGeometry::MultiPolygon(vec![vec![ring(10.0)], vec![ring(20.0)]]);
        assert_eq!(multi.outer_ring(), Some(ring(10.0).as_slice()));

        assert_eq!(RegionGeometry::Polygon(Vec::new()).outer_ring(), None);
        assert_eq!(
            RegionGeometry::MultiPolygon(vec![Vec::new()]).outer_ring(),
            None
        );
    }

    #[test]
    fn region_from_geometry_builds_polygon() {
        let geometry = RegionGeometry::MultiPolygon(vec![vec![ring(2.0)]]);
        let region = Region::from_geometry("06083", &geometry, 450.0).unwrap();
        assert_eq!(region.id, "06083");
        assert_eq!(region.value, 450.0);
        assert_eq!(region.polygon.vertex_count(), 5);
        assert!(region.polygon.is_closed());
    }

    #[test]
    fn region_from_geometry_reports_region_id() {
        let empty = RegionGeometry::Polygon(Vec::new());
        let err = Region::from_geometry("ca", &empty, 1.0).unwrap_err();
        assert!(matches!(err, Error::InvalidPolygon(ref msg) if msg.contains("'ca'")));

        let short = RegionGeometry::Polygon(vec![vec![[0.0, 0.0], [1.0, 1.0]]]);
        let err = Region::from_geometry("nv", &short, 1.0).unwrap_err();
        assert!(matches!(err, Error::InvalidPolygon(ref msg) if msg.starts_with("region 'nv'")));
    }

    #[test]
    fn region_seed_depends_on_id_and_base() {
        assert_eq!(seed_for_region(7, "a"), seed_for_region(7, "a"));
        assert_ne!(seed_for_region(7, "a"), seed_for_region(7, "b"));
        assert_ne!(seed_for_region(7, "a"), seed_for_region(8, "a"));
    }
}
