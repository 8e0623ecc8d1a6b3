//! Point to line segment distance.
use glam::Vec2;

/// Minimum Euclidean distance from `p` to the closed segment `a`-`b`.
///
/// A zero-length segment is treated as the single point `a`. Inputs are rescaled before
/// squaring, so coordinates near `f32::MAX` do not overflow into `inf` or `NaN`.
pub fn point_segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let scale = ab.abs().max_element();

    // Projection parameter along a->b; -1 clamps onto `a` for degenerate segments.
    let t = if scale != 0.0 {
        let ab_unit = ab / scale;
        ((p - a) / scale).dot(ab_unit) / ab_unit.length_squared()
    } else {
        -1.0
    };

    let closest = a + t.clamp(0.0, 1.0) * ab;
    scaled_length(p - closest)
}

#[inline]
fn scaled_length(v: Vec2) -> f32 {
    let scale = v.abs().max_element();
    if scale == 0.0 || !scale.is_finite() {
        return scale;
    }
    scale * (v / scale).length()
}
