//! Point-in-polygon test.
use glam::Vec2;

/// Even-odd ray casting test.
///
/// The ring is implicitly closed, so closed (`last == first`) and unclosed inputs give the
/// same answer. Crossings use a half-open rule on `y`, which keeps boundary points
/// deterministic: a given point always resolves to the same side.
pub fn point_in_polygon(point: Vec2, vertices: &[Vec2]) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[j];
        if (a.y > point.y) != (b.y > point.y) {
            let x_cross = (point.y - a.y) / (b.y - a.y) * (b.x - a.x) + a.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }

    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ]
    }

    // L-shape with the notch in the upper right quadrant.
    fn l_shape() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 5.0),
            Vec2::new(5.0, 5.0),
            Vec2::new(5.0, 10.0),
            Vec2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn square_inside_and_outside() {
        let sq = square();
        assert!(point_in_polygon(Vec2::new(5.0, 5.0), &sq));
        assert!(point_in_polygon(Vec2::new(0.1, 9.9), &sq));
        assert!(!point_in_polygon(Vec2::new(-0.1, 5.0), &sq));
        assert!(!point_in_polygon(Vec2::new(5.0, 10.5), &sq));
    }

    #[test]
    fn concave_notch_is_outside() {
        let l = l_shape();
        assert!(point_in_polygon(Vec2::new(2.0, 8.0), &l));
        assert!(point_in_polygon(Vec2::new(8.0, 2.0), &l));
        assert!(!point_in_polygon(Vec2::new(7.5, 7.5), &l));
    }

    #[test]
    fn closed_and_unclosed_rings_agree() {
        let open = l_shape();
        let mut closed = open.clone();
        closed.push(open[0]);

        for &(x, y) in &[(2.0, 8.0), (7.5, 7.5), (8.0, 2.0), (5.0, 5.0), (-1.0, 3.0)] {
            let p = Vec2::new(x, y);
            assert_eq!(point_in_polygon(p, &open), point_in_polygon(p, &closed));
        }
    }

    #[test]
    fn boundary_queries_are_stable() {
        let sq = square();
        for p in [Vec2::new(0.0, 5.0), Vec2::new(10.0, 5.0), Vec2::new(5.0, 0.0)] {
            let first = point_in_polygon(p, &sq);
            assert_eq!(first, point_in_polygon(p, &sq));
        }
    }

    #[test]
    fn fewer_than_three_vertices_contains_nothing() {
        let seg = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0)];
        assert!(!point_in_polygon(Vec2::new(0.5, 0.5), &seg));
    }
}
