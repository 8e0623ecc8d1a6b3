use std::time::Duration;

use criterion::{Criterion, Throughput};
use dot_density::geometry::Polygon;

pub const SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_secs(1);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}

/// Star-shaped ring with `points` tips, roughly the vertex count of a county outline.
pub fn star(points: usize, outer: f32, inner: f32) -> Polygon {
    let n = points * 2;
    let ring = (0..n).map(|i| {
        let angle = i as f32 * std::f32::consts::TAU / n as f32;
        let r = if i % 2 == 0 { outer } else { inner };
        [r * angle.cos(), r * angle.sin()]
    });
    Polygon::try_new(ring).expect("star ring is valid")
}
