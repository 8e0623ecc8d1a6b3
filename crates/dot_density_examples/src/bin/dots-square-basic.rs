use dot_density::prelude::*;
use dot_density_examples::{init_tracing, render_dots_to_png, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let square = Polygon::try_new([[0.0_f32, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]])?;
    let options = SamplingOptions::new()
        .with_min_point_distance(1.0)
        .with_min_edge_distance(1.0)
        .with_max_iterations_per_point(200);

    let mut rng = StdRng::seed_from_u64(42);
    let result = sample_dots(&square, 5, &options, &mut rng);

    println!(
        "complete: {}, dots: {}, attempts: {}",
        result.complete,
        result.len(),
        result.attempts
    );
    for p in &result.points {
        println!("  ({:.3}, {:.3})", p.x, p.y);
    }

    let config = RenderConfig::new((400, 400), square.bounds()).with_dot_style([200, 30, 30], 6);
    render_dots_to_png([&square], result.points, &config, "dots-square-basic.png")
}
