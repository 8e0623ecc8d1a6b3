use dot_density::prelude::*;
use dot_density_examples::{init_tracing, render_dots_to_png, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let square = Polygon::try_new([[0.0_f32, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]])?;
    let mut rng = StdRng::seed_from_u64(7);

    // Clearance 5 leaves room for almost nothing; the flag tells callers to show fewer dots.
    for clearance in [5.0, 2.0, 0.5] {
        let options = SamplingOptions::new().with_min_point_distance(clearance);
        let result = sample_dots(&square, 1000, &options, &mut rng);
        println!(
            "clearance {clearance:>4}: {:>4}/1000 dots, complete: {}, rejected (outside/edge/neighbor): {}/{}/{}",
            result.len(),
            result.complete,
            result.rejections.outside,
            result.rejections.edge,
            result.rejections.neighbor
        );

        if clearance == 0.5 {
            let config = RenderConfig::new((500, 500), square.bounds()).with_dot_style([40, 40, 40], 1);
            render_dots_to_png([&square], result.points, &config, "dots-impossible-density.png")?;
        }
    }

    Ok(())
}
