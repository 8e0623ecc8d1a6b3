use dot_density::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    dot_density_examples::init_tracing();

    let ring = |x0: f32, y0: f32, size: f32| {
        [
            [x0, y0],
            [x0 + size, y0],
            [x0 + size, y0 + size],
            [x0, y0 + size],
        ]
    };
    let regions = vec![
        Region::new("roomy", Polygon::try_new(ring(0.0, 0.0, 100.0))?, 600.0),
        Region::new("cramped", Polygon::try_new(ring(120.0, 0.0, 12.0))?, 600.0),
    ];

    let options = SamplingOptions::new()
        .with_min_point_distance(4.0)
        .with_max_iterations_per_point(20);
    let runner = DensityRunner::try_new(DensityConfig::new(30.0).with_options(options))?;

    let mut dots = 0usize;
    let mut sink = FnSink::new(|event| match event {
        DensityEvent::RegionStarted {
            region_id,
            requested,
            ..
        } => println!("start {region_id}: {requested} dots requested"),
        DensityEvent::DotPlaced { .. } => dots += 1,
        DensityEvent::RegionFinished { summary, .. } => println!(
            "done  {}: {} placed in {} attempts",
            summary.region_id, summary.placed, summary.attempts
        ),
        DensityEvent::Warning { context, message } => println!("warn  {context}: {message}"),
        _ => {}
    });

    let mut rng = StdRng::seed_from_u64(5);
    let result = runner.run_with_events(&regions, &mut rng, &mut sink);
    drop(sink);

    println!(
        "{dots} DotPlaced events, {} dots total, complete: {}",
        result.placed(),
        result.is_complete()
    );
    Ok(())
}
