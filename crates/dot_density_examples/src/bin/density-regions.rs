use dot_density::prelude::*;
use dot_density_examples::{init_tracing, render_density_to_png, union_bounds, RenderConfig};

/// Irregular outlines standing in for projected county shapes.
fn regions() -> anyhow::Result<Vec<Region>> {
    let coastal = RegionGeometry::Polygon(vec![vec![
        [0.0, 0.0],
        [120.0, 10.0],
        [140.0, 80.0],
        [90.0, 70.0],
        [60.0, 130.0],
        [10.0, 110.0],
        [0.0, 0.0],
    ]]);
    let island_county = RegionGeometry::MultiPolygon(vec![
        vec![vec![
            [150.0, 20.0],
            [260.0, 30.0],
            [250.0, 140.0],
            [200.0, 100.0],
            [160.0, 130.0],
        ]],
        vec![vec![[270.0, 150.0], [290.0, 150.0], [280.0, 170.0]]],
    ]);
    let inland = RegionGeometry::Polygon(vec![vec![
        [70.0, 140.0],
        [180.0, 150.0],
        [230.0, 230.0],
        [120.0, 260.0],
        [40.0, 210.0],
    ]]);

    Ok(vec![
        Region::from_geometry("06083", &coastal, 2_430.0)?,
        Region::from_geometry("06111", &island_county, 4_120.0)?,
        Region::from_geometry("06029", &inland, 960.0)?,
    ])
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let options = SamplingOptions::new()
        .with_min_point_distance(3.0)
        .with_min_edge_distance(1.3);
    let runner = DensityRunner::try_new(DensityConfig::new(30.0).with_options(options))?;

    let regions = regions()?;
    let result = runner.run_seeded(&regions, 2021);

    for summary in &result.regions {
        println!(
            "{}: {}/{} dots{}",
            summary.region_id,
            summary.placed,
            summary.requested,
            if summary.complete { "" } else { " (partial)" }
        );
    }

    let bounds = union_bounds(regions.iter().map(|r| &r.polygon))
        .ok_or_else(|| anyhow::anyhow!("no regions"))?;
    let config = RenderConfig::new((800, 800), bounds).with_dot_style([8, 81, 156], 2);
    render_density_to_png(&regions, &result, &config, "density-regions.png")
}
