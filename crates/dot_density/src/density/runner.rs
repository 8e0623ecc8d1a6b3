//! High-level runner that fills every region with its dots.
use std::collections::HashSet;

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, info, warn};

use crate::density::config::DensityConfig;
use crate::density::events::{DensityEvent, EventSink};
use crate::density::{dot_count, seed_for_region, Region, RegionId};
use crate::error::Result;
use crate::sampling::{DotSampler, PolygonSampling};

/// A placed dot and the region it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Dot {
    /// Region that owns this dot.
    pub region_id: RegionId,
    /// Position in the projected plane.
    pub position: Vec2,
}

/// Per-region outcome of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionSummary {
    pub region_id: RegionId,
    /// Dots derived from the region's value.
    pub requested: usize,
    /// Dots actually placed.
    pub placed: usize,
    /// `false` when the sampler ran out of budget before reaching `requested`.
    pub complete: bool,
    /// Candidates drawn for this region.
    pub attempts: usize,
}

/// Result of a dot density run.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DensityResult {
    /// Dots of every region, grouped by region in input order.
    pub dots: Vec<Dot>,
    /// One summary per input region, in input order.
    pub regions: Vec<RegionSummary>,
}

impl DensityResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requested(&self) -> usize {
        self.regions.iter().map(|r| r.requested).sum()
    }

    pub fn placed(&self) -> usize {
        self.dots.len()
    }

    /// True when every region received all of its dots.
    pub fn is_complete(&self) -> bool {
        self.regions.iter().all(|r| r.complete)
    }

    pub fn incomplete_regions(&self) -> impl Iterator<Item = &RegionSummary> {
        self.regions.iter().filter(|r| !r.complete)
    }

    /// Positions of the dots placed for `region_id`.
    pub fn dots_for<'a>(&'a self, region_id: &'a str) -> impl Iterator<Item = Vec2> + 'a {
        self.dots
            .iter()
            .filter(move |d| d.region_id == region_id)
            .map(|d| d.position)
    }
}

/// Where each region draws its randomness from.
pub enum RegionRng<'a> {
    /// All regions share one generator, consumed in input order.
    Shared(&'a mut dyn RngCore),
    /// Each region gets its own generator seeded by [`seed_for_region`].
    Seeded(u64),
}

pub struct DensityRunner {
    /// Run configuration applied to this runner.
    pub config: DensityConfig,
    sampler: Box<dyn PolygonSampling>,
}

impl DensityRunner {
    /// Creates a runner that places dots with a [`DotSampler`] built from `config.options`.
    pub fn try_new(config: DensityConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            sampler: Box::new(DotSampler::new(config.options)),
            config,
        })
    }

    /// Replaces the sampling strategy; `config.options` no longer applies.
    pub fn with_sampler<S: PolygonSampling + 'static>(mut self, sampler: S) -> Self {
        self.sampler = Box::new(sampler);
        self
    }

    pub fn run(&self, regions: &[Region], rng: &mut impl RngCore) -> DensityResult {
        run_regions(
            regions,
            &self.config,
            self.sampler.as_ref(),
            RegionRng::Shared(rng),
            None,
        )
    }

    pub fn run_with_events(
        &self,
        regions: &[Region],
        rng: &mut impl RngCore,
        sink: &mut dyn EventSink,
    ) -> DensityResult {
        run_regions(
            regions,
            &self.config,
            self.sampler.as_ref(),
            RegionRng::Shared(rng),
            Some(sink),
        )
    }

    /// Runs with one deterministic generator per region, so a region's dots do not depend on
    /// which other regions are in the run or their order.
    pub fn run_seeded(&self, regions: &[Region], base_seed: u64) -> DensityResult {
        run_regions(
            regions,
            &self.config,
            self.sampler.as_ref(),
            RegionRng::Seeded(base_seed),
            None,
        )
    }

    pub fn run_seeded_with_events(
        &self,
        regions: &[Region],
        base_seed: u64,
        sink: &mut dyn EventSink,
    ) -> DensityResult {
        run_regions(
            regions,
            &self.config,
            self.sampler.as_ref(),
            RegionRng::Seeded(base_seed),
            Some(sink),
        )
    }
}

#[inline]
fn emit(sink: &mut Option<&mut dyn EventSink>, event: impl FnOnce() -> DensityEvent) {
    if let Some(s) = sink.as_deref_mut() {
        s.send(event());
    }
}

pub fn run_regions(
    regions: &[Region],
    config: &DensityConfig,
    sampler: &dyn PolygonSampling,
    mut rng: RegionRng<'_>,
    mut sink: Option<&mut dyn EventSink>,
) -> DensityResult {
    emit(&mut sink, || DensityEvent::RunStarted {
        region_count: regions.len(),
        units_per_dot: config.units_per_dot,
    });

    let mut result = DensityResult::new();
    let mut seen: HashSet<&str> = HashSet::with_capacity(regions.len());

    for (index, region) in regions.iter().enumerate() {
        if !seen.insert(region.id.as_str()) {
            warn!("Duplicate region id '{}'.", region.id);
            emit(&mut sink, || DensityEvent::Warning {
                context: region.id.clone(),
                message: "duplicate region id".into(),
            });
        }

        let requested = dot_count(region.value, config.units_per_dot);
        emit(&mut sink, || DensityEvent::RegionStarted {
            index,
            region_id: region.id.clone(),
            requested,
        });

        let sampled = match &mut rng {
            RegionRng::Shared(shared) => {
                sampler.sample(&region.polygon, requested, &mut **shared)
            }
            RegionRng::Seeded(base_seed) => {
                let seed = seed_for_region(*base_seed, &region.id);
                sampler.sample(&region.polygon, requested, &mut StdRng::seed_from_u64(seed))
            }
        };

        let summary = RegionSummary {
            region_id: region.id.clone(),
            requested,
            placed: sampled.len(),
            complete: sampled.complete,
            attempts: sampled.attempts,
        };
        debug!(
            "Region '{}': {}/{} dots in {} attempts.",
            summary.region_id, summary.placed, summary.requested, summary.attempts
        );

        if !summary.complete {
            let message = format!(
                "placed {} of {} dots before the sampling budget ran out",
                summary.placed, summary.requested
            );
            warn!("Region '{}' {}.", region.id, message);
            emit(&mut sink, || DensityEvent::Warning {
                context: region.id.clone(),
                message,
            });
        }

        for position in sampled.points {
            let dot = Dot {
                region_id: region.id.clone(),
                position,
            };
            emit(&mut sink, || DensityEvent::DotPlaced {
                index,
                dot: dot.clone(),
            });
            result.dots.push(dot);
        }

        emit(&mut sink, || DensityEvent::RegionFinished {
            index,
            summary: summary.clone(),
        });
        result.regions.push(summary);
    }

    let requested = result.requested();
    let placed = result.placed();
    let incomplete_regions = result.incomplete_regions().count();
    info!(
        "Dot density run placed {}/{} dots across {} regions ({} incomplete).",
        placed,
        requested,
        regions.len(),
        incomplete_regions
    );
    emit(&mut sink, || DensityEvent::RunFinished {
        requested,
        placed,
        incomplete_regions,
    });

    result
}
