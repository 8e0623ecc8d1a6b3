//! Event types and sinks for observing dot density runs.
//!
//! This module defines [`DensityEvent`] and a set of sinks to emit, collect, or forward
//! events while executing [`crate::density::runner::DensityRunner::run_with_events`] or
//! [`crate::density::runner::run_regions`].
use crate::density::runner::{Dot, RegionSummary};
use crate::density::RegionId;

/// Describes events emitted by dot density runs.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum DensityEvent {
    /// Emitted when a run starts.
    RunStarted {
        /// Number of regions in the run.
        region_count: usize,
        /// Quantity represented by each dot.
        units_per_dot: f64,
    },

    /// Emitted before a region is sampled.
    RegionStarted {
        /// Index of the region in the input slice.
        index: usize,
        /// The region id.
        region_id: RegionId,
        /// Dots requested for this region.
        requested: usize,
    },

    /// Emitted for every accepted dot.
    DotPlaced {
        /// Index of the region that produced the dot.
        index: usize,
        /// The dot data.
        dot: Dot,
    },

    /// Emitted after a region was sampled.
    RegionFinished {
        /// Index of the region in the input slice.
        index: usize,
        /// Outcome for this region.
        summary: RegionSummary,
    },

    /// Emitted when every region was processed.
    RunFinished {
        /// Dots requested across all regions.
        requested: usize,
        /// Dots placed across all regions.
        placed: usize,
        /// Regions that ran out of budget.
        incomplete_regions: usize,
    },

    /// Non-fatal warning generated during the run.
    Warning {
        /// Context string (e.g. region id).
        context: String,
        /// Human-readable message.
        message: String,
    },
}

/// A generic event sink that accepts [`DensityEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: DensityEvent);
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: DensityEvent) {}
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(DensityEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(DensityEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(DensityEvent),
{
    #[inline]
    fn send(&mut self, event: DensityEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<DensityEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<DensityEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[DensityEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: DensityEvent) {
        self.events.push(event);
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink<S: EventSink> {
    pub(crate) sinks: Vec<S>,
}

impl<S: EventSink> MultiSink<S> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn into_inner(self) -> Vec<S> {
        self.sinks
    }
}

impl<S: EventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn send(&mut self, event: DensityEvent) {
        let Some((last, rest)) = self.sinks.split_last_mut() else {
            return;
        };
        for sink in rest {
            sink.send(event.clone());
        }
        last.send(event);
    }
}
