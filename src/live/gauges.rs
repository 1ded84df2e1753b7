//! Real-time gauge mutator
//!
//! Each of the eight gauges has its own volatility. On every tick a gauge
//! changes with 70% probability.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use std::time::Duration;

use crate::data::{GaugeKind, RealTimeMetric};

pub const GAUGE_INTERVAL: Duration = Duration::from_secs(2);

/// Chance that a given gauge changes on a tick
pub const UPDATE_PROBABILITY: f64 = 0.7;

/// How long the "just changed" highlight lasts after a tick
pub const ANIMATION_SETTLE: Duration = Duration::from_millis(500);

/// Shape of the random change applied to a gauge
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Volatility {
    /// Uniform in [-x, +x], as a fraction
    Symmetric(f64),
    /// Uniform in [0, +x], as a fraction
    GrowthOnly(f64),
    /// Never changes
    Fixed,
}

impl Volatility {
    /// Draw a change fraction
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match *self {
            Volatility::Symmetric(width) => rng.gen_range(-width..=width),
            Volatility::GrowthOnly(width) => rng.gen_range(0.0..=width),
            Volatility::Fixed => 0.0,
        }
    }
}

/// Volatility of each gauge
pub fn volatility(kind: GaugeKind) -> Volatility {
    match kind {
        GaugeKind::ActiveViewers => Volatility::Symmetric(0.04),
        GaugeKind::StreamsStarted => Volatility::Symmetric(0.075),
        GaugeKind::AvgWatchTime => Volatility::Symmetric(0.025),
        GaugeKind::EngagementRate => Volatility::Symmetric(0.015),
        GaugeKind::Downloads => Volatility::Symmetric(0.06),
        GaugeKind::GlobalReach => Volatility::Fixed,
        GaugeKind::PeakConcurrent => Volatility::Symmetric(0.05),
        GaugeKind::ContentHours => Volatility::GrowthOnly(0.02),
    }
}

/// Apply one tick to a set of gauges, returning how many changed
pub fn mutate_gauges<R: Rng + ?Sized>(gauges: &mut [RealTimeMetric], rng: &mut R) -> usize {
    let mut updated = 0;
    for gauge in gauges.iter_mut() {
        if !rng.gen_bool(UPDATE_PROBABILITY) {
            continue;
        }
        let change = volatility(gauge.kind).sample(rng);
        gauge.apply_change(change);
        updated += 1;
    }
    updated
}

/// Footer figures of the gauge panel
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct GaugeSummary {
    /// Active Viewers plus Peak Concurrent
    pub total_viewers: f64,
    /// Streams Started plus Downloads
    pub hourly_activity: f64,
    /// Engagement Rate
    pub avg_engagement: f64,
}

/// The eight gauges plus the time of the last tick
#[derive(Debug, Clone, Serialize)]
pub struct GaugeBoard {
    gauges: Vec<RealTimeMetric>,
    last_update: DateTime<Utc>,
}

impl GaugeBoard {
    /// All gauges at their initial values
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            gauges: GaugeKind::all().iter().map(|kind| RealTimeMetric::new(*kind)).collect(),
            last_update: now,
        }
    }

    pub fn gauges(&self) -> &[RealTimeMetric] {
        &self.gauges
    }

    pub fn get(&self, kind: GaugeKind) -> Option<&RealTimeMetric> {
        self.gauges.iter().find(|gauge| gauge.kind == kind)
    }

    /// Value of a gauge, 0 if absent
    pub fn value(&self, kind: GaugeKind) -> f64 {
        self.get(kind).map(|gauge| gauge.value).unwrap_or(0.0)
    }

    pub fn last_update(&self) -> DateTime<Utc> {
        self.last_update
    }

    /// Run one tick
    ///
    /// Only gauges changed by this tick are left highlighted.
    pub fn tick<R: Rng + ?Sized>(&mut self, now: DateTime<Utc>, rng: &mut R) -> usize {
        for gauge in &mut self.gauges {
            gauge.is_animating = false;
        }
        let updated = mutate_gauges(&mut self.gauges, rng);
        self.last_update = now;
        updated
    }

    /// Clear highlight flags once `ANIMATION_SETTLE` has passed since the tick
    pub fn settle(&mut self, now: DateTime<Utc>) {
        let settled = (now - self.last_update)
            .to_std()
            .map(|elapsed| elapsed >= ANIMATION_SETTLE)
            .unwrap_or(false);

        if settled {
            for gauge in &mut self.gauges {
                gauge.is_animating = false;
            }
        }
    }

    pub fn summary(&self) -> GaugeSummary {
        GaugeSummary {
            total_viewers: self.value(GaugeKind::ActiveViewers)
                + self.value(GaugeKind::PeakConcurrent),
            hourly_activity: self.value(GaugeKind::StreamsStarted)
                + self.value(GaugeKind::Downloads),
            avg_engagement: self.value(GaugeKind::EngagementRate),
        }
    }
}
